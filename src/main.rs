use clap::Parser;
use color_eyre::eyre::Result;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use giftbox::application::StateSnapshot;
use giftbox::infrastructure::{AppConfig, CliArgs, LoadOutcome, StorageManager, sound_port};
use giftbox::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

/// Loads the config file and applies CLI overrides. The outcome is `None`
/// when there is no config directory and no `--config` path.
fn load_config(args: CliArgs) -> Result<(AppConfig, Option<LoadOutcome>)> {
    let override_path = args.config.clone();
    let (mut config, outcome) = match StorageManager::new() {
        Ok(storage) => {
            let (config, outcome) = storage.load_config(override_path.as_deref())?;
            (config, Some(outcome))
        }
        Err(_) => match override_path.as_deref() {
            Some(path) => {
                let parent = path.parent().map(std::path::Path::to_path_buf).unwrap_or_default();
                let (config, outcome) = StorageManager::with_dir(parent).load_config(Some(path))?;
                (config, Some(outcome))
            }
            None => (AppConfig::default(), None),
        },
    };
    config.merge_with_args(args);
    Ok((config, outcome))
}

fn run_tui(app: App, mouse: bool) -> Result<StateSnapshot> {
    let mut terminal = ratatui::init();

    let result = if mouse {
        execute!(std::io::stdout(), EnableMouseCapture)
            .map_err(Into::into)
            .and_then(|()| app.run(&mut terminal))
    } else {
        app.run(&mut terminal)
    };

    if mouse {
        if let Err(e) = execute!(std::io::stdout(), DisableMouseCapture) {
            warn!(error = %e, "Failed to disable mouse capture");
        }
    }
    ratatui::restore();

    result
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let args = CliArgs::parse();
    let (config, outcome) = load_config(args)?;

    init_logging(&config)?;
    info!(version = giftbox::VERSION, "Starting {}", giftbox::NAME);
    match outcome {
        Some(outcome) => outcome.log(),
        None => warn!("No configuration directory available, running with defaults"),
    }

    let catalog = config.gift_catalog()?;
    let app = App::new(&config, catalog, sound_port(config.sound.enabled));

    let snapshot = run_tui(app, config.mouse)?;
    if config.print_state {
        println!("{}", snapshot.to_json_pretty());
    }

    Ok(())
}
