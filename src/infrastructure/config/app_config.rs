//! Application configuration.

use crate::domain::entities::{DEFAULT_GIFTS, GiftCatalog};
use crate::domain::errors::GiftError;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

pub(crate) const APP_NAME: &str = "giftbox";
pub(crate) const APP_QUALIFIER: &str = "org";
pub(crate) const APP_ORGANIZATION: &str = "giftbox";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration, loaded from TOML and overridden by CLI flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Print the final session state as JSON after exit.
    #[serde(skip)]
    pub print_state: bool,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Enable mouse support.
    #[serde(default = "default_true")]
    pub mouse: bool,

    /// Greeting texts.
    #[serde(default)]
    pub greeting: GreetingConfig,

    /// Gifts, in tile order. Ids are assigned 1..=N.
    #[serde(default = "default_gifts")]
    pub gifts: Vec<GiftConfig>,

    /// UI configuration.
    #[serde(default)]
    pub ui: UiConfig,

    /// Theme configuration.
    #[serde(default)]
    pub theme: ThemeConfig,

    /// Sound configuration.
    #[serde(default)]
    pub sound: SoundConfig,

    /// Custom keybindings, e.g. `"Ctrl+g" = "OpenNow"`. Action names are
    /// checked when the bindings are applied, so a typo only drops that entry.
    #[serde(default)]
    pub keybindings: BTreeMap<String, String>,
}

/// Texts shown on each page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingConfig {
    /// Welcome page headline.
    #[serde(default = "default_title")]
    pub title: String,

    /// Line under the headline.
    #[serde(default = "default_subtitle")]
    pub subtitle: String,

    /// Surprise page message.
    #[serde(default = "default_surprise_message")]
    pub surprise_message: String,

    /// Complete page headline.
    #[serde(default = "default_complete_message")]
    pub complete_message: String,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            subtitle: default_subtitle(),
            surprise_message: default_surprise_message(),
            complete_message: default_complete_message(),
        }
    }
}

/// One configured gift.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiftConfig {
    /// Shown on the closed tile.
    pub title: String,
    /// Revealed when opened.
    pub message: String,
}

/// UI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Enable `TachyonFX` page transitions.
    #[serde(default = "default_true")]
    pub enable_animations: bool,

    /// Show the `k/N opened` progress line.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_animations: true,
            show_progress: true,
        }
    }
}

/// Theme configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Accent color (name or hex code).
    #[serde(default = "default_accent_color")]
    pub accent_color: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent_color(),
        }
    }
}

/// Sound configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SoundConfig {
    /// Ring the terminal bell when gifts open.
    #[serde(default)]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

fn default_accent_color() -> String {
    "Red".to_string()
}

fn default_title() -> String {
    "Merry Christmas!".to_string()
}

fn default_subtitle() -> String {
    "Some presents are waiting for you under the tree.".to_string()
}

fn default_surprise_message() -> String {
    "No peeking! The presents will wait right here until you're ready.".to_string()
}

fn default_complete_message() -> String {
    "Every gift is open. Happy holidays!".to_string()
}

fn default_gifts() -> Vec<GiftConfig> {
    DEFAULT_GIFTS
        .iter()
        .map(|(title, message)| GiftConfig {
            title: (*title).to_string(),
            message: (*message).to_string(),
        })
        .collect()
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: CliArgs) {
        if let Some(log_path) = args.log_path {
            self.log_path = Some(log_path);
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(mouse) = args.mouse {
            self.mouse = mouse;
        }
        if let Some(enable_animations) = args.enable_animations {
            self.ui.enable_animations = enable_animations;
        }
        if let Some(accent_color) = args.accent_color {
            self.theme.accent_color = accent_color;
        }
        if let Some(sound) = args.sound {
            self.sound.enabled = sound;
        }
        self.print_state = args.print_state;
    }

    /// Builds the gift catalog from the configured gifts.
    ///
    /// # Errors
    /// Returns `GiftError` if the gift list is empty or too long.
    pub fn gift_catalog(&self) -> Result<GiftCatalog, GiftError> {
        GiftCatalog::new(
            self.gifts
                .iter()
                .map(|g| (g.title.as_str(), g.message.as_str())),
        )
    }

    /// Returns default log file path.
    #[must_use]
    pub fn default_log_path() -> Option<PathBuf> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.data_dir().join("giftbox.log"))
    }

    /// Returns effective log path.
    #[must_use]
    pub fn effective_log_path(&self) -> Option<PathBuf> {
        self.log_path.clone().or_else(Self::default_log_path)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            print_state: false,
            log_level: LogLevel::Info,
            mouse: true,
            greeting: GreetingConfig::default(),
            gifts: default_gifts(),
            ui: UiConfig::default(),
            theme: ThemeConfig::default(),
            sound: SoundConfig::default(),
            keybindings: BTreeMap::new(),
        }
    }
}
