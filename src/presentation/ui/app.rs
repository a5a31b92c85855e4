//! Main application orchestrator.

use std::mem;
use std::time::{Duration, Instant};

use crossterm::event::{Event, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Layout},
};
use tachyonfx::{Effect, Interpolation, fx};
use tracing::{debug, info};

use crate::application::{DispatchOutcome, InputEvent, Session, StateSnapshot};
use crate::domain::entities::{GiftCatalog, GiftId};
use crate::domain::keybinding::Action;
use crate::domain::ports::{SoundCue, SoundPort};
use crate::infrastructure::config::{AppConfig, GreetingConfig};
use crate::presentation::commands::{CommandRegistry, HasCommands};
use crate::presentation::events::{EventHandler, EventResult};
use crate::presentation::theme::Theme;
use crate::presentation::ui::hit_map::{HitMap, HitTarget};
use crate::presentation::ui::page_screen::PageScreen;
use crate::presentation::widgets::{DebugPanel, FooterBar, FooterBarStyle};

const ANIMATION_TICK_RATE: Duration = Duration::from_millis(33);
const PAGE_ENTER_MS: u32 = 450;
const VERSION_INFO: &str = concat!("v", env!("CARGO_PKG_VERSION"));

/// Owns the session and drives the terminal loop.
pub struct App {
    session: Session,
    catalog: GiftCatalog,
    greeting: GreetingConfig,
    show_progress: bool,
    enable_animations: bool,
    theme: Theme,
    registry: CommandRegistry,
    hit_map: HitMap,
    hovered: Option<GiftId>,
    show_debug: bool,
    exiting: bool,
    sound: Box<dyn SoundPort>,
    page_effect: Option<Effect>,
    pending_duration: Duration,
}

impl App {
    #[must_use]
    pub fn new(config: &AppConfig, catalog: GiftCatalog, sound: Box<dyn SoundPort>) -> Self {
        let registry = CommandRegistry::new().with_overrides(&config.keybindings);
        let enable_animations = config.ui.enable_animations;

        Self {
            session: Session::new(catalog.len()),
            catalog,
            greeting: config.greeting.clone(),
            show_progress: config.ui.show_progress,
            enable_animations,
            theme: Theme::new(&config.theme.accent_color),
            registry,
            hit_map: HitMap::new(),
            hovered: None,
            show_debug: false,
            exiting: false,
            sound,
            page_effect: enable_animations.then(page_enter_effect),
            pending_duration: Duration::ZERO,
        }
    }

    /// Runs the UI until the user quits and returns the final session state.
    ///
    /// # Errors
    /// Returns an error if drawing or reading terminal events fails.
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<StateSnapshot> {
        let events = EventHandler::with_timeout(ANIMATION_TICK_RATE);
        let mut last_tick = Instant::now();

        info!(gifts = self.catalog.len(), "Starting session");
        terminal.draw(|frame| self.render(frame))?;

        while !self.exiting {
            let event = events.poll()?;

            let now = Instant::now();
            let animating = self.tick(now.duration_since(last_tick));
            last_tick = now;

            let had_event = event.is_some();
            if let Some(event) = event {
                self.exiting = self.handle_terminal_event(event) == EventResult::Exit;
            }

            if had_event || animating {
                terminal.draw(|frame| self.render(frame))?;
            }
        }

        let snapshot = self.session.snapshot();
        info!(?snapshot, "Application exiting normally");
        Ok(snapshot)
    }

    /// Advances the page animation. Returns whether one is running.
    fn tick(&mut self, elapsed: Duration) -> bool {
        if self.page_effect.is_some() {
            self.pending_duration = self.pending_duration.saturating_add(elapsed);
            true
        } else {
            false
        }
    }

    fn handle_terminal_event(&mut self, event: Event) -> EventResult {
        match event {
            Event::Key(key) if EventHandler::is_press(&key) => self.handle_key(key),
            Event::Mouse(mouse) => {
                self.handle_mouse(mouse);
                EventResult::Continue
            }
            _ => EventResult::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> EventResult {
        if EventHandler::is_quit_event(&key) {
            return EventResult::Exit;
        }

        match self.registry.find_action(key) {
            Some(Action::Quit) => return EventResult::Exit,
            Some(Action::ToggleDebug) => {
                self.show_debug = !self.show_debug;
                debug!(visible = self.show_debug, "Toggled state overlay");
            }
            Some(Action::OpenGift) => {
                if let Some(digit) = EventHandler::digit(&key) {
                    self.apply(InputEvent::Digit(digit));
                }
            }
            Some(action) => {
                self.apply(InputEvent::Key(action));
            }
            None => {}
        }
        EventResult::Continue
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                match self.hit_map.target_at(mouse.column, mouse.row) {
                    Some(HitTarget::Control(control)) => {
                        self.apply(InputEvent::Click(control));
                    }
                    Some(HitTarget::Gift(id)) => {
                        self.apply(InputEvent::ClickGift(id));
                    }
                    Some(HitTarget::Overlay) | None => {}
                }
            }
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                let target = self.hit_map.gift_at(mouse.column, mouse.row);
                self.update_hover(target);
            }
            _ => {}
        }
    }

    fn update_hover(&mut self, target: Option<GiftId>) {
        if target == self.hovered {
            return;
        }
        if let Some(previous) = self.hovered.take() {
            self.apply(InputEvent::PointerLeave(previous));
        }
        if let Some(id) = target {
            self.apply(InputEvent::PointerEnter(id));
        }
        self.hovered = target;
    }

    fn apply(&mut self, input: InputEvent) -> DispatchOutcome {
        let outcome = self.session.dispatch(input);

        if let Some(cue) = sound_cue(outcome) {
            self.sound.play(cue);
        }

        if let DispatchOutcome::Navigated { from, to, reset } = outcome {
            info!(%from, %to, reset, "Page changed");
            // The old page's tiles are gone, so any lift goes with them.
            if let Some(previous) = self.hovered.take() {
                self.session.dispatch(InputEvent::PointerLeave(previous));
            }
            if self.enable_animations {
                self.page_effect = Some(page_enter_effect());
                self.pending_duration = Duration::ZERO;
            }
        }

        outcome
    }

    fn render(&mut self, frame: &mut Frame) {
        let [body, footer] =
            Layout::vertical([Constraint::Fill(1), Constraint::Length(1)]).areas(frame.area());

        let screen = PageScreen::new(&self.session, &self.catalog, &self.greeting, &self.theme)
            .show_progress(self.show_progress);
        let commands = screen.get_commands(&self.registry);
        frame.render_stateful_widget(screen, body, &mut self.hit_map);

        let duration = mem::take(&mut self.pending_duration);
        let finished = self
            .page_effect
            .as_mut()
            .is_some_and(|effect| effect.process(duration.into(), frame.buffer_mut(), body).is_some());
        if finished {
            self.page_effect = None;
        }

        frame.render_widget(
            FooterBar::new(&commands)
                .page(self.session.current_page())
                .right_info(Some(VERSION_INFO))
                .style(FooterBarStyle::from_theme(&self.theme)),
            footer,
        );

        if self.show_debug {
            let snapshot = self.session.snapshot();
            let panel = DebugPanel::new(&snapshot);
            self.hit_map.push(panel.area(body), HitTarget::Overlay);
            frame.render_widget(panel, body);
        }
    }
}

fn page_enter_effect() -> Effect {
    fx::coalesce((PAGE_ENTER_MS, Interpolation::CircOut))
}

/// Cue played for a dispatch outcome, if any.
const fn sound_cue(outcome: DispatchOutcome) -> Option<SoundCue> {
    match outcome {
        DispatchOutcome::Navigated { .. } => Some(SoundCue::Click),
        DispatchOutcome::GiftOpened(_) => Some(SoundCue::Open),
        DispatchOutcome::AllGiftsOpened(_) => Some(SoundCue::Complete),
        DispatchOutcome::HoverChanged | DispatchOutcome::Ignored => None,
    }
}
