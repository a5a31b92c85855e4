//! Event handling.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the app loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Keep running.
    Continue,
    /// Leave the loop.
    Exit,
}

/// Terminal event handler.
pub struct EventHandler {
    poll_timeout: Duration,
}

impl EventHandler {
    /// Creates handler with custom timeout.
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            poll_timeout: timeout,
        }
    }

    /// Polls for events.
    ///
    /// # Errors
    /// Returns IO error if polling fails.
    pub fn poll(&self) -> std::io::Result<Option<Event>> {
        if event::poll(self.poll_timeout)? {
            Ok(Some(event::read()?))
        } else {
            Ok(None)
        }
    }

    /// Checks if key always quits, regardless of configured bindings.
    #[must_use]
    pub fn is_quit_event(key: &KeyEvent) -> bool {
        matches!(
            key,
            KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            }
        )
    }

    /// Checks if key is a press (terminals may also report repeats and releases).
    #[must_use]
    pub fn is_press(key: &KeyEvent) -> bool {
        key.kind == KeyEventKind::Press
    }

    /// Returns the digit of an unmodified `0`-`9` key.
    #[must_use]
    pub fn digit(key: &KeyEvent) -> Option<u8> {
        match key.code {
            KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => c
                .to_digit(10)
                .and_then(|d| u8::try_from(d).ok()),
            _ => None,
        }
    }
}
