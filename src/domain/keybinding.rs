use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    Quit,
    ToggleDebug,

    // Navigation
    GoHome,
    OpenNow,
    OpenLater,
    Back,
    Proceed,

    // Gifts; the digit comes from the pressed key
    OpenGift,
}

impl Action {
    pub const ALL: [Self; 8] = [
        Self::Quit,
        Self::ToggleDebug,
        Self::GoHome,
        Self::OpenNow,
        Self::OpenLater,
        Self::Back,
        Self::Proceed,
        Self::OpenGift,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::ToggleDebug => "ToggleDebug",
            Self::GoHome => "GoHome",
            Self::OpenNow => "OpenNow",
            Self::OpenLater => "OpenLater",
            Self::Back => "Back",
            Self::Proceed => "Proceed",
            Self::OpenGift => "OpenGift",
        }
    }
}

/// Accepts the variant name in any case, with or without `_`/`-` separators,
/// so `OpenNow`, `open_now` and `open-now` are the same action.
impl FromStr for Action {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-'))
            .collect();
        Self::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(&wanted))
            .ok_or_else(|| KeyParseError::UnknownAction(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybind {
    pub key: KeyEvent,
    pub action: Action,
    pub label: Cow<'static, str>,
    pub key_display: Option<Cow<'static, str>>,
    pub visible_in_bar: bool,
}

impl Keybind {
    pub fn new(key: KeyEvent, action: Action, label: impl Into<Cow<'static, str>>) -> Self {
        Self {
            key,
            action,
            label: label.into(),
            key_display: None,
            visible_in_bar: true,
        }
    }

    /// Overrides the rendered key, e.g. `1-4` for the digit range.
    #[must_use]
    pub fn with_key_display(mut self, display: impl Into<Cow<'static, str>>) -> Self {
        self.key_display = Some(display.into());
        self
    }

    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.visible_in_bar = false;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
    #[error("empty key binding")]
    Empty,
    #[error("unknown modifier `{0}`")]
    UnknownModifier(String),
    #[error("unknown key `{0}`")]
    UnknownKey(String),
    #[error("unknown action `{0}`")]
    UnknownAction(String),
}

/// Parses bindings written like `Ctrl+q`, `Alt+Enter`, `F5` or `n`.
///
/// # Errors
/// Returns `KeyParseError` when a modifier or key name is not recognised.
pub fn parse_key(input: &str) -> Result<KeyEvent, KeyParseError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(KeyParseError::Empty);
    }

    // A lone "+" is the plus key, not a separator.
    let (modifier_part, key_part) = match input.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, key)) => (mods, key),
        None => ("", input),
    };

    let mut modifiers = KeyModifiers::NONE;
    for name in modifier_part.split('+').filter(|s| !s.is_empty()) {
        modifiers |= match name.to_ascii_lowercase().as_str() {
            "ctrl" | "control" | "c" => KeyModifiers::CONTROL,
            "alt" | "a" | "meta" => KeyModifiers::ALT,
            "shift" | "s" => KeyModifiers::SHIFT,
            _ => return Err(KeyParseError::UnknownModifier(name.to_string())),
        };
    }

    let code = parse_key_code(key_part)?;
    Ok(KeyEvent::new(code, modifiers))
}

fn parse_key_code(name: &str) -> Result<KeyCode, KeyParseError> {
    let mut chars = name.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "backspace" | "bksp" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        _ => match lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
            Some(n) if (1..=24).contains(&n) => KeyCode::F(n),
            _ => return Err(KeyParseError::UnknownKey(name.to_string())),
        },
    };
    Ok(code)
}
