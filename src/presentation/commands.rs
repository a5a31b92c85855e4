use crate::domain::keybinding::{Action, Keybind, parse_key};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

pub struct CommandRegistry {
    display_bindings: HashMap<Action, KeyEvent>,
    input_bindings: Vec<(KeyEvent, Action)>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        let mut display_bindings = HashMap::new();
        let mut input_bindings = Vec::new();

        let mut register = |action: Action, key: KeyEvent, is_primary: bool| {
            if is_primary {
                display_bindings.insert(action, key);
            }
            input_bindings.push((key, action));
        };

        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::Quit,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            false,
        );
        register(
            Action::ToggleDebug,
            KeyEvent::new(KeyCode::F(12), KeyModifiers::NONE),
            true,
        );

        register(
            Action::GoHome,
            KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            true,
        );
        register(
            Action::OpenNow,
            KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::OpenLater,
            KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::Back,
            KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::Back,
            KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            false,
        );
        register(
            Action::Proceed,
            KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE),
            true,
        );
        register(
            Action::Proceed,
            KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            false,
        );

        for (i, digit) in ('1'..='9').enumerate() {
            register(
                Action::OpenGift,
                KeyEvent::new(KeyCode::Char(digit), KeyModifiers::NONE),
                i == 0,
            );
        }

        Self {
            display_bindings,
            input_bindings,
        }
    }
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies user bindings from the config, written as key string to action
    /// name. They take precedence over the defaults and become the displayed
    /// key for their action. Entries with a bad key or action are skipped.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &BTreeMap<String, String>) -> Self {
        for (binding, action_name) in overrides {
            let parsed = parse_key(binding)
                .and_then(|key| action_name.parse::<Action>().map(|action| (key, action)));
            match parsed {
                Ok((key, action)) => {
                    debug!(%binding, ?action, "Applying custom keybinding");
                    self.input_bindings
                        .retain(|(k, _)| !Self::matches(k, &key));
                    self.input_bindings.insert(0, (key, action));
                    self.display_bindings.insert(action, key);
                }
                Err(e) => {
                    warn!(%binding, action = %action_name, error = %e, "Ignoring invalid keybinding");
                }
            }
        }
        self
    }

    pub fn get(&self, action: Action) -> Option<KeyEvent> {
        self.display_bindings.get(&action).copied()
    }

    pub fn find_action(&self, key: KeyEvent) -> Option<Action> {
        self.input_bindings
            .iter()
            .find(|(k, _)| Self::matches(k, &key))
            .map(|(_, a)| *a)
    }

    /// Builds a footer hint for `action` from its displayed key.
    pub fn keybind(&self, action: Action, label: impl Into<Cow<'static, str>>) -> Option<Keybind> {
        self.get(action).map(|key| Keybind::new(key, action, label))
    }

    // Shift is implied by the character itself, so it is ignored for chars.
    fn matches(bound: &KeyEvent, pressed: &KeyEvent) -> bool {
        if bound.code != pressed.code {
            return false;
        }
        match pressed.code {
            KeyCode::Char(_) => {
                bound.modifiers.difference(KeyModifiers::SHIFT)
                    == pressed.modifiers.difference(KeyModifiers::SHIFT)
            }
            _ => bound.modifiers == pressed.modifiers,
        }
    }
}

pub trait HasCommands {
    fn get_commands(&self, registry: &CommandRegistry) -> Vec<Keybind>;
}
