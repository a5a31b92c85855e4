//! Read-only view of session state for debugging.

use serde::Serialize;

use crate::domain::entities::Page;

/// Live session state, serializable for inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateSnapshot {
    /// Active page.
    pub current_page: Page,
    /// Open gift ids, ascending.
    pub opened_gifts: Vec<u8>,
    /// Whether every gift is open.
    pub all_gifts_opened: bool,
    /// Whether the proceed control is shown.
    pub proceed_visible: bool,
    /// Gifts in a round.
    pub total_gifts: usize,
}

impl StateSnapshot {
    /// Pretty JSON rendering.
    #[must_use]
    pub fn to_json_pretty(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
