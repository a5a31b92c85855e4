//! Navigation error types.

use thiserror::Error;

/// Navigation error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum NavigationError {
    #[error("unknown page: {name}")]
    UnknownPage { name: String },
}

impl NavigationError {
    /// Creates unknown page error.
    #[must_use]
    pub fn unknown_page(name: impl Into<String>) -> Self {
        Self::UnknownPage { name: name.into() }
    }
}
