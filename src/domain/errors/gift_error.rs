//! Gift catalog error types.

use thiserror::Error;

/// Gift catalog validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum GiftError {
    #[error("at least one gift is required")]
    Empty,

    #[error("{count} gifts configured, at most {max} can be addressed by digit keys")]
    TooMany { count: usize, max: usize },
}
