//! Application layer with session state, services and DTOs.

/// Data transfer objects.
pub mod dto;
/// Navigator and gift tracker.
pub mod services;
/// Input dispatch over the navigator and tracker.
pub mod session;
/// Page transition table.
pub mod transitions;

pub use dto::{Control, InputEvent, StateSnapshot};
pub use services::{GiftTracker, Navigator, OpenOutcome};
pub use session::{DispatchOutcome, Session};
