//! Application services.

pub mod gift_tracker;
pub mod navigator;

pub use gift_tracker::{GiftTracker, OpenOutcome};
pub use navigator::Navigator;
