//! Domain error types.

mod gift_error;
mod navigation_error;

pub use gift_error::GiftError;
pub use navigation_error::NavigationError;
