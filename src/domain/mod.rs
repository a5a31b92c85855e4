//! Domain layer with core entities, errors and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Keybinding definitions.
pub mod keybinding;
/// Port definitions.
pub mod ports;

pub use entities::{Gift, GiftCatalog, GiftId, Page};
pub use errors::{GiftError, NavigationError};
pub use ports::{SoundCue, SoundPort};
