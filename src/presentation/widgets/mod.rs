mod button;
mod debug_panel;
mod footer_bar;
mod gift_tile;

pub use button::Button;
pub use debug_panel::DebugPanel;
pub use footer_bar::{FooterBar, FooterBarStyle};
pub use gift_tile::{GiftTile, TileState};
