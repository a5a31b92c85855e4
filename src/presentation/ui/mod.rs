//! UI screens.

mod app;
mod hit_map;
mod page_screen;

pub use app::App;
pub use hit_map::{HitMap, HitTarget};
pub use page_screen::PageScreen;
