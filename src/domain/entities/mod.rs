//! Domain entity definitions.

mod gift;
mod page;

pub use gift::{DEFAULT_GIFTS, Gift, GiftCatalog, GiftId};
pub use page::Page;
