//! Data transfer objects.

mod input_dto;
mod snapshot_dto;

pub use input_dto::{Control, InputEvent};
pub use snapshot_dto::StateSnapshot;
