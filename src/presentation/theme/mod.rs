//! Color theme.

mod service;
mod shade;

pub use service::Theme;
pub use shade::shade;
