//! Application configuration.

pub mod app_config;
pub mod args;
pub mod storage;

pub use app_config::{
    AppConfig, GiftConfig, GreetingConfig, LogLevel, SoundConfig, ThemeConfig, UiConfig,
};
pub use args::CliArgs;
pub use storage::{ConfigError, LoadOutcome, StorageManager};
