//! Infrastructure layer with configuration and sound adapters.

/// Application configuration.
pub mod config;
/// Sound cue adapters.
pub mod sound;

pub use config::{AppConfig, CliArgs, ConfigError, LoadOutcome, LogLevel, StorageManager};
pub use sound::{SilentSound, TerminalBell, sound_port};
