use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use crate::domain::errors::GiftError;
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
    #[error("toml deserialization error: {0}")]
    TomlDe(#[from] toml::de::Error),
    #[error("invalid gift list: {0}")]
    Gifts(#[from] GiftError),
}

/// How the configuration was obtained.
///
/// Loading runs before the log subscriber exists, so the caller reports this
/// once logging is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and parsed.
    Loaded(PathBuf),
    /// No file existed; the defaults were written there.
    CreatedDefault(PathBuf),
    /// The file failed to parse and was left untouched; defaults are in use.
    Malformed {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser message.
        error: String,
    },
}

impl LoadOutcome {
    /// Emits the outcome as a log event.
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => info!(path = %path.display(), "Configuration loaded"),
            Self::CreatedDefault(path) => {
                info!(path = %path.display(), "Config file not found, wrote defaults");
            }
            Self::Malformed { path, error } => {
                warn!(path = %path.display(), %error, "Failed to parse config file, using defaults");
            }
        }
    }
}

pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `StorageManager` with a specific directory (useful for testing).
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Ensures the configuration directory exists.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> Result<(), ConfigError> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir)?;
        }
        Ok(())
    }

    /// Loads the application configuration, writing the defaults on first run.
    ///
    /// A file that fails to parse is left untouched and the defaults are used;
    /// the returned [`LoadOutcome`] says which case happened.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the gift list is invalid.
    pub fn load_config(
        &self,
        path_override: Option<&Path>,
    ) -> Result<(AppConfig, LoadOutcome), ConfigError> {
        if path_override.is_none() {
            self.ensure_config_dir()?;
        }
        let config_path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            std::path::Path::to_path_buf,
        );

        if !config_path.exists() {
            let default_config = AppConfig::default();
            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)?;
            }
            Self::save_to_file(&config_path, &default_config)?;
            return Ok((default_config, LoadOutcome::CreatedDefault(config_path)));
        }

        let content = fs::read_to_string(&config_path)?;
        let (config, outcome) = match toml::from_str::<AppConfig>(&content) {
            Ok(config) => (config, LoadOutcome::Loaded(config_path)),
            Err(e) => (
                AppConfig::default(),
                LoadOutcome::Malformed {
                    path: config_path,
                    error: e.to_string(),
                },
            ),
        };

        config.gift_catalog()?;
        Ok((config, outcome))
    }

    fn save_to_file<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(data)?;

        let parent = path
            .parent()
            .ok_or_else(|| std::io::Error::other("Invalid path"))?;
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(content.as_bytes())?;
        temp_file.persist(path).map_err(|e| e.error)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_ensure_config_dir_creates_directory() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("giftbox");
        let manager = StorageManager::with_dir(config_path.clone());

        assert!(!config_path.exists());
        manager.ensure_config_dir().unwrap();
        assert!(config_path.exists());
    }

    #[test]
    fn test_load_config_creates_default_if_missing() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());

        let (config, outcome) = manager.load_config(None).unwrap();
        assert!(config.mouse);
        assert_eq!(config.gifts.len(), 4);

        let config_file = dir.path().join(CONFIG_FILE_NAME);
        assert!(config_file.exists());
        assert_eq!(outcome, LoadOutcome::CreatedDefault(config_file.clone()));

        let (reloaded, outcome) = manager.load_config(None).unwrap();
        assert_eq!(reloaded.gifts, config.gifts);
        assert_eq!(outcome, LoadOutcome::Loaded(config_file));
    }

    #[test]
    fn test_load_config_handles_malformed_file() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        fs::write(&config_file, "invalid_toml = [").unwrap();

        let (config, outcome) = manager.load_config(None).unwrap();
        assert!(config.mouse);
        let content = fs::read_to_string(&config_file).unwrap();
        assert_eq!(content, "invalid_toml = [");

        match outcome {
            LoadOutcome::Malformed { path, error } => {
                assert_eq!(path, config_file);
                assert!(!error.is_empty());
            }
            other => panic!("expected a malformed outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_load_config_from_override_path() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("custom.toml");

        fs::write(
            &custom,
            "[[gifts]]\ntitle = \"Socks\"\nmessage = \"Warm ones.\"\n",
        )
        .unwrap();

        let (config, outcome) = manager.load_config(Some(&custom)).unwrap();
        assert_eq!(config.gifts.len(), 1);
        assert_eq!(outcome, LoadOutcome::Loaded(custom.clone()));
        assert_eq!(config.gifts[0].title, "Socks");
    }

    #[test]
    fn test_load_config_rejects_too_many_gifts() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        let gifts = "[[gifts]]\ntitle = \"t\"\nmessage = \"m\"\n".repeat(10);
        fs::write(&config_file, gifts).unwrap();

        let result = manager.load_config(None);
        assert!(matches!(
            result,
            Err(ConfigError::Gifts(GiftError::TooMany { count: 10, .. }))
        ));
    }

    #[test]
    fn test_misspelled_keybinding_still_loads_file() {
        let dir = tempdir().unwrap();
        let manager = StorageManager::with_dir(dir.path().to_path_buf());
        let config_file = dir.path().join(CONFIG_FILE_NAME);

        fs::write(
            &config_file,
            "[keybindings]\n\"Ctrl+g\" = \"Opennoww\"\n\n[[gifts]]\ntitle = \"Book\"\nmessage = \"m\"\n",
        )
        .unwrap();

        let (config, outcome) = manager.load_config(None).unwrap();
        assert_eq!(outcome, LoadOutcome::Loaded(config_file));
        assert_eq!(config.gifts.len(), 1);
        assert_eq!(config.gifts[0].title, "Book");
    }
}
