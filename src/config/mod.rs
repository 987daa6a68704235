//! Application configuration module
//!
//! This module provides type-safe configuration loading from an optional
//! YAML file and environment variables using the `config` and `dotenvy`
//! crates. Environment variables use the `MY_PRAYERS` prefix and nested
//! values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use my_prayers::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Batch size: {}", config.session.batch_size);
//! ```

mod error;
mod logging;
mod selection;
mod session;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use selection::SelectionConfig;
pub use session::SessionConfig;
pub use storage::{StorageBackend, StorageConfig};

use serde::Deserialize;
use std::path::Path;

use crate::application::SessionSettings;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a working
/// configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Session flow (batch size, panel set choice)
    #[serde(default)]
    pub session: SessionConfig,

    /// Recency-weighted selection tuning
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Journal and panel catalog locations
    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MY_PRAYERS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MY_PRAYERS__SESSION__BATCH_SIZE=5` -> `session.batch_size = 5`
    /// - `MY_PRAYERS__STORAGE__DATA_DIR=...` -> `storage.data_dir = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`AppConfig::load`], layering environment variables over a
    /// YAML file when one is given.
    pub fn load_from(file: Option<&Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::default()
                    .prefix("MY_PRAYERS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.session.validate()?;
        self.selection.validate()?;
        self.logging.validate()?;
        Ok(())
    }

    /// Settings for the session controller
    pub fn session_settings(&self, seed: Option<u64>) -> Result<SessionSettings, ValidationError> {
        Ok(SessionSettings {
            batch_size: self.session.batch_size,
            default_panel_set: self.session.panel_set_id()?,
            rotate_panel_sets: self.session.rotate_panel_sets,
            seed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::selection::RecencyBasis;
    use std::env;
    use std::path::PathBuf;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const VARS: [&str; 5] = [
        "MY_PRAYERS__SESSION__BATCH_SIZE",
        "MY_PRAYERS__SESSION__ROTATE_PANEL_SETS",
        "MY_PRAYERS__SELECTION__RECENCY_HALF_LIFE_DAYS",
        "MY_PRAYERS__SELECTION__RECENCY_BASIS",
        "MY_PRAYERS__STORAGE__DATA_DIR",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    fn test_defaults_without_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.session.batch_size, 3);
        assert_eq!(config.selection.recency_half_life_days, 7.0);
        assert_eq!(config.storage.backend, StorageBackend::File);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MY_PRAYERS__SESSION__BATCH_SIZE", "5");
        env::set_var("MY_PRAYERS__SESSION__ROTATE_PANEL_SETS", "true");
        env::set_var("MY_PRAYERS__SELECTION__RECENCY_HALF_LIFE_DAYS", "3.5");
        env::set_var("MY_PRAYERS__SELECTION__RECENCY_BASIS", "created");
        env::set_var("MY_PRAYERS__STORAGE__DATA_DIR", "/tmp/prayers");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.session.batch_size, 5);
        assert!(config.session.rotate_panel_sets);
        assert_eq!(config.selection.recency_half_life_days, 3.5);
        assert_eq!(config.selection.recency_basis, RecencyBasis::Created);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/prayers"));
    }

    #[test]
    fn test_validate_catches_bad_batch_size() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("MY_PRAYERS__SESSION__BATCH_SIZE", "0");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidBatchSize { actual: 0, .. })
        ));
    }

    #[test]
    fn test_load_from_yaml_file() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("my-prayers.yaml");
        std::fs::write(
            &path,
            "session:\n  batch_size: 4\n  default_panel_set: evening\nstorage:\n  backend: memory\n",
        )
        .unwrap();

        let config = AppConfig::load_from(Some(&path)).unwrap();
        assert_eq!(config.session.batch_size, 4);
        assert_eq!(config.storage.backend, StorageBackend::Memory);

        let settings = config.session_settings(Some(9)).unwrap();
        assert_eq!(settings.default_panel_set.as_str(), "evening");
        assert_eq!(settings.seed, Some(9));
    }
}
