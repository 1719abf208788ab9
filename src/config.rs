//! Configuration management for the credential loader
//!
//! Settings come from `config.toml` with `CM_CREDENTIALS_*` environment overrides.

use config::{Config, Environment, File, FileFormat, Source};
use serde::Deserialize;
use std::path::PathBuf;

use crate::auth::DEFAULT_DELIMITER;

const ENV_PREFIX: &str = "CM_CREDENTIALS";

/// Credential loader configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoaderConfig {
    /// File holding one `user<delimiter>password` entry per line
    /// Environment: CM_CREDENTIALS_CREDENTIALS_FILE
    pub credentials_file: String,

    /// Field separator, may be longer than one character
    /// Environment: CM_CREDENTIALS_DELIMITER
    pub delimiter: String,

    /// Abort on the first malformed line instead of skipping it
    pub fail_on_rejected: bool,
}

impl LoaderConfig {
    /// Load configuration from config.toml with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        let config_paths = ["cm-credentials/config", "config"];

        let mut last_error = None;

        for config_path in &config_paths {
            match Self::build(File::with_name(config_path)) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    last_error = Some(e);
                    continue;
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            config::ConfigError::Message(format!(
                "Failed to load config.toml from any location. Tried: {config_paths:?}"
            ))
        }))
    }

    /// Load configuration from TOML text, still honouring environment overrides
    pub fn from_toml(contents: &str) -> Result<Self, config::ConfigError> {
        Self::build(File::from_str(contents, FileFormat::Toml))
    }

    fn build<S>(source: S) -> Result<Self, config::ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let settings = Config::builder()
            .set_default("delimiter", DEFAULT_DELIMITER)?
            .set_default("fail_on_rejected", false)?
            .add_source(source)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: LoaderConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Validation for all configuration values
    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.credentials_file.trim().is_empty() {
            return Err(config::ConfigError::Message(
                "credentials_file cannot be empty".into(),
            ));
        }

        if self.delimiter.is_empty() {
            return Err(config::ConfigError::Message(
                "delimiter cannot be empty".into(),
            ));
        }

        Ok(())
    }

    /// Get credentials file as PathBuf
    pub fn credentials_path(&self) -> PathBuf {
        PathBuf::from(&self.credentials_file)
    }
}
