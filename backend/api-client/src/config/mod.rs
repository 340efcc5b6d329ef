//! Client settings from the environment or a TOML file.
//!
//! The API key is never written to disk: the file only names the environment
//! variable the key is read from.

use crate::client::DEFAULT_API_URL;
use crate::error::ConfigError;

use common::{ErrorLocation, RedactedApiKey};

use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::{Deserialize, Serialize};

const CONFIG_DIR_NAME: &str = "braintrust";
const CONFIG_FILE_NAME: &str = "client.toml";

pub const API_KEY_ENV: &str = "BRAINTRUST_API_KEY";
pub const API_URL_ENV: &str = "BRAINTRUST_API_URL";
pub const ORG_NAME_ENV: &str = "BRAINTRUST_ORG_NAME";

// ============================================
// FILE FORMAT
// ============================================

/// On-disk settings (`client.toml`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSettings {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default)]
    pub org_name: String,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for FileSettings {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            org_name: String::new(),
            api_key_env: default_api_key_env(),
        }
    }
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_api_key_env() -> String {
    API_KEY_ENV.to_string()
}

// ============================================
// RESOLVED CONFIG
// ============================================

/// Everything needed to construct a [`crate::Client`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: RedactedApiKey,
    pub api_url: String,
    pub org_name: String,
}

impl ClientConfig {
    pub fn new(
        api_key: impl Into<String>,
        api_url: impl Into<String>,
        org_name: impl Into<String>,
    ) -> Self {
        Self {
            api_key: RedactedApiKey::new(api_key),
            api_url: api_url.into(),
            org_name: org_name.into(),
        }
    }

    /// Read settings from `BRAINTRUST_*` variables, loading `.env` first if present.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnv`] if the API key is not set and
    /// [`ConfigError::ValidationError`] if it is blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded .env from: {}", path.display()),
            Err(_) => debug!("No .env file found - using process environment"),
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as [`ClientConfig::from_env`] with an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::from_env`].
    #[track_caller]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(API_KEY_ENV).ok_or_else(|| ConfigError::MissingEnv {
            location: ErrorLocation::from(Location::caller()),
            name: API_KEY_ENV.to_string(),
        })?;

        let api_url = lookup(API_URL_ENV)
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(default_api_url);

        let org_name = lookup(ORG_NAME_ENV).unwrap_or_default();

        let config = Self::new(api_key, api_url, org_name);
        config.validate()?;
        Ok(config)
    }

    /// Load `client.toml` and read the key from the variable it names.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if:
    /// - The file cannot be read
    /// - The TOML is invalid
    /// - The key variable is unset or blank
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_lookup(path, |name| env::var(name).ok())
    }

    /// [`ClientConfig::load`] with an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// See [`ClientConfig::load`].
    #[track_caller]
    pub fn load_with_lookup<F>(path: &Path, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        let settings: FileSettings =
            toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let api_key = lookup(&settings.api_key_env).ok_or_else(|| ConfigError::MissingEnv {
            location: ErrorLocation::from(Location::caller()),
            name: settings.api_key_env.clone(),
        })?;

        let config = Self::new(api_key, settings.api_url, settings.org_name);
        config.validate()?;

        info!("Client config loaded from {}", path.display());
        Ok(config)
    }

    /// `{config_dir}/braintrust/client.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Validate values that do not depend on the scheme policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    #[track_caller]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.is_blank() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "API key cannot be empty".to_string(),
            });
        }

        if self.api_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "API URL cannot be empty".to_string(),
            });
        }

        Ok(())
    }
}
