//! Client configuration.
//!
//! Loaded from `<base>/config.toml`. Every key is optional:
//!
//! ```toml
//! api_url = "https://anteacore-publicapi.up.railway.app"
//! session_file = "/custom/place/session.json"
//! log_level = "info"
//! ```
//!
//! `ANTEACORE_API_URL` overrides `api_url`.

use crate::paths::AnteaPaths;
use antea_core::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "ANTEACORE_API_URL";

/// Public API used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "https://anteacore-publicapi.up.railway.app";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the knowledge service.
    pub api_url: String,
    /// Replaces `<base>/session.json` as the session record location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_file: Option<PathBuf>,
    /// Default tracing filter directive, e.g. "info".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            session_file: None,
            log_level: None,
        }
    }
}

impl ClientConfig {
    /// Loads `<base>/config.toml` and applies environment overrides.
    ///
    /// A missing or invalid file yields the defaults; an invalid one is
    /// reported with a warning.
    pub fn load(paths: &AnteaPaths) -> Self {
        let config = match Self::read_file(&paths.config_file()) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring invalid config {:?}: {}", paths.config_file(), e);
                Self::default()
            }
        };
        config.with_api_url_override(std::env::var(API_URL_ENV).ok())
    }

    /// Parses a config file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(config))`: File parsed
    /// - `Ok(None)`: File doesn't exist
    /// - `Err(_)`: Unreadable or not valid TOML
    pub fn read_file(path: &Path) -> Result<Option<Self>> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(toml::from_str(&content)?))
    }

    fn with_api_url_override(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }

    /// Where the session record lives under this configuration.
    pub fn session_file(&self, paths: &AnteaPaths) -> PathBuf {
        self.session_file
            .clone()
            .unwrap_or_else(|| paths.session_file())
    }
}
