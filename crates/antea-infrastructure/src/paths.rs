//! Well-known locations for AnteaCore client files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.anteacore/                # Base directory ($ANTEACORE_HOME overrides)
//! ├── config.toml              # Optional client configuration
//! └── session.json             # The single anonymous session record
//! ```

use antea_core::{AnteaError, Result};
use std::path::{Path, PathBuf};

/// Environment variable replacing the base directory.
pub const HOME_ENV: &str = "ANTEACORE_HOME";

const BASE_DIR_NAME: &str = ".anteacore";
const SESSION_FILE_NAME: &str = "session.json";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Path resolution rooted at one base directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnteaPaths {
    base_dir: PathBuf,
}

impl AnteaPaths {
    /// Uses an explicit base directory (tests, `--home`-style overrides).
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    /// Resolves the base directory from `$ANTEACORE_HOME`, falling back to
    /// `~/.anteacore`.
    ///
    /// # Returns
    ///
    /// - `Ok(AnteaPaths)`: Base directory determined
    /// - `Err(AnteaError::HomeDirNotFound)`: No override and no home directory
    pub fn from_env() -> Result<Self> {
        Self::resolve(std::env::var_os(HOME_ENV).map(PathBuf::from))
    }

    fn resolve(override_dir: Option<PathBuf>) -> Result<Self> {
        if let Some(dir) = override_dir.filter(|d| !d.as_os_str().is_empty()) {
            return Ok(Self::new(dir));
        }
        dirs::home_dir()
            .map(|home| Self::new(home.join(BASE_DIR_NAME)))
            .ok_or(AnteaError::HomeDirNotFound)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path to the session record: `<base>/session.json`
    pub fn session_file(&self) -> PathBuf {
        self.base_dir.join(SESSION_FILE_NAME)
    }

    /// Path to the client configuration: `<base>/config.toml`
    pub fn config_file(&self) -> PathBuf {
        self.base_dir.join(CONFIG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_base_dir() {
        let paths = AnteaPaths::new("/tmp/antea-test");
        assert_eq!(paths.session_file(), PathBuf::from("/tmp/antea-test/session.json"));
        assert_eq!(paths.config_file(), PathBuf::from("/tmp/antea-test/config.toml"));
    }

    #[test]
    fn test_override_wins() {
        let paths = AnteaPaths::resolve(Some(PathBuf::from("/srv/antea"))).unwrap();
        assert_eq!(paths.base_dir(), Path::new("/srv/antea"));
    }

    #[test]
    fn test_empty_override_falls_back_to_home() {
        // Only meaningful where a home directory exists
        if let Ok(paths) = AnteaPaths::resolve(Some(PathBuf::new())) {
            assert!(paths.base_dir().ends_with(".anteacore"));
        }
    }
}
