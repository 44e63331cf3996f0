//! JSON file implementation of the session store.
//!
//! Keeps the single anonymous session in `~/.anteacore/session.json`:
//!
//! ```json
//! {
//!   "session_id": "6f1d2c3b-8a9e-4f10-b2c3-d4e5f6a7b8c9",
//!   "display_name": "Swift Fox",
//!   "created_at": "2025-01-01T12:00:00Z",
//!   "expires_at": "2025-01-02T12:00:00Z"
//! }
//! ```

use crate::paths::AnteaPaths;
use crate::storage::AtomicJsonFile;
use antea_core::{Result, Session, SessionStore};
use std::path::{Path, PathBuf};

/// Single-slot session store backed by one JSON file.
pub struct JsonSessionStore {
    file: AtomicJsonFile<Session>,
}

impl JsonSessionStore {
    /// Creates a store at an explicit file path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            file: AtomicJsonFile::new(path),
        }
    }

    /// Creates a store at the well-known session file under `paths`.
    pub fn at(paths: &AnteaPaths) -> Self {
        Self::new(paths.session_file())
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

impl SessionStore for JsonSessionStore {
    fn load(&self) -> Option<Session> {
        match self.file.load() {
            Ok(Some(session)) if session.is_well_formed() => {
                tracing::debug!("Loaded session record from {:?}", self.path());
                Some(session)
            }
            Ok(Some(_)) => {
                tracing::warn!("Ignoring malformed session record at {:?}", self.path());
                None
            }
            Ok(None) => {
                tracing::debug!("No session record at {:?}", self.path());
                None
            }
            Err(e) => {
                tracing::warn!("Ignoring unreadable session record at {:?}: {}", self.path(), e);
                None
            }
        }
    }

    fn save(&self, session: &Session) -> Result<()> {
        self.file.save(session)?;
        tracing::debug!("Saved session record to {:?}", self.path());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.file.remove()?;
        tracing::debug!("Removed session record at {:?}", self.path());
        Ok(())
    }
}
