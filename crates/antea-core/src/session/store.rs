//! Session store trait.
//!
//! Defines the interface for persisting the single active session.

use super::model::Session;
use crate::error::Result;

/// A single-slot store holding at most one session record.
///
/// This trait decouples the session manager from the storage mechanism
/// (JSON file, in-memory fake for tests).
///
/// # Implementation Notes
///
/// - `load` must fail soft: missing, unreadable or malformed records are
///   reported as `None`, never as an error.
/// - `save` must never leave a half-written record visible to readers.
/// - `clear` must be idempotent.
pub trait SessionStore: Send + Sync {
    /// Reads the persisted session, if a usable one exists.
    fn load(&self) -> Option<Session>;

    /// Replaces the persisted session.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Session saved successfully
    /// - `Err(_)`: Error occurred during save; the previous record is intact
    fn save(&self, session: &Session) -> Result<()>;

    /// Removes the persisted session.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: Session removed (or didn't exist)
    /// - `Err(_)`: Error occurred during removal
    fn clear(&self) -> Result<()>;
}
