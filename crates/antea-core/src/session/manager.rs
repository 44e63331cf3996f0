use super::clock::{Clock, SystemClock};
use super::display_name::DisplayName;
use super::id_source::{OsRngIdSource, SessionIdSource};
use super::model::{Session, SessionInfo};
use super::store::SessionStore;
use crate::error::Result;
use std::sync::{Arc, Mutex, MutexGuard};

/// Owns the notion of "the current anonymous session".
///
/// `SessionManager` is responsible for:
/// - Returning a valid session, creating one lazily on first use
/// - Rotating the session once its TTL has elapsed
/// - Persisting new sessions through the injected [`SessionStore`]
/// - Clearing the session on user request
///
/// All collaborators are passed in; nothing is read from global state.
pub struct SessionManager {
    /// Persistent single-slot storage
    store: Arc<dyn SessionStore>,
    /// Time source for expiry checks
    clock: Arc<dyn Clock>,
    /// Secure identifier generator
    ids: Arc<dyn SessionIdSource>,
    /// Session created by this manager whose save failed; `None` once
    /// anything has been persisted
    unsaved: Mutex<Option<Session>>,
}

impl SessionManager {
    /// Creates a manager over `store` using the system clock and OS RNG.
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            clock: Arc::new(SystemClock),
            ids: Arc::new(OsRngIdSource),
            unsaved: Mutex::new(None),
        }
    }

    /// Replaces the time source.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the identifier generator.
    pub fn with_id_source(mut self, ids: Arc<dyn SessionIdSource>) -> Self {
        self.ids = ids;
        self
    }

    /// Returns the current valid session, creating or rotating it if needed.
    ///
    /// Repeated calls within the TTL return the same record and leave storage
    /// untouched. A failed save is logged and the new session is still
    /// returned; it stays in use only while the store has nothing better
    /// and no save has succeeded since. A session that was persisted is
    /// never resurrected from memory, so a clear by another process sticks.
    ///
    /// # Errors
    ///
    /// Returns `RandomnessUnavailable` if a new id is needed and the secure
    /// random source fails.
    pub fn current(&self) -> Result<Session> {
        let now = self.clock.now();

        if let Some(session) = self.store.load() {
            if session.is_valid_at(now) {
                self.unsaved_slot().take();
                return Ok(session);
            }
            tracing::info!(
                "Session '{}' expired at {}, rotating",
                session.display_name(),
                session.expires_at()
            );
        }

        let mut unsaved = self.unsaved_slot();
        if let Some(session) = unsaved.as_ref().filter(|s| s.is_valid_at(now)) {
            tracing::debug!("Using unsaved in-process session (store has no valid record)");
            return Ok(session.clone());
        }

        let session = Session::new(self.ids.next_id()?, DisplayName::generate(), now);
        tracing::info!(
            "Created anonymous session '{}' (expires {})",
            session.display_name(),
            session.expires_at()
        );

        *unsaved = match self.store.save(&session) {
            Ok(()) => None,
            Err(e) => {
                tracing::warn!(
                    "Failed to persist session, it will not survive a restart: {}",
                    e
                );
                Some(session.clone())
            }
        };
        Ok(session)
    }

    /// Discards the current session.
    ///
    /// The next [`current`](Self::current) call creates an unrelated session
    /// with a new id and name.
    pub fn clear(&self) -> Result<()> {
        self.unsaved_slot().take();
        self.store.clear()?;
        tracing::info!("Anonymous session cleared");
        Ok(())
    }

    /// Read-only view of the current session for display.
    pub fn info(&self) -> Result<SessionInfo> {
        Ok(self.current()?.info())
    }

    fn unsaved_slot(&self) -> MutexGuard<'_, Option<Session>> {
        // A panic while holding the lock cannot leave a half-built session.
        self.unsaved.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
