//! Session domain model.
//!
//! A `Session` is created once and never edited. Rotation replaces the whole
//! record, so every field is private and only readable through accessors.

use super::display_name::DisplayName;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifetime of one anonymous session.
pub const SESSION_TTL_HOURS: i64 = 24;

/// Returns the session time-to-live as a chrono duration.
pub fn session_ttl() -> Duration {
    Duration::hours(SESSION_TTL_HOURS)
}

/// Opaque session token.
///
/// Always produced by a [`SessionIdSource`](super::SessionIdSource); carries
/// no machine, user, or environment data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(String);

impl SessionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An anonymous session record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    session_id: SessionId,
    display_name: DisplayName,
    created_at: DateTime<Utc>,
    expires_at: DateTime<Utc>,
}

impl Session {
    /// Creates a session starting at `now` and expiring one TTL later.
    pub fn new(session_id: SessionId, display_name: DisplayName, now: DateTime<Utc>) -> Self {
        Self {
            session_id,
            display_name,
            created_at: now,
            expires_at: now + session_ttl(),
        }
    }

    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }

    pub fn display_name(&self) -> &DisplayName {
        &self.display_name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// A session is valid strictly before its expiry instant.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }

    /// Checks that a record read back from storage is usable.
    ///
    /// A record that parses but has an empty id or name, or whose expiry is
    /// not exactly one TTL after its creation, is treated the same as a
    /// missing one.
    pub fn is_well_formed(&self) -> bool {
        !self.session_id.as_str().trim().is_empty()
            && !self.display_name.as_str().trim().is_empty()
            && self.expires_at - self.created_at == session_ttl()
    }

    /// Read-only projection for user-facing display.
    pub fn info(&self) -> SessionInfo {
        SessionInfo {
            session_id: self.session_id.clone(),
            display_name: self.display_name.clone(),
            expires_at: self.expires_at,
        }
    }
}

/// What the user gets to see about their current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionInfo {
    pub session_id: SessionId,
    pub display_name: DisplayName,
    pub expires_at: DateTime<Utc>,
}

impl SessionInfo {
    /// e.g. "Contributing as: Swift Fox"
    pub fn contributing_as(&self) -> String {
        format!("Contributing as: {}", self.display_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn sample() -> Session {
        Session::new(
            SessionId::new("7d1c6b1e-4f7a-4c2e-9a53-0d2b8f3e6a10"),
            DisplayName::from_parts("Swift", "Fox"),
            t0(),
        )
    }

    #[test]
    fn test_expiry_is_one_ttl_after_creation() {
        let session = sample();
        assert_eq!(session.created_at(), t0());
        assert_eq!(session.expires_at() - session.created_at(), Duration::hours(24));
    }

    #[test]
    fn test_validity_boundary_is_exclusive() {
        let session = sample();
        assert!(session.is_valid_at(t0()));
        assert!(session.is_valid_at(session.expires_at() - Duration::seconds(1)));
        assert!(!session.is_valid_at(session.expires_at()));
        assert!(!session.is_valid_at(session.expires_at() + Duration::seconds(1)));
    }

    #[test]
    fn test_well_formed_rejects_empty_id() {
        let session = Session::new(
            SessionId::new("  "),
            DisplayName::from_parts("Bold", "Owl"),
            t0(),
        );
        assert!(!session.is_well_formed());
        assert!(sample().is_well_formed());
    }

    #[test]
    fn test_well_formed_rejects_inverted_timestamps() {
        let json = r#"{
            "session_id": "abc",
            "display_name": "Calm Bear",
            "created_at": "2025-01-02T00:00:00Z",
            "expires_at": "2025-01-01T00:00:00Z"
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert!(!session.is_well_formed());
    }

    #[test]
    fn test_well_formed_requires_exact_ttl() {
        let stretched = r#"{
            "session_id": "abc",
            "display_name": "Calm Bear",
            "created_at": "2020-01-01T00:00:00Z",
            "expires_at": "2099-01-01T00:00:00Z"
        }"#;
        let session: Session = serde_json::from_str(stretched).unwrap();
        assert!(!session.is_well_formed());

        let one_second_short = r#"{
            "session_id": "abc",
            "display_name": "Calm Bear",
            "created_at": "2025-01-01T00:00:00Z",
            "expires_at": "2025-01-01T23:59:59Z"
        }"#;
        let session: Session = serde_json::from_str(one_second_short).unwrap();
        assert!(!session.is_well_formed());
    }

    #[test]
    fn test_json_shape_is_flat_and_readable() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 4);
        assert_eq!(object["session_id"], "7d1c6b1e-4f7a-4c2e-9a53-0d2b8f3e6a10");
        assert_eq!(object["display_name"], "Swift Fox");
        assert_eq!(object["created_at"], "2025-01-01T12:00:00Z");
        assert_eq!(object["expires_at"], "2025-01-02T12:00:00Z");
    }

    #[test]
    fn test_info_projection() {
        let info = sample().info();
        assert_eq!(info.display_name.as_str(), "Swift Fox");
        assert_eq!(info.expires_at, t0() + Duration::hours(24));
        assert_eq!(info.contributing_as(), "Contributing as: Swift Fox");
    }
}
