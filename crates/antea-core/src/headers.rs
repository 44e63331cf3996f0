//! Outbound identity headers.
//!
//! Turns a session into the headers the API client attaches to every
//! request. Only the session id leaves the machine; the display name and
//! timestamps never do.

use crate::session::Session;
use std::collections::BTreeMap;

/// Header carrying the anonymous session id.
pub const SESSION_ID_HEADER: &str = "X-Session-ID";

/// Header marking the request as anonymous.
pub const ANONYMOUS_HEADER: &str = "X-Anonymous";

/// Value sent in [`ANONYMOUS_HEADER`].
pub const ANONYMOUS_MARKER: &str = "true";

/// Builds the identity headers for `session`.
pub fn headers_for(session: &Session) -> BTreeMap<&'static str, String> {
    BTreeMap::from([
        (SESSION_ID_HEADER, session.session_id().to_string()),
        (ANONYMOUS_HEADER, ANONYMOUS_MARKER.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{DisplayName, SessionId};
    use chrono::Utc;

    #[test]
    fn test_exactly_two_headers() {
        let session = Session::new(
            SessionId::new("0f8e2a4c-1b3d-4e5f-8a7b-9c0d1e2f3a4b"),
            DisplayName::from_parts("Keen", "Lynx"),
            Utc::now(),
        );

        let headers = headers_for(&session);

        assert_eq!(headers.len(), 2);
        assert_eq!(
            headers.get(SESSION_ID_HEADER).map(String::as_str),
            Some("0f8e2a4c-1b3d-4e5f-8a7b-9c0d1e2f3a4b")
        );
        assert_eq!(headers.get(ANONYMOUS_HEADER).map(String::as_str), Some("true"));
    }

    #[test]
    fn test_display_name_is_never_sent() {
        let session = Session::new(
            SessionId::new("abc123"),
            DisplayName::from_parts("Witty", "Otter"),
            Utc::now(),
        );

        let headers = headers_for(&session);

        assert!(headers.values().all(|v| !v.contains("Otter")));
        assert!(headers.values().all(|v| !v.contains(&session.expires_at().to_rfc3339())));
    }
}
