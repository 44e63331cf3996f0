//! Anonymous, short-lived client identity for the AnteaCore knowledge service.
//!
//! Replaces hardware fingerprints with a random session id that rotates every
//! 24 hours, plus a cosmetic display name for attribution.

pub mod error;
pub mod headers;
pub mod session;

// Re-export common error type
pub use error::{AnteaError, Result};
pub use headers::headers_for;
pub use session::{Session, SessionId, SessionInfo, SessionManager, SessionStore};
