//! Secure session identifier generation.

use super::model::SessionId;
use crate::error::Result;
use rand::RngCore;
use rand::rngs::OsRng;
use uuid::Builder;

/// Produces fresh, unguessable session identifiers.
pub trait SessionIdSource: Send + Sync {
    /// Returns a new identifier, or `RandomnessUnavailable` when the
    /// underlying secure source fails. Implementations must not fall back
    /// to a predictable generator.
    fn next_id(&self) -> Result<SessionId>;
}

/// Draws 128 bits from the operating system RNG and formats them as a
/// version 4 UUID (122 random bits survive the version/variant markers).
#[derive(Debug, Clone, Copy, Default)]
pub struct OsRngIdSource;

impl SessionIdSource for OsRngIdSource {
    fn next_id(&self) -> Result<SessionId> {
        let mut bytes = [0u8; 16];
        OsRng.try_fill_bytes(&mut bytes)?;
        let uuid = Builder::from_random_bytes(bytes).into_uuid();
        Ok(SessionId::new(uuid.hyphenated().to_string()))
    }
}
