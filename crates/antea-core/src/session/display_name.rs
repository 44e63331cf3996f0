//! Friendly two-word labels for anonymous sessions.
//!
//! The label is cosmetic. Collisions between different people are expected
//! and harmless; the session id is what the server correlates on.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Adjective pool (16 entries).
pub const ADJECTIVES: &[&str] = &[
    "Swift", "Bright", "Keen", "Sharp", "Quick", "Wise", "Bold", "Calm", "Brave", "Clever",
    "Gentle", "Lucky", "Nimble", "Quiet", "Steady", "Witty",
];

/// Noun pool (16 entries).
pub const NOUNS: &[&str] = &[
    "Fox", "Eagle", "Owl", "Wolf", "Bear", "Deer", "Hawk", "Raven", "Otter", "Falcon", "Lynx",
    "Heron", "Badger", "Marten", "Crane", "Bison",
];

/// A human-readable label such as "Swift Fox".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DisplayName(String);

impl DisplayName {
    /// Picks one adjective and one noun at random.
    pub fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let adjective = ADJECTIVES[rng.gen_range(0..ADJECTIVES.len())];
        let noun = NOUNS[rng.gen_range(0..NOUNS.len())];
        Self::from_parts(adjective, noun)
    }

    pub fn from_parts(adjective: &str, noun: &str) -> Self {
        Self(format!("{adjective} {noun}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
