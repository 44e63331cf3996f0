//! Error types for the AnteaCore client.

use thiserror::Error;

/// A shared error type for the anonymous session layer.
///
/// Read failures never show up here: a missing or corrupt session record is
/// reported by the store as "no session". Only write failures, path/config
/// resolution and an unusable random source are represented.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnteaError {
    /// The secure random source could not produce bytes.
    ///
    /// Fatal to session creation: a guessable session id would defeat
    /// rate limiting and anonymity alike.
    #[error("Secure random source unavailable: {0}")]
    RandomnessUnavailable(String),

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "JSON", "TOML"
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Home directory could not be determined.
    #[error("Cannot find home directory")]
    HomeDirNotFound,
}

impl AnteaError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a RandomnessUnavailable error
    pub fn randomness(message: impl Into<String>) -> Self {
        Self::RandomnessUnavailable(message.into())
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this error is fatal to session creation.
    pub fn is_randomness(&self) -> bool {
        matches!(self, Self::RandomnessUnavailable(_))
    }

    /// Check if this is an IO error
    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for AnteaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for AnteaError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AnteaError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<rand::Error> for AnteaError {
    fn from(err: rand::Error) -> Self {
        Self::RandomnessUnavailable(err.to_string())
    }
}

/// A type alias for `Result<T, AnteaError>`.
pub type Result<T> = std::result::Result<T, AnteaError>;
