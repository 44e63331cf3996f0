//! Anonymous session domain module.
//!
//! # Module Structure
//!
//! - `model`: `Session`, `SessionId`, `SessionInfo`
//! - `display_name`: two-word label generator
//! - `store`: single-slot persistence trait
//! - `clock` / `id_source`: injectable time and randomness
//! - `manager`: lifecycle orchestration (create, reuse, rotate, clear)
//!
//! # Usage
//!
//! ```ignore
//! use antea_core::session::{SessionManager, SessionStore};
//!
//! let manager = SessionManager::new(store);
//! let session = manager.current()?;
//! ```

mod clock;
mod display_name;
mod id_source;
mod manager;
mod model;
mod store;


// Re-export public API
pub use clock::{Clock, SystemClock};
pub use display_name::{ADJECTIVES, DisplayName, NOUNS};
pub use id_source::{OsRngIdSource, SessionIdSource};
pub use manager::SessionManager;
pub use model::{SESSION_TTL_HOURS, Session, SessionId, SessionInfo, session_ttl};
pub use store::SessionStore;
