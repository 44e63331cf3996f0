pub mod config;
pub mod json_session_store;
pub mod paths;
pub mod storage;

pub use crate::config::ClientConfig;
pub use crate::json_session_store::JsonSessionStore;
pub use crate::paths::AnteaPaths;
