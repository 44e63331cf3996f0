pub mod privacy;
pub mod session;
