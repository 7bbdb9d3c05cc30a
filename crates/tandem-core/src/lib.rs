pub mod account;
pub mod error;
pub mod ids;
pub mod message;
pub mod partner;
pub mod profile;
pub mod schedule;
pub mod session;
pub mod storage;

// Re-export common types
pub use error::{Result, TandemError};
pub use storage::KeyValueStore;
