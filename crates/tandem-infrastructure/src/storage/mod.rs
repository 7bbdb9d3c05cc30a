//! Storage layer: atomic files and key-value store adapters.

mod atomic_file;
mod json_file_store;
mod memory_store;

pub use atomic_file::{AtomicFile, AtomicFileError, FileFormat};
pub use json_file_store::JsonFileStore;
pub use memory_store::InMemoryStore;
