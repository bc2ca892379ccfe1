//! Persistent storage of named timers
//!
//! Saved timers and the global defaults live together in a single JSON file.

pub mod error;
pub mod repository;

// Re-export main types
pub use error::StorageError;
pub use repository::{next_name, Repository, Store};
