//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod storage;

pub use storage::{KeyValueStore, StorageError};
