//! # Folio Infrastructure
//!
//! Concrete implementations of the ports defined in `folio-core`.
//!
//! - [`InMemoryStore`] - process-local map, lost on restart
//! - [`FileStore`] - one file per key in a data directory

pub mod storage;

pub use storage::{FileStore, InMemoryStore};
