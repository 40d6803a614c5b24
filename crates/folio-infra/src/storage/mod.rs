//! Key-value storage backends - a directory of files and an in-memory map.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::InMemoryStore;
