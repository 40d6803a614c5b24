//! # Folio Core
//!
//! The domain layer of Folio: posts, the storage port and the post store.
//! This crate holds the search, pagination and persistence rules and has no
//! knowledge of where the serialized posts actually live.

pub mod domain;
pub mod error;
pub mod excerpt;
pub mod ports;
pub mod seed;
pub mod service;

pub use error::StoreError;
pub use excerpt::{DEFAULT_EXCERPT_LENGTH, excerpt};
pub use service::{POSTS_PER_PAGE, PostStore, STORAGE_KEY};
