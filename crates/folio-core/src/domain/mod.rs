//! Domain entities - the core business objects.

mod pagination;
mod post;
pub mod timestamp;

pub use pagination::{BlogPostsResponse, PaginationInfo};
pub use post::{BlogPostFormData, Post};
