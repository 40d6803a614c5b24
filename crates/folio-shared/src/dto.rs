//! Data Transfer Objects - request/response types for the API.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use folio_core::domain::{BlogPostsResponse, PaginationInfo, Post};
use folio_core::{DEFAULT_EXCERPT_LENGTH, excerpt};

use crate::format::format_date;

pub use folio_core::domain::BlogPostFormData;

/// Query string of the post list: `?page=2&search=hospital`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListPostsQuery {
    #[serde(default = "first_page")]
    pub page: usize,
    #[serde(default)]
    pub search: String,
}

fn first_page() -> usize {
    1
}

impl Default for ListPostsQuery {
    fn default() -> Self {
        Self {
            page: first_page(),
            search: String::new(),
        }
    }
}

/// A post as shown in the list: a plain-text excerpt instead of the full body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCard {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    pub img_url: Option<String>,
    #[serde(with = "folio_core::domain::timestamp")]
    pub created_at: DateTime<Utc>,
    pub display_date: String,
}

impl From<Post> for PostCard {
    fn from(post: Post) -> Self {
        Self {
            excerpt: excerpt(&post.content, DEFAULT_EXCERPT_LENGTH),
            display_date: format_date(&post.created_at),
            id: post.id,
            title: post.title,
            img_url: post.img_url,
            created_at: post.created_at,
        }
    }
}

/// One page of post cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostCard>,
    pub pagination: PaginationInfo,
}

impl From<BlogPostsResponse> for PostListResponse {
    fn from(page: BlogPostsResponse) -> Self {
        Self {
            posts: page.posts.into_iter().map(PostCard::from).collect(),
            pagination: page.pagination,
        }
    }
}
