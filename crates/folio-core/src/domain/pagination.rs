use serde::{Deserialize, Serialize};

use super::Post;

/// Page metadata returned alongside each page of posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub current_page: usize,
    /// Zero when nothing matched, distinct from "page 1 of 1".
    pub total_pages: usize,
    pub posts_per_page: usize,
    pub total_posts: usize,
}

impl PaginationInfo {
    pub fn new(current_page: usize, total_posts: usize, posts_per_page: usize) -> Self {
        Self {
            current_page,
            total_pages: total_posts.div_ceil(posts_per_page),
            posts_per_page,
            total_posts,
        }
    }

    /// Half-open index range of the current page, clamped to `total_posts`.
    pub fn range(&self) -> std::ops::Range<usize> {
        let Some(page_index) = self.current_page.checked_sub(1) else {
            return 0..0;
        };
        let start = page_index
            .saturating_mul(self.posts_per_page)
            .min(self.total_posts);
        let end = start.saturating_add(self.posts_per_page).min(self.total_posts);
        start..end
    }
}

/// One page of posts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostsResponse {
    pub posts: Vec<Post>,
    pub pagination: PaginationInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_posts_means_zero_pages() {
        let info = PaginationInfo::new(1, 0, 9);
        assert_eq!(info.total_pages, 0);
        assert_eq!(info.range(), 0..0);
    }

    #[test]
    fn test_partial_last_page() {
        let info = PaginationInfo::new(2, 12, 9);
        assert_eq!(info.total_pages, 2);
        assert_eq!(info.range(), 9..12);
    }

    #[test]
    fn test_out_of_range_pages_are_empty() {
        assert!(PaginationInfo::new(5, 12, 9).range().is_empty());
        assert!(PaginationInfo::new(0, 12, 9).range().is_empty());
        assert!(PaginationInfo::new(usize::MAX, 12, 9).range().is_empty());
    }
}
