//! The post store - canonical post list, search, pagination and CRUD.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::{BlogPostFormData, BlogPostsResponse, PaginationInfo, Post};
use crate::error::StoreError;
use crate::ports::KeyValueStore;

/// Key under which the whole post sequence is persisted.
pub const STORAGE_KEY: &str = "blog_posts";

/// Fixed page size for [`PostStore::query`].
pub const POSTS_PER_PAGE: usize = 9;

/// Post store backed by a single serialized blob in a key-value store.
///
/// Every operation loads the full sequence, works on it in memory and, for
/// mutations, writes the whole sequence back. Mutations from one process are
/// serialized; writers in other processes are last-writer-wins.
pub struct PostStore {
    storage: Arc<dyn KeyValueStore>,
    seed: Vec<Post>,
    write_lock: Mutex<()>,
}

impl PostStore {
    /// Create a store over `storage`. `seed` is written by
    /// [`initialize`](Self::initialize) when the storage key is absent.
    pub fn new(storage: Arc<dyn KeyValueStore>, seed: Vec<Post>) -> Self {
        Self {
            storage,
            seed,
            write_lock: Mutex::new(()),
        }
    }

    /// Seed the storage if it has never been written. Existing data, including
    /// an empty list, is never overwritten.
    ///
    /// Returns `true` when the seed was written.
    pub fn initialize(&self) -> Result<bool, StoreError> {
        let _guard = self.lock();

        if self.storage.get(STORAGE_KEY)?.is_some() {
            tracing::debug!("Post storage already initialized");
            return Ok(false);
        }

        self.save(&self.seed)?;
        tracing::info!(posts = self.seed.len(), "Seeded post storage");
        Ok(true)
    }

    /// All posts in stored (insertion) order.
    pub fn list_all(&self) -> Result<Vec<Post>, StoreError> {
        self.load()
    }

    /// Search by title and return one page, newest first.
    ///
    /// An empty (or all-whitespace) `search` matches every post. Pages are
    /// 1-based; a page outside the result yields no posts rather than an error.
    pub fn query(&self, page: usize, search: &str) -> Result<BlogPostsResponse, StoreError> {
        let mut posts = self.load()?;

        if !search.trim().is_empty() {
            let needle = search.to_lowercase();
            posts.retain(|post| post.title.to_lowercase().contains(&needle));
        }

        // Stable: posts with equal timestamps keep stored order.
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        let pagination = PaginationInfo::new(page, posts.len(), POSTS_PER_PAGE);
        let range = pagination.range();
        posts.truncate(range.end);
        posts.drain(..range.start);

        tracing::debug!(
            page,
            search = %search,
            total_posts = pagination.total_posts,
            "Queried posts"
        );

        Ok(BlogPostsResponse { posts, pagination })
    }

    /// Find a post by id.
    pub fn get_by_id(&self, id: u64) -> Result<Option<Post>, StoreError> {
        Ok(self.load()?.into_iter().find(|post| post.id == id))
    }

    /// Append a new post with the next free id.
    pub fn create(&self, form: BlogPostFormData) -> Result<Post, StoreError> {
        let _guard = self.lock();
        let mut posts = self.load()?;

        let next_id = posts.iter().map(|post| post.id).max().unwrap_or(0) + 1;
        let post = Post::new(next_id, form);
        posts.push(post.clone());
        self.save(&posts)?;

        tracing::info!(post_id = post.id, "Post created");
        Ok(post)
    }

    /// Replace a post's title, content and image. Returns `None` if no post
    /// has this id.
    pub fn update(&self, id: u64, form: BlogPostFormData) -> Result<Option<Post>, StoreError> {
        let _guard = self.lock();
        let mut posts = self.load()?;

        let Some(post) = posts.iter_mut().find(|post| post.id == id) else {
            tracing::warn!(post_id = id, "Update skipped, post not found");
            return Ok(None);
        };
        post.apply(form);
        let updated = post.clone();
        self.save(&posts)?;

        tracing::info!(post_id = id, "Post updated");
        Ok(Some(updated))
    }

    /// Remove a post. Returns `false` (and writes nothing) if no post has this id.
    pub fn delete(&self, id: u64) -> Result<bool, StoreError> {
        let _guard = self.lock();
        let mut posts = self.load()?;

        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            tracing::warn!(post_id = id, "Delete skipped, post not found");
            return Ok(false);
        }
        self.save(&posts)?;

        tracing::info!(post_id = id, "Post deleted");
        Ok(true)
    }

    fn load(&self) -> Result<Vec<Post>, StoreError> {
        let Some(raw) = self.storage.get(STORAGE_KEY)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|source| {
            tracing::error!(key = STORAGE_KEY, error = %source, "Stored posts are corrupt");
            StoreError::Corrupt {
                key: STORAGE_KEY,
                source,
            }
        })
    }

    fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(posts).map_err(StoreError::Encode)?;
        self.storage.set(STORAGE_KEY, &raw)?;
        Ok(())
    }

    // The guarded value is `()`, so a poisoned lock carries no broken state.
    fn lock(&self) -> MutexGuard<'_, ()> {
        self.write_lock
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
