use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a single blog entry.
///
/// Serialized with camelCase field names; this is also the persisted shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub img_url: Option<String>,
    #[serde(with = "crate::domain::timestamp")]
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post stamped with the current instant, at the
    /// millisecond precision it is persisted with.
    pub fn new(id: u64, form: BlogPostFormData) -> Self {
        let (title, content, img_url) = form.into_parts();
        Self {
            id,
            title,
            content,
            img_url,
            created_at: Utc::now().trunc_subsecs(3),
        }
    }

    /// Replace the editable fields. `id` and `created_at` are left untouched.
    pub fn apply(&mut self, form: BlogPostFormData) {
        let (title, content, img_url) = form.into_parts();
        self.title = title;
        self.content = content;
        self.img_url = img_url;
    }
}

/// Fields supplied by the post form when creating or editing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPostFormData {
    pub title: String,
    pub content: String,
    /// Empty string means "no image".
    #[serde(default)]
    pub img_url: String,
}

impl BlogPostFormData {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        img_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            img_url: img_url.into(),
        }
    }

    fn into_parts(self) -> (String, String, Option<String>) {
        let img_url = if self.img_url.is_empty() {
            None
        } else {
            Some(self.img_url)
        };
        (self.title, self.content, img_url)
    }
}
