//! Bundled seed posts used to populate an uninitialized store.

use crate::domain::Post;
use crate::error::StoreError;

const BUNDLED: &str = include_str!("../data/seed.json");

/// Parse the seed posts embedded in the crate.
pub fn bundled() -> Result<Vec<Post>, StoreError> {
    parse(BUNDLED)
}

/// Parse a seed file in the persisted post format.
pub fn parse(raw: &str) -> Result<Vec<Post>, StoreError> {
    serde_json::from_str(raw).map_err(StoreError::InvalidSeed)
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_bundled_seed_parses() {
        let posts = bundled().unwrap();
        assert!(posts.len() > crate::POSTS_PER_PAGE);
    }

    #[test]
    fn test_bundled_ids_are_unique() {
        let posts = bundled().unwrap();
        let ids: HashSet<u64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), posts.len());
        assert!(ids.iter().all(|id| *id > 0));
    }

    #[test]
    fn test_rejects_malformed_seed() {
        assert!(matches!(
            parse(r#"[{"id":"one"}]"#),
            Err(StoreError::InvalidSeed(_))
        ));
    }
}
