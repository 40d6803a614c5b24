//! Plain-text previews of post content.
//!
//! The tag stripping here is only good enough for previews. It does not
//! decode entities and must not be used to sanitize markup.

use std::sync::LazyLock;

use regex::Regex;

/// Default excerpt length, in characters.
pub const DEFAULT_EXCERPT_LENGTH: usize = 150;

const ELLIPSIS: &str = "...";

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("valid tag regex"));

/// Build a preview of `content` at most `max_length` characters long, plus an
/// ellipsis when the text had to be cut.
pub fn excerpt(content: &str, max_length: usize) -> String {
    let text = TAG.replace_all(content, "").replace("\n\n", " ");

    match text.char_indices().nth(max_length) {
        None => text,
        Some((cut, _)) => {
            let mut truncated = text[..cut].trim_end().to_string();
            truncated.push_str(ELLIPSIS);
            truncated
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags_without_truncating() {
        let content = "<p>This is <strong>bold</strong> text</p>";
        assert_eq!(excerpt(content, 100), "This is bold text");
    }

    #[test]
    fn test_short_content_is_unchanged() {
        assert_eq!(excerpt("Short content", 100), "Short content");
    }

    #[test]
    fn test_truncates_and_marks() {
        let content = "This is a long piece of content that should be truncated.";
        let result = excerpt(content, 20);
        assert_eq!(result, "This is a long piece...");
        assert!(result.chars().count() <= 23);
    }

    #[test]
    fn test_trims_trailing_whitespace_before_marker() {
        assert_eq!(excerpt("abcd efgh", 5), "abcd...");
    }

    #[test]
    fn test_exact_fit_has_no_marker() {
        assert_eq!(excerpt("12345", 5), "12345");
    }

    #[test]
    fn test_collapses_double_newlines() {
        assert_eq!(excerpt("<p>one</p>\n\n<p>two</p>", 50), "one two");
    }

    #[test]
    fn test_entities_are_left_alone() {
        assert_eq!(excerpt("<b>fish &amp; chips</b>", 50), "fish &amp; chips");
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(excerpt("héllo wörld", 5), "héllo...");
    }

    #[test]
    fn test_default_length() {
        let content = "x".repeat(200);
        let result = excerpt(&content, DEFAULT_EXCERPT_LENGTH);
        assert_eq!(result.len(), DEFAULT_EXCERPT_LENGTH + ELLIPSIS.len());
    }
}
