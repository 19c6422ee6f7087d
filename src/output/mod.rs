// Output formatting — JSON for the caller, colored preview for humans.

pub mod terminal;

use anyhow::{Context, Result};

use crate::blog::blocks::BlogPost;

/// Serialize a post the way the web frontend expects it.
pub fn to_json(post: &BlogPost, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(post)
    } else {
        serde_json::to_string(post)
    };
    json.context("Failed to serialize blog post")
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
