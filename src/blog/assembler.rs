// Blog assembler — wraps slotted content into the final post record.

use super::blocks::{BlogPost, ContentBlock};
use super::error::{NormalizeError, Result};

/// Top-level fields recovered from a structured answer. `None` means the
/// answer did not declare the field and the topic default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFields {
    pub title: Option<String>,
    pub tags: Option<Vec<String>>,
    pub summary: Option<String>,
}

pub fn default_title(topic: &str) -> String {
    format!("Exploring {topic}: A Deep Dive")
}

pub fn default_tags(topic: &str) -> Vec<String> {
    vec![
        topic.to_string(),
        "Insights".to_string(),
        "Overview".to_string(),
    ]
}

pub fn default_summary(topic: &str) -> String {
    format!(
        "A comprehensive blog post exploring {topic}, its developments, impacts, and future possibilities."
    )
}

/// Build the final post from slotted content.
///
/// `content` must already have gone through the slotter, so `content[0]`
/// is the featured image.
pub fn assemble(topic: &str, fields: PostFields, content: Vec<ContentBlock>) -> Result<BlogPost> {
    let featured_image = match content.first() {
        Some(ContentBlock::Image { url, .. }) => url.clone(),
        _ => {
            return Err(NormalizeError::InvariantViolation(
                "content does not start with the featured image".to_string(),
            ))
        }
    };

    Ok(BlogPost {
        title: fields.title.unwrap_or_else(|| default_title(topic)),
        content,
        featured_image,
        tags: fields.tags.unwrap_or_else(|| default_tags(topic)),
        summary: fields.summary.unwrap_or_else(|| default_summary(topic)),
    })
}
