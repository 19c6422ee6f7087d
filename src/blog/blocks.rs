// Block schema — the canonical shape of a rendered blog post.
//
// Every parser in this crate produces `ContentBlock`s; nothing downstream
// ever sees the loosely-typed maps the generator emits.

use serde::{Deserialize, Serialize};

/// One structurally typed unit of a post.
///
/// Serialized with a lowercase `type` tag, e.g.
/// `{"type": "heading", "level": 2, "text": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    Heading {
        level: u32,
        text: String,
    },
    Paragraph {
        text: String,
    },
    Image {
        url: String,
        alt: String,
        caption: String,
    },
    List {
        #[serde(default)]
        ordered: bool,
        #[serde(default)]
        items: Vec<String>,
    },
    Quote {
        text: String,
        #[serde(default)]
        citation: String,
    },
}

impl ContentBlock {
    /// The block's `type` tag as it appears in JSON.
    pub fn kind(&self) -> &'static str {
        match self {
            ContentBlock::Heading { .. } => "heading",
            ContentBlock::Paragraph { .. } => "paragraph",
            ContentBlock::Image { .. } => "image",
            ContentBlock::List { .. } => "list",
            ContentBlock::Quote { .. } => "quote",
        }
    }

    pub fn is_heading(&self) -> bool {
        matches!(self, ContentBlock::Heading { .. })
    }

    pub fn is_image(&self) -> bool {
        matches!(self, ContentBlock::Image { .. })
    }
}

/// A finished, render-ready blog post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    pub title: String,
    pub content: Vec<ContentBlock>,
    /// Always the url of the featured image block at `content[0]`
    pub featured_image: String,
    pub tags: Vec<String>,
    pub summary: String,
}

impl BlogPost {
    /// Number of image blocks in the content (never more than 2).
    pub fn image_count(&self) -> usize {
        self.content.iter().filter(|b| b.is_image()).count()
    }
}

/// The two image URLs handed to the pipeline, in role order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePair {
    pub featured: String,
    pub content: String,
}

impl ImagePair {
    pub fn new(featured: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            featured: featured.into(),
            content: content.into(),
        }
    }
}

/// Pipeline input as produced by the process I/O layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizeRequest {
    pub topic: String,
    pub raw_answer: String,
    pub featured_image_url: String,
    pub content_image_url: String,
}

impl NormalizeRequest {
    pub fn images(&self) -> ImagePair {
        ImagePair::new(&self.featured_image_url, &self.content_image_url)
    }
}
