// Fallback line parser — rebuilds blocks from markdown-ish text.
//
// Used when the answer is not a structured post. Each trimmed, non-blank
// line maps to one block, except `- ` items which extend a list that is
// still open. The scan is a left fold over lines with `LineFold` as the
// accumulator.

use super::assembler::PostFields;
use super::blocks::{ContentBlock, ImagePair};
use super::error::Result;
use super::slotter::{content_image, featured_image, slot_images};
use super::ParsedAnswer;

/// Line marking where the featured image goes.
pub const FEATURED_PLACEHOLDER: &str = "[FEATURED_IMAGE]";
/// Line marking where the content image goes.
pub const CONTENT_PLACEHOLDER: &str = "[CONTENT_IMAGE]";

/// Quotes recovered from plain text have no attributable source.
pub const GENERATED_CITATION: &str = "Generated Insight";

/// Accumulator threaded through the line fold.
#[derive(Debug, Default)]
struct LineFold {
    blocks: Vec<ContentBlock>,
    /// Whether the last block is a list that `- ` lines may extend
    list_open: bool,
    featured_seen: bool,
    content_seen: bool,
}

impl LineFold {
    fn push(mut self, block: ContentBlock, opens_list: bool) -> Self {
        self.blocks.push(block);
        self.list_open = opens_list;
        self
    }

    fn step(mut self, line: &str, topic: &str, images: &ImagePair) -> Self {
        if let Some(text) = line.strip_prefix("# ") {
            return self.push(heading(1, text), false);
        }
        if let Some(text) = line.strip_prefix("## ") {
            return self.push(heading(2, text), false);
        }
        if let Some(item) = line.strip_prefix("- ") {
            let item = item.trim().to_string();
            if self.list_open {
                if let Some(ContentBlock::List { items, .. }) = self.blocks.last_mut() {
                    items.push(item);
                    return self;
                }
            }
            let list = ContentBlock::List {
                ordered: false,
                items: vec![item],
            };
            return self.push(list, true);
        }
        if let Some(text) = line.strip_prefix("> ") {
            let quote = ContentBlock::Quote {
                text: text.trim().to_string(),
                citation: GENERATED_CITATION.to_string(),
            };
            return self.push(quote, false);
        }
        if line.starts_with(FEATURED_PLACEHOLDER) && !self.featured_seen {
            self.featured_seen = true;
            return self.push(featured_image(topic, &images.featured), false);
        }
        if line.starts_with(CONTENT_PLACEHOLDER) && self.featured_seen && !self.content_seen {
            self.content_seen = true;
            return self.push(content_image(topic, &images.content), false);
        }
        self.push(
            ContentBlock::Paragraph {
                text: line.to_string(),
            },
            false,
        )
    }
}

fn heading(level: u32, text: &str) -> ContentBlock {
    ContentBlock::Heading {
        level,
        text: text.trim().to_string(),
    }
}

/// Rebuild the block sequence from `raw`, before image slotting.
pub fn parse_lines(raw: &str, topic: &str, images: &ImagePair) -> Vec<ContentBlock> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .fold(LineFold::default(), |fold, line| fold.step(line, topic, images))
        .blocks
}

/// Parse `raw` line by line and slot images. Title, tags and summary are
/// never inferred from text, so they always take the topic defaults.
pub fn parse(raw: &str, topic: &str, images: &ImagePair) -> Result<ParsedAnswer> {
    let blocks = parse_lines(raw, topic, images);
    let content = slot_images(blocks, topic, images)?;
    Ok(ParsedAnswer {
        content,
        fields: PostFields::default(),
    })
}
