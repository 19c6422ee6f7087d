// Image slotter — the single owner of image placement.
//
// Both parsers only propose image blocks. The slotter settles the layout:
//
//   [featured] intro blocks... [content] first section heading ...
//
// The intro boundary is the first heading after position 0 in the sequence
// as the parser produced it. Without one there is no content image at all.

use tracing::debug;

use super::blocks::{ContentBlock, ImagePair};
use super::error::{NormalizeError, Result};

/// Caption given to the featured image for a topic.
pub fn featured_caption(topic: &str) -> String {
    format!("{topic} Overview")
}

/// Caption given to the content image for a topic.
pub fn content_caption(topic: &str) -> String {
    format!("Exploring {topic}")
}

/// The fully labeled featured image block.
pub fn featured_image(topic: &str, url: &str) -> ContentBlock {
    ContentBlock::Image {
        url: url.to_string(),
        alt: format!("Featured image for {topic}"),
        caption: featured_caption(topic),
    }
}

/// The fully labeled content image block.
pub fn content_image(topic: &str, url: &str) -> ContentBlock {
    ContentBlock::Image {
        url: url.to_string(),
        alt: format!("Visual representation of {topic}"),
        caption: content_caption(topic),
    }
}

/// Is this block the featured image for `topic`?
pub fn is_featured(block: &ContentBlock, topic: &str) -> bool {
    match block {
        ContentBlock::Image { caption, .. } => caption.starts_with(&featured_caption(topic)),
        _ => false,
    }
}

/// Is this block the content image for `topic`?
pub fn is_content(block: &ContentBlock, topic: &str) -> bool {
    match block {
        ContentBlock::Image { caption, .. } => caption.starts_with(&content_caption(topic)),
        _ => false,
    }
}

/// Index of the first heading after position 0, if any.
pub fn intro_boundary(blocks: &[ContentBlock]) -> Option<usize> {
    blocks
        .iter()
        .enumerate()
        .skip(1)
        .find(|(_, b)| b.is_heading())
        .map(|(i, _)| i)
}

/// Place the featured and content images in `blocks`.
///
/// A proposed featured image keeps its url and alt text but always moves to
/// position 0. A proposed content image stays where the answer put it; a
/// missing one is inserted right before the intro-boundary heading. With no
/// intro boundary the post has no content image. Returns
/// `InvariantViolation` if a role is claimed twice or an image carries
/// neither caption.
pub fn slot_images(
    blocks: Vec<ContentBlock>,
    topic: &str,
    images: &ImagePair,
) -> Result<Vec<ContentBlock>> {
    let boundary = intro_boundary(&blocks);

    let mut featured = None;
    let mut content_seen = false;
    let mut slotted = Vec::with_capacity(blocks.len() + 2);
    // Where the boundary heading lands once the featured image is pulled out
    let mut insert_at = None;

    for (i, block) in blocks.into_iter().enumerate() {
        if Some(i) == boundary {
            insert_at = Some(slotted.len());
        }

        if is_featured(&block, topic) {
            if featured.replace(block).is_some() {
                return Err(NormalizeError::InvariantViolation(format!(
                    "more than one featured image at index {i}"
                )));
            }
        } else if is_content(&block, topic) {
            if content_seen {
                return Err(NormalizeError::InvariantViolation(format!(
                    "more than one content image at index {i}"
                )));
            }
            content_seen = true;
            if boundary.is_some() {
                slotted.push(block);
            } else {
                debug!(topic, "No section heading after the intro, dropping content image");
            }
        } else if block.is_image() {
            return Err(NormalizeError::InvariantViolation(format!(
                "image at index {i} has no featured or content caption"
            )));
        } else {
            slotted.push(block);
        }
    }

    if let (Some(at), false) = (insert_at, content_seen) {
        debug!(topic, at, "Inserting content image before first section");
        slotted.insert(at, content_image(topic, &images.content));
    }

    let featured = featured.unwrap_or_else(|| {
        debug!(topic, "Inserting featured image");
        featured_image(topic, &images.featured)
    });
    slotted.insert(0, featured);

    Ok(slotted)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading(level: u32, text: &str) -> ContentBlock {
        ContentBlock::Heading {
            level,
            text: text.to_string(),
        }
    }

    fn para(text: &str) -> ContentBlock {
        ContentBlock::Paragraph {
            text: text.to_string(),
        }
    }

    #[test]
    fn test_intro_boundary_ignores_leading_heading() {
        let blocks = vec![heading(1, "Title"), para("intro"), heading(2, "Section")];
        assert_eq!(intro_boundary(&blocks), Some(2));
        assert_eq!(intro_boundary(&blocks[..2]), None);
    }

    #[test]
    fn test_predicates_match_by_caption_prefix() {
        let topic = "Rust";
        assert!(is_featured(&featured_image(topic, "u"), topic));
        assert!(!is_content(&featured_image(topic, "u"), topic));
        assert!(is_content(&content_image(topic, "u"), topic));
        assert!(!is_featured(&para("Rust Overview"), topic));
    }

    #[test]
    fn test_featured_already_first_before_heading() {
        let images = ImagePair::new("f", "c");
        let blocks = vec![featured_image("T", "f"), heading(2, "Section"), para("body")];
        let slotted = slot_images(blocks, "T", &images).unwrap();
        assert_eq!(
            slotted,
            vec![
                featured_image("T", "f"),
                content_image("T", "c"),
                heading(2, "Section"),
                para("body"),
            ]
        );
    }
}
