// Structured-mode parser — reads an answer that is a JSON post object.
//
// The generator is asked for `{"title", "content": [...], "tags", "summary"}`
// but fills blocks in loosely: headings without a level, the old
// `{"type": "text", "content": ...}` paragraph form, more images than the
// layout has room for. This module maps each declared block onto the
// canonical schema and hands the sequence to the slotter.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use super::assembler::PostFields;
use super::blocks::{ContentBlock, ImagePair};
use super::error::{NormalizeError, Result};
use super::slotter::{content_image, featured_image, slot_images};
use super::ParsedAnswer;

/// Parse `raw` as a structured post.
///
/// Returns `MalformedStructure` when `raw` is not a JSON object with a
/// `content` list; every other failure is fatal.
pub fn parse(raw: &str, topic: &str, images: &ImagePair) -> Result<ParsedAnswer> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| NormalizeError::MalformedStructure(e.to_string()))?;

    let Value::Object(mut root) = value else {
        return Err(NormalizeError::MalformedStructure(
            "answer is not a JSON object".to_string(),
        ));
    };

    let declared = match root.remove("content") {
        Some(Value::Array(blocks)) => blocks,
        Some(_) => {
            return Err(NormalizeError::MalformedStructure(
                "`content` is not a list".to_string(),
            ))
        }
        None => {
            return Err(NormalizeError::MalformedStructure(
                "missing `content` field".to_string(),
            ))
        }
    };

    let fields = PostFields {
        title: top_level_field(&root, "title")?,
        tags: top_level_field(&root, "tags")?,
        summary: top_level_field(&root, "summary")?,
    };

    let blocks = normalize_blocks(declared, topic, images)?;
    let content = slot_images(blocks, topic, images)?;

    Ok(ParsedAnswer { content, fields })
}

/// Map declared blocks onto `ContentBlock`s, in order.
///
/// Image blocks are relabeled by order of appearance: the first becomes the
/// featured image, the second the content image, any later one is dropped.
/// Blocks without a `type` are dropped.
pub fn normalize_blocks(
    declared: Vec<Value>,
    topic: &str,
    images: &ImagePair,
) -> Result<Vec<ContentBlock>> {
    let mut blocks = Vec::with_capacity(declared.len());
    let mut image_count = 0usize;

    for (index, value) in declared.into_iter().enumerate() {
        let Value::Object(block) = value else {
            return Err(NormalizeError::InvalidBlock {
                index,
                reason: "expected an object".to_string(),
            });
        };

        let kind = match block.get("type") {
            None => {
                debug!(index, "Dropping block without a type");
                continue;
            }
            Some(Value::String(kind)) => kind.clone(),
            Some(other) => {
                return Err(NormalizeError::InvalidBlock {
                    index,
                    reason: format!("`type` must be a string, got {other}"),
                })
            }
        };

        let normalized = match kind.as_str() {
            "image" => {
                image_count += 1;
                match image_count {
                    1 => featured_image(topic, &images.featured),
                    2 => content_image(topic, &images.content),
                    n => {
                        debug!(index, n, "Dropping image beyond the two layout slots");
                        continue;
                    }
                }
            }
            "heading" => heading_block(index, &block)?,
            "text" => ContentBlock::Paragraph {
                text: string_field(index, &block, "content")?.ok_or_else(|| {
                    NormalizeError::InvalidBlock {
                        index,
                        reason: "text block has no `content`".to_string(),
                    }
                })?,
            },
            "paragraph" | "list" | "quote" => serde_json::from_value(Value::Object(block))
                .map_err(|e| NormalizeError::InvalidBlock {
                    index,
                    reason: e.to_string(),
                })?,
            _ => return Err(NormalizeError::UnsupportedBlock { index, kind }),
        };

        blocks.push(normalized);
    }

    Ok(blocks)
}

fn heading_block(index: usize, block: &Map<String, Value>) -> Result<ContentBlock> {
    let level = match block.get("level") {
        None | Some(Value::Null) => 1,
        Some(value) => match value.as_u64() {
            Some(level) if level >= 1 && level <= u32::MAX as u64 => level as u32,
            _ => {
                return Err(NormalizeError::InvalidBlock {
                    index,
                    reason: format!("heading level must be a positive integer, got {value}"),
                })
            }
        },
    };

    // `content` is the deprecated spelling of `text`
    let text = match string_field(index, block, "text")? {
        Some(text) => text,
        None => string_field(index, block, "content")?.ok_or_else(|| {
            NormalizeError::InvalidBlock {
                index,
                reason: "heading has neither `text` nor `content`".to_string(),
            }
        })?,
    };

    Ok(ContentBlock::Heading { level, text })
}

fn string_field(index: usize, block: &Map<String, Value>, key: &str) -> Result<Option<String>> {
    match block.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(NormalizeError::InvalidBlock {
            index,
            reason: format!("`{key}` must be a string, got {other}"),
        }),
    }
}

fn top_level_field<T: DeserializeOwned>(
    root: &Map<String, Value>,
    field: &'static str,
) -> Result<Option<T>> {
    match root.get(field) {
        None => Ok(None),
        Some(value) => serde_json::from_value(value.clone()).map_err(|e| {
            NormalizeError::InvalidField {
                field,
                reason: e.to_string(),
            }
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn images() -> ImagePair {
        ImagePair::new("https://img/featured", "https://img/content")
    }

    #[test]
    fn test_heading_defaults_level_and_reads_content() {
        let blocks =
            normalize_blocks(vec![json!({"type": "heading", "content": "Old"})], "T", &images())
                .unwrap();
        assert_eq!(
            blocks,
            vec![ContentBlock::Heading {
                level: 1,
                text: "Old".to_string()
            }]
        );
    }

    #[test]
    fn test_text_block_becomes_paragraph() {
        let blocks =
            normalize_blocks(vec![json!({"type": "text", "content": "Hi"})], "T", &images())
                .unwrap();
        assert_eq!(
            blocks,
            vec![ContentBlock::Paragraph {
                text: "Hi".to_string()
            }]
        );
    }

    #[test]
    fn test_untyped_block_is_dropped() {
        let blocks = normalize_blocks(
            vec![json!({"text": "orphan"}), json!({"type": "paragraph", "text": "kept"})],
            "T",
            &images(),
        )
        .unwrap();
        assert_eq!(blocks.len(), 1);
    }

    #[test]
    fn test_non_object_block_is_fatal() {
        let err = normalize_blocks(vec![json!("just a string")], "T", &images()).unwrap_err();
        assert!(matches!(err, NormalizeError::InvalidBlock { index: 0, .. }));
    }

    #[test]
    fn test_missing_content_is_malformed() {
        let err = parse(r#"{"title": "x"}"#, "T", &images()).unwrap_err();
        assert!(err.is_recoverable());
    }
}
