// Normalization pipeline: raw answer -> parsed blocks -> slotted -> post.
//
// Structured mode runs first. If the answer is not a JSON post it is read
// again line by line. Only that one failure is recovered from; any other
// error ends the invocation and no post is produced.

use tracing::{debug, info};

use crate::blog::assembler;
use crate::blog::blocks::{BlogPost, ImagePair, NormalizeRequest};
use crate::blog::error::{NormalizeError, Result};
use crate::blog::{fallback, structured, ParsedAnswer};

/// Which parser produced the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseMode {
    Structured,
    Fallback,
}

/// Parse `raw` in structured mode, falling back to the line parser.
pub fn parse_answer(
    raw: &str,
    topic: &str,
    images: &ImagePair,
) -> Result<(ParsedAnswer, ParseMode)> {
    match structured::parse(raw, topic, images) {
        Ok(parsed) => Ok((parsed, ParseMode::Structured)),
        Err(NormalizeError::MalformedStructure(reason)) => {
            debug!(%reason, "Structured parse failed, using line parser");
            let parsed = fallback::parse(raw, topic, images)?;
            Ok((parsed, ParseMode::Fallback))
        }
        Err(e) => Err(e),
    }
}

/// Turn one raw answer and its two image URLs into a finished post.
///
/// Surrounding whitespace in `topic` is ignored, so captions and default
/// tags never carry padding.
pub fn normalize(topic: &str, raw: &str, images: &ImagePair) -> Result<BlogPost> {
    let topic = topic.trim();
    let (parsed, mode) = parse_answer(raw, topic, images)?;
    let post = assembler::assemble(topic, parsed.fields, parsed.content)?;

    info!(
        topic,
        mode = ?mode,
        blocks = post.content.len(),
        images = post.image_count(),
        "Blog post normalized"
    );

    Ok(post)
}

/// `normalize` for a request read from the I/O layer.
pub fn normalize_request(request: &NormalizeRequest) -> Result<BlogPost> {
    normalize(&request.topic, &request.raw_answer, &request.images())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_json_takes_fallback() {
        let images = ImagePair::new("f", "c");
        let (parsed, mode) = parse_answer("{not valid json", "T", &images).unwrap();
        assert_eq!(mode, ParseMode::Fallback);
        // featured image + the unparsed line as a paragraph
        assert_eq!(parsed.content.len(), 2);
    }

    #[test]
    fn test_fatal_errors_are_not_swallowed() {
        let images = ImagePair::new("f", "c");
        let err = normalize("T", r#"{"content": [42]}"#, &images).unwrap_err();
        assert!(!err.is_recoverable());
    }
}
