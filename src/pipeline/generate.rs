// Generation pipeline: scraped content -> raw answer + images -> post.
//
// 1. Convert scraped articles into documents and describe the index
// 2. Ask the retrieval engine for a raw answer about the topic
// 3. Ask the image provider for the featured and content photos
// 4. Normalize the answer into a render-ready post

use anyhow::{Context, Result};
use tracing::info;

use crate::blog::blocks::BlogPost;
use crate::config::{self, Config};
use crate::sources::documents::{self, GenerateRequest};
use crate::sources::images::ImageProvider;
use crate::sources::retrieval::RetrievalEngine;

use super::normalize;

/// Run the full generation flow for one request.
pub fn run(
    request: &GenerateRequest,
    engine: &dyn RetrievalEngine,
    images: &dyn ImageProvider,
    config: &Config,
) -> Result<BlogPost> {
    config::require_topic(&request.topic)?;
    let topic = request.topic.trim();

    let docs = documents::to_documents(&request.contents);
    let index = documents::build_index(&docs, &config.index_dir);
    info!(
        topic,
        documents = index.num_documents,
        index_id = %index.index_id,
        "Documents indexed"
    );

    let raw = engine
        .answer(topic, &docs, &index)
        .with_context(|| format!("Retrieval engine failed for topic {topic:?}"))?;

    let pair = images.image_pair(topic);

    let post = normalize::normalize(topic, &raw, &pair)
        .with_context(|| format!("Failed to normalize answer for topic {topic:?}"))?;
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::images::PlaceholderImages;
    use crate::sources::retrieval::TemplateEngine;

    #[test]
    fn test_empty_topic_rejected() {
        let config = Config::default();
        let request = GenerateRequest {
            topic: " ".to_string(),
            contents: vec![],
        };
        let result = run(
            &request,
            &TemplateEngine,
            &PlaceholderImages::new(&config),
            &config,
        );
        assert!(result.is_err());
    }
}
