// Retrieval engine trait — the swap-ready answer source.
//
// Whatever sits behind this trait (a vector index plus an LLM, a canned
// template) only has to return one free-form answer string. The normalizer
// never assumes the answer is well formed.

use anyhow::{Context, Result};
use serde_json::json;

use super::documents::{Document, IndexInfo};

/// Maximum number of scraped paragraphs folded into a templated answer.
const MAX_SOURCE_PARAGRAPHS: usize = 3;

/// Trait for producing a raw answer about a topic from indexed documents.
pub trait RetrievalEngine {
    /// Answer a blog-post query for `topic` over `documents`.
    fn answer(&self, topic: &str, documents: &[Document], index: &IndexInfo) -> Result<String>;
}

/// Offline engine that renders a structured answer from a fixed outline.
///
/// Output is deterministic for a given topic and document set, which makes
/// it the engine of choice for local runs and tests.
#[derive(Debug, Clone, Default)]
pub struct TemplateEngine;

impl RetrievalEngine for TemplateEngine {
    fn answer(&self, topic: &str, documents: &[Document], index: &IndexInfo) -> Result<String> {
        tracing::debug!(
            topic,
            index_id = %index.index_id,
            documents = index.num_documents,
            "Rendering templated answer"
        );

        let mut content = vec![
            json!({"type": "heading", "level": 1, "text": format!("Understanding {topic}: A Comprehensive Overview")}),
            json!({"type": "paragraph", "text": format!("This article explores the latest developments and key insights related to {topic}, based on current information from reliable sources.")}),
            json!({"type": "heading", "level": 2, "text": "Current State and Recent Developments"}),
            json!({"type": "paragraph", "text": format!("In recent months, {topic} has seen significant changes and developments that have reshaped our understanding of this important area.")}),
        ];

        for paragraph in source_paragraphs(documents) {
            content.push(json!({"type": "paragraph", "text": paragraph}));
        }

        content.extend([
            json!({"type": "image", "alt": format!("Visual representation of {topic}")}),
            json!({"type": "heading", "level": 2, "text": "Key Factors and Analysis"}),
            json!({"type": "list", "ordered": false, "items": [
                format!("Economic implications of {topic}"),
                "Social and cultural impact",
                "Technological advancements",
                "Future outlook",
            ]}),
            json!({"type": "quote", "text": format!("The evolution of {topic} represents one of the most significant developments in this field in recent years."), "citation": "Industry Expert"}),
            json!({"type": "heading", "level": 2, "text": "Conclusion"}),
            json!({"type": "paragraph", "text": format!("As we continue to monitor developments related to {topic}, it's clear that this area will remain important in the coming years.")}),
        ]);

        let answer = json!({
            "title": format!("Comprehensive Guide to {topic}: Latest Insights and Developments"),
            "content": content,
            "tags": [topic, "Analysis", "Overview"],
            "summary": format!("An in-depth look at {topic}, examining the latest developments, key insights, and future implications based on current information."),
        });

        serde_json::to_string(&answer).context("Failed to render templated answer")
    }
}

/// The first few non-empty paragraphs of the first document.
fn source_paragraphs(documents: &[Document]) -> Vec<String> {
    documents
        .first()
        .map(|doc| {
            doc.text
                .split("\n\n")
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .take(MAX_SOURCE_PARAGRAPHS)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::documents::{build_index, DocumentMetadata};

    fn doc(text: &str) -> Document {
        Document {
            text: text.to_string(),
            metadata: DocumentMetadata {
                source: String::new(),
                title: String::new(),
                date: String::new(),
            },
        }
    }

    #[test]
    fn test_source_paragraphs_capped() {
        let docs = vec![doc("one\n\ntwo\n\n\n\nthree\n\nfour")];
        assert_eq!(source_paragraphs(&docs), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_answer_is_structured_json() {
        let index = build_index(&[], "./data/index");
        let answer = TemplateEngine.answer("Tides", &[], &index).unwrap();
        let value: serde_json::Value = serde_json::from_str(&answer).unwrap();
        assert!(value["content"].is_array());
        assert_eq!(value["tags"][0], "Tides");
    }
}
