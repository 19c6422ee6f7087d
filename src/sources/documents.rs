// Scraped content -> retrieval documents.
//
// The scraper hands over articles as `{url, title, text, publishedAt?}`.
// Before they reach the retrieval engine each becomes a document with its
// provenance kept as metadata.

use chrono::Local;
use serde::{Deserialize, Serialize};

/// One scraped article.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrapedContent {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<String>,
}

/// Input for `blogsmith generate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub contents: Vec<ScrapedContent>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub source: String,
    pub title: String,
    /// Publication date, or the ingestion time when the scraper found none
    pub date: String,
}

/// A document ready for indexing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    pub metadata: DocumentMetadata,
}

/// Describes the index built over a batch of documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexInfo {
    pub num_documents: usize,
    pub index_id: String,
    pub persist_dir: String,
}

/// Convert scraped articles into documents, in order.
pub fn to_documents(contents: &[ScrapedContent]) -> Vec<Document> {
    let ingested_at = Local::now().format("%Y-%m-%dT%H:%M:%S").to_string();
    contents
        .iter()
        .map(|c| Document {
            text: c.text.clone(),
            metadata: DocumentMetadata {
                source: c.url.clone(),
                title: c.title.clone(),
                date: c
                    .published_at
                    .clone()
                    .unwrap_or_else(|| ingested_at.clone()),
            },
        })
        .collect()
}

/// Describe an index over `documents` persisted under `persist_dir`.
pub fn build_index(documents: &[Document], persist_dir: &str) -> IndexInfo {
    IndexInfo {
        num_documents: documents.len(),
        index_id: format!("idx_{}", Local::now().format("%Y%m%d%H%M%S")),
        persist_dir: persist_dir.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_published_date_kept_when_present() {
        let docs = to_documents(&[ScrapedContent {
            url: "https://example.com/a".to_string(),
            title: "A".to_string(),
            text: "body".to_string(),
            published_at: Some("2024-01-02".to_string()),
        }]);
        assert_eq!(docs[0].metadata.date, "2024-01-02");
        assert_eq!(docs[0].metadata.source, "https://example.com/a");
    }

    #[test]
    fn test_missing_date_defaults_to_now() {
        let docs = to_documents(&[ScrapedContent::default()]);
        // ISO 8601 local timestamp, e.g. 2024-01-02T03:04:05
        assert_eq!(docs[0].metadata.date.len(), 19);
        assert_eq!(&docs[0].metadata.date[10..11], "T");
    }

    #[test]
    fn test_index_id_format() {
        let info = build_index(&[], "./data/index");
        assert_eq!(info.num_documents, 0);
        assert!(info.index_id.starts_with("idx_"));
        assert_eq!(info.index_id.len(), "idx_".len() + 14);
    }
}
