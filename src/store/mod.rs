// Post store — generated posts saved as one JSON file per post.
//
// Layout: `<dir>/<uuid>.json`, each holding a `StoredPost`. The record
// metadata sits beside the post fields, so a stored file is a plain
// BlogPost plus `id`, `author`, `date`, `readingTime` and `topic`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::blog::blocks::{BlogPost, ContentBlock};

/// Byline attached to every generated post.
pub const DEFAULT_AUTHOR: &str = "AI Content Generator";

/// Average reading speed used for `readingTime`.
const WORDS_PER_MINUTE: usize = 200;

/// A saved post with its record metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPost {
    pub id: String,
    pub author: String,
    /// Creation date, `YYYY-MM-DD`
    pub date: String,
    /// Estimated minutes to read, at least 1
    pub reading_time: u32,
    pub topic: String,
    #[serde(flatten)]
    pub post: BlogPost,
}

impl StoredPost {
    /// Wrap a freshly normalized post in a new record.
    pub fn new(topic: &str, post: BlogPost) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            author: DEFAULT_AUTHOR.to_string(),
            date: Local::now().format("%Y-%m-%d").to_string(),
            reading_time: reading_time(&post),
            topic: topic.trim().to_string(),
            post,
        }
    }
}

/// Minutes needed to read every text-bearing block of `post`, rounded up.
pub fn reading_time(post: &BlogPost) -> u32 {
    let words: usize = post
        .content
        .iter()
        .map(|block| match block {
            ContentBlock::Heading { text, .. }
            | ContentBlock::Paragraph { text }
            | ContentBlock::Quote { text, .. } => text.split_whitespace().count(),
            ContentBlock::List { items, .. } => {
                items.iter().map(|i| i.split_whitespace().count()).sum()
            }
            ContentBlock::Image { .. } => 0,
        })
        .sum();
    words.div_ceil(WORDS_PER_MINUTE).max(1) as u32
}

/// Directory-backed store of `StoredPost` records.
pub struct BlogStore {
    dir: PathBuf,
}

impl BlogStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write `record` to `<dir>/<id>.json`, creating the directory if needed.
    pub fn save(&self, record: &StoredPost) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;

        let path = self.dir.join(format!("{}.json", record.id));
        let json = serde_json::to_string_pretty(record).context("Failed to serialize post")?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;

        debug!(id = %record.id, path = %path.display(), "Post saved");
        Ok(path)
    }

    /// Every readable post, ordered by file name.
    ///
    /// Files that are not valid records are skipped with a warning. A store
    /// directory that does not exist yet holds no posts.
    pub fn list(&self) -> Result<Vec<StoredPost>> {
        if !self.dir.exists() {
            return Ok(Vec::new());
        }

        let mut paths: Vec<PathBuf> = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read {}", self.dir.display()))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut posts = Vec::with_capacity(paths.len());
        for path in paths {
            match read_record(&path) {
                Ok(record) => posts.push(record),
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable post"),
            }
        }
        Ok(posts)
    }

    /// Look up one post. `None` if no record has that id; ids that are not
    /// UUIDs never match, so they cannot name files outside the store.
    pub fn get(&self, id: &str) -> Result<Option<StoredPost>> {
        let Ok(uuid) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let path = self.dir.join(format!("{uuid}.json"));
        if !path.is_file() {
            return Ok(None);
        }
        read_record(&path).map(Some)
    }
}

fn read_record(path: &Path) -> Result<StoredPost> {
    let json =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&json).with_context(|| format!("Invalid post record {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post_with(content: Vec<ContentBlock>) -> BlogPost {
        BlogPost {
            title: "t".to_string(),
            content,
            featured_image: "f".to_string(),
            tags: vec![],
            summary: "s".to_string(),
        }
    }

    #[test]
    fn test_reading_time_minimum_one_minute() {
        assert_eq!(reading_time(&post_with(vec![])), 1);
    }

    #[test]
    fn test_reading_time_rounds_up() {
        let text = vec!["word"; 201].join(" ");
        let post = post_with(vec![ContentBlock::Paragraph { text }]);
        assert_eq!(reading_time(&post), 2);
    }

    #[test]
    fn test_record_flattens_post_fields() {
        let record = StoredPost::new(" Bees ", post_with(vec![]));
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["featuredImage"], "f");
        assert_eq!(value["readingTime"], 1);
        assert_eq!(value["topic"], "Bees");
        assert_eq!(value["author"], DEFAULT_AUTHOR);
        assert!(value.get("post").is_none());
    }
}
