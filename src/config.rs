use std::env;

use anyhow::Result;

/// Default base for placeholder photo URLs.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://source.unsplash.com/random";

/// Image used when a topic yields no usable search slug.
pub const DEFAULT_FALLBACK_IMAGE: &str =
    "https://cdn.pixabay.com/photo/2018/01/12/10/19/fantasy-3077928_1280.jpg";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy; every setting has a
/// default so a bare `blogsmith normalize` works without any setup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for placeholder photos (BLOGSMITH_IMAGE_BASE_URL)
    pub image_base_url: String,
    /// `WIDTHxHEIGHT` for the featured image (BLOGSMITH_FEATURED_SIZE)
    pub featured_size: String,
    /// `WIDTHxHEIGHT` for the in-article image (BLOGSMITH_CONTENT_SIZE)
    pub content_size: String,
    /// Used for every image slot when the topic slug is empty
    pub fallback_image: String,
    /// Where the retrieval index is recorded as living (BLOGSMITH_INDEX_DIR)
    pub index_dir: String,
    /// Directory of saved posts (BLOGSMITH_BLOG_DIR)
    pub blog_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            featured_size: "1200x600".to_string(),
            content_size: "900x500".to_string(),
            fallback_image: DEFAULT_FALLBACK_IMAGE.to_string(),
            index_dir: "./data/index".to_string(),
            blog_dir: "./data/blogs".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// `Config::default()` for anything unset.
    pub fn load() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            image_base_url: env::var("BLOGSMITH_IMAGE_BASE_URL")
                .unwrap_or(defaults.image_base_url),
            featured_size: env::var("BLOGSMITH_FEATURED_SIZE").unwrap_or(defaults.featured_size),
            content_size: env::var("BLOGSMITH_CONTENT_SIZE").unwrap_or(defaults.content_size),
            fallback_image: env::var("BLOGSMITH_FALLBACK_IMAGE")
                .unwrap_or(defaults.fallback_image),
            index_dir: env::var("BLOGSMITH_INDEX_DIR").unwrap_or(defaults.index_dir),
            blog_dir: env::var("BLOGSMITH_BLOG_DIR").unwrap_or(defaults.blog_dir),
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that image sizes look like `WIDTHxHEIGHT`.
    pub fn validate(&self) -> Result<()> {
        for (var, size) in [
            ("BLOGSMITH_FEATURED_SIZE", &self.featured_size),
            ("BLOGSMITH_CONTENT_SIZE", &self.content_size),
        ] {
            if !is_dimension(size) {
                anyhow::bail!(
                    "{var} must look like 1200x600, got {size:?}.\n\
                     Fix it in your .env file or unset it to use the default."
                );
            }
        }
        Ok(())
    }
}

/// Check that a topic is usable before running any pipeline.
pub fn require_topic(topic: &str) -> Result<()> {
    if topic.trim().is_empty() {
        anyhow::bail!("Topic is required. Provide a non-empty \"topic\" in the input JSON.");
    }
    Ok(())
}

fn is_dimension(size: &str) -> bool {
    match size.split_once('x') {
        Some((w, h)) => {
            !w.is_empty()
                && !h.is_empty()
                && w.chars().all(|c| c.is_ascii_digit())
                && h.chars().all(|c| c.is_ascii_digit())
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_bad_dimension_rejected() {
        let config = Config {
            featured_size: "wide".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_blank_topic_rejected() {
        assert!(require_topic("   ").is_err());
        assert!(require_topic("Rust").is_ok());
    }
}
