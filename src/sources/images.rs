// Image provider trait and the placeholder implementation.
//
// Providers never fail: when they cannot find a photo they hand back a
// placeholder URL, so the pipeline always gets as many URLs as it asked for.

use crate::blog::blocks::ImagePair;
use crate::config::Config;

/// Trait for finding photos for a topic.
pub trait ImageProvider {
    /// Return exactly `count` image URLs for `topic`, best match first.
    fn images(&self, topic: &str, count: usize) -> Vec<String>;

    /// The featured and content URLs for a post.
    fn image_pair(&self, topic: &str) -> ImagePair {
        let mut urls = self.images(topic, 2).into_iter();
        let featured = urls.next().unwrap_or_default();
        let content = urls.next().unwrap_or_else(|| featured.clone());
        ImagePair::new(featured, content)
    }
}

/// Builds random-photo URLs keyed by a slug of the topic.
///
/// The first URL uses the featured size, the rest the content size.
pub struct PlaceholderImages {
    base_url: String,
    featured_size: String,
    content_size: String,
    fallback: String,
}

impl PlaceholderImages {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.image_base_url.trim_end_matches('/').to_string(),
            featured_size: config.featured_size.clone(),
            content_size: config.content_size.clone(),
            fallback: config.fallback_image.clone(),
        }
    }
}

impl ImageProvider for PlaceholderImages {
    fn images(&self, topic: &str, count: usize) -> Vec<String> {
        let slug = topic_slug(topic);
        if slug.is_empty() {
            tracing::warn!(topic, "Topic has no usable slug, using fallback image");
            return vec![self.fallback.clone(); count];
        }

        (0..count)
            .map(|i| {
                let size = if i == 0 {
                    &self.featured_size
                } else {
                    &self.content_size
                };
                format!("{}/{}/?{}", self.base_url, size, slug)
            })
            .collect()
    }
}

/// Collapse whitespace runs in a topic into single dashes.
pub fn topic_slug(topic: &str) -> String {
    topic.split_whitespace().collect::<Vec<_>>().join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_slug() {
        assert_eq!(topic_slug("Quantum  Computing\tnow"), "Quantum-Computing-now");
        assert_eq!(topic_slug("   "), "");
    }

    #[test]
    fn test_pair_uses_role_sizes() {
        let provider = PlaceholderImages::new(&Config::default());
        let pair = provider.image_pair("Deep Sea");
        assert_eq!(pair.featured, "https://source.unsplash.com/random/1200x600/?Deep-Sea");
        assert_eq!(pair.content, "https://source.unsplash.com/random/900x500/?Deep-Sea");
    }

    #[test]
    fn test_blank_topic_falls_back() {
        let provider = PlaceholderImages::new(&Config::default());
        let urls = provider.images(" ", 2);
        assert_eq!(urls, vec![crate::config::DEFAULT_FALLBACK_IMAGE.to_string(); 2]);
    }
}
