//! Fixture images for the demo
//!
//! Captions and picsum.photos IDs are compiled in; URLs are built on demand.

use serde::Deserialize;
use std::sync::OnceLock;

const FIXTURE_JSON: &str = include_str!("../fixtures/images.json");

const IMAGE_HOST: &str = "https://picsum.photos";

#[derive(Debug, Deserialize)]
struct FixtureData {
    images: Vec<FixtureImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FixtureImage {
    pub id: u32,
    pub caption: String,
}

impl FixtureImage {
    /// Full-size URL (16:9)
    pub fn url(&self) -> String {
        format!("{IMAGE_HOST}/id/{}/1600/900", self.id)
    }
}

static FIXTURES: OnceLock<Vec<FixtureImage>> = OnceLock::new();

fn fixtures() -> &'static [FixtureImage] {
    FIXTURES.get_or_init(|| match serde_json::from_str::<FixtureData>(FIXTURE_JSON) {
        Ok(data) => data.images,
        Err(e) => {
            tracing::error!("Invalid image fixtures: {}", e);
            Vec::new()
        }
    })
}

/// Number of fixture images available
pub fn fixture_count() -> usize {
    fixtures().len()
}

/// URLs of the first `count` fixtures, in fixture order.
pub fn image_urls(count: usize) -> Vec<String> {
    fixtures().iter().take(count).map(FixtureImage::url).collect()
}

pub fn caption(index: usize) -> Option<&'static str> {
    fixtures().get(index).map(|f| f.caption.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_parse() {
        assert_eq!(fixture_count(), 12);
        assert_eq!(caption(0), Some("Forest trail"));
        assert_eq!(caption(99), None);
    }

    #[test]
    fn test_image_urls_are_ordered_and_capped() {
        let urls = image_urls(3);
        assert_eq!(
            urls,
            vec![
                "https://picsum.photos/id/10/1600/900",
                "https://picsum.photos/id/15/1600/900",
                "https://picsum.photos/id/28/1600/900",
            ]
        );
        assert_eq!(image_urls(100).len(), 12);
        assert!(image_urls(0).is_empty());
    }
}
