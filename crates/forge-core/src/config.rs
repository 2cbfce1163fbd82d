//! Site configuration.
//!
//! Page copy, social metadata and carousel behaviour. The bundled JSON is
//! compiled into the binary; every field falls back to the built-in
//! default when omitted.

use serde::{Deserialize, Serialize};
use url::Url;

use crate::carousel::CarouselOptions;
use crate::error::ForgeResult;

const BUNDLED_SITE: &str = include_str!("../data/site.json");

/// Social preview image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
}

/// Open Graph card shown when the page is shared.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub image: Option<OgImage>,
}

impl Default for OpenGraph {
    fn default() -> Self {
        Self {
            title: "Forge Preview".to_string(),
            description: "Flip the forged cards. Tell us what you think.".to_string(),
            image: Some(OgImage {
                url: "/og.jpg".to_string(),
                width: 1200,
                height: 630,
            }),
        }
    }
}

/// Everything the page needs besides the card deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub title: String,
    pub description: String,
    /// Absolute base URL social metadata is resolved against
    pub metadata_base: String,
    pub open_graph: OpenGraph,
    pub twitter_card: String,
    pub heading: String,
    pub tagline: String,
    pub footer: String,
    pub carousel_label: String,
    pub carousel: CarouselOptions,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Forge Preview".to_string(),
            description: "A tiny interactive tease of PCForge forged cards.".to_string(),
            metadata_base: "https://pcforge.pages.dev".to_string(),
            open_graph: OpenGraph::default(),
            twitter_card: "summary_large_image".to_string(),
            heading: "Forged Preview".to_string(),
            tagline: "Swipe. Flip. Tell us what you think.".to_string(),
            footer: "\u{1F525} forging soon".to_string(),
            carousel_label: "Forged cards".to_string(),
            carousel: CarouselOptions::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> ForgeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The configuration shipped with the site.
    pub fn bundled() -> ForgeResult<Self> {
        Self::from_json(BUNDLED_SITE)
    }

    /// Resolve a possibly relative resource URL against `metadata_base`.
    ///
    /// Returns `path` as given when the base is not an absolute URL.
    pub fn absolute_url(&self, path: &str) -> String {
        Url::parse(&self.metadata_base)
            .and_then(|base| base.join(path))
            .map(String::from)
            .unwrap_or_else(|_| path.to_string())
    }

    /// Absolute Open Graph image URL, if an image is configured.
    pub fn og_image_url(&self) -> Option<String> {
        self.open_graph
            .image
            .as_ref()
            .map(|image| self.absolute_url(&image.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_matches_defaults() {
        let bundled = SiteConfig::bundled().unwrap();
        assert_eq!(bundled, SiteConfig::default());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SiteConfig::from_json(r#"{"heading": "Spring Drop"}"#).unwrap();
        assert_eq!(config.heading, "Spring Drop");
        assert_eq!(config.title, "Forge Preview");
        assert!(config.carousel.loop_slides);
    }

    #[test]
    fn test_og_image_resolves_against_base() {
        let config = SiteConfig::default();
        assert_eq!(
            config.og_image_url().as_deref(),
            Some("https://pcforge.pages.dev/og.jpg")
        );

        let absolute = config.absolute_url("https://cdn.example.com/og.png");
        assert_eq!(absolute, "https://cdn.example.com/og.png");
    }

    #[test]
    fn test_invalid_base_leaves_path() {
        let config = SiteConfig {
            metadata_base: "not a base".to_string(),
            ..SiteConfig::default()
        };
        assert_eq!(config.absolute_url("/og.jpg"), "/og.jpg");
    }

    #[test]
    fn test_no_og_image() {
        let config = SiteConfig::from_json(r#"{"open_graph": {"image": null}}"#).unwrap();
        assert_eq!(config.og_image_url(), None);
        assert_eq!(config.open_graph.title, "Forge Preview");
    }
}
