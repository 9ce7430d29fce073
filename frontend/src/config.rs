use serde::Deserialize;
use web_sys::Document;

use crate::components::gallery::{default_images, GalleryImage};
use crate::error::PageError;

/// Id of the optional `<script type="application/json">` block that overrides
/// the defaults below.
pub const CONFIG_ELEMENT_ID: &str = "page-config";

/// Tunables for the page behaviors. Any field missing from the JSON block
/// keeps its default.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Scroll offset (px) past which the navbar gets `scrolled`.
    pub navbar_scroll_threshold: f64,
    /// Distance (px) above the viewport bottom an element must reach to reveal.
    pub reveal_offset: f64,
    pub reveal_initial_delay_ms: u32,
    pub parallax_speed: f64,
    /// Narrowest viewport (px) that still gets the hero parallax.
    pub parallax_min_width: f64,
    pub swipe_threshold: f64,
    pub gallery: Vec<GalleryImage>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            navbar_scroll_threshold: 50.0,
            reveal_offset: 100.0,
            reveal_initial_delay_ms: 100,
            parallax_speed: 0.3,
            parallax_min_width: 992.0,
            swipe_threshold: 50.0,
            gallery: default_images(),
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, PageError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Thresholds and distances must be finite and non-negative, and the
    /// gallery must have at least one image.
    pub fn validate(&self) -> Result<(), PageError> {
        let distances = [
            ("navbar_scroll_threshold", self.navbar_scroll_threshold),
            ("reveal_offset", self.reveal_offset),
            ("swipe_threshold", self.swipe_threshold),
            ("parallax_min_width", self.parallax_min_width),
        ];
        for (field, value) in distances {
            if !value.is_finite() {
                return Err(PageError::InvalidConfig { field, reason: "must be finite" });
            }
            if value < 0.0 {
                return Err(PageError::InvalidConfig { field, reason: "must not be negative" });
            }
        }
        if !self.parallax_speed.is_finite() {
            return Err(PageError::InvalidConfig {
                field: "parallax_speed",
                reason: "must be finite",
            });
        }
        if self.gallery.is_empty() {
            return Err(PageError::InvalidConfig {
                field: "gallery",
                reason: "needs at least one image",
            });
        }
        Ok(())
    }

    /// Reads the config block from the document, falling back to defaults
    /// when it is absent or malformed.
    pub fn from_document(document: &Document) -> Self {
        let Some(raw) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|element| element.text_content())
        else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => {
                log::info!("Loaded page config from #{}", CONFIG_ELEMENT_ID);
                config
            }
            Err(e) => {
                log::warn!("Ignoring page config, using defaults: {}", e);
                Self::default()
            }
        }
    }
}
