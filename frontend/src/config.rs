use log::Level;
use serde::Deserialize;

#[cfg(debug_assertions)]
pub fn asset_base() -> &'static str {
    "/assets" // Trunk serves the copied assets dir locally
}

#[cfg(not(debug_assertions))]
pub fn asset_base() -> &'static str {
    "https://cdn.fjordaudio.com/assets"
}

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn asset_url(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", asset_base(), path.trim_start_matches('/'))
}

/// Pixel offsets used by the section navigator. Brands may override any of
/// them from the catalog's `scroll_spy` block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScrollSpyConfig {
    /// Added to scroll position + header height when detecting the active section.
    pub detection_margin: f64,
    /// Gap left between the sticky header and a section scrolled into view.
    pub navigation_margin: f64,
    pub default_header_height: f64,
    pub header_selector: String,
}

impl Default for ScrollSpyConfig {
    fn default() -> Self {
        Self {
            detection_margin: 100.0,
            navigation_margin: 80.0,
            default_header_height: 72.0,
            header_selector: "header.site-header".to_string(),
        }
    }
}
