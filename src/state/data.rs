/// Shared data structures for the application state
///
/// These structs represent the search payload as it flows from
/// the network layer into the carousel.
use iced::Color;
use serde::{Deserialize, Serialize};

/// Stable identifier of a photo in the search API
pub type PhotoId = u64;

/// Named image variants for a single photo (each a URI)
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct PhotoSources {
    pub original: String,
    pub large2x: String,
    pub large: String,
    pub medium: String,
    pub small: String,
    pub portrait: String,
    pub landscape: String,
    pub tiny: String,
}

/// A single image result
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Photo {
    /// Unique photo ID, also used as the list key
    pub id: PhotoId,
    /// Pixel dimensions of the original
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    /// Page of the photo on the provider site
    #[serde(default)]
    pub url: String,
    /// Author name
    #[serde(default)]
    pub photographer: String,
    /// Author profile URI
    #[serde(default)]
    pub photographer_url: String,
    #[serde(default)]
    pub photographer_id: u64,
    /// Dominant color hint (e.g. "#978E82")
    #[serde(default)]
    pub avg_color: String,
    pub src: PhotoSources,
    #[serde(default)]
    pub liked: bool,
    /// Free-text description
    #[serde(default)]
    pub alt: String,
}

impl Photo {
    /// URI of the variant shown in the carousel and the backdrop
    pub fn display_uri(&self) -> &str {
        &self.src.large
    }

    /// Dominant color as an iced color, if the hint is well formed
    pub fn placeholder_color(&self) -> Option<Color> {
        parse_hex_color(&self.avg_color)
    }
}

/// The search response envelope. Photo order is display order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct SearchResult {
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub per_page: u32,
    pub photos: Vec<Photo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<String>,
}

impl SearchResult {
    /// Parse a response body
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}

/// Parse a `#RRGGBB` hex string
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let digits = hex.trim().strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).ok();

    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r##"{
        "total_results": 8000,
        "page": 1,
        "per_page": 2,
        "photos": [
            {
                "id": 2014422,
                "width": 3024,
                "height": 3024,
                "url": "https://www.pexels.com/photo/brown-rocks-2014422/",
                "photographer": "Joey Farina",
                "photographer_url": "https://www.pexels.com/@joey",
                "photographer_id": 680589,
                "avg_color": "#978E82",
                "src": {
                    "original": "https://images.pexels.com/photos/2014422/a.jpeg",
                    "large2x": "https://images.pexels.com/photos/2014422/b.jpeg",
                    "large": "https://images.pexels.com/photos/2014422/c.jpeg",
                    "medium": "https://images.pexels.com/photos/2014422/d.jpeg",
                    "small": "https://images.pexels.com/photos/2014422/e.jpeg",
                    "portrait": "https://images.pexels.com/photos/2014422/f.jpeg",
                    "landscape": "https://images.pexels.com/photos/2014422/g.jpeg",
                    "tiny": "https://images.pexels.com/photos/2014422/h.jpeg"
                },
                "liked": false,
                "alt": "Brown Rocks During Golden Hour"
            },
            {
                "id": 7,
                "avg_color": "#000000",
                "src": { "large": "https://example.com/7.jpeg" }
            }
        ],
        "next_page": "https://api.pexels.com/v1/search/?page=2&per_page=2&query=mobile+wallpaper"
    }"##;

    #[test]
    fn test_decode_payload_keeps_order() {
        let result = SearchResult::from_json(PAYLOAD.as_bytes()).unwrap();

        assert_eq!(result.total_results, 8000);
        assert_eq!(result.photos.len(), 2);
        assert_eq!(result.photos[0].id, 2014422);
        assert_eq!(result.photos[1].id, 7);
        assert_eq!(result.photos[0].photographer, "Joey Farina");
        assert_eq!(
            result.photos[0].display_uri(),
            "https://images.pexels.com/photos/2014422/c.jpeg"
        );
        // Sparse records fall back to defaults
        assert_eq!(result.photos[1].width, 0);
        assert_eq!(result.photos[1].src.tiny, "");
    }

    #[test]
    fn test_decode_rejects_missing_photos() {
        assert!(SearchResult::from_json(br#"{"page": 1}"#).is_err());
        assert!(SearchResult::from_json(b"<html>").is_err());
    }

    #[test]
    fn test_parse_hex_color() {
        let color = parse_hex_color("#FF8000").unwrap();
        assert_eq!(color, Color::from_rgb8(255, 128, 0));

        assert!(parse_hex_color("FF8000").is_none());
        assert!(parse_hex_color("#FFF").is_none());
        assert!(parse_hex_color("#GG0000").is_none());
    }
}
