//! Client Configuration
//!
//! Backend location and display defaults. Every field has a default, so a
//! partial JSON document is enough to override a single value.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Deserialize;

use crate::models::ItemId;

pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
pub const DEFAULT_UPLOADS_PATH: &str = "/uploads";
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "https://placehold.co/300x200?text=No+Image";

const ITEMS_PATH: &str = "/api/items";

/// Characters escaped inside a single path segment (RFC 3986 unreserved are kept)
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Origin of the REST backend, without trailing slash
    pub api_base: String,
    /// Static path images are served under
    pub uploads_path: String,
    /// Shown when an item has no image or its image fails to load
    pub placeholder_image: String,
    /// `log` level filter name (error, warn, info, debug, trace, off)
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            uploads_path: DEFAULT_UPLOADS_PATH.to_string(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ClientConfig {
    /// Parse a (possibly partial) JSON config document
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: ClientConfig = serde_json::from_str(json)?;
        config.api_base = config.api_base.trim_end_matches('/').to_string();
        Ok(config)
    }

    pub fn with_api_base(mut self, base: &str) -> Self {
        self.api_base = base.trim_end_matches('/').to_string();
        self
    }

    pub fn items_url(&self) -> String {
        format!("{}{}", self.api_base, ITEMS_PATH)
    }

    pub fn item_url(&self, id: &ItemId) -> String {
        format!("{}/{}", self.items_url(), utf8_percent_encode(id.as_str(), PATH_SEGMENT))
    }

    /// Resolve an item's image reference to a displayable URL.
    ///
    /// Nested references keep their `/` separators; each segment is escaped
    /// on its own.
    pub fn image_url(&self, image: Option<&str>) -> String {
        let Some(image) = image.map(str::trim).filter(|i| !i.is_empty()) else {
            return self.placeholder_image.clone();
        };
        if ["http://", "https://", "data:", "blob:"].iter().any(|p| image.starts_with(p)) {
            return image.to_string();
        }
        let path = image
            .trim_start_matches('/')
            .split('/')
            .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/");
        format!("{}/{}/{}", self.api_base, self.uploads_path.trim_matches('/'), path)
    }
}
