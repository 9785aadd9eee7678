//! The record a successful probe returns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ImageFormat;

/// Key of the image count carried by ICO/CUR results.
pub const NUM_IMAGES: &str = "num_images";
/// Key of the EXIF-style orientation carried by TIFF results.
pub const ORIENTATION: &str = "orientation";

/// Format and dimensions of a probed image.
///
/// Serializes as `{"type": .., "width": .., "height": .., ...extra}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(rename = "type")]
    pub format: ImageFormat,
    pub width: Option<u32>,
    pub height: Option<u32>,
    /// Format-specific fields; a key may be present with a null value
    #[serde(flatten)]
    pub extra: BTreeMap<String, Option<u32>>,
}

impl Metadata {
    pub fn new(format: ImageFormat, width: u32, height: u32) -> Self {
        Self::with_dimensions(format, Some(width), Some(height))
    }

    pub fn with_dimensions(format: ImageFormat, width: Option<u32>, height: Option<u32>) -> Self {
        Self {
            format,
            width,
            height,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_extra(mut self, key: &str, value: Option<u32>) -> Self {
        self.extra.insert(key.to_string(), value);
        self
    }

    /// Width and height, when both are known.
    pub fn dimensions(&self) -> Option<(u32, u32)> {
        self.width.zip(self.height)
    }

    pub fn extra(&self, key: &str) -> Option<u32> {
        self.extra.get(key).copied().flatten()
    }

    pub fn num_images(&self) -> Option<u32> {
        self.extra(NUM_IMAGES)
    }

    pub fn orientation(&self) -> Option<u32> {
        self.extra(ORIENTATION)
    }

    pub fn to_json(&self) -> serde_json::Value {
        // Serializing this struct cannot fail: every field is a plain value.
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}
