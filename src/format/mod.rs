//! Image format detection and header decoding.
//!
//! This module provides:
//! - `ImageFormat`: The container formats that can be recognized
//! - `detect`: Signature matching over the first `PREFIX_LEN` bytes
//! - `decode`: Dispatch to the per-format header decoders
//! - `probe_stream`: Detection plus decoding over an open `StreamSource`
//! - `Metadata`: The result record
//! - `DecodeError`: Why a recognized header could not be read

use std::fmt;
use std::io;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod bmp;
mod gif;
mod header;
mod ico;
mod jpeg;
mod metadata;
mod png;
mod psd;
mod tiff;
mod webp;

pub use header::{Endian, HeaderBuf};
pub use metadata::{Metadata, NUM_IMAGES, ORIENTATION};

use crate::error::ProbeError;
use crate::io::StreamSource;

/// Number of bytes read before any signature is matched.
pub const PREFIX_LEN: usize = 26;

/// Image container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    #[serde(rename = "png")]
    Png,
    #[serde(rename = "gif")]
    Gif,
    #[serde(rename = "jpg")]
    Jpeg,
    #[serde(rename = "ico")]
    Ico,
    #[serde(rename = "cur")]
    Cur,
    #[serde(rename = "bmp")]
    Bmp,
    #[serde(rename = "tiff")]
    Tiff,
    #[serde(rename = "webp")]
    Webp,
    #[serde(rename = "psd")]
    Psd,
}

impl ImageFormat {
    /// The short tag reported in `Metadata`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Gif => "gif",
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Ico => "ico",
            ImageFormat::Cur => "cur",
            ImageFormat::Bmp => "bmp",
            ImageFormat::Tiff => "tiff",
            ImageFormat::Webp => "webp",
            ImageFormat::Psd => "psd",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "png" => Ok(ImageFormat::Png),
            "gif" => Ok(ImageFormat::Gif),
            "jpg" | "jpeg" => Ok(ImageFormat::Jpeg),
            "ico" => Ok(ImageFormat::Ico),
            "cur" => Ok(ImageFormat::Cur),
            "bmp" => Ok(ImageFormat::Bmp),
            "tiff" | "tif" => Ok(ImageFormat::Tiff),
            "webp" => Ok(ImageFormat::Webp),
            "psd" => Ok(ImageFormat::Psd),
            other => Err(ProbeError::InvalidInput(format!(
                "unknown image format: {other}"
            ))),
        }
    }
}

/// Errors raised while reading a header whose signature matched.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The header ends before a field the layout requires
    #[error("needed {needed} byte(s) at offset {offset}, {available} available")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A JPEG segment did not start with 0xFF
    #[error("expected segment marker at offset {offset}, found 0x{byte:02x}")]
    BadMarker { offset: usize, byte: u8 },

    /// BMP info header size outside the known layouts
    #[error("unsupported BMP header size {0}")]
    HeaderSize(u32),

    /// The transport failed while the decoder was asking for more bytes
    #[error("I/O error while reading header: {0}")]
    Io(#[from] io::Error),
}

/// Match the prefix against the known signatures.
///
/// Order matters and must not change. Prefixes shorter than `PREFIX_LEN`
/// are matched as far as they go.
pub fn detect(prefix: &[u8]) -> Option<ImageFormat> {
    if prefix.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some(ImageFormat::Png)
    } else if prefix.starts_with(b"GIF89a") || prefix.starts_with(b"GIF87a") {
        Some(ImageFormat::Gif)
    } else if prefix.starts_with(b"\xff\xd8") {
        Some(ImageFormat::Jpeg)
    } else if prefix.starts_with(b"\x00\x00\x01\x00") {
        Some(ImageFormat::Ico)
    } else if prefix.starts_with(b"\x00\x00\x02\x00") {
        Some(ImageFormat::Cur)
    } else if prefix.starts_with(b"BM") {
        Some(ImageFormat::Bmp)
    } else if prefix.starts_with(b"MM\x00\x2a") || prefix.starts_with(b"II\x2a\x00") {
        Some(ImageFormat::Tiff)
    } else if prefix.get(0..4) == Some(b"RIFF".as_slice())
        && prefix.get(8..15) == Some(b"WEBPVP8".as_slice())
    {
        Some(ImageFormat::Webp)
    } else if prefix.starts_with(b"8BPS") {
        Some(ImageFormat::Psd)
    } else {
        None
    }
}

/// Run the decoder for `format` over the header read so far.
pub async fn decode(
    format: ImageFormat,
    header: &mut HeaderBuf<'_>,
) -> Result<Metadata, DecodeError> {
    match format {
        ImageFormat::Png => png::decode(header).await,
        ImageFormat::Gif => gif::decode(header),
        ImageFormat::Jpeg => jpeg::decode(header).await,
        ImageFormat::Ico | ImageFormat::Cur => ico::decode(header),
        ImageFormat::Bmp => bmp::decode(header),
        ImageFormat::Tiff => tiff::decode(header).await,
        ImageFormat::Webp => webp::decode(header).await,
        ImageFormat::Psd => psd::decode(header),
    }
}

/// Detect and decode the image at the front of `stream`.
pub async fn probe_stream(stream: &mut StreamSource) -> Result<Metadata, ProbeError> {
    let prefix = stream.read(PREFIX_LEN).await?;
    let format = detect(&prefix).ok_or(ProbeError::Unrecognized)?;
    let mut header = HeaderBuf::new(prefix, stream);
    Ok(decode(format, &mut header).await?)
}
