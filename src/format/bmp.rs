//! BMP: dimensions from the DIB header that follows the file header.

use super::{DecodeError, HeaderBuf, ImageFormat, Metadata};

/// BITMAPCOREHEADER (OS/2 1.x).
const CORE_HEADER_SIZE: u32 = 12;
/// BITMAPINFOHEADER; V4 and V5 extend it and keep the same leading fields.
const INFO_HEADER_SIZE: u32 = 40;

pub(super) fn decode(h: &HeaderBuf<'_>) -> Result<Metadata, DecodeError> {
    let header_size = h.le_u32(14)?;

    let (width, height) = if header_size == CORE_HEADER_SIZE {
        (u32::from(h.le_u16(18)?), u32::from(h.le_u16(20)?))
    } else if header_size >= INFO_HEADER_SIZE {
        // Negative height marks a top-down bitmap; report the magnitude.
        (h.le_i32(18)?.unsigned_abs(), h.le_i32(22)?.unsigned_abs())
    } else {
        return Err(DecodeError::HeaderSize(header_size));
    };

    Ok(Metadata::new(ImageFormat::Bmp, width, height))
}
