//! WEBP: lossy, lossless and extended bitstream headers.

use super::{DecodeError, HeaderBuf, ImageFormat, Metadata};

const HEADER_LEN: usize = 30;

/// Last byte of the `VP8?` chunk tag.
const VARIANT_OFFSET: usize = 15;

pub(super) async fn decode(h: &mut HeaderBuf<'_>) -> Result<Metadata, DecodeError> {
    let variant = h.u8(VARIANT_OFFSET)?;
    h.extend_to(HEADER_LEN).await?;

    let (width, height) = match variant {
        b' ' => lossy(h)?,
        b'L' => lossless(h)?,
        b'X' => extended(h)?,
        _ => return Ok(Metadata::with_dimensions(ImageFormat::Webp, None, None)),
    };

    Ok(Metadata::new(ImageFormat::Webp, width, height))
}

/// `VP8 `: 14-bit dimensions after the frame tag and start code.
fn lossy(h: &HeaderBuf<'_>) -> Result<(u32, u32), DecodeError> {
    let width = h.le_u16(26)? & 0x3fff;
    let height = h.le_u16(28)? & 0x3fff;
    Ok((width.into(), height.into()))
}

/// `VP8L`: 14-bit width-1 and height-1 packed after the signature byte.
fn lossless(h: &HeaderBuf<'_>) -> Result<(u32, u32), DecodeError> {
    let [b0, b1, b2, b3] = h.bytes::<4>(21)?.map(u32::from);
    let width = 1 + (((b1 & 0x3f) << 8) | b0);
    let height = 1 + (((b3 & 0xf) << 10) | (b2 << 2) | ((b1 & 0xc0) >> 6));
    Ok((width, height))
}

/// `VP8X`: 24-bit canvas width-1 and height-1.
fn extended(h: &HeaderBuf<'_>) -> Result<(u32, u32), DecodeError> {
    Ok((1 + h.le_u24(24)?, 1 + h.le_u24(27)?))
}
