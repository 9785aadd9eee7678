//! JPEG: walk marker segments until a start-of-frame.

use super::{DecodeError, HeaderBuf, ImageFormat, Metadata};

const MARKER: u8 = 0xFF;
/// Baseline DCT.
const SOF0: u8 = 0xC0;
/// Progressive DCT.
const SOF2: u8 = 0xC2;
/// Bytes from a marker's start through the frame's width field.
const MARKER_WINDOW: usize = 9;

pub(super) async fn decode(h: &mut HeaderBuf<'_>) -> Result<Metadata, DecodeError> {
    // Skip the SOI marker.
    let mut start = 2;

    loop {
        h.extend_to(start + MARKER_WINDOW).await?;

        let byte = h.u8(start)?;
        if byte != MARKER {
            return Err(DecodeError::BadMarker {
                offset: start,
                byte,
            });
        }

        if matches!(h.u8(start + 1)?, SOF0 | SOF2) {
            let height = h.be_u16(start + 5)?;
            let width = h.be_u16(start + 7)?;
            return Ok(Metadata::new(ImageFormat::Jpeg, width.into(), height.into()));
        }

        // The length covers itself but not the two marker bytes.
        let segment_size = usize::from(h.be_u16(start + 2)?);
        start += segment_size + 2;
    }
}
