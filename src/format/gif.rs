//! GIF: logical screen size.

use super::{DecodeError, HeaderBuf, ImageFormat, Metadata};

pub(super) fn decode(h: &HeaderBuf<'_>) -> Result<Metadata, DecodeError> {
    let width = h.le_u16(6)?;
    let height = h.le_u16(8)?;
    Ok(Metadata::new(ImageFormat::Gif, width.into(), height.into()))
}
