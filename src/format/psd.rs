//! PSD: the file header stores height before width.

use super::{DecodeError, HeaderBuf, ImageFormat, Metadata};

pub(super) fn decode(h: &HeaderBuf<'_>) -> Result<Metadata, DecodeError> {
    let height = h.be_u32(14)?;
    let width = h.be_u32(18)?;
    Ok(Metadata::new(ImageFormat::Psd, width, height))
}
