//! ICO/CUR: the first directory entry.

use super::{DecodeError, HeaderBuf, ImageFormat, Metadata, NUM_IMAGES};

const TYPE_ICON: u8 = 1;

pub(super) fn decode(h: &HeaderBuf<'_>) -> Result<Metadata, DecodeError> {
    let format = if h.u8(2)? == TYPE_ICON {
        ImageFormat::Ico
    } else {
        ImageFormat::Cur
    };
    let num_images = h.le_u16(4)?;
    let width = entry_dimension(h.u8(6)?);
    let height = entry_dimension(h.u8(7)?);

    Ok(Metadata::new(format, width, height).with_extra(NUM_IMAGES, Some(num_images.into())))
}

/// A stored 0 stands for 256.
fn entry_dimension(stored: u8) -> u32 {
    if stored == 0 { 256 } else { stored.into() }
}
