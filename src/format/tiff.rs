//! TIFF: walk the first image file directory for size and orientation.

use super::{DecodeError, Endian, HeaderBuf, ImageFormat, Metadata, ORIENTATION};

const TAG_WIDTH: u16 = 0x100;
const TAG_HEIGHT: u16 = 0x101;
const TAG_ORIENTATION: u16 = 0x112;

/// IFD field type for 32-bit values.
const FIELD_LONG: u16 = 4;

const ENTRY_LEN: usize = 12;

/// Orientations 5-8 rotate the image by 90 degrees.
const FIRST_ROTATED_ORIENTATION: u32 = 5;

pub(super) async fn decode(h: &mut HeaderBuf<'_>) -> Result<Metadata, DecodeError> {
    let endian = if h.bytes::<2>(0)? == *b"MM" {
        Endian::Big
    } else {
        Endian::Little
    };

    let ifd_offset = h.u32(4, endian)? as usize;
    h.extend_to(ifd_offset.saturating_add(2)).await?;
    let tag_count = h.u16(ifd_offset, endian)?;

    let mut width = None;
    let mut height = None;
    let mut orientation = None;

    let mut offset = ifd_offset.saturating_add(2);
    for _ in 0..tag_count {
        h.extend_to(offset + ENTRY_LEN).await?;

        let tag = h.u16(offset, endian)?;
        let value = field_value(h, offset, endian)?;
        offset += ENTRY_LEN;

        match tag {
            TAG_WIDTH => width = Some(value),
            TAG_HEIGHT => height = Some(value),
            TAG_ORIENTATION => orientation = Some(value),
            _ => {}
        }

        if width.is_some() && height.is_some() && orientation.is_some() {
            break;
        }
    }

    if orientation.is_some_and(|o| o >= FIRST_ROTATED_ORIENTATION) {
        std::mem::swap(&mut width, &mut height);
    }

    Ok(Metadata::with_dimensions(ImageFormat::Tiff, width, height)
        .with_extra(ORIENTATION, orientation))
}

/// Read an entry's inline value: 16 bits unless the field type is LONG.
///
/// LONG entries read the full 32 bits rather than the 16-bit field used for
/// every other type.
fn field_value(h: &HeaderBuf<'_>, entry: usize, endian: Endian) -> Result<u32, DecodeError> {
    if h.u16(entry + 2, endian)? == FIELD_LONG {
        h.u32(entry + 8, endian)
    } else {
        h.u16(entry + 8, endian).map(u32::from)
    }
}
