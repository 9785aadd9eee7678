//! PNG: dimensions from the IHDR chunk.

use super::{DecodeError, HeaderBuf, ImageFormat, Metadata};

/// Header length once the Apple `CgBI` chunk ahead of IHDR is included.
const CGBI_HEADER_LEN: usize = 40;

pub(super) async fn decode(h: &mut HeaderBuf<'_>) -> Result<Metadata, DecodeError> {
    let (width, height) = match h.bytes::<4>(12)? {
        [b'I', b'H', b'D', b'R'] => (h.be_u32(16)?, h.be_u32(20)?),
        [b'C', b'g', b'B', b'I'] => {
            h.extend_to(CGBI_HEADER_LEN).await?;
            (h.be_u32(32)?, h.be_u32(36)?)
        }
        // Legacy writers that put the dimensions straight after the signature.
        _ => (h.be_u32(8)?, h.be_u32(12)?),
    };

    Ok(Metadata::new(ImageFormat::Png, width, height))
}
