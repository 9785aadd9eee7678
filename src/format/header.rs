//! Bounds-checked access to a growing header prefix.

use std::io;

use super::DecodeError;
use crate::io::StreamSource;

/// Byte order of multi-byte header fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    Big,
    Little,
}

/// The bytes a decoder has seen so far, plus the stream to pull more from.
///
/// Every accessor checks bounds and reports `DecodeError::Truncated` instead
/// of panicking.
#[derive(Debug)]
pub struct HeaderBuf<'s> {
    data: Vec<u8>,
    stream: &'s mut StreamSource,
}

impl<'s> HeaderBuf<'s> {
    pub fn new(prefix: Vec<u8>, stream: &'s mut StreamSource) -> Self {
        Self {
            data: prefix,
            stream,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    /// Pull bytes from the stream until at least `len` are held, or the
    /// stream ends. Never fails for lack of data.
    pub async fn extend_to(&mut self, len: usize) -> io::Result<()> {
        if self.data.len() < len {
            let more = self.stream.read(len - self.data.len()).await?;
            self.data.extend_from_slice(&more);
        }
        Ok(())
    }

    pub fn bytes<const N: usize>(&self, offset: usize) -> Result<[u8; N], DecodeError> {
        offset
            .checked_add(N)
            .and_then(|end| self.data.get(offset..end))
            .and_then(|s| s.try_into().ok())
            .ok_or(DecodeError::Truncated {
                offset,
                needed: N,
                available: self.data.len().saturating_sub(offset),
            })
    }

    pub fn u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.bytes::<1>(offset).map(|[b]| b)
    }

    pub fn u16(&self, offset: usize, endian: Endian) -> Result<u16, DecodeError> {
        let b = self.bytes(offset)?;
        Ok(match endian {
            Endian::Big => u16::from_be_bytes(b),
            Endian::Little => u16::from_le_bytes(b),
        })
    }

    pub fn u32(&self, offset: usize, endian: Endian) -> Result<u32, DecodeError> {
        let b = self.bytes(offset)?;
        Ok(match endian {
            Endian::Big => u32::from_be_bytes(b),
            Endian::Little => u32::from_le_bytes(b),
        })
    }

    pub fn be_u16(&self, offset: usize) -> Result<u16, DecodeError> {
        self.u16(offset, Endian::Big)
    }

    pub fn le_u16(&self, offset: usize) -> Result<u16, DecodeError> {
        self.u16(offset, Endian::Little)
    }

    pub fn be_u32(&self, offset: usize) -> Result<u32, DecodeError> {
        self.u32(offset, Endian::Big)
    }

    pub fn le_u32(&self, offset: usize) -> Result<u32, DecodeError> {
        self.u32(offset, Endian::Little)
    }

    pub fn le_i32(&self, offset: usize) -> Result<i32, DecodeError> {
        self.bytes(offset).map(i32::from_le_bytes)
    }

    /// Three-byte little-endian integer.
    pub fn le_u24(&self, offset: usize) -> Result<u32, DecodeError> {
        let [a, b, c] = self.bytes(offset)?;
        Ok(u32::from_le_bytes([a, b, c, 0]))
    }
}
