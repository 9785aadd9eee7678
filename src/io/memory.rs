//! In-memory byte sources.

use std::io;

use async_trait::async_trait;
use bytes::Bytes;

use super::ByteReader;

/// In-memory `ByteReader` over a shared byte buffer.
///
/// Cloning is cheap; each clone keeps its own read position.
#[derive(Debug, Clone)]
pub struct MemoryReader {
    data: Bytes,
    pos: usize,
}

impl MemoryReader {
    /// Create a new in-memory reader over the given data.
    pub fn new(data: impl Into<Bytes>) -> Self {
        Self {
            data: data.into(),
            pos: 0,
        }
    }

    /// Bytes not yet handed out.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }
}

#[async_trait]
impl ByteReader for MemoryReader {
    async fn read(&mut self, n: usize) -> io::Result<Vec<u8>> {
        let end = self.pos.saturating_add(n).min(self.data.len());
        let out = self.data[self.pos..end].to_vec();
        self.pos = end;
        Ok(out)
    }
}
