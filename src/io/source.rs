//! The per-probe byte cursor.

use std::fmt;
use std::io;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use super::{ByteReader, HttpReader, InputDescriptor};
use crate::error::ProbeError;

/// A growable buffer plus a forward-only cursor over one opened input.
///
/// Owned by exactly one probe. The buffer never shrinks and the cursor never
/// moves backwards; more bytes are pulled from the transport only when a
/// `read` asks for more than is already buffered past the cursor.
pub struct StreamSource {
    id: String,
    reader: Option<Box<dyn ByteReader>>,
    buffer: Vec<u8>,
    cursor: usize,
}

impl fmt::Debug for StreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamSource")
            .field("id", &self.id)
            .field("buffered", &self.buffer.len())
            .field("cursor", &self.cursor)
            .field("exhausted", &self.reader.is_none())
            .finish()
    }
}

impl StreamSource {
    /// A source backed by a transport that is read lazily.
    pub fn from_reader(id: impl Into<String>, reader: Box<dyn ByteReader>) -> Self {
        Self {
            id: id.into(),
            reader: Some(reader),
            buffer: Vec::new(),
            cursor: 0,
        }
    }

    /// A source whose entire contents are already in memory.
    pub fn from_bytes(id: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            reader: None,
            buffer: data,
            cursor: 0,
        }
    }

    /// Open a classified input.
    ///
    /// Local files and data URIs are loaded in one step. URLs issue a single
    /// GET and keep the body on the wire until bytes are asked for; a non-2xx
    /// status fails here. Streams are used as they are.
    pub async fn open(
        descriptor: InputDescriptor,
        client: &reqwest::Client,
    ) -> Result<Self, ProbeError> {
        let id = descriptor.id();
        match descriptor {
            InputDescriptor::OpaqueStream(reader) => Ok(Self::from_reader(id, reader)),
            InputDescriptor::FilePath(path) => {
                let data = tokio::fs::read(&path).await?;
                Ok(Self::from_bytes(id, data))
            }
            InputDescriptor::Url(url) => {
                let response = client.get(&url).send().await?;
                let status = response.status();
                if !status.is_success() {
                    return Err(ProbeError::HttpStatus(status));
                }
                Ok(Self::from_reader(id, Box::new(HttpReader::new(response))))
            }
            InputDescriptor::DataUri { payload } => {
                // Wrapped payloads carry line breaks and indentation.
                let payload: String = payload.split_ascii_whitespace().collect();
                let data = STANDARD.decode(payload)?;
                Ok(Self::from_bytes(id, data))
            }
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Bytes consumed so far.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Bytes held in the buffer, consumed or not.
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the transport has reported end of data.
    pub fn is_exhausted(&self) -> bool {
        self.reader.is_none()
    }

    /// Return the next `n` bytes and advance past them.
    ///
    /// A short or empty result means the source ran dry; callers check the
    /// length. Only transport failures are errors.
    pub async fn read(&mut self, n: usize) -> io::Result<Vec<u8>> {
        while self.buffer.len() - self.cursor < n {
            let Some(reader) = self.reader.as_mut() else {
                break;
            };
            let want = n - (self.buffer.len() - self.cursor);
            let more = reader.read(want).await?;
            if more.is_empty() {
                self.reader = None;
                break;
            }
            self.buffer.extend_from_slice(&more);
        }

        let end = self.cursor.saturating_add(n).min(self.buffer.len());
        let out = self.buffer[self.cursor..end].to_vec();
        self.cursor = end;
        Ok(out)
    }
}
