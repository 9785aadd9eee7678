//! HTTP response bodies consumed chunk by chunk.

use std::io;

use async_trait::async_trait;
use bytes::Bytes;

use super::ByteReader;

/// `ByteReader` over a streaming `reqwest` response body.
///
/// Chunks are pulled from the connection only when a read asks for more than
/// what is left of the previous chunk, so a probe that gives up after the
/// prefix never downloads the rest of the body.
#[derive(Debug)]
pub struct HttpReader {
    response: reqwest::Response,
    pending: Bytes,
}

impl HttpReader {
    pub fn new(response: reqwest::Response) -> Self {
        Self {
            response,
            pending: Bytes::new(),
        }
    }
}

#[async_trait]
impl ByteReader for HttpReader {
    async fn read(&mut self, n: usize) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();

        while out.len() < n {
            if self.pending.is_empty() {
                match self.response.chunk().await.map_err(io::Error::other)? {
                    Some(chunk) => self.pending = chunk,
                    None => break,
                }
                continue;
            }

            let take = (n - out.len()).min(self.pending.len());
            out.extend_from_slice(&self.pending.split_to(take));
        }

        Ok(out)
    }
}
