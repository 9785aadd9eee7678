//! The byte-reading capability every probe source is driven through.

use std::fmt::{self, Debug};
use std::io;

use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Size of the scratch buffer used when pulling from an `AsyncRead`.
const SCRATCH_LEN: usize = 8 * 1024;

/// Trait for sequential, incrementally-readable byte sources.
///
/// Implement this for any stream that should be probed as-is (an already
/// open socket, a decompressor, a response body from another client).
#[async_trait]
pub trait ByteReader: Send + Debug {
    /// Read up to `n` bytes.
    ///
    /// Returns fewer than `n` bytes only when the source is exhausted; an empty
    /// vector means end of data. Running out of data is never an error.
    async fn read(&mut self, n: usize) -> io::Result<Vec<u8>>;
}

#[async_trait]
impl<B: ByteReader + ?Sized> ByteReader for Box<B> {
    async fn read(&mut self, n: usize) -> io::Result<Vec<u8>> {
        (**self).read(n).await
    }
}

/// Adapter exposing any tokio `AsyncRead` as a `ByteReader`.
pub struct AsyncReadSource<R> {
    inner: R,
}

impl<R> AsyncReadSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R> Debug for AsyncReadSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AsyncReadSource").finish_non_exhaustive()
    }
}

#[async_trait]
impl<R> ByteReader for AsyncReadSource<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn read(&mut self, n: usize) -> io::Result<Vec<u8>> {
        let mut out = Vec::new();
        let mut scratch = [0u8; SCRATCH_LEN];

        while out.len() < n {
            let want = (n - out.len()).min(SCRATCH_LEN);
            let got = self.inner.read(&mut scratch[..want]).await?;
            if got == 0 {
                break;
            }
            out.extend_from_slice(&scratch[..got]);
        }

        Ok(out)
    }
}
