//! Classification of raw probe inputs.

use std::path::{Path, PathBuf};

use tokio::io::AsyncRead;

use super::{AsyncReadSource, ByteReader};
use crate::error::ProbeError;

const DATA_PREFIX: &str = "data:";
const BASE64_MARKER: &str = ";base64,";

/// Longest data URI shown verbatim in error targets and logs.
const DATA_ID_LEN: usize = 48;

/// A value handed to the prober, before classification.
#[derive(Debug)]
pub enum ProbeInput {
    /// A path, URL or data URI, told apart by `classify`
    Text(String),
    Path(PathBuf),
    /// An already-open stream, probed as-is
    Stream(Box<dyn ByteReader>),
}

impl ProbeInput {
    /// Wrap a `ByteReader` so it is probed without being reopened.
    pub fn stream(reader: impl ByteReader + 'static) -> Self {
        ProbeInput::Stream(Box::new(reader))
    }

    /// Wrap any tokio reader (an open file, a socket half) as a stream input.
    pub fn async_read<R>(reader: R) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        ProbeInput::stream(AsyncReadSource::new(reader))
    }

    /// Identifier used in errors and logs.
    pub fn id(&self) -> String {
        match self {
            ProbeInput::Text(s) => abbreviate(s),
            ProbeInput::Path(p) => p.to_string_lossy().into_owned(),
            ProbeInput::Stream(_) => "<stream>".to_string(),
        }
    }
}

impl From<&str> for ProbeInput {
    fn from(s: &str) -> Self {
        ProbeInput::Text(s.to_string())
    }
}

impl From<String> for ProbeInput {
    fn from(s: String) -> Self {
        ProbeInput::Text(s)
    }
}

impl From<&String> for ProbeInput {
    fn from(s: &String) -> Self {
        ProbeInput::Text(s.clone())
    }
}

impl From<PathBuf> for ProbeInput {
    fn from(p: PathBuf) -> Self {
        ProbeInput::Path(p)
    }
}

impl From<&Path> for ProbeInput {
    fn from(p: &Path) -> Self {
        ProbeInput::Path(p.to_path_buf())
    }
}

impl From<Box<dyn ByteReader>> for ProbeInput {
    fn from(reader: Box<dyn ByteReader>) -> Self {
        ProbeInput::Stream(reader)
    }
}

/// A classified input, ready to be opened.
#[derive(Debug)]
pub enum InputDescriptor {
    FilePath(PathBuf),
    Url(String),
    /// `payload` is the still-encoded text after `;base64,`
    DataUri { payload: String },
    OpaqueStream(Box<dyn ByteReader>),
}

impl InputDescriptor {
    pub fn id(&self) -> String {
        match self {
            InputDescriptor::FilePath(p) => p.to_string_lossy().into_owned(),
            InputDescriptor::Url(u) => u.clone(),
            InputDescriptor::DataUri { payload } => {
                abbreviate(&format!("{DATA_PREFIX}{BASE64_MARKER}{payload}"))
            }
            InputDescriptor::OpaqueStream(_) => "<stream>".to_string(),
        }
    }
}

/// Decide what kind of source an input is.
///
/// First match wins: a stream, an existing local file, text starting with
/// `http`, then a `data:` URI carrying a `;base64,` segment. The only I/O
/// performed is the existence check for local files.
pub async fn classify(input: ProbeInput) -> Result<InputDescriptor, ProbeError> {
    match input {
        ProbeInput::Stream(reader) => Ok(InputDescriptor::OpaqueStream(reader)),
        ProbeInput::Path(path) => {
            if is_local_file(&path).await {
                return Ok(InputDescriptor::FilePath(path));
            }
            match path.to_str() {
                Some(text) => classify_text(text),
                None => Err(ProbeError::InvalidInput(format!(
                    "no such file: {}",
                    path.to_string_lossy()
                ))),
            }
        }
        ProbeInput::Text(text) => {
            if !text.is_empty() && is_local_file(Path::new(&text)).await {
                return Ok(InputDescriptor::FilePath(PathBuf::from(text)));
            }
            classify_text(&text)
        }
    }
}

fn classify_text(text: &str) -> Result<InputDescriptor, ProbeError> {
    if text.starts_with("http") {
        return Ok(InputDescriptor::Url(text.to_string()));
    }

    if text.starts_with(DATA_PREFIX) {
        if let Some(pos) = text.find(BASE64_MARKER) {
            let payload = &text[pos + BASE64_MARKER.len()..];
            return Ok(InputDescriptor::DataUri {
                payload: payload.to_string(),
            });
        }
    }

    Err(ProbeError::InvalidInput(format!(
        "not a file, URL or base64 data URI: {}",
        abbreviate(text)
    )))
}

async fn is_local_file(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
}

fn abbreviate(s: &str) -> String {
    if !s.starts_with(DATA_PREFIX) {
        return s.to_string();
    }

    let compact: String = s.split_ascii_whitespace().collect();
    if compact.chars().count() > DATA_ID_LEN {
        let head: String = compact.chars().take(DATA_ID_LEN).collect();
        format!("{head}...")
    } else {
        compact
    }
}
