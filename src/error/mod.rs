//! Error types and policies for image probing.
//!
//! This module provides:
//! - `ErrorPolicy`: Controls whether a batch swallows failures or fails fast
//! - `Stage`: Indicates where in the probe pipeline an error occurred
//! - `ProbeError`: The reason a single probe failed
//! - `SingleProbeError`: A `ProbeError` with input index, stage and target
//! - `AggregateError`: The failures returned to a `FastFail` batch caller

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::format::DecodeError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Return the first failure (in input order) to the batch caller
    FastFail,
    /// Degrade failing inputs to `None`, log them and keep going
    #[default]
    Accumulate,
}

impl FromStr for ErrorPolicy {
    type Err = ProbeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fast_fail" | "fastfail" | "strict" => Ok(ErrorPolicy::FastFail),
            "accumulate" | "lenient" => Ok(ErrorPolicy::Accumulate),
            other => Err(ProbeError::InvalidInput(format!(
                "unknown error policy: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Classifying the raw input value
    Resolve,
    /// Opening the file, URL, data URI or stream
    Open,
    /// Reading the prefix and matching signatures
    Detect,
    /// Running the format-specific decoder
    Decode,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Resolve => write!(f, "Resolve"),
            Stage::Open => write!(f, "Open"),
            Stage::Detect => write!(f, "Detect"),
            Stage::Decode => write!(f, "Decode"),
        }
    }
}

/// Coarse classification of a `ProbeError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidInput,
    IoFailure,
    Unrecognized,
    MalformedHeader,
}

/// Why a single probe produced no metadata.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The value is not a file, URL, base64 data URI or stream
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The data URI payload is not valid base64
    #[error("Invalid data URI payload: {0}")]
    InvalidDataUri(#[from] base64::DecodeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP request could not be sent or the client could not be built
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    HttpStatus(reqwest::StatusCode),

    #[error("Timed out after {0:?}")]
    TimedOut(std::time::Duration),

    /// No signature matched the prefix
    #[error("Unrecognized image format")]
    Unrecognized,

    #[error("Malformed header: {0}")]
    Malformed(DecodeError),
}

impl ProbeError {
    /// Map this error onto the four failure kinds callers branch on.
    pub fn kind(&self) -> FailureKind {
        match self {
            ProbeError::InvalidInput(_) | ProbeError::InvalidDataUri(_) => {
                FailureKind::InvalidInput
            }
            ProbeError::Io(_)
            | ProbeError::Http(_)
            | ProbeError::HttpStatus(_)
            | ProbeError::TimedOut(_) => FailureKind::IoFailure,
            ProbeError::Unrecognized => FailureKind::Unrecognized,
            ProbeError::Malformed(_) => FailureKind::MalformedHeader,
        }
    }
}

impl From<DecodeError> for ProbeError {
    fn from(e: DecodeError) -> Self {
        match e {
            // A transport failure mid-decode is still an I/O failure.
            DecodeError::Io(io) => ProbeError::Io(io),
            other => ProbeError::Malformed(other),
        }
    }
}

#[derive(Debug)]
pub struct SingleProbeError {
    /// Position of the input in the batch
    pub index: usize,
    /// Stage where the error occurred
    pub stage: Stage,
    /// Identifier of the input (path, URL, abbreviated data URI, "<stream>")
    pub target: String,
    /// The underlying error
    pub error: ProbeError,
}

impl fmt::Display for SingleProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] #{} {}: {}",
            self.stage, self.index, self.target, self.error
        )
    }
}

impl std::error::Error for SingleProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// An aggregate of probe failures.
///
/// This is returned by batch operations running under `ErrorPolicy::FastFail`.
#[derive(Debug, Error)]
pub struct AggregateError {
    pub errors: Vec<SingleProbeError>,
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "probe encountered {} error(s):", self.errors.len())?;
        for (i, e) in self.errors.iter().enumerate() {
            writeln!(f, "  #{}: {}", i + 1, e)?;
        }
        Ok(())
    }
}

impl AggregateError {
    /// Create a new aggregate error with a single error.
    pub fn single(error: SingleProbeError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

impl From<SingleProbeError> for AggregateError {
    fn from(error: SingleProbeError) -> Self {
        Self::single(error)
    }
}

#[cfg(feature = "miette")]
mod miette_impl;

#[cfg(feature = "miette")]
pub use miette_impl::*;
