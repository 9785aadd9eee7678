//! # imgprobe
//!
//! Find the format and dimensions of an image by reading as few bytes as
//! possible.
//!
//! ## Overview
//!
//! imgprobe provides:
//! - **Any source**: Local files, `http(s)` URLs, base64 `data:` URIs and
//!   already-open byte streams
//! - **Minimal reads**: A 26-byte prefix picks the decoder; decoders pull more
//!   bytes only when the header layout needs them, so a URL probe normally
//!   stops after the first response chunk
//! - **Formats**: PNG (including Apple `CgBI`), GIF, JPEG, ICO/CUR, BMP, TIFF,
//!   WEBP (lossy, lossless, extended) and PSD
//! - **Batches**: Many inputs probed concurrently, results in input order
//! - **Error handling**: Configurable error policies (Accumulate or FastFail)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use imgprobe::{ErrorPolicy, ProbeBuilder};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = ProbeBuilder::new()
//!         .with_mode(ErrorPolicy::Accumulate)
//!         .with_concurrency(16)
//!         .build()?;
//!
//!     let results = engine
//!         .probe_all(["photo.jpg", "https://example.com/banner.png"])
//!         .await?;
//!
//!     for meta in results.into_iter().flatten() {
//!         println!("{} {:?}x{:?}", meta.format, meta.width, meta.height);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Failures and successes are reported as `tracing` events at the engine
//! boundary (`warn` and `debug`). The library never installs a subscriber;
//! decoders and byte sources only return error values.
//!
//! ## Deadlines
//!
//! Without `ProbeBuilder::with_timeout` an unresponsive server holds its input's
//! slot until the caller's own timeout fires. Production callers probing
//! untrusted URLs should set one.
//!
//! ## Features
//!
//! - `miette` - Pretty error reporting with miette

pub mod builder;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod io;

pub use builder::ProbeBuilder;
pub use config::ProbeConfig;
pub use engine::ProbeEngine;
pub use error::{AggregateError, ErrorPolicy, FailureKind, ProbeError, SingleProbeError, Stage};
pub use format::{DecodeError, ImageFormat, Metadata, detect, probe_stream};
pub use io::{
    AsyncReadSource, ByteReader, HttpReader, InputDescriptor, MemoryReader, ProbeInput,
    StreamSource, classify,
};

#[cfg(feature = "miette")]
pub use error::ProbeDiagnostic;

/// Probe every input with the default engine, swallowing failures.
///
/// The result has one slot per input, in input order; failed inputs are
/// `None` and logged.
pub async fn info<I>(inputs: I) -> Vec<Option<Metadata>>
where
    I: IntoIterator,
    I::Item: Into<ProbeInput>,
{
    let inputs: Vec<ProbeInput> = inputs.into_iter().map(Into::into).collect();

    let engine = match ProbeBuilder::new().build() {
        Ok(engine) => engine,
        Err(e) => {
            tracing::warn!(error = %e, "failed to build probe engine");
            return inputs.iter().map(|_| None).collect();
        }
    };

    engine
        .probe_all_detailed(inputs)
        .await
        .into_iter()
        .map(Result::ok)
        .collect()
}

/// Blocking wrapper around `info` for callers without a runtime.
pub fn info_blocking<I>(inputs: I) -> std::io::Result<Vec<Option<Metadata>>>
where
    I: IntoIterator,
    I::Item: Into<ProbeInput>,
{
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(info(inputs)))
}

/// Build a ProbeEngine from a ProbeConfig.
pub fn build_engine_from_config(config: &ProbeConfig) -> Result<ProbeEngine, ProbeError> {
    ProbeBuilder::from_config(config)?.build()
}

/// Build a ProbeEngine from a ProbeConfig, letting the caller adjust the
/// builder first (for example to supply an HTTP client with custom TLS roots).
pub fn build_engine_from_config_with<F>(
    config: &ProbeConfig,
    customize: F,
) -> Result<ProbeEngine, ProbeError>
where
    F: FnOnce(ProbeBuilder) -> ProbeBuilder,
{
    let builder = ProbeBuilder::from_config(config)?;
    customize(builder).build()
}

// Internal test modules (see src/tests)
#[cfg(test)]
mod tests;
