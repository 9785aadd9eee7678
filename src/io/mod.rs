//! Input classification and byte sources.
//!
//! This module provides:
//! - `ByteReader`: Trait for incrementally-readable byte sources
//! - `MemoryReader`, `AsyncReadSource`, `HttpReader`: Standard implementations
//! - `ProbeInput` / `InputDescriptor` / `classify`: The source resolver
//! - `StreamSource`: The per-probe buffer and cursor decoders pull from

mod http;
mod memory;
mod reader;
mod resolve;
mod source;

pub use http::HttpReader;
pub use memory::MemoryReader;
pub use reader::{AsyncReadSource, ByteReader};
pub use resolve::{InputDescriptor, ProbeInput, classify};
pub use source::StreamSource;
