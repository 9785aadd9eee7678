//! Batch probe configuration.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{ErrorPolicy, ProbeError};

/// Configuration for a probe batch, loadable from JSON.
///
/// ```json
/// {
///   "inputs": ["photo.jpg", "https://example.com/banner.png"],
///   "error_policy": "accumulate",
///   "concurrency": 8,
///   "timeout_ms": 5000
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProbeConfig {
    /// Paths, URLs or data URIs, probed in this order
    #[serde(default)]
    pub inputs: Vec<String>,
    /// Error policy: "fast_fail" or "accumulate"
    #[serde(default)]
    pub error_policy: Option<String>,
    /// Maximum number of probes in flight; unbounded when absent
    #[serde(default)]
    pub concurrency: Option<usize>,
    /// Per-input deadline in milliseconds; none when absent
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl ProbeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    pub fn add_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }

    pub fn with_error_policy(mut self, policy: impl Into<String>) -> Self {
        self.error_policy = Some(policy.into());
        self
    }

    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency);
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// The parsed error policy, defaulting to `Accumulate`.
    pub fn policy(&self) -> Result<ErrorPolicy, ProbeError> {
        match self.error_policy.as_deref() {
            Some(s) => s.parse(),
            None => Ok(ErrorPolicy::default()),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
