//! Builder for creating ProbeEngine instances.

use std::time::Duration;

use crate::config::ProbeConfig;
use crate::engine::ProbeEngine;
use crate::error::{ErrorPolicy, ProbeError};

/// Builder for creating ProbeEngine instances.
#[derive(Debug, Default)]
pub struct ProbeBuilder {
    error_policy: ErrorPolicy,
    concurrency: Option<usize>,
    timeout: Option<Duration>,
    client: Option<reqwest::Client>,
}

impl ProbeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error handling policy.
    pub fn with_mode(mut self, policy: ErrorPolicy) -> Self {
        self.error_policy = policy;
        self
    }

    /// Cap the number of probes in flight at once.
    ///
    /// Results keep input order whatever the cap. Zero is treated as one.
    pub fn with_concurrency(mut self, concurrency: usize) -> Self {
        self.concurrency = Some(concurrency.max(1));
        self
    }

    /// Give every input its own deadline, covering open, detect and decode.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a preconfigured HTTP client (proxies, TLS roots, headers).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Create a builder from a configuration.
    pub fn from_config(config: &ProbeConfig) -> Result<Self, ProbeError> {
        let mut builder = ProbeBuilder::new().with_mode(config.policy()?);

        if let Some(concurrency) = config.concurrency {
            builder = builder.with_concurrency(concurrency);
        }
        if let Some(timeout) = config.timeout() {
            builder = builder.with_timeout(timeout);
        }

        Ok(builder)
    }

    /// Build the ProbeEngine from the current configuration.
    pub fn build(self) -> Result<ProbeEngine, ProbeError> {
        let client = match self.client {
            Some(client) => client,
            None => reqwest::Client::builder().build()?,
        };

        Ok(ProbeEngine::new(
            client,
            self.error_policy,
            self.concurrency,
            self.timeout,
        ))
    }
}
