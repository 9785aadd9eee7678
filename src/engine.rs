//! Asynchronous probe engine: runs many probes at once and keeps their order.

use std::future::Future;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use tokio::time::Instant;

use crate::error::{AggregateError, ErrorPolicy, ProbeError, SingleProbeError, Stage};
use crate::format::{self, HeaderBuf, Metadata, PREFIX_LEN};
use crate::io::{ProbeInput, StreamSource, classify};

/// Engine that probes batches of inputs concurrently.
///
/// Each input gets its own `StreamSource`; the only thing probes share is the
/// HTTP client's connection pool.
#[derive(Debug, Clone)]
pub struct ProbeEngine {
    client: reqwest::Client,
    error_policy: ErrorPolicy,
    concurrency: Option<usize>,
    timeout: Option<Duration>,
}

impl ProbeEngine {
    /// Create a new probe engine.
    ///
    /// `concurrency` of `None` runs every input at once. `timeout` of `None`
    /// lets a stalled input hold its slot until the caller gives up.
    pub fn new(
        client: reqwest::Client,
        error_policy: ErrorPolicy,
        concurrency: Option<usize>,
        timeout: Option<Duration>,
    ) -> Self {
        Self {
            client,
            error_policy,
            concurrency,
            timeout,
        }
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    pub fn concurrency(&self) -> Option<usize> {
        self.concurrency
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Probe a single input.
    pub async fn probe(&self, input: impl Into<ProbeInput>) -> Result<Metadata, SingleProbeError> {
        let result = self.probe_one(0, input.into()).await;
        log_result(&result);
        result
    }

    /// Probe every input, returning one slot per input in input order.
    ///
    /// Under `ErrorPolicy::Accumulate` a failing input becomes `None` and the
    /// call always succeeds. Under `ErrorPolicy::FastFail` the first failing
    /// input (by position) is returned as the error.
    pub async fn probe_all<I>(&self, inputs: I) -> Result<Vec<Option<Metadata>>, AggregateError>
    where
        I: IntoIterator,
        I::Item: Into<ProbeInput>,
    {
        let results = self.probe_all_detailed(inputs).await;
        let mut values = Vec::with_capacity(results.len());

        for result in results {
            match result {
                Ok(meta) => values.push(Some(meta)),
                Err(e) => {
                    if matches!(self.error_policy, ErrorPolicy::FastFail) {
                        return Err(AggregateError::single(e));
                    }
                    values.push(None);
                }
            }
        }

        Ok(values)
    }

    /// Probe every input and keep each failure, in input order.
    ///
    /// Uses `buffer_unordered` so slow inputs do not hold back fast ones;
    /// each result is written back to the slot of the input it came from.
    pub async fn probe_all_detailed<I>(&self, inputs: I) -> Vec<Result<Metadata, SingleProbeError>>
    where
        I: IntoIterator,
        I::Item: Into<ProbeInput>,
    {
        let inputs: Vec<ProbeInput> = inputs.into_iter().map(Into::into).collect();
        let total = inputs.len();
        let limit = self.concurrency.unwrap_or(total).max(1);

        let futs = inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| async move { (index, self.probe_one(index, input).await) });

        let mut slots: Vec<Option<Result<Metadata, SingleProbeError>>> =
            std::iter::repeat_with(|| None).take(total).collect();

        let mut completed = stream::iter(futs).buffer_unordered(limit);
        while let Some((index, result)) = completed.next().await {
            log_result(&result);
            slots[index] = Some(result);
        }

        // buffer_unordered drives every future to completion, so no slot is empty.
        slots.into_iter().flatten().collect()
    }

    async fn probe_one(
        &self,
        index: usize,
        input: ProbeInput,
    ) -> Result<Metadata, SingleProbeError> {
        let target = input.id();
        let fail = |stage: Stage| {
            let target = target.clone();
            move |error: ProbeError| SingleProbeError {
                index,
                stage,
                target,
                error,
            }
        };

        let deadline = self.timeout.map(|t| Instant::now() + t);

        let descriptor = self
            .within(deadline, classify(input))
            .await
            .map_err(fail(Stage::Resolve))?;

        let mut stream = self
            .within(deadline, StreamSource::open(descriptor, &self.client))
            .await
            .map_err(fail(Stage::Open))?;

        let prefix = self
            .within(deadline, async {
                Ok::<_, ProbeError>(stream.read(PREFIX_LEN).await?)
            })
            .await
            .map_err(fail(Stage::Detect))?;

        let kind = format::detect(&prefix)
            .ok_or(ProbeError::Unrecognized)
            .map_err(fail(Stage::Detect))?;

        let mut header = HeaderBuf::new(prefix, &mut stream);
        self.within(deadline, async {
            Ok::<_, ProbeError>(format::decode(kind, &mut header).await?)
        })
        .await
        .map_err(fail(Stage::Decode))
    }

    /// Run `fut` against the input's deadline, if there is one.
    async fn within<T, F>(&self, deadline: Option<Instant>, fut: F) -> Result<T, ProbeError>
    where
        F: Future<Output = Result<T, ProbeError>>,
    {
        match (deadline, self.timeout) {
            (Some(deadline), Some(timeout)) => tokio::time::timeout_at(deadline, fut)
                .await
                .map_err(|_| ProbeError::TimedOut(timeout))?,
            _ => fut.await,
        }
    }
}

fn log_result(result: &Result<Metadata, SingleProbeError>) {
    match result {
        Ok(meta) => tracing::debug!(
            format = %meta.format,
            width = ?meta.width,
            height = ?meta.height,
            "probe succeeded"
        ),
        Err(e) => tracing::warn!(
            index = e.index,
            input = %e.target,
            stage = %e.stage,
            error = %e.error,
            "probe failed"
        ),
    }
}
