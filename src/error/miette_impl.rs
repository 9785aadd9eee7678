//! Miette integration for pretty error reporting.

use miette::{Diagnostic, Severity};
use thiserror::Error;

use super::{AggregateError, FailureKind, SingleProbeError};

/// A diagnostic wrapper for probe errors compatible with miette.
#[derive(Debug, Error, Diagnostic)]
#[error("{message}")]
pub struct ProbeDiagnostic {
    /// The error message
    pub message: String,

    #[source]
    /// The underlying error source
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,

    #[help]
    /// Help text for the user
    pub help: Option<String>,

    #[diagnostic(severity)]
    /// Severity level
    pub severity: Severity,
}

fn help_for(kind: FailureKind) -> &'static str {
    match kind {
        FailureKind::InvalidInput => {
            "Pass a file path, an http(s) URL, a base64 data URI or a byte stream"
        }
        FailureKind::IoFailure => "Check that the file exists or the URL is reachable",
        FailureKind::Unrecognized => {
            "Supported formats: png, gif, jpg, ico, cur, bmp, tiff, webp, psd"
        }
        FailureKind::MalformedHeader => "The image header is truncated or corrupt",
    }
}

impl From<SingleProbeError> for ProbeDiagnostic {
    fn from(e: SingleProbeError) -> Self {
        let help = help_for(e.error.kind());
        ProbeDiagnostic {
            message: format!("[{}] on '{}'", e.stage, e.target),
            source: Some(Box::new(e.error)),
            help: Some(help.into()),
            severity: Severity::Error,
        }
    }
}

impl From<AggregateError> for ProbeDiagnostic {
    fn from(agg: AggregateError) -> Self {
        match agg.errors.into_iter().next() {
            Some(e) => ProbeDiagnostic::from(e),
            None => ProbeDiagnostic {
                message: "Unknown probe error".into(),
                source: None,
                help: None,
                severity: Severity::Error,
            },
        }
    }
}

impl From<AggregateError> for miette::Report {
    fn from(agg: AggregateError) -> Self {
        miette::Report::new(ProbeDiagnostic::from(agg))
    }
}
