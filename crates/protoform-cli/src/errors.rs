//! Error types for the protoform binary.

use std::io;
use std::sync::Arc;

use protoform_syntax::RefactorError;
use thiserror::Error;

use crate::telemetry::TelemetryError;

/// Failures that abort a protoform run.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded from its layers.
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    /// The tracing subscriber could not be installed.
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    /// Reading the source buffer from stdin failed.
    #[error("failed to read source from stdin: {source}")]
    Read {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Writing the rewritten buffer to stdout failed.
    #[error("failed to write output: {source}")]
    Write {
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The buffer could not be edited consistently.
    #[error("protocol extraction failed: {0}")]
    Refactor(#[from] RefactorError),
}
