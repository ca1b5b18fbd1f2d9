//! Stdin-to-stdout host for protocol extraction.
//!
//! The binary reads one source buffer from stdin, extracts a protocol from
//! its first class, and writes the resulting buffer to stdout. Skipped
//! requests echo the input unchanged; internal editing failures are reported
//! as [`CliError`] and the buffer is not written.

mod errors;
pub mod telemetry;

#[cfg(test)]
mod tests;

use std::io::{Read, Write};

use protoform_config::Config;
use protoform_syntax::{EditRequest, ProtocolOptions, RefactorOutcome, Refactorer};
use tracing::info;

pub use errors::CliError;

const RUN_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::run");

/// Maps the loaded configuration onto protocol rendering options.
#[must_use]
pub fn protocol_options(config: &Config) -> ProtocolOptions {
    ProtocolOptions::new(
        config.protocol_suffix(),
        config.protocol_bound(),
        config.indent(),
    )
}

/// Reads a buffer from `stdin`, extracts a protocol, and writes the result to
/// `stdout`.
///
/// # Errors
///
/// Returns an error if stdin is not valid UTF-8 or cannot be read, if the
/// buffer cannot be edited consistently, or if writing the output fails.
pub fn run(
    stdin: &mut impl Read,
    stdout: &mut impl Write,
    config: &Config,
) -> Result<RefactorOutcome, CliError> {
    let mut source = String::new();
    stdin
        .read_to_string(&mut source)
        .map_err(|source_error| CliError::Read {
            source: source_error,
        })?;

    let refactorer = Refactorer::new(protocol_options(config));
    let outcome = refactorer.apply(&EditRequest::new(source.as_str()))?;

    let output = match &outcome {
        RefactorOutcome::Applied(refactoring) => {
            info!(
                target: RUN_TARGET,
                protocol = refactoring.protocol_name(),
                signatures = refactoring.signatures().len(),
                "protocol extracted"
            );
            refactoring.text()
        }
        RefactorOutcome::Skipped(reason) => {
            info!(target: RUN_TARGET, %reason, "buffer left unchanged");
            source.as_str()
        }
    };

    stdout
        .write_all(output.as_bytes())
        .and_then(|()| stdout.flush())
        .map_err(|source_error| CliError::Write {
            source: source_error,
        })?;
    Ok(outcome)
}
