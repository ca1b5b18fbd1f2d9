//! Layered configuration for the protoform binary.
//!
//! Values are merged by `ortho_config` from, in increasing precedence, the
//! built-in defaults, a TOML file named by `--config-path` or
//! `PROTOFORM_CONFIG_PATH`, `PROTOFORM_*` environment variables, and
//! command-line flags such as `--protocol-suffix`.

mod defaults;
mod logging;

use std::ffi::OsString;
use std::sync::Arc;

use ortho_config::{OrthoConfig, OrthoError};
use serde::{Deserialize, Serialize};

pub use defaults::{
    DEFAULT_INDENT, DEFAULT_LOG_FILTER, DEFAULT_PROTOCOL_BOUND, DEFAULT_PROTOCOL_SUFFIX,
    default_indent, default_log_filter, default_log_filter_string, default_log_format,
    default_protocol_bound, default_protocol_suffix,
};
pub use logging::{LogFormat, LogFormatParseError};

/// Resolved configuration for a protoform run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "PROTOFORM")]
pub struct Config {
    /// Tracing filter expression, in `EnvFilter` syntax.
    #[serde(default = "default_log_filter_string")]
    pub log_filter: String,
    /// Output format for diagnostics written to stderr.
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,
    /// Suffix appended to the class name to name the protocol.
    #[serde(default = "default_protocol_suffix")]
    pub protocol_suffix: String,
    /// Constraint written after the protocol name. Empty omits it.
    #[serde(default = "default_protocol_bound")]
    pub protocol_bound: String,
    /// Indentation placed before each copied signature.
    #[serde(default = "default_indent")]
    pub indent: String,
}

impl Config {
    /// Loads the configuration from every layer, taking CLI flags from
    /// `args`. The first item is the binary name.
    ///
    /// # Errors
    ///
    /// Returns an error if a layer cannot be read or a value is malformed.
    pub fn load_from_iter<I, T>(args: I) -> Result<Self, Arc<OrthoError>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        <Self as OrthoConfig>::load_from_iter(args)
    }

    /// Returns the tracing filter expression.
    #[must_use]
    pub fn log_filter(&self) -> &str {
        &self.log_filter
    }

    /// Returns the diagnostic output format.
    #[must_use]
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Returns the protocol name suffix.
    #[must_use]
    pub fn protocol_suffix(&self) -> &str {
        &self.protocol_suffix
    }

    /// Returns the protocol bound.
    #[must_use]
    pub fn protocol_bound(&self) -> &str {
        &self.protocol_bound
    }

    /// Returns the signature indent.
    #[must_use]
    pub fn indent(&self) -> &str {
        &self.indent
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            protocol_suffix: default_protocol_suffix(),
            protocol_bound: default_protocol_bound(),
            indent: default_indent(),
        }
    }
}
