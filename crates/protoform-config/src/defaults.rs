use crate::logging::LogFormat;

/// Default log filter expression. Diagnostics stay quiet unless asked for.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Suffix appended to the class name to form the protocol name.
pub const DEFAULT_PROTOCOL_SUFFIX: &str = "Protocol";

/// Constraint written after the protocol name.
pub const DEFAULT_PROTOCOL_BOUND: &str = "AnyObject";

/// Indentation placed before each copied signature.
pub const DEFAULT_INDENT: &str = "\t";

/// Default log filter expression used by the binary.
#[must_use]
pub const fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
#[must_use]
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_owned()
}

/// Default logging format for the binary.
#[must_use]
pub const fn default_log_format() -> LogFormat {
    LogFormat::Compact
}

/// Owned protocol suffix for serde defaults.
#[must_use]
pub fn default_protocol_suffix() -> String {
    DEFAULT_PROTOCOL_SUFFIX.to_owned()
}

/// Owned protocol bound for serde defaults.
#[must_use]
pub fn default_protocol_bound() -> String {
    DEFAULT_PROTOCOL_BOUND.to_owned()
}

/// Owned signature indent for serde defaults.
#[must_use]
pub fn default_indent() -> String {
    DEFAULT_INDENT.to_owned()
}
