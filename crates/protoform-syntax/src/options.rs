//! Formatting options for the synthesized protocol.

/// Controls how the protocol block is named and laid out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolOptions {
    suffix: String,
    bound: String,
    indent: String,
}

impl ProtocolOptions {
    /// Suffix appended to the class name by default.
    pub const DEFAULT_SUFFIX: &'static str = "Protocol";
    /// Protocol constraint written by default.
    pub const DEFAULT_BOUND: &'static str = "AnyObject";
    /// Signature indentation used by default.
    pub const DEFAULT_INDENT: &'static str = "\t";

    /// Creates options from explicit values.
    #[must_use]
    pub fn new(
        suffix: impl Into<String>,
        bound: impl Into<String>,
        indent: impl Into<String>,
    ) -> Self {
        Self {
            suffix: suffix.into(),
            bound: bound.into(),
            indent: indent.into(),
        }
    }

    /// Replaces the protocol name suffix.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Replaces the protocol constraint. An empty bound omits the constraint.
    #[must_use]
    pub fn with_bound(mut self, bound: impl Into<String>) -> Self {
        self.bound = bound.into();
        self
    }

    /// Replaces the signature indentation.
    #[must_use]
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Suffix appended to the class name.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Constraint written after the protocol name.
    #[must_use]
    pub fn bound(&self) -> &str {
        &self.bound
    }

    /// Prefix applied to each signature line.
    #[must_use]
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Renders the opening line of the protocol block.
    #[must_use]
    pub fn header_line(&self, protocol_name: &str) -> String {
        if self.bound.trim().is_empty() {
            format!("protocol {protocol_name} {{")
        } else {
            format!("protocol {protocol_name}: {} {{", self.bound)
        }
    }
}

impl Default for ProtocolOptions {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_SUFFIX,
            Self::DEFAULT_BOUND,
            Self::DEFAULT_INDENT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::ProtocolOptions;

    #[test]
    fn default_header_is_class_bound() {
        let options = ProtocolOptions::default();
        assert_eq!(
            options.header_line("FooProtocol"),
            "protocol FooProtocol: AnyObject {"
        );
    }

    #[test]
    fn empty_bound_drops_the_constraint() {
        let options = ProtocolOptions::default().with_bound("");
        assert_eq!(options.header_line("FooProtocol"), "protocol FooProtocol {");
    }
}
