//! Protocol extraction: assembles the rewritten buffer.
//!
//! [`Refactorer::apply`] runs the whole pipeline against one request. Guard
//! conditions that leave nothing to do produce
//! [`RefactorOutcome::Skipped`]; failures to edit the buffer consistently are
//! returned as [`RefactorError`].

use std::fmt;
use std::ops::Range;

use tracing::debug;

use crate::buffer::SourceBuffer;
use crate::declaration::ClassDeclaration;
use crate::error::RefactorError;
use crate::options::ProtocolOptions;
use crate::position::Selection;
use crate::signature::{Signature, extract_signatures};

const REFACTOR_TARGET: &str = concat!(env!("CARGO_PKG_NAME"), "::refactor");

/// The text handed over by a host, plus its active selections.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditRequest {
    source: String,
    selections: Vec<Selection>,
}

impl EditRequest {
    /// Creates a request without selections.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            selections: Vec::new(),
        }
    }

    /// Attaches the host's active selections.
    #[must_use]
    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.selections = selections;
        self
    }

    /// The complete buffer text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The active selections.
    #[must_use]
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }
}

/// Why a request left the buffer untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// More than one selection was active.
    MultipleSelections {
        /// Number of active selections.
        count: usize,
    },
    /// No class header was found.
    ClassNotFound,
    /// No line contains the word `class`.
    ClassLineNotFound,
}

impl fmt::Display for NoOpReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MultipleSelections { count } => {
                write!(f, "{count} selections are active; only one is supported")
            }
            Self::ClassNotFound => f.write_str("no class declaration found"),
            Self::ClassLineNotFound => f.write_str("no line contains a class declaration"),
        }
    }
}

/// A completed extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Refactoring {
    text: String,
    protocol_name: String,
    declaration: String,
    signatures: Vec<Signature>,
    inserted_at: usize,
}

impl Refactoring {
    /// The rewritten buffer text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the refactoring, returning the rewritten text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }

    /// Name of the synthesized protocol.
    #[must_use]
    pub fn protocol_name(&self) -> &str {
        &self.protocol_name
    }

    /// The rewritten class declaration line.
    #[must_use]
    pub fn declaration(&self) -> &str {
        &self.declaration
    }

    /// Signatures copied into the protocol, in discovery order.
    #[must_use]
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Zero-based line index of the protocol header in the rewritten text.
    #[must_use]
    pub const fn inserted_at(&self) -> usize {
        self.inserted_at
    }
}

/// Result of a refactor request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefactorOutcome {
    /// The buffer was rewritten.
    Applied(Refactoring),
    /// Nothing was done.
    Skipped(NoOpReason),
}

impl RefactorOutcome {
    /// Returns `true` when the buffer was rewritten.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }

    /// Returns the completed refactoring, if any.
    #[must_use]
    pub const fn refactoring(&self) -> Option<&Refactoring> {
        match self {
            Self::Applied(refactoring) => Some(refactoring),
            Self::Skipped(_) => None,
        }
    }

    /// Returns the skip reason, if any.
    #[must_use]
    pub const fn skip_reason(&self) -> Option<NoOpReason> {
        match self {
            Self::Applied(_) => None,
            Self::Skipped(reason) => Some(*reason),
        }
    }

    /// Returns the text a host should write back: the rewritten text when
    /// applied, otherwise `original`.
    #[must_use]
    pub fn into_text_or(self, original: String) -> String {
        match self {
            Self::Applied(refactoring) => refactoring.into_text(),
            Self::Skipped(_) => original,
        }
    }
}

/// Extracts a protocol from the first class of a buffer.
#[derive(Debug, Clone, Default)]
pub struct Refactorer {
    options: ProtocolOptions,
}

impl Refactorer {
    /// Creates a refactorer with the given options.
    #[must_use]
    pub const fn new(options: ProtocolOptions) -> Self {
        Self { options }
    }

    /// Returns the options in use.
    #[must_use]
    pub const fn options(&self) -> &ProtocolOptions {
        &self.options
    }

    /// Runs the extraction against `request`.
    ///
    /// Method signatures are stripped from the buffer and copied, in order,
    /// into a protocol inserted above the first line mentioning `class`. The
    /// class header is rewritten to conform to that protocol. Method bodies
    /// are left in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the buffer cannot be edited consistently, for
    /// example when a signature swallowed part of the class header.
    pub fn apply(&self, request: &EditRequest) -> Result<RefactorOutcome, RefactorError> {
        let count = request.selections().len();
        if count > 1 {
            return Ok(skipped(NoOpReason::MultipleSelections { count }));
        }

        let mut working = SourceBuffer::new(request.source());
        let signatures = extract_signatures(&mut working)?;

        let Some(declaration) = ClassDeclaration::locate(request.source()) else {
            return Ok(skipped(NoOpReason::ClassNotFound));
        };
        let protocol_name = declaration.protocol_name(self.options.suffix());
        let rewritten = declaration.conforming_to(&protocol_name);

        let header = shift_past_removals(&declaration, &signatures)?;
        let Some(class_line) = working.find_line(|line| line.contains("class")) else {
            return Ok(skipped(NoOpReason::ClassLineNotFound));
        };

        let header_line = working.position(header.start)?.line;
        let removal = extend_over_brace(&working.text(), header);
        working.remove(removal)?;
        if working
            .line(header_line)
            .is_some_and(|line| line.trim().is_empty())
        {
            working.remove_line(header_line);
        }

        let inserted_at = class_line.min(working.line_count());
        working.insert_lines(
            inserted_at,
            self.protocol_block(&protocol_name, &signatures, &rewritten),
        );

        debug!(
            target: REFACTOR_TARGET,
            protocol = %protocol_name,
            signatures = signatures.len(),
            line = inserted_at,
            "inserted protocol"
        );

        Ok(RefactorOutcome::Applied(Refactoring {
            text: working.text(),
            protocol_name,
            declaration: rewritten,
            signatures,
            inserted_at,
        }))
    }

    /// Builds the protocol block followed by the rewritten declaration.
    fn protocol_block(
        &self,
        protocol_name: &str,
        signatures: &[Signature],
        declaration: &str,
    ) -> Vec<String> {
        let mut lines = vec![self.options.header_line(protocol_name)];
        for signature in signatures {
            let mut parts = signature.text().split('\n');
            if let Some(first) = parts.next() {
                lines.push(format!("{}{first}", self.options.indent()));
            }
            lines.extend(parts.map(str::to_owned));
        }
        lines.push(String::new());
        lines.push(String::from("}"));
        lines.push(declaration.to_owned());
        lines
    }
}

/// Runs the extraction with default options on a request without selections.
///
/// # Errors
///
/// Returns an error if the buffer cannot be edited consistently.
pub fn extract_protocol(source: &str) -> Result<RefactorOutcome, RefactorError> {
    Refactorer::default().apply(&EditRequest::new(source))
}

fn skipped(reason: NoOpReason) -> RefactorOutcome {
    debug!(target: REFACTOR_TARGET, %reason, "refactor skipped");
    RefactorOutcome::Skipped(reason)
}

/// Maps the header span from the original text into the stripped working
/// text by replaying the signature removals in order.
fn shift_past_removals(
    declaration: &ClassDeclaration,
    signatures: &[Signature],
) -> Result<Range<usize>, RefactorError> {
    let mut header = declaration.span();
    for signature in signatures {
        let removed = signature.span();
        if removed.end <= header.start {
            let width = removed.len();
            header = header.start.saturating_sub(width)..header.end.saturating_sub(width);
        } else if removed.start < header.end {
            return Err(RefactorError::declaration_consumed(
                signature.text(),
                declaration.text(),
            ));
        }
    }
    Ok(header)
}

/// Extends the header span over following whitespace and the opening brace,
/// which the rewritten declaration replaces. Without a brace the span is
/// returned unchanged.
fn extend_over_brace(text: &str, header: Range<usize>) -> Range<usize> {
    let rest = text.get(header.end..).unwrap_or_default();
    let trimmed = rest.trim_start();
    if trimmed.starts_with('{') {
        let brace_end = header
            .end
            .saturating_add(rest.len() - trimmed.len())
            .saturating_add(1);
        header.start..brace_end
    } else {
        header
    }
}
