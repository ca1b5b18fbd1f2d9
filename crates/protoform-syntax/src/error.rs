//! Error types for protocol extraction.
//!
//! Guard conditions that simply leave nothing to do are not errors; they are
//! reported as [`NoOpReason`](crate::NoOpReason). The variants here describe
//! internal failures where the buffer could not be edited consistently.

use thiserror::Error;

/// Internal failures raised while editing a source buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum RefactorError {
    /// A byte range fell outside the buffer.
    #[error("range {start}..{end} is outside the buffer of {len} bytes")]
    SpanOutOfBounds {
        /// Start of the requested range.
        start: usize,
        /// End of the requested range.
        end: usize,
        /// Length of the buffer text.
        len: usize,
    },

    /// A byte offset split a UTF-8 character.
    #[error("offset {offset} is not on a character boundary")]
    NotCharBoundary {
        /// The offending offset.
        offset: usize,
    },

    /// An extracted signature swallowed part of the class declaration.
    #[error("signature '{signature}' overlaps the class declaration '{declaration}'")]
    DeclarationConsumed {
        /// The signature whose removal overlapped the declaration.
        signature: String,
        /// The class declaration text.
        declaration: String,
    },
}

impl RefactorError {
    /// Creates an out-of-bounds error.
    #[must_use]
    pub const fn span_out_of_bounds(start: usize, end: usize, len: usize) -> Self {
        Self::SpanOutOfBounds { start, end, len }
    }

    /// Creates a character boundary error.
    #[must_use]
    pub const fn not_char_boundary(offset: usize) -> Self {
        Self::NotCharBoundary { offset }
    }

    /// Creates a declaration overlap error.
    #[must_use]
    pub fn declaration_consumed(
        signature: impl Into<String>,
        declaration: impl Into<String>,
    ) -> Self {
        Self::DeclarationConsumed {
            signature: signature.into(),
            declaration: declaration.into(),
        }
    }
}
