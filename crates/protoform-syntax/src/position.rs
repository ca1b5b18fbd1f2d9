//! Line and column coordinates within a [`SourceBuffer`](crate::SourceBuffer).
//!
//! Coordinates are zero-based; the column is a byte offset within the line.
//! For user-facing messages, [`LineColumn::one_based`] gives the editor
//! numbering.

use std::fmt;

/// A zero-based line index and byte column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LineColumn {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based byte offset within the line.
    pub column: usize,
}

impl LineColumn {
    /// Creates a new coordinate.
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Converts to one-based display coordinates.
    #[must_use]
    pub const fn one_based(self) -> (usize, usize) {
        (self.line.saturating_add(1), self.column.saturating_add(1))
    }
}

impl fmt::Display for LineColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (line, column) = self.one_based();
        write!(f, "{line}:{column}")
    }
}

/// An editor selection, expressed as a pair of coordinates.
///
/// Only the number of selections influences a refactor; the coordinates are
/// carried so hosts can pass their state through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    /// Selection anchor.
    pub start: LineColumn,
    /// Selection head.
    pub end: LineColumn,
}

impl Selection {
    /// Creates a selection spanning `start..end`.
    #[must_use]
    pub const fn new(start: LineColumn, end: LineColumn) -> Self {
        Self { start, end }
    }

    /// Creates an empty selection, i.e. a bare cursor.
    #[must_use]
    pub const fn caret(at: LineColumn) -> Self {
        Self { start: at, end: at }
    }
}
