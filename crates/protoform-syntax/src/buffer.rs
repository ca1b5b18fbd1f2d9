//! Line-oriented source buffer.
//!
//! The buffer owns a single representation of the text: its lines, split on
//! `\n` with terminators dropped. Flat byte offsets are mapped onto
//! [`LineColumn`] coordinates for range operations, so the line view and the
//! text view cannot drift apart. Joining the lines with `\n` reproduces the
//! original text byte-for-byte, including a trailing newline.

use std::fmt;
use std::ops::Range;

use crate::error::RefactorError;
use crate::position::LineColumn;

/// Mutable text buffer with synchronised line and flat-text views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceBuffer {
    lines: Vec<String>,
}

impl SourceBuffer {
    /// Creates a buffer from the complete text of a file.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(str::to_owned).collect(),
        }
    }

    /// Returns the line view.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Returns the line at `index`, if any.
    #[must_use]
    pub fn line(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    /// Number of lines, counting the empty line after a trailing newline.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Returns the complete text.
    #[must_use]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Length of the complete text in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        let content: usize = self.lines.iter().map(String::len).sum();
        content.saturating_add(self.lines.len().saturating_sub(1))
    }

    /// Returns `true` when the buffer holds no text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maps a byte offset in the complete text to a line and column.
    ///
    /// # Errors
    ///
    /// Returns an error if the offset lies past the end of the text or inside
    /// a multi-byte character.
    pub fn position(&self, offset: usize) -> Result<LineColumn, RefactorError> {
        let mut line_start = 0usize;
        for (index, line) in self.lines.iter().enumerate() {
            let line_end = line_start.saturating_add(line.len());
            if offset <= line_end {
                let column = offset.saturating_sub(line_start);
                if !line.is_char_boundary(column) {
                    return Err(RefactorError::not_char_boundary(offset));
                }
                return Ok(LineColumn::new(index, column));
            }
            line_start = line_end.saturating_add(1);
        }
        Err(RefactorError::span_out_of_bounds(offset, offset, self.len()))
    }

    /// Returns the text covered by `range`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is inverted, out of bounds, or splits a
    /// character.
    pub fn slice(&self, range: Range<usize>) -> Result<String, RefactorError> {
        let (start, end) = self.checked_positions(&range)?;
        let mut out = String::new();
        for index in start.line..=end.line {
            let line = self.line(index).unwrap_or_default();
            let from = if index == start.line { start.column } else { 0 };
            let to = if index == end.line {
                end.column
            } else {
                line.len()
            };
            out.push_str(line.get(from..to).unwrap_or_default());
            if index != end.line {
                out.push('\n');
            }
        }
        Ok(out)
    }

    /// Removes the text covered by `range` and returns it.
    ///
    /// A range spanning line breaks merges the first and last affected lines.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is inverted, out of bounds, or splits a
    /// character.
    pub fn remove(&mut self, range: Range<usize>) -> Result<String, RefactorError> {
        let removed = self.slice(range.clone())?;
        let (start, end) = self.checked_positions(&range)?;

        let head = self
            .line(start.line)
            .and_then(|line| line.get(..start.column))
            .unwrap_or_default();
        let tail = self
            .line(end.line)
            .and_then(|line| line.get(end.column..))
            .unwrap_or_default();
        let merged = format!("{head}{tail}");

        self.lines
            .splice(start.line..=end.line, std::iter::once(merged));
        Ok(removed)
    }

    /// Returns the index of the first line satisfying `predicate`.
    pub fn find_line(&self, mut predicate: impl FnMut(&str) -> bool) -> Option<usize> {
        self.lines.iter().position(|line| predicate(line))
    }

    /// Inserts `lines` before the line at `index`.
    ///
    /// An index equal to [`Self::line_count`] appends. Larger indices are
    /// clamped to the end of the buffer.
    pub fn insert_lines<I, S>(&mut self, index: usize, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let at = index.min(self.lines.len());
        self.lines
            .splice(at..at, lines.into_iter().map(Into::into));
    }

    /// Removes and returns the line at `index`.
    pub fn remove_line(&mut self, index: usize) -> Option<String> {
        (index < self.lines.len()).then(|| self.lines.remove(index))
    }

    fn checked_positions(
        &self,
        range: &Range<usize>,
    ) -> Result<(LineColumn, LineColumn), RefactorError> {
        if range.start > range.end {
            return Err(RefactorError::span_out_of_bounds(
                range.start,
                range.end,
                self.len(),
            ));
        }
        let start = self.position(range.start)?;
        let end = self.position(range.end)?;
        Ok((start, end))
    }
}

impl From<&str> for SourceBuffer {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl fmt::Display for SourceBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}
