// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::line::{Line, LineError};

/// The in-memory representation of the file: an ordered sequence of logical
/// lines plus a dirty flag.
///
/// Invariant: there is always at least one line. Lines are never
/// individually deleted; the sequence only grows (splits) or is replaced
/// wholesale on load.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Document {
    lines: Vec<Line>,
    dirty: bool,
}

impl Document {
    /// A fresh document: one empty line, not dirty.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lines: vec![Line::new()],
            dirty: false,
        }
    }

    /// Split raw file contents on `\n` into lines. The delimiter byte is
    /// consumed, not stored. A trailing record with no terminator becomes
    /// the final line; empty input yields a single empty line.
    ///
    /// # Errors
    /// Returns `LineError::Allocation` if line storage cannot be allocated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LineError> {
        let mut lines = Vec::new();
        for record in bytes.split(|&b| b == b'\n') {
            lines.push(Line::from_bytes(record)?);
        }

        // A terminated final record leaves one spurious empty split piece.
        if bytes.last() == Some(&b'\n') {
            lines.pop();
        }

        if lines.is_empty() {
            lines.push(Line::new());
        }

        let doc = Self {
            lines,
            dirty: false,
        };
        doc.debug_assert_invariants();
        Ok(doc)
    }

    /// Serialize for saving: every line's bytes followed by a single `\n`,
    /// in order. The output always ends with the final line's terminator.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let total: usize = self.lines.iter().map(|line| line.len() + 1).sum();
        let mut out = Vec::with_capacity(total);
        for line in &self.lines {
            out.extend_from_slice(line.as_bytes());
            out.push(b'\n');
        }
        out
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn line(&self, index: usize) -> &Line {
        &self.lines[index]
    }

    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Called after a successful save.
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Insert one byte at `(line, column)`.
    ///
    /// At end of line this appends. Mid-line it overwrites the existing
    /// byte in place: typed characters replace rather than push right.
    ///
    /// # Errors
    /// Returns `LineError::Allocation` if an append cannot grow the line.
    pub fn insert_char(&mut self, line: usize, column: usize, byte: u8) -> Result<(), LineError> {
        self.debug_assert_invariants();

        let target = &mut self.lines[line];
        if column >= target.len() {
            target.push(byte)?;
        } else {
            target.overwrite(column, byte);
        }

        self.dirty = true;
        Ok(())
    }

    /// Line break: a new empty line is inserted immediately after `line`.
    /// The remainder of the current line stays put; a break always opens an
    /// empty line rather than carrying trailing text down.
    pub fn split_line(&mut self, line: usize) {
        self.debug_assert_invariants();
        debug_assert!(line < self.lines.len(), "split past end of document");

        let at = (line + 1).min(self.lines.len());
        self.lines.insert(at, Line::new());
        self.dirty = true;
    }

    /// Internal consistency checks for debug builds.
    #[cfg(debug_assertions)]
    fn debug_assert_invariants(&self) {
        debug_assert!(
            !self.lines.is_empty(),
            "document must always contain at least one line"
        );
    }

    // In release builds this is a no-op, so we can call it freely.
    #[cfg(not(debug_assertions))]
    #[inline]
    const fn debug_assert_invariants(&self) {}
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
