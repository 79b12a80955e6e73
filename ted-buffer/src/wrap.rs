// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::document::Document;

/// One relative terminal cursor movement, a single row or column step.
/// The screen layer turns these into the corresponding escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorCommand {
    Up,
    Down,
    Left,
    Right,
}

/// Where the cursor glyph sits: `row` is the physical row measured from the
/// top of the document (the session subtracts the scroll offset), `offset`
/// is the column within that wrap segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalPosition {
    pub row: usize,
    pub offset: usize,
}

/// Physical rows a logical line of `len` bytes occupies at wrap width
/// `width`. Always at least 1; a length of exactly `k * width` occupies
/// exactly `k` rows, never `k + 1`.
#[must_use]
pub const fn rows_for_line(len: usize, width: usize) -> usize {
    if len == 0 {
        1
    } else {
        len.div_ceil(width)
    }
}

/// The wrap/cursor engine: the logical cursor `(line, column)` plus the
/// arithmetic that keeps it consistent with the on-screen glyph.
///
/// Every move returns the relative cursor commands the terminal needs so
/// the glyph tracks the logical position without a redraw. `column` may
/// rest one past the end of its line; that end-of-line position is distinct
/// from the last character cell.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct WrapEngine {
    width: usize,
    line: usize,
    column: usize,

    /// Running total of physical rows occupied by the whole document,
    /// maintained incrementally (never recomputed per keystroke).
    physical_rows: usize,
}

impl WrapEngine {
    #[must_use]
    pub fn new(doc: &Document, width: usize) -> Self {
        let width = width.max(1);
        let physical_rows = (0..doc.line_count())
            .map(|idx| rows_for_line(doc.line(idx).len(), width))
            .sum();

        Self {
            width,
            line: 0,
            column: 0,
            physical_rows,
        }
    }

    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn column(&self) -> usize {
        self.column
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn physical_rows(&self) -> usize {
        self.physical_rows
    }

    /// Physical rows consumed by the lines above `line_index`.
    #[must_use]
    pub fn rows_before(&self, doc: &Document, line_index: usize) -> usize {
        (0..line_index.min(doc.line_count()))
            .map(|idx| rows_for_line(doc.line(idx).len(), self.width))
            .sum()
    }

    /// The cursor's physical position, measured from the document top.
    #[must_use]
    pub fn physical(&self, doc: &Document) -> PhysicalPosition {
        PhysicalPosition {
            row: self.rows_before(doc, self.line) + self.column / self.width,
            offset: self.column % self.width,
        }
    }

    /// Move one column left. At column 0 this is a no-op (no line change).
    ///
    /// Crossing a wrap boundary stays on the same logical line: the glyph
    /// goes up one row and right to the end of the previous wrap segment.
    /// The terminal clamps the rightward run at its last column.
    pub fn move_left(&mut self, _doc: &Document) -> Vec<CursorCommand> {
        if self.column == 0 {
            return Vec::new();
        }

        if self.column % self.width == 0 {
            self.column -= 1;
            trace!("cursor left across wrap boundary to column {}", self.column);

            let mut commands = vec![CursorCommand::Up];
            commands.extend(std::iter::repeat_n(CursorCommand::Right, self.width));
            return commands;
        }

        self.column -= 1;
        vec![CursorCommand::Left]
    }

    /// Move one column right. At the end of the line this is a no-op
    /// (end-of-line is a valid resting point).
    ///
    /// Crossing a wrap boundary emits a down step plus a run of left steps
    /// to return the glyph to visual column 0. The run can overshoot; the
    /// terminal clamps it at column 0.
    pub fn move_right(&mut self, doc: &Document) -> Vec<CursorCommand> {
        if self.column >= doc.line(self.line).len() {
            return Vec::new();
        }

        let next = self.column + 1;
        if next % self.width == 0 {
            let lefts = (next / self.width) * self.width;
            self.column = next;
            trace!("cursor right across wrap boundary to column {}", self.column);

            let mut commands = vec![CursorCommand::Down];
            commands.extend(std::iter::repeat_n(CursorCommand::Left, lefts));
            return commands;
        }

        self.column = next;
        vec![CursorCommand::Right]
    }

    /// Move to the previous logical line. No-op on the first line.
    ///
    /// The column re-clamps to the new line's length. The emitted commands
    /// carry the glyph the exact physical distance: one up step per
    /// physical row crossed (a wrapped line spans several), then the
    /// column steps that realign the wrap offset.
    pub fn move_up(&mut self, doc: &Document) -> Vec<CursorCommand> {
        if self.line == 0 {
            return Vec::new();
        }

        let from = self.physical(doc);
        self.line -= 1;
        self.clamp_column(doc);
        Self::steps_between(from, self.physical(doc))
    }

    /// Move to the next logical line. No-op on the last line.
    pub fn move_down(&mut self, doc: &Document) -> Vec<CursorCommand> {
        if self.line + 1 >= doc.line_count() {
            return Vec::new();
        }

        let from = self.physical(doc);
        self.line += 1;
        self.clamp_column(doc);
        Self::steps_between(from, self.physical(doc))
    }

    /// Account for one byte inserted at the cursor: the column advances and
    /// the running row total grows if an append pushed the line across a
    /// wrap boundary. Returns true when the row total changed.
    pub fn advance_after_insert(&mut self, old_len: usize, new_len: usize) -> bool {
        self.column += 1;

        let grew = rows_for_line(new_len, self.width) > rows_for_line(old_len, self.width);
        if grew {
            self.physical_rows += 1;
            trace!("line {} wrapped; {} physical rows total", self.line, self.physical_rows);
        }
        grew
    }

    /// Account for a line break: the cursor lands at column 0 of the new
    /// empty line, which occupies one new physical row.
    pub const fn advance_after_split(&mut self) {
        self.line += 1;
        self.column = 0;
        self.physical_rows += 1;
    }

    fn clamp_column(&mut self, doc: &Document) {
        self.column = self.column.min(doc.line(self.line).len());
    }

    /// Relative commands that carry the glyph from one physical position
    /// to another: row steps first, then column steps.
    fn steps_between(from: PhysicalPosition, to: PhysicalPosition) -> Vec<CursorCommand> {
        let mut commands = Vec::new();
        if to.row >= from.row {
            commands.extend(std::iter::repeat_n(CursorCommand::Down, to.row - from.row));
        } else {
            commands.extend(std::iter::repeat_n(CursorCommand::Up, from.row - to.row));
        }
        if to.offset >= from.offset {
            commands.extend(std::iter::repeat_n(CursorCommand::Right, to.offset - from.offset));
        } else {
            commands.extend(std::iter::repeat_n(CursorCommand::Left, from.offset - to.offset));
        }
        commands
    }
}
