// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 24;

/// Terminal dimensions, queried once at startup. Resize events are not
/// observed; the viewport is fixed for the life of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    rows: usize,
    cols: usize,
}

impl Viewport {
    #[must_use]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: if rows == 0 { DEFAULT_HEIGHT } else { rows },
            cols: if cols == 0 { DEFAULT_WIDTH } else { cols },
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Wrap width. A logical line longer than this spans multiple
    /// physical rows.
    #[must_use]
    pub const fn width(&self) -> usize {
        self.cols
    }

    /// Rows available for document text. The bottom row is reserved for
    /// the status line.
    #[must_use]
    pub const fn text_rows(&self) -> usize {
        if self.rows > 1 { self.rows - 1 } else { 1 }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT, DEFAULT_WIDTH)
    }
}
