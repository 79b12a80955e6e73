// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The editing session: one owned state struct threaded through a flat
//! dispatch loop. Reads one byte, applies its effect to the document and
//! the wrap engine, writes the incremental terminal output, repeats.

use std::io::{Read, Write};
use std::path::PathBuf;

use anyhow::Result;

use ted_buffer::document::Document;
use ted_buffer::storage;
use ted_buffer::wrap::{CursorCommand, WrapEngine, rows_for_line};
use ted_common::keys::EditorInput;
use ted_common::viewport::Viewport;

use crate::screen::Screen;
use crate::term;

pub struct Session<R: Read, W: Write> {
    doc: Document,
    engine: WrapEngine,
    screen: Screen<W>,
    input: R,
    viewport: Viewport,
    path: PathBuf,

    /// First visible logical line; advances when the cursor leaves the
    /// text area.
    top_line: usize,

    /// What the status line last showed, to skip redundant redraws.
    shown_rows: usize,
    shown_dirty: bool,
}

impl<R: Read, W: Write> Session<R, W> {
    #[must_use]
    pub fn new(doc: Document, viewport: Viewport, input: R, out: W, path: PathBuf) -> Self {
        let engine = WrapEngine::new(&doc, viewport.width());
        let shown_rows = engine.physical_rows();

        Self {
            doc,
            engine,
            screen: Screen::new(out),
            input,
            viewport,
            path,
            top_line: 0,
            shown_rows,
            shown_dirty: false,
        }
    }

    /// Run until quit. Every mutation is flushed before the next read so
    /// each keystroke's effect is visible immediately.
    ///
    /// # Errors
    /// Returns the first input, output, allocation, or save failure; all
    /// are fatal to the session.
    pub fn run(&mut self) -> Result<()> {
        info!("editing {}", self.path.display());
        self.refresh()?;

        loop {
            let byte = term::read_key(&mut self.input)?;
            match EditorInput::from(byte) {
                EditorInput::Quit => {
                    self.quit()?;
                    return Ok(());
                }
                movement @ (EditorInput::MoveUp
                | EditorInput::MoveDown
                | EditorInput::MoveLeft
                | EditorInput::MoveRight) => self.movement(movement)?,
                EditorInput::LineBreak => self.line_break()?,
                EditorInput::Insert(byte) => self.insert(byte)?,
                EditorInput::Ignored => trace!("ignoring byte {byte:#04x}"),
            }
        }
    }

    /// Save iff the document was mutated, then leave a clean screen.
    fn quit(&mut self) -> Result<()> {
        if self.doc.is_dirty() {
            storage::save_document(&self.doc, &self.path)?;
            self.doc.mark_clean();
            info!("saved {}", self.path.display());
        } else {
            debug!("no changes; skipping save");
        }

        self.screen.clear()?;
        self.screen.flush()?;
        Ok(())
    }

    fn insert(&mut self, byte: u8) -> Result<()> {
        let line = self.engine.line();
        let column = self.engine.column();
        let old_len = self.doc.line(line).len();

        self.doc.insert_char(line, column, byte)?;
        let new_len = self.doc.line(line).len();
        let crossed = self.engine.advance_after_insert(old_len, new_len);

        // Echo the literal byte; the terminal advances in step with the
        // logical column. Crossing a wrap boundary shifts every row below
        // down by one, so that case is a redraw, not an echo.
        self.screen.write_byte(byte)?;

        if crossed {
            self.ensure_visible();
            self.refresh()?;
        } else {
            self.sync_status()?;
        }

        self.screen.flush()?;
        Ok(())
    }

    /// A break always opens a new empty line below the cursor's line; the
    /// rest of the current line stays where it is. Content below shifts
    /// down a row, so this is a redraw rather than an incremental update.
    fn line_break(&mut self) -> Result<()> {
        self.doc.split_line(self.engine.line());
        self.engine.advance_after_split();

        self.ensure_visible();
        self.refresh()
    }

    fn movement(&mut self, input: EditorInput) -> Result<()> {
        let commands = match input {
            EditorInput::MoveUp => self.engine.move_up(&self.doc),
            EditorInput::MoveDown => self.engine.move_down(&self.doc),
            EditorInput::MoveLeft => self.engine.move_left(&self.doc),
            EditorInput::MoveRight => self.engine.move_right(&self.doc),
            _ => Vec::new(),
        };

        if self.ensure_visible() {
            self.refresh()?;
        } else {
            self.screen.apply(&commands)?;
            self.screen.flush()?;
        }
        Ok(())
    }

    /// Shift `top_line` until the cursor's physical row is inside the text
    /// area. Returns true when the viewport moved (caller must redraw).
    fn ensure_visible(&mut self) -> bool {
        let phys = self.engine.physical(&self.doc);
        let text_rows = self.viewport.text_rows();
        let mut moved = false;

        if phys.row < self.engine.rows_before(&self.doc, self.top_line) {
            self.top_line = self.engine.line();
            moved = true;
        }

        while phys.row >= self.engine.rows_before(&self.doc, self.top_line) + text_rows {
            self.top_line += 1;
            moved = true;
        }

        if moved {
            trace!("scrolled; top line now {}", self.top_line);
        }
        moved
    }

    /// Full redraw: wrapped document text, `~` on rows past the end,
    /// status line on the bottom row, cursor repositioned.
    fn refresh(&mut self) -> Result<()> {
        let status = self.status_text();
        let width = self.engine.width();
        let text_rows = self.viewport.text_rows();

        let doc = &self.doc;
        let screen = &mut self.screen;

        screen.hide_cursor()?;
        screen.clear()?;

        let mut drawn = 0;
        let mut line_idx = self.top_line;
        'text: while line_idx < doc.line_count() {
            let bytes = doc.line(line_idx).as_bytes();
            for segment in 0..rows_for_line(bytes.len(), width) {
                if drawn == text_rows {
                    break 'text;
                }
                let start = segment * width;
                let end = (start + width).min(bytes.len());
                screen.clear_line_right()?;
                screen.write_bytes(&bytes[start..end])?;
                screen.newline()?;
                drawn += 1;
            }
            line_idx += 1;
        }

        while drawn < text_rows {
            screen.clear_line_right()?;
            screen.write_bytes(b"~")?;
            screen.newline()?;
            drawn += 1;
        }

        screen.clear_line_right()?;
        screen.write_bytes(status.as_bytes())?;

        // Reposition: home, then walk down and right to the cursor's
        // physical cell.
        screen.home()?;
        let phys = self.engine.physical(doc);
        let down = phys.row - self.engine.rows_before(doc, self.top_line);
        for _ in 0..down {
            screen.step(CursorCommand::Down)?;
        }
        for _ in 0..phys.offset {
            screen.step(CursorCommand::Right)?;
        }

        screen.show_cursor()?;
        screen.flush()?;

        self.shown_rows = self.engine.physical_rows();
        self.shown_dirty = self.doc.is_dirty();
        Ok(())
    }

    /// Redraw the status line in place when its contents changed, using
    /// save/restore so the cursor glyph does not move.
    fn sync_status(&mut self) -> Result<()> {
        if self.shown_rows == self.engine.physical_rows() && self.shown_dirty == self.doc.is_dirty()
        {
            return Ok(());
        }

        let status = self.status_text();
        let screen = &mut self.screen;

        screen.save_cursor()?;
        screen.home()?;
        for _ in 0..self.viewport.rows().saturating_sub(1) {
            screen.step(CursorCommand::Down)?;
        }
        screen.clear_line_right()?;
        screen.write_bytes(status.as_bytes())?;
        screen.restore_cursor()?;

        self.shown_rows = self.engine.physical_rows();
        self.shown_dirty = self.doc.is_dirty();
        Ok(())
    }

    fn status_text(&self) -> String {
        let name = self
            .path
            .file_name()
            .map_or_else(|| "scratch".to_string(), |n| n.to_string_lossy().into_owned());
        let marker = if self.doc.is_dirty() { " [+]" } else { "" };

        let status = format!("{name}{marker} | {} rows", self.engine.physical_rows());
        if status.len() > self.viewport.width() {
            // Char-wise so a multibyte file name cannot split a boundary.
            return status.chars().take(self.viewport.width()).collect();
        }
        status
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.screen.into_inner()
    }
}
