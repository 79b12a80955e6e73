// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Low-level terminal output: every byte the editor emits goes through
//! here. Generic over the writer so tests can capture the exact escape
//! sequences in a `Vec<u8>`.

use std::io::{self, Write};

use ted_buffer::wrap::CursorCommand;
use ted_common::escape;

pub struct Screen<W: Write> {
    out: W,
}

impl<W: Write> Screen<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn put(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.out.write_all(bytes)
    }

    /// Clear the whole screen and home the cursor.
    pub fn clear(&mut self) -> io::Result<()> {
        self.put(escape::CLEAR_SCREEN)?;
        self.put(escape::CURSOR_HOME)
    }

    pub fn home(&mut self) -> io::Result<()> {
        self.put(escape::CURSOR_HOME)
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        self.put(escape::HIDE_CURSOR)
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        self.put(escape::SHOW_CURSOR)
    }

    pub fn save_cursor(&mut self) -> io::Result<()> {
        self.put(escape::SAVE_CURSOR)
    }

    pub fn restore_cursor(&mut self) -> io::Result<()> {
        self.put(escape::RESTORE_CURSOR)
    }

    pub fn clear_line_right(&mut self) -> io::Result<()> {
        self.put(escape::CLEAR_LINE_RIGHT)
    }

    /// Echo one literal byte at the cursor.
    pub fn write_byte(&mut self, byte: u8) -> io::Result<()> {
        self.put(&[byte])
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.put(bytes)
    }

    /// Raw mode disables output post-processing, so a bare `\n` does not
    /// return the carriage.
    pub fn newline(&mut self) -> io::Result<()> {
        self.put(b"\r\n")
    }

    pub fn step(&mut self, command: CursorCommand) -> io::Result<()> {
        self.put(match command {
            CursorCommand::Up => escape::CURSOR_UP,
            CursorCommand::Down => escape::CURSOR_DOWN,
            CursorCommand::Left => escape::CURSOR_LEFT,
            CursorCommand::Right => escape::CURSOR_RIGHT,
        })
    }

    /// Play back a move's command list verbatim.
    pub fn apply(&mut self, commands: &[CursorCommand]) -> io::Result<()> {
        for command in commands {
            self.step(*command)?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}
