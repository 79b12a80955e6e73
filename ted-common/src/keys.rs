// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// The byte a control-key chord produces in raw mode.
#[must_use]
pub const fn ctrl(byte: u8) -> u8 {
    byte & 0x1f
}

const QUIT: u8 = ctrl(b'q');
const MOVE_UP: u8 = ctrl(b'k');
const MOVE_DOWN: u8 = ctrl(b'j');
const MOVE_LEFT: u8 = ctrl(b'h');
const MOVE_RIGHT: u8 = ctrl(b'l');
const LINE_BREAK: u8 = b'\r';

/// One decoded keystroke.
///
/// Input is dispatched one byte at a time from a flat table; there is no
/// escape-sequence decoding, so arrow keys arrive as their individual bytes
/// and fall through to `Ignored`/`Insert`. Navigation is control-chords only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorInput {
    Quit,
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    LineBreak,
    Insert(u8),
    Ignored,
}

impl From<u8> for EditorInput {
    fn from(byte: u8) -> Self {
        match byte {
            QUIT => Self::Quit,
            MOVE_UP => Self::MoveUp,
            MOVE_DOWN => Self::MoveDown,
            MOVE_LEFT => Self::MoveLeft,
            MOVE_RIGHT => Self::MoveRight,
            LINE_BREAK => Self::LineBreak,
            0x20..=0x7e => Self::Insert(byte),
            _ => Self::Ignored,
        }
    }
}
