// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The full set of control sequences the editor ever writes. Terminal
//! compatibility depends on these exact bytes, so they live in one place
//! instead of being spelled out at call sites.

pub const CLEAR_SCREEN: &[u8] = b"\x1b[2J";
pub const CURSOR_HOME: &[u8] = b"\x1b[H";

pub const CURSOR_UP: &[u8] = b"\x1b[A";
pub const CURSOR_DOWN: &[u8] = b"\x1b[B";
pub const CURSOR_RIGHT: &[u8] = b"\x1b[C";
pub const CURSOR_LEFT: &[u8] = b"\x1b[D";

pub const SAVE_CURSOR: &[u8] = b"\x1b[s";
pub const RESTORE_CURSOR: &[u8] = b"\x1b[u";

pub const CLEAR_LINE_RIGHT: &[u8] = b"\x1b[K";

pub const HIDE_CURSOR: &[u8] = b"\x1b[?25l";
pub const SHOW_CURSOR: &[u8] = b"\x1b[?25h";
