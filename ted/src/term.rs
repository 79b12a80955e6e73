// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Platform layer: raw-mode termios handling, the window-size query, and
//! single-byte key reads. The raw mode guard restores the user's terminal
//! on every exit path, including panics and the fatal-error path; skipping
//! that leaves the shell unusable.

use std::io::{self, Read};

use nix::sys::termios::{
    ControlFlags, InputFlags, LocalFlags, OutputFlags, SetArg, SpecialCharacterIndices, Termios,
    tcgetattr, tcsetattr,
};
use thiserror::Error;

use ted_common::viewport::Viewport;

#[derive(Debug, Error)]
pub enum TermError {
    #[error("failed to read terminal attributes: {0}")]
    GetAttrs(#[source] nix::Error),

    #[error("failed to set terminal attributes: {0}")]
    SetAttrs(#[source] nix::Error),

    #[error("failed to query the terminal window size")]
    WindowSize,

    #[error("failed to read input: {0}")]
    Read(#[source] std::io::Error),
}

/// RAII guard over the terminal's input mode. Construction switches the
/// terminal to raw unbuffered input; `Drop` restores the attributes that
/// were in effect beforehand.
pub struct RawMode {
    original: Termios,
}

impl RawMode {
    /// Enter raw mode: no echo, no canonical line buffering, no signal
    /// keys, no output post-processing, 8-bit characters, and a read that
    /// returns after a 100ms tick when no byte is pending (VMIN=0,
    /// VTIME=1).
    ///
    /// # Errors
    /// Returns `TermError` if the terminal attributes cannot be read or
    /// applied (e.g. stdin is not a tty).
    pub fn enable() -> Result<Self, TermError> {
        let stdin = io::stdin();
        let original = tcgetattr(&stdin).map_err(TermError::GetAttrs)?;

        let mut raw = original.clone();
        raw.input_flags.remove(
            InputFlags::BRKINT
                | InputFlags::ICRNL
                | InputFlags::INPCK
                | InputFlags::ISTRIP
                | InputFlags::IXON,
        );
        raw.output_flags.remove(OutputFlags::OPOST);
        raw.control_flags.insert(ControlFlags::CS8);
        raw.local_flags.remove(
            LocalFlags::ECHO | LocalFlags::ICANON | LocalFlags::IEXTEN | LocalFlags::ISIG,
        );
        raw.control_chars[SpecialCharacterIndices::VMIN as usize] = 0;
        raw.control_chars[SpecialCharacterIndices::VTIME as usize] = 1;

        tcsetattr(&stdin, SetArg::TCSAFLUSH, &raw).map_err(TermError::SetAttrs)?;
        debug!("entered raw mode");

        Ok(Self { original })
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        // Nothing sensible to do about a failure here; the process is on
        // its way out.
        let _ = tcsetattr(&io::stdin(), SetArg::TCSAFLUSH, &self.original);
        debug!("restored terminal attributes");
    }
}

/// Query the terminal size once. The viewport is fixed for the session;
/// resizes are not observed (known limitation).
///
/// # Errors
/// Returns `TermError::WindowSize` if the ioctl fails or reports zero
/// columns.
pub fn window_size() -> Result<Viewport, TermError> {
    let mut ws = libc::winsize {
        ws_row: 0,
        ws_col: 0,
        ws_xpixel: 0,
        ws_ypixel: 0,
    };

    // SAFETY: TIOCGWINSZ writes a winsize struct through the pointer and
    // nothing else; `ws` lives for the duration of the call.
    let rc = unsafe { libc::ioctl(libc::STDOUT_FILENO, libc::TIOCGWINSZ, &raw mut ws) };
    if rc == -1 || ws.ws_col == 0 {
        return Err(TermError::WindowSize);
    }

    Ok(Viewport::new(usize::from(ws.ws_row), usize::from(ws.ws_col)))
}

/// Block until one input byte arrives. A zero-length read is the VTIME
/// tick firing with no byte pending; interrupted reads are retried.
///
/// # Errors
/// Returns `TermError::Read` for any other read failure.
pub fn read_key<R: Read>(input: &mut R) -> Result<u8, TermError> {
    let mut byte = [0u8; 1];
    loop {
        match input.read(&mut byte) {
            Ok(0) => {}
            Ok(_) => return Ok(byte[0]),
            Err(err) if err.kind() == io::ErrorKind::Interrupted => {}
            Err(err) => return Err(TermError::Read(err)),
        }
    }
}
