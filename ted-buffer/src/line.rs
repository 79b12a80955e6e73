// Copyright (C) 2024-2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use thiserror::Error;

/// Minimum capacity allocated on the first growth of an empty line.
const INITIAL_CAPACITY: usize = 8;

#[derive(Debug, Error, Eq, PartialEq, Clone)]
pub enum LineError {
    #[error("line buffer allocation of {0} bytes failed")]
    Allocation(usize),
}

/// One logical (unwrapped) line of the document: an owned, growable byte
/// sequence with no embedded newline.
///
/// Growth doubles capacity, so appending N bytes over the line's lifetime
/// costs O(N) amortized. Allocation failure surfaces as a `LineError`
/// rather than an abort. Capacity is never shrunk.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Line {
    bytes: Vec<u8>,
}

impl Line {
    #[must_use]
    pub const fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    /// Build a line from raw bytes (used by the load path).
    ///
    /// # Errors
    /// Returns `LineError::Allocation` if the backing storage cannot be
    /// allocated.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, LineError> {
        let mut line = Self::new();
        line.ensure_spare(bytes.len())?;
        line.bytes.extend_from_slice(bytes);
        Ok(line)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.bytes.capacity()
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Append one byte at the end of the line.
    ///
    /// # Errors
    /// Returns `LineError::Allocation` if growing the buffer fails.
    pub fn push(&mut self, byte: u8) -> Result<(), LineError> {
        self.ensure_spare(1)?;
        self.bytes.push(byte);
        Ok(())
    }

    /// Replace the byte at `offset` in place. Does not grow the line;
    /// offsets at or past the end are ignored.
    pub fn overwrite(&mut self, offset: usize, byte: u8) {
        debug_assert!(offset < self.bytes.len(), "overwrite past end of line");
        if let Some(slot) = self.bytes.get_mut(offset) {
            *slot = byte;
        }
    }

    /// Guarantee room for `additional` more bytes, doubling capacity when
    /// the current allocation is too small.
    fn ensure_spare(&mut self, additional: usize) -> Result<(), LineError> {
        let needed = self.bytes.len() + additional;
        if needed <= self.bytes.capacity() {
            return Ok(());
        }

        let target = needed
            .max(self.bytes.capacity() * 2)
            .max(INITIAL_CAPACITY);
        self.bytes
            .try_reserve_exact(target - self.bytes.len())
            .map_err(|_| LineError::Allocation(target))
    }
}
