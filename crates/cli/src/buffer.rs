// SPDX-License-Identifier: MIT

//! In-memory byte buffer with splice-based substitution.
//!
//! The buffer owns its bytes exclusively; substitution passes take `&mut
//! self`, so two passes can never run against the same buffer at once.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::matcher::{Finder, MatcherError};

/// Defines how a substitution should be performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubMode {
    /// Erase the matched pattern, then insert the replacement; the buffer
    /// grows or shrinks by the length difference.
    Insert,

    /// Erase as many bytes as the replacement holds, starting at the match
    /// position, then insert the replacement; the buffer length never
    /// changes. When the replacement is longer than the pattern, bytes
    /// beyond the match are consumed; when shorter, the pattern's tail
    /// survives past the replacement.
    Overwrite,
}

/// How [`Buffer::replace_all`] picks the next search start after a hit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Advance {
    /// Advance the previous start offset by the replacement length
    /// (historical rule). When a match lands past the current start, the
    /// gap is re-scanned rather than resuming after the replacement.
    #[default]
    Literal,

    /// Resume at the match position plus the replacement length.
    Match,
}

/// Substitution failure.
///
/// "No match" is not an error; it is the `Ok(None)` outcome of
/// [`Buffer::replace_next`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubstituteError {
    /// There is nothing to search for.
    #[error("pattern must not be empty")]
    EmptyPattern,

    /// An overwrite erase window runs past the end of the buffer. The
    /// splice is refused outright; the buffer is never truncated to fit.
    #[error("overwrite window of {window} bytes at offset {offset:#x} exceeds buffer length {len}")]
    OverwriteOutOfRange {
        offset: usize,
        window: usize,
        len: usize,
    },
}

impl From<MatcherError> for SubstituteError {
    fn from(err: MatcherError) -> Self {
        match err {
            MatcherError::EmptyPattern => SubstituteError::EmptyPattern,
        }
    }
}

/// Arbitrary binary data buffer.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Buffer {
    data: Vec<u8>,
}

impl Buffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer holding `data`.
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into() }
    }

    /// Get the bytes contained by the buffer.
    pub fn content(&self) -> &[u8] {
        &self.data
    }

    /// Get the size of the buffer in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Load a buffer with the contents of the file at `path`, verbatim.
    pub fn load(path: &Path) -> io::Result<Self> {
        Ok(Self { data: fs::read(path)? })
    }

    /// Save the buffer's contents to the file at `path`, verbatim.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        fs::write(path, &self.data)
    }

    /// Replace the next occurrence of `pattern` with `replacement`.
    ///
    /// Matches before `start` are ignored. Returns the offset the
    /// substitution was performed at, or `None` if the pattern was not
    /// found; on `None` the buffer is untouched. Bytes before the returned
    /// offset are never modified.
    pub fn replace_next(
        &mut self,
        pattern: &[u8],
        replacement: &[u8],
        mode: SubMode,
        start: usize,
    ) -> Result<Option<usize>, SubstituteError> {
        let finder = Finder::new(pattern)?;
        self.replace_next_with(&finder, replacement, mode, start)
    }

    fn replace_next_with(
        &mut self,
        finder: &Finder<'_>,
        replacement: &[u8],
        mode: SubMode,
        start: usize,
    ) -> Result<Option<usize>, SubstituteError> {
        // Historical boundary check, kept bit-for-bit for compatibility:
        // a pattern that would end exactly at the final byte is treated as
        // unmatchable (`>=`, not `>`).
        if start.saturating_add(finder.pattern_len()) >= self.data.len() {
            return Ok(None);
        }

        let Some(offset) = finder.find(&self.data, start) else {
            return Ok(None);
        };

        let window = match mode {
            SubMode::Insert => finder.pattern_len(),
            SubMode::Overwrite => replacement.len(),
        };
        if offset + window > self.data.len() {
            return Err(SubstituteError::OverwriteOutOfRange {
                offset,
                window,
                len: self.data.len(),
            });
        }

        self.data
            .splice(offset..offset + window, replacement.iter().copied());
        Ok(Some(offset))
    }

    /// Replace every occurrence of `pattern` with `replacement`.
    ///
    /// Applies [`Buffer::replace_next`] from offset zero until no match
    /// remains, moving the search start per `advance` after each hit.
    /// Returns all offsets substitutions were performed at, in discovery
    /// order.
    pub fn replace_all(
        &mut self,
        pattern: &[u8],
        replacement: &[u8],
        mode: SubMode,
        advance: Advance,
    ) -> Result<Vec<usize>, SubstituteError> {
        let finder = Finder::new(pattern)?;

        let mut offsets = Vec::new();
        let mut start = 0;
        while let Some(offset) = self.replace_next_with(&finder, replacement, mode, start)? {
            offsets.push(offset);

            start = match advance {
                Advance::Literal => start + replacement.len(),
                Advance::Match => offset + replacement.len(),
            };

            // An overwrite with an empty replacement changes nothing, so a
            // start that does not move past the match would find it again
            // forever. Step over it instead of spinning.
            if replacement.is_empty() && mode == SubMode::Overwrite {
                start = offset + 1;
            }
        }

        Ok(offsets)
    }
}

#[cfg(test)]
#[path = "buffer_tests.rs"]
mod tests;
