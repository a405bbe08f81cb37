// SPDX-License-Identifier: MIT

//! Byte-pattern search with a Boyer-Moore-Horspool skip table.
//!
//! Always reports the leftmost occurrence, so results are identical to a
//! naive left-to-right scan; the skip table only buys average-case speed.

use thiserror::Error;

/// Error constructing a [`Finder`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatcherError {
    /// There is nothing to search for.
    #[error("pattern must not be empty")]
    EmptyPattern,
}

/// Compiled search state for one pattern.
///
/// The bad-character table is computed once, so repeated searches over a
/// buffer that changes between calls reuse it.
pub struct Finder<'p> {
    pattern: &'p [u8],
    shift: [usize; 256],
}

impl<'p> Finder<'p> {
    /// Compile a non-empty pattern into a finder.
    pub fn new(pattern: &'p [u8]) -> Result<Self, MatcherError> {
        if pattern.is_empty() {
            return Err(MatcherError::EmptyPattern);
        }

        // Bytes absent from the pattern allow a full-length shift; bytes
        // present (except the last) shift by their distance from the end.
        let mut shift = [pattern.len(); 256];
        for (i, &byte) in pattern[..pattern.len() - 1].iter().enumerate() {
            shift[byte as usize] = pattern.len() - 1 - i;
        }

        Ok(Self { pattern, shift })
    }

    /// Length of the compiled pattern in bytes.
    pub fn pattern_len(&self) -> usize {
        self.pattern.len()
    }

    /// Find the leftmost occurrence of the pattern at or after `start`.
    ///
    /// Never reads past the end of `haystack`; returns `None` when the
    /// pattern cannot fit in `[start, haystack.len())`.
    pub fn find(&self, haystack: &[u8], start: usize) -> Option<usize> {
        let m = self.pattern.len();
        if start > haystack.len() || haystack.len() - start < m {
            return None;
        }

        let mut pos = start;
        while pos + m <= haystack.len() {
            let window = &haystack[pos..pos + m];

            // Compare right-to-left within the candidate window.
            let mut i = m;
            while i > 0 && window[i - 1] == self.pattern[i - 1] {
                i -= 1;
            }
            if i == 0 {
                return Some(pos);
            }

            pos += self.shift[window[m - 1] as usize];
        }

        None
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
