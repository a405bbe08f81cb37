// SPDX-License-Identifier: MIT

//! Substitution literal parsing.
//!
//! A substitution is written `<pattern-hex>/<replacement-hex>`, e.g.
//! `6a70/4a50`. An empty replacement side is legal and deletes the pattern;
//! an empty pattern side is not. Decode failures are real errors, never
//! conflated with a legitimately empty result.

use std::fmt;
use std::str::FromStr;

use hex::FromHexError;
use thiserror::Error;

/// Which half of a substitution literal failed to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Pattern,
    Replacement,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Pattern => f.write_str("pattern"),
            Side::Replacement => f.write_str("replacement"),
        }
    }
}

/// Substitution literal parse failure.
///
/// `hex::FromHexError` only implements `PartialEq`, so no `Eq` here.
#[derive(Debug, Error, PartialEq)]
pub enum ParseSubError {
    /// The literal has no `/` between pattern and replacement.
    #[error("missing `/` separator")]
    MissingSeparator,

    /// One side is not valid hex (odd length or a non-hex digit).
    #[error("failed to hex-decode {side}: {source}")]
    BadHex {
        side: Side,
        #[source]
        source: FromHexError,
    },

    /// The pattern side decoded to zero bytes.
    #[error("pattern must not be empty")]
    EmptyPattern,
}

/// A parsed find-and-replace pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Substitution {
    pub pattern: Vec<u8>,
    pub replacement: Vec<u8>,
}

impl FromStr for Substitution {
    type Err = ParseSubError;

    fn from_str(literal: &str) -> Result<Self, Self::Err> {
        let (pattern_hex, replacement_hex) = literal
            .split_once('/')
            .ok_or(ParseSubError::MissingSeparator)?;

        let pattern = hex::decode(pattern_hex).map_err(|source| ParseSubError::BadHex {
            side: Side::Pattern,
            source,
        })?;
        if pattern.is_empty() {
            return Err(ParseSubError::EmptyPattern);
        }

        let replacement = hex::decode(replacement_hex).map_err(|source| ParseSubError::BadHex {
            side: Side::Replacement,
            source,
        })?;

        Ok(Self {
            pattern,
            replacement,
        })
    }
}

#[cfg(test)]
#[path = "sub_tests.rs"]
mod tests;
