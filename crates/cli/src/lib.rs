// SPDX-License-Identifier: MIT

//! Search-and-replace for byte patterns in binary files.
//!
//! The core is [`buffer::Buffer`], which owns the bytes and applies
//! splice-based substitutions at positions located by the
//! Boyer-Moore-Horspool [`matcher::Finder`]. The remaining modules layer
//! the CLI on top: literal parsing in [`sub`], arguments in [`cli`], and
//! the load/replace/report/save pipeline in [`cmd_patch`].

pub mod buffer;
pub mod cli;
pub mod cmd_patch;
pub mod error;
pub mod matcher;
pub mod sub;
