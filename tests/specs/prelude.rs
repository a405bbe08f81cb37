//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;

use std::path::{Path, PathBuf};
use std::process::Command;

/// Returns a Command configured to run the byrep binary
pub fn byrep_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("byrep"))
}

/// Write `bytes` to `name` under `dir` and return the file's path.
pub fn write_input(dir: &Path, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, bytes).expect("write test input");
    path
}
