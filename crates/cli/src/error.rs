// SPDX-License-Identifier: MIT

//! Process exit codes.

/// Exit code reported to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// All substitutions applied (or found nothing) and output was written.
    Success,
    /// A fatal error; diagnostics were printed to stderr.
    Failure,
}

impl ExitCode {
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => 0,
            ExitCode::Failure => 1,
        }
    }
}
