// SPDX-License-Identifier: MIT

//! CLI argument parsing with clap derive.

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::buffer::{Advance, SubMode};

/// Search-and-replace for byte patterns in binary files
#[derive(Parser)]
#[command(name = "byrep")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Input file path
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Byte pattern substitution to perform, formatted as two hex strings
    /// joined with a forward slash, i.e. `<old>/<new>`, e.g. `6a70/4a50`;
    /// may be repeated
    #[arg(short = 's', long = "sub", value_name = "SUB")]
    pub subs: Vec<String>,

    /// Output file path (if not using `-i`)
    #[arg(
        short,
        long,
        value_name = "PATH",
        conflicts_with = "in_place",
        required_unless_present = "in_place"
    )]
    pub output: Option<PathBuf>,

    /// Patch the input file in place (equivalent to `-o <FILE>`)
    #[arg(short = 'i', long)]
    pub in_place: bool,

    /// Perform replacements in overwrite mode
    #[arg(short = 'R', long)]
    pub overwrite: bool,

    /// How the repeated-substitution loop advances past a match
    #[arg(long, value_enum, default_value_t = Advance::Literal, value_name = "RULE")]
    pub advance: Advance,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Log elapsed time per substitution pass to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Substitution mode selected by the `-R` flag.
    pub fn mode(&self) -> SubMode {
        if self.overwrite {
            SubMode::Overwrite
        } else {
            SubMode::Insert
        }
    }

    /// Where the patched buffer should be written.
    pub fn destination(&self) -> &Path {
        self.output.as_deref().unwrap_or(&self.input)
    }
}

#[derive(Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
