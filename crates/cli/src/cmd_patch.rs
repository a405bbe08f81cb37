// SPDX-License-Identifier: MIT

//! `byrep` patch pipeline.
//!
//! Parses every substitution literal up front, loads the input, applies one
//! full repeated-substitution pass per literal in argument order, reports
//! the performed sites, then writes the result. A failing pass aborts the
//! run before anything is written; passes already applied in memory are not
//! rolled back.

use std::time::Instant;

use anyhow::Context;
use serde::Serialize;
use tracing::debug;

use crate::buffer::Buffer;
use crate::cli::{Cli, OutputFormat};
use crate::error::ExitCode;
use crate::sub::Substitution;

/// Sites reported by one substitution pass. `sub` is 1-based, matching the
/// text report.
#[derive(Debug, Serialize)]
struct PassReport {
    sub: usize,
    offsets: Vec<usize>,
}

/// Run the patch pipeline for the parsed command line.
pub fn run(args: &Cli) -> anyhow::Result<ExitCode> {
    let subs = parse_subs(&args.subs)?;

    let mut buffer = Buffer::load(&args.input)
        .with_context(|| format!("failed to read {}", args.input.display()))?;

    let mode = args.mode();
    let mut report = Vec::with_capacity(subs.len());
    for (index, sub) in subs.iter().enumerate() {
        let pass_start = Instant::now();
        let offsets = buffer
            .replace_all(&sub.pattern, &sub.replacement, mode, args.advance)
            .with_context(|| format!("substitution {index} failed"))?;
        debug!(
            sub = index,
            sites = offsets.len(),
            elapsed_ms = pass_start.elapsed().as_millis() as u64,
            "substitution pass finished"
        );
        report.push(PassReport {
            sub: index + 1,
            offsets,
        });
    }

    match args.format {
        OutputFormat::Text => print!("{}", render_text(&report)),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }

    let destination = args.destination();
    buffer
        .save(destination)
        .with_context(|| format!("failed to write {}", destination.display()))?;

    Ok(ExitCode::Success)
}

/// Parse all literals before any I/O so a bad one fails the run early,
/// naming the 0-based substitution index it belongs to.
fn parse_subs(literals: &[String]) -> anyhow::Result<Vec<Substitution>> {
    literals
        .iter()
        .enumerate()
        .map(|(index, literal)| {
            literal
                .parse::<Substitution>()
                .with_context(|| format!("failed to parse substitution {index}"))
        })
        .collect()
}

/// One line per performed site, in the historical format.
fn render_text(report: &[PassReport]) -> String {
    let mut out = String::new();
    for pass in report {
        for offset in &pass.offsets {
            out.push_str(&format!(
                "Substitution {} performed at offset {:#x}.\n",
                pass.sub, offset
            ));
        }
    }
    out
}

fn render_json(report: &[PassReport]) -> anyhow::Result<String> {
    let value = serde_json::json!({ "substitutions": report });
    Ok(serde_json::to_string_pretty(&value)?)
}

#[cfg(test)]
#[path = "cmd_patch_tests.rs"]
mod tests;
