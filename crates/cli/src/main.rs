// SPDX-License-Identifier: MIT

//! Binary entry point: parse arguments, set up diagnostics, run the patch
//! pipeline.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use byrep::cli::Cli;
use byrep::cmd_patch;
use byrep::error::ExitCode;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let code = match cmd_patch::run(&cli) {
        Ok(code) => code,
        Err(err) => {
            // anyhow's Debug form prints the full context chain.
            eprintln!("Error: {err:?}");
            ExitCode::Failure
        }
    };
    std::process::exit(code.code());
}

/// Route diagnostics to stderr. `--verbose` enables the debug-level events
/// (elapsed time per substitution pass); otherwise the `BYREP_LOG`
/// environment variable controls the filter.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("byrep=debug")
    } else {
        EnvFilter::try_from_env("BYREP_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
