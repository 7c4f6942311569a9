//! sky130 cell statistics CLI
//!
//! Prints one CSV row of cell, site and transistor counts per input netlist.

#[global_allocator]
/// Global allocator using jemalloc.
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

mod args;

use std::io;
use std::process::ExitCode;

use cellstats_common::CellCatalog;
use clap::Parser;
use tracing::{debug, info};

use args::Args;

/// Executes the statistics run.
///
/// This function:
/// 1. Initializes logging
/// 2. Parses command-line arguments
/// 3. Scans every file in argument order
/// 4. Writes the CSV report to stdout
///
/// Any failure stops the run and exits with status 1.
fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = args.to_config();

    info!("Scanning {} file(s)", args.filenames.len());

    let stdout = io::stdout().lock();
    let stderr = io::stderr();

    match cellstats_common::run(
        &args.filenames,
        CellCatalog::sky130_hd(),
        &config,
        stdout,
        stderr,
    ) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            debug!(?err, "scan failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}
