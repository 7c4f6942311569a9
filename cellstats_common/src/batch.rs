//! Runs the scanner over a list of files and reports them in order.
//!
//! The run stops at the first file that fails. Rows for earlier files have
//! already been written and flushed; nothing is written for the failing file
//! or any file after it, in either sequential or parallel mode.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::catalog::CellLookup;
use crate::config::ScanConfig;
use crate::error::CellStatsError;
use crate::report::Reporter;
use crate::scanner::{CellMatch, scan_file};
use crate::statistics::FileStatistics;

/// Scans `paths` and writes the CSV report to `out`.
///
/// With `config.verbose`, one line per matched cell goes to `diagnostics`.
/// Returns the number of rows written.
///
/// # Errors
///
/// Returns the error of the first failing file in argument order, or a
/// [`CellStatsError::Report`] if `out` cannot be written.
pub fn run<L, W, D>(
    paths: &[PathBuf],
    catalog: &L,
    config: &ScanConfig,
    out: W,
    diagnostics: D,
) -> Result<usize, CellStatsError>
where
    L: CellLookup + ?Sized,
    W: Write,
    D: Write + Send,
{
    info!(files = paths.len(), parallel = config.parallel, "starting scan");

    let diagnostics = Mutex::new(diagnostics);
    let scan_one = |path: &PathBuf| scan_path(path, catalog, config.verbose, &diagnostics);

    let mut reporter = Reporter::new(out)?;
    let mut written = 0;

    if config.parallel {
        let results: Vec<_> = paths.par_iter().map(scan_one).collect();
        for result in results {
            reporter.write(&result?)?;
            written += 1;
        }
    } else {
        for path in paths {
            reporter.write(&scan_one(path)?)?;
            written += 1;
        }
    }

    reporter.into_inner()?;
    info!(files = written, "scan complete");
    Ok(written)
}

/// Scans one file, writing a diagnostic line per match when `verbose` is set.
fn scan_path<L, D>(
    path: &Path,
    catalog: &L,
    verbose: bool,
    diagnostics: &Mutex<D>,
) -> Result<FileStatistics, CellStatsError>
where
    L: CellLookup + ?Sized,
    D: Write + Send,
{
    debug!(file = %path.display(), "scanning");
    let filename = path.display().to_string();
    scan_file(path, catalog, |cell: &CellMatch<'_>| {
        if !verbose {
            return;
        }
        // Diagnostics are best effort and never fail the run.
        match diagnostics.lock() {
            Ok(mut out) => {
                if let Err(err) = writeln!(out, "{}", cell.diagnostic_line(&filename)) {
                    debug!(%err, file = %filename, "dropped diagnostic line");
                }
            },
            Err(_) => debug!(file = %filename, "diagnostics lock poisoned"),
        }
    })
}
