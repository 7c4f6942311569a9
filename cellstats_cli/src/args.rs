use std::path::PathBuf;

use cellstats_common::ScanConfig;
use clap::Parser;

/// Report Skywater 130nm usage statistics
#[derive(Parser, Debug)]
#[command(name = "cellstats")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// 1+ file(s) to parse (for example, "gate-level.v")
    #[arg(required = true, num_args = 1..)]
    pub filenames: Vec<PathBuf>,

    /// Use verbose output
    #[arg(short = 'v', long, default_value_t = false)]
    pub verbose: bool,

    /// Scan files in parallel (rows are still printed in argument order)
    #[arg(short = 'p', long, default_value_t = false)]
    pub parallel: bool,
}

impl Args {
    /// Convert command-line arguments into internal configuration
    pub fn to_config(&self) -> ScanConfig {
        ScanConfig::builder()
            .verbose(self.verbose)
            .parallel(self.parallel)
            .build()
    }
}
