//! Cell, site and transistor statistics for sky130 gate-level netlists.
//!
//! A netlist is treated as an opaque byte stream. Every `sky130_*` identifier
//! in it is looked up in the compiled-in reference tables and tallied, with
//! and without filler cells.

mod batch;
mod catalog;
mod config;
mod error;
mod report;
mod scanner;
pub mod sky130_hd;
mod statistics;

pub use crate::batch::run;
pub use crate::catalog::{CellCatalog, CellClass, CellKind, CellLookup, CellRecord};
pub use crate::config::{ScanConfig, ScanConfigBuilder};
pub use crate::error::CellStatsError;
pub use crate::report::Reporter;
pub use crate::scanner::{CellMatch, cell_names, scan_bytes, scan_file, scan_reader};
pub use crate::statistics::FileStatistics;
