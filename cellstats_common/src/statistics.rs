//! Per-file counters.

use crate::catalog::CellClass;

/// Per-file cell, site and transistor totals.
///
/// The plain counters cover regular cells only; the `_with_filler` counters
/// cover every matched cell, so each is always at least its plain counterpart.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FileStatistics {
    /// Input file name as given on the command line.
    pub filename: String,
    /// Regular cell instances.
    pub cells: u64,
    /// Sites occupied by regular cells.
    pub sites: u64,
    /// Transistors in regular cells.
    pub transistors: u64,
    /// All cell instances.
    pub cells_with_filler: u64,
    /// Sites occupied by all cells.
    pub sites_with_filler: u64,
    /// Transistors in all cells.
    pub transistors_with_filler: u64,
}

impl FileStatistics {
    /// Column names of the CSV report, in field order.
    pub const HEADER: [&'static str; 7] = [
        "file",
        "cells",
        "sites",
        "transistors",
        "cells_with_fill",
        "sites_with_fill",
        "transistors_with_fill",
    ];

    /// Creates zeroed statistics for `filename`.
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }

    /// Adds one instance of `class`.
    pub const fn record(&mut self, class: &CellClass) {
        self.cells_with_filler += 1;
        self.sites_with_filler += class.sites;
        self.transistors_with_filler += class.transistors;
        if !class.is_filler() {
            self.cells += 1;
            self.sites += class.sites;
            self.transistors += class.transistors;
        }
    }

    /// The statistics as CSV fields, in [`Self::HEADER`] order.
    #[must_use]
    pub fn to_record(&self) -> [String; 7] {
        [
            self.filename.clone(),
            self.cells.to_string(),
            self.sites.to_string(),
            self.transistors.to_string(),
            self.cells_with_filler.to_string(),
            self.sites_with_filler.to_string(),
            self.transistors_with_filler.to_string(),
        ]
    }
}
