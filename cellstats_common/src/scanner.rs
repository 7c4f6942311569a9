//! Raw byte scan for sky130 cell names.
//!
//! The input is never decoded or tokenized: any maximal run of `sky130_`
//! followed by ASCII word characters counts as one cell instance, wherever it
//! appears in the file.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use lazy_static::lazy_static;
use regex::bytes::Regex;
use tracing::{debug, trace};

use crate::catalog::{CellClass, CellLookup};
use crate::error::CellStatsError;
use crate::statistics::FileStatistics;

lazy_static! {
    static ref CELL_PATTERN: Regex = Regex::new(r"(?-u)sky130_\w+").unwrap();
}

/// A classified occurrence of a cell name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellMatch<'a> {
    /// The matched bytes.
    pub name: &'a [u8],
    /// Catalog entry for `name`.
    pub class: CellClass,
}

impl CellMatch<'_> {
    /// One-line description of the match, prefixed with `filename`.
    #[must_use]
    pub fn diagnostic_line(&self, filename: &str) -> String {
        format!(
            "{filename}:  {}  => ({}, {}, {})",
            String::from_utf8_lossy(self.name),
            self.class.kind,
            self.class.sites,
            self.class.transistors
        )
    }
}

/// Iterates over every cell name in `content`, left to right.
pub fn cell_names(content: &[u8]) -> impl Iterator<Item = &[u8]> {
    CELL_PATTERN.find_iter(content).map(|m| m.as_bytes())
}

/// Accumulates statistics for an in-memory file.
///
/// `on_match` is called once per classified cell in file order.
///
/// # Errors
///
/// Returns [`CellStatsError::UnknownIdentifier`] for the first name that is
/// in neither table of `catalog`.
pub fn scan_bytes<L, F>(
    path: &Path,
    content: &[u8],
    catalog: &L,
    mut on_match: F,
) -> Result<FileStatistics, CellStatsError>
where
    L: CellLookup + ?Sized,
    F: FnMut(&CellMatch<'_>),
{
    let mut stats = FileStatistics::new(path.display().to_string());

    for name in cell_names(content) {
        let class = catalog
            .lookup(name)
            .ok_or_else(|| CellStatsError::unknown_identifier(path, name))?;
        let cell = CellMatch { name, class };
        trace!(?cell, "matched");
        on_match(&cell);
        stats.record(&cell.class);
    }

    debug!(
        file = %stats.filename,
        cells = stats.cells_with_filler,
        bytes = content.len(),
        "scanned"
    );
    Ok(stats)
}

/// Reads `reader` to the end and scans it as the content of `path`.
///
/// # Errors
///
/// Returns [`CellStatsError::FileAccess`] if reading fails, otherwise as
/// [`scan_bytes`].
pub fn scan_reader<R, L, F>(
    path: &Path,
    mut reader: R,
    catalog: &L,
    on_match: F,
) -> Result<FileStatistics, CellStatsError>
where
    R: Read,
    L: CellLookup + ?Sized,
    F: FnMut(&CellMatch<'_>),
{
    let mut content = Vec::new();
    reader
        .read_to_end(&mut content)
        .map_err(|e| CellStatsError::file_access(path, e))?;
    scan_bytes(path, &content, catalog, on_match)
}

/// Opens and scans the file at `path`.
///
/// # Errors
///
/// Returns [`CellStatsError::FileAccess`] if the file cannot be opened or
/// read, otherwise as [`scan_bytes`].
pub fn scan_file<L, F>(path: &Path, catalog: &L, on_match: F) -> Result<FileStatistics, CellStatsError>
where
    L: CellLookup + ?Sized,
    F: FnMut(&CellMatch<'_>),
{
    let file = File::open(path).map_err(|e| CellStatsError::file_access(path, e))?;
    scan_reader(path, file, catalog, on_match)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CellCatalog, CellKind};

    fn scan(content: &[u8]) -> Result<FileStatistics, CellStatsError> {
        scan_bytes(Path::new("t.v"), content, CellCatalog::sky130_hd(), |_| {})
    }

    #[test]
    fn test_cell_names_are_maximal() {
        let names: Vec<_> = cell_names(b"(sky130_fd_sc_hd__inv_1)sky130_fd_sc_hd__fill_1;").collect();
        assert_eq!(
            names,
            vec![&b"sky130_fd_sc_hd__inv_1"[..], &b"sky130_fd_sc_hd__fill_1"[..]]
        );
    }

    #[test]
    fn test_cell_names_require_a_word_character() {
        assert_eq!(cell_names(b"sky130_ sky130_.x sky130").count(), 0);
    }

    #[test]
    fn test_cell_names_ignore_non_ascii_and_invalid_utf8() {
        let content = b"\xff\xfesky130_fd_sc_hd__inv_1\xc3\xa9 sky130_\xc3\xa9";
        let names: Vec<_> = cell_names(content).collect();
        assert_eq!(names, vec![&b"sky130_fd_sc_hd__inv_1"[..]]);
    }

    #[test]
    fn test_cell_names_span_lines() {
        assert_eq!(
            cell_names(b"sky130_fd_sc_hd__inv_1\nsky130_fd_sc_hd__inv_1\r\n").count(),
            2
        );
    }

    #[test]
    fn test_scan_mixed() {
        let stats = scan(b"wire sky130_fd_sc_hd__inv_1 a, b; sky130_fd_sc_hd__fill_1 c;").unwrap();
        assert_eq!(stats.filename, "t.v");
        assert_eq!((stats.cells, stats.sites, stats.transistors), (1, 3, 2));
        assert_eq!(
            (
                stats.cells_with_filler,
                stats.sites_with_filler,
                stats.transistors_with_filler
            ),
            (2, 4, 2)
        );
    }

    #[test]
    fn test_scan_no_matches() {
        let stats = scan(b"module top(); endmodule").unwrap();
        assert_eq!(stats, FileStatistics::new("t.v"));
    }

    #[test]
    fn test_scan_unknown_identifier() {
        let err = scan(b"sky130_fd_sc_hd__inv_1 sky130_unknown_cell_9").unwrap_err();
        match err {
            CellStatsError::UnknownIdentifier { identifier, path } => {
                assert_eq!(identifier, "sky130_unknown_cell_9");
                assert_eq!(path, Path::new("t.v"));
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_on_match_sees_file_order() {
        let mut seen = Vec::new();
        scan_bytes(
            Path::new("t.v"),
            b"sky130_fd_sc_hd__tap_1 sky130_fd_sc_hd__nand2_1 sky130_fd_sc_hd__tap_1",
            CellCatalog::sky130_hd(),
            |m| seen.push((m.name.to_vec(), m.class.kind)),
        )
        .unwrap();
        assert_eq!(
            seen,
            vec![
                (b"sky130_fd_sc_hd__tap_1".to_vec(), CellKind::Filler),
                (b"sky130_fd_sc_hd__nand2_1".to_vec(), CellKind::Regular),
                (b"sky130_fd_sc_hd__tap_1".to_vec(), CellKind::Filler),
            ]
        );
    }

    #[test]
    fn test_diagnostic_line() {
        let cell = CellMatch {
            name: b"sky130_fd_sc_hd__fill_1",
            class: CellClass {
                kind: CellKind::Filler,
                sites: 1,
                transistors: 0,
            },
        };
        assert_eq!(
            cell.diagnostic_line("top.v"),
            "top.v:  sky130_fd_sc_hd__fill_1  => (Filler, 1, 0)"
        );
    }

    #[test]
    fn test_scan_reader_reports_read_failure() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk on fire"))
            }
        }
        let err = scan_reader(Path::new("t.v"), Broken, CellCatalog::sky130_hd(), |_| {})
            .unwrap_err();
        assert!(matches!(err, CellStatsError::FileAccess { .. }));
        assert_eq!(err.path(), Some(Path::new("t.v")));
    }

    #[test]
    fn test_scan_file_missing() {
        let err = scan_file(
            Path::new("definitely/not/here.v"),
            CellCatalog::sky130_hd(),
            |_| {},
        )
        .unwrap_err();
        assert!(err.to_string().contains("definitely/not/here.v"));
    }
}
