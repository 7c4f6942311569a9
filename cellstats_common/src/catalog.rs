//! Reference tables mapping cell names to their site and transistor counts.
//!
//! The scanner only depends on the [`CellLookup`] trait, so a catalog loaded
//! from somewhere other than the compiled-in tables can be swapped in without
//! touching the scan loop.

use std::collections::HashMap;
use std::fmt;

use lazy_static::lazy_static;

use crate::sky130_hd;

lazy_static! {
    static ref SKY130_HD: CellCatalog =
        CellCatalog::new(sky130_hd::FILLER_CELLS, sky130_hd::REGULAR_CELLS);
}

/// A single row of a reference table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellRecord {
    /// Library cell name, e.g. `sky130_fd_sc_hd__inv_1`.
    pub name: &'static str,
    /// Width of the cell in placement sites.
    pub sites: u64,
    /// Number of transistors in the cell.
    pub transistors: u64,
}

impl CellRecord {
    /// Creates a new record.
    #[must_use]
    pub const fn new(name: &'static str, sites: u64, transistors: u64) -> Self {
        Self {
            name,
            sites,
            transistors,
        }
    }
}

/// Whether a cell contributes to the functional totals or only the filler-inclusive ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// Fill, decap, tap or diode cell.
    Filler,
    /// Functional cell.
    Regular,
}

impl CellKind {
    /// Returns true for filler cells.
    #[must_use]
    pub const fn is_filler(&self) -> bool {
        matches!(self, Self::Filler)
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filler => write!(f, "Filler"),
            Self::Regular => write!(f, "Regular"),
        }
    }
}

/// Result of a successful catalog lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellClass {
    /// Filler or regular.
    pub kind: CellKind,
    /// Width in sites.
    pub sites: u64,
    /// Transistor count.
    pub transistors: u64,
}

impl CellClass {
    /// Returns true for filler cells.
    #[must_use]
    pub const fn is_filler(&self) -> bool {
        self.kind.is_filler()
    }
}

/// Read-only lookup from a raw cell name to its classification.
///
/// Names are compared byte for byte.
pub trait CellLookup: Sync {
    /// Looks up `name`, returning `None` when it is in neither table.
    fn lookup(&self, name: &[u8]) -> Option<CellClass>;
}

/// Two disjoint tables of filler and regular cells.
#[derive(Debug, Default, Clone)]
pub struct CellCatalog {
    filler_cells: HashMap<&'static [u8], CellRecord>,
    regular_cells: HashMap<&'static [u8], CellRecord>,
}

impl CellCatalog {
    /// Builds a catalog from the given filler and regular tables.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if a name appears in both tables.
    #[must_use]
    pub fn new(filler: &[CellRecord], regular: &[CellRecord]) -> Self {
        let index = |records: &[CellRecord]| {
            records
                .iter()
                .map(|r| (r.name.as_bytes(), *r))
                .collect::<HashMap<_, _>>()
        };
        let filler_cells = index(filler);
        let regular_cells = index(regular);

        debug_assert!(
            filler_cells.keys().all(|k| !regular_cells.contains_key(k)),
            "filler and regular tables must be disjoint"
        );

        Self {
            filler_cells,
            regular_cells,
        }
    }

    /// The compiled-in sky130 high-density catalog, built on first use.
    #[must_use]
    pub fn sky130_hd() -> &'static Self {
        &SKY130_HD
    }

    /// Number of filler entries.
    #[must_use]
    pub fn filler_len(&self) -> usize {
        self.filler_cells.len()
    }

    /// Number of regular entries.
    #[must_use]
    pub fn regular_len(&self) -> usize {
        self.regular_cells.len()
    }
}

impl CellLookup for CellCatalog {
    fn lookup(&self, name: &[u8]) -> Option<CellClass> {
        let (kind, record) = match self.filler_cells.get(name) {
            Some(record) => (CellKind::Filler, record),
            None => (CellKind::Regular, self.regular_cells.get(name)?),
        };
        Some(CellClass {
            kind,
            sites: record.sites,
            transistors: record.transistors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sky130_hd_tables_are_loaded() {
        let catalog = CellCatalog::sky130_hd();
        assert_eq!(catalog.filler_len(), sky130_hd::FILLER_CELLS.len());
        assert_eq!(catalog.regular_len(), sky130_hd::REGULAR_CELLS.len());
    }

    #[test]
    fn test_sky130_hd_tables_are_disjoint() {
        let catalog = CellCatalog::sky130_hd();
        let tables = [
            (CellKind::Filler, sky130_hd::FILLER_CELLS),
            (CellKind::Regular, sky130_hd::REGULAR_CELLS),
        ];
        for (kind, records) in tables {
            for record in records {
                // A name in both tables would resolve as filler.
                assert_eq!(
                    catalog.lookup(record.name.as_bytes()),
                    Some(CellClass {
                        kind,
                        sites: record.sites,
                        transistors: record.transistors,
                    }),
                    "{} is in both tables",
                    record.name
                );
            }
        }
    }

    #[test]
    fn test_lookup_filler() {
        let class = CellCatalog::sky130_hd()
            .lookup(b"sky130_fd_sc_hd__decap_12")
            .unwrap();
        assert_eq!(class.kind, CellKind::Filler);
        assert_eq!((class.sites, class.transistors), (12, 2));
    }

    #[test]
    fn test_lookup_regular() {
        let class = CellCatalog::sky130_hd()
            .lookup(b"sky130_fd_sc_hd__inv_1")
            .unwrap();
        assert!(!class.is_filler());
        assert_eq!((class.sites, class.transistors), (3, 2));
    }

    #[test]
    fn test_lookup_unknown() {
        let catalog = CellCatalog::sky130_hd();
        assert!(catalog.lookup(b"sky130_unknown_cell_9").is_none());
        // Case sensitive.
        assert!(catalog.lookup(b"SKY130_FD_SC_HD__INV_1").is_none());
    }

    #[test]
    fn test_custom_catalog() {
        let catalog = CellCatalog::new(
            &[CellRecord::new("sky130_x__fill", 1, 0)],
            &[CellRecord::new("sky130_x__nand", 4, 4)],
        );
        assert!(catalog.lookup(b"sky130_x__fill").unwrap().is_filler());
        assert_eq!(catalog.lookup(b"sky130_x__nand").unwrap().sites, 4);
        assert!(catalog.lookup(b"sky130_fd_sc_hd__inv_1").is_none());
    }

    #[test]
    fn test_cell_kind_display() {
        assert_eq!(CellKind::Filler.to_string(), "Filler");
        assert_eq!(CellKind::Regular.to_string(), "Regular");
    }
}
