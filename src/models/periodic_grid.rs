//! Position resolver for the periodic table grid.
//!
//! Maps the static element geometry onto two coordinate spaces:
//! 1. **Main block** - 7 periods x 18 groups, keyed by (period, group)
//! 2. **Auxiliary rows** - the lanthanide and actinide series, each ordered by
//!    ascending atomic number and laid out from group 4 onwards
//!
//! # Special Handling
//!
//! - Elements 57-71 and 89-103 share group 3 in the geometry table. They are
//!   never placed in the main block; the anchors (6, 3) and (7, 3) stay empty.
//! - Auxiliary slot `k` (0-based) maps to column `4 + k`.

use crate::models::element::{elements, GeometryEntry, GROUP_COUNT, PERIOD_COUNT};
use std::ops::RangeInclusive;

/// Atomic numbers of the lanthanide series.
pub const LANTHANIDES: RangeInclusive<u8> = 57..=71;

/// Atomic numbers of the actinide series.
pub const ACTINIDES: RangeInclusive<u8> = 89..=103;

/// Main-block coordinates (period, group) reserved for the f-block gap.
pub const F_BLOCK_ANCHORS: [(u8, u8); 2] = [(6, 3), (7, 3)];

/// First column (1-based) used by the auxiliary rows.
pub const AUXILIARY_FIRST_COLUMN: u8 = 4;

/// Returns true if the element belongs to a displaced f-block series.
#[must_use]
pub fn is_displaced(number: u8) -> bool {
    LANTHANIDES.contains(&number) || ACTINIDES.contains(&number)
}

/// Main block of the periodic table: (period, group) -> atomic number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainGrid {
    cells: [[Option<u8>; GROUP_COUNT as usize]; PERIOD_COUNT as usize],
}

impl MainGrid {
    /// Builds the main block from a geometry table, skipping displaced series.
    #[must_use]
    pub fn build(entries: &[GeometryEntry]) -> Self {
        let mut grid = Self {
            cells: [[None; GROUP_COUNT as usize]; PERIOD_COUNT as usize],
        };

        for entry in entries {
            if is_displaced(entry.number) {
                continue;
            }
            if let Some(slot) = grid.slot_mut(entry.period, entry.group) {
                *slot = Some(entry.number);
            }
        }

        for (period, group) in F_BLOCK_ANCHORS {
            if let Some(slot) = grid.slot_mut(period, group) {
                *slot = None;
            }
        }

        grid
    }

    /// Returns the atomic number at a 1-based (period, group), if any.
    ///
    /// Coordinates outside the 7x18 block are simply empty.
    #[must_use]
    pub fn get(&self, period: u8, group: u8) -> Option<u8> {
        let row = usize::from(period.checked_sub(1)?);
        let col = usize::from(group.checked_sub(1)?);
        self.cells.get(row)?.get(col).copied().flatten()
    }

    /// Iterates over all atomic numbers placed in the main block.
    pub fn occupied(&self) -> impl Iterator<Item = u8> + '_ {
        self.cells.iter().flatten().filter_map(|cell| *cell)
    }

    fn slot_mut(&mut self, period: u8, group: u8) -> Option<&mut Option<u8>> {
        let row = usize::from(period.checked_sub(1)?);
        let col = usize::from(group.checked_sub(1)?);
        self.cells.get_mut(row)?.get_mut(col)
    }
}

/// The two detached f-block rows rendered beneath the main block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AuxiliaryRows {
    /// Lanthanides in ascending atomic number order
    pub lanthanides: Vec<u8>,
    /// Actinides in ascending atomic number order
    pub actinides: Vec<u8>,
}

impl AuxiliaryRows {
    /// Collects and sorts the displaced series from a geometry table.
    #[must_use]
    pub fn build(entries: &[GeometryEntry]) -> Self {
        let collect = |range: &RangeInclusive<u8>| {
            let mut numbers: Vec<u8> = entries
                .iter()
                .map(|e| e.number)
                .filter(|n| range.contains(n))
                .collect();
            numbers.sort_unstable();
            numbers
        };

        Self {
            lanthanides: collect(&LANTHANIDES),
            actinides: collect(&ACTINIDES),
        }
    }

    /// Returns the auxiliary row by index (0 = lanthanides, 1 = actinides).
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[u8]> {
        match index {
            0 => Some(&self.lanthanides),
            1 => Some(&self.actinides),
            _ => None,
        }
    }

    /// Returns the atomic number shown at a 1-based column of an auxiliary row.
    ///
    /// Columns before [`AUXILIARY_FIRST_COLUMN`] and slots past the end of a
    /// short series are empty.
    #[must_use]
    pub fn at(&self, index: usize, column: u8) -> Option<u8> {
        let slot = column.checked_sub(AUXILIARY_FIRST_COLUMN)?;
        if column > GROUP_COUNT {
            return None;
        }
        self.row(index)?.get(usize::from(slot)).copied()
    }
}

/// Resolves the main block from the built-in table.
#[must_use]
pub fn resolve_main_grid() -> MainGrid {
    MainGrid::build(elements())
}

/// Resolves the two auxiliary rows from the built-in table.
#[must_use]
pub fn resolve_auxiliary_rows() -> AuxiliaryRows {
    AuxiliaryRows::build(elements())
}
