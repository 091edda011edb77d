//! Static periodic table geometry.
//!
//! The table is compiled into the binary and never mutated. Every element
//! carries its atomic number, symbol, English name and its conventional
//! (group, period) coordinate. Lanthanides and actinides are listed with
//! group 3 and their natural period; [`crate::models::periodic_grid`] moves
//! them into the detached f-block rows.

use std::collections::HashSet;
use thiserror::Error;

/// Number of elements in the table.
pub const ELEMENT_COUNT: usize = 118;

/// Number of groups (columns) in the main block.
pub const GROUP_COUNT: u8 = 18;

/// Number of periods (rows) in the main block.
pub const PERIOD_COUNT: u8 = 7;

/// A positioned element of the periodic table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryEntry {
    /// Atomic number (1-118), unique
    pub number: u8,
    /// Element symbol (e.g. "H", "He"), unique
    pub symbol: &'static str,
    /// English display name
    pub name: &'static str,
    /// Group / column (1-18)
    pub group: u8,
    /// Period / row (1-7)
    pub period: u8,
}

const fn el(
    number: u8,
    symbol: &'static str,
    name: &'static str,
    group: u8,
    period: u8,
) -> GeometryEntry {
    GeometryEntry {
        number,
        symbol,
        name,
        group,
        period,
    }
}

/// The full table, ordered by atomic number.
pub static ELEMENTS: [GeometryEntry; ELEMENT_COUNT] = [
    // Period 1
    el(1, "H", "Hydrogen", 1, 1),
    el(2, "He", "Helium", 18, 1),
    // Period 2
    el(3, "Li", "Lithium", 1, 2),
    el(4, "Be", "Beryllium", 2, 2),
    el(5, "B", "Boron", 13, 2),
    el(6, "C", "Carbon", 14, 2),
    el(7, "N", "Nitrogen", 15, 2),
    el(8, "O", "Oxygen", 16, 2),
    el(9, "F", "Fluorine", 17, 2),
    el(10, "Ne", "Neon", 18, 2),
    // Period 3
    el(11, "Na", "Sodium", 1, 3),
    el(12, "Mg", "Magnesium", 2, 3),
    el(13, "Al", "Aluminium", 13, 3),
    el(14, "Si", "Silicon", 14, 3),
    el(15, "P", "Phosphorus", 15, 3),
    el(16, "S", "Sulfur", 16, 3),
    el(17, "Cl", "Chlorine", 17, 3),
    el(18, "Ar", "Argon", 18, 3),
    // Period 4
    el(19, "K", "Potassium", 1, 4),
    el(20, "Ca", "Calcium", 2, 4),
    el(21, "Sc", "Scandium", 3, 4),
    el(22, "Ti", "Titanium", 4, 4),
    el(23, "V", "Vanadium", 5, 4),
    el(24, "Cr", "Chromium", 6, 4),
    el(25, "Mn", "Manganese", 7, 4),
    el(26, "Fe", "Iron", 8, 4),
    el(27, "Co", "Cobalt", 9, 4),
    el(28, "Ni", "Nickel", 10, 4),
    el(29, "Cu", "Copper", 11, 4),
    el(30, "Zn", "Zinc", 12, 4),
    el(31, "Ga", "Gallium", 13, 4),
    el(32, "Ge", "Germanium", 14, 4),
    el(33, "As", "Arsenic", 15, 4),
    el(34, "Se", "Selenium", 16, 4),
    el(35, "Br", "Bromine", 17, 4),
    el(36, "Kr", "Krypton", 18, 4),
    // Period 5
    el(37, "Rb", "Rubidium", 1, 5),
    el(38, "Sr", "Strontium", 2, 5),
    el(39, "Y", "Yttrium", 3, 5),
    el(40, "Zr", "Zirconium", 4, 5),
    el(41, "Nb", "Niobium", 5, 5),
    el(42, "Mo", "Molybdenum", 6, 5),
    el(43, "Tc", "Technetium", 7, 5),
    el(44, "Ru", "Ruthenium", 8, 5),
    el(45, "Rh", "Rhodium", 9, 5),
    el(46, "Pd", "Palladium", 10, 5),
    el(47, "Ag", "Silver", 11, 5),
    el(48, "Cd", "Cadmium", 12, 5),
    el(49, "In", "Indium", 13, 5),
    el(50, "Sn", "Tin", 14, 5),
    el(51, "Sb", "Antimony", 15, 5),
    el(52, "Te", "Tellurium", 16, 5),
    el(53, "I", "Iodine", 17, 5),
    el(54, "Xe", "Xenon", 18, 5),
    // Period 6
    el(55, "Cs", "Caesium", 1, 6),
    el(56, "Ba", "Barium", 2, 6),
    el(57, "La", "Lanthanum", 3, 6),
    el(58, "Ce", "Cerium", 3, 6),
    el(59, "Pr", "Praseodymium", 3, 6),
    el(60, "Nd", "Neodymium", 3, 6),
    el(61, "Pm", "Promethium", 3, 6),
    el(62, "Sm", "Samarium", 3, 6),
    el(63, "Eu", "Europium", 3, 6),
    el(64, "Gd", "Gadolinium", 3, 6),
    el(65, "Tb", "Terbium", 3, 6),
    el(66, "Dy", "Dysprosium", 3, 6),
    el(67, "Ho", "Holmium", 3, 6),
    el(68, "Er", "Erbium", 3, 6),
    el(69, "Tm", "Thulium", 3, 6),
    el(70, "Yb", "Ytterbium", 3, 6),
    el(71, "Lu", "Lutetium", 3, 6),
    el(72, "Hf", "Hafnium", 4, 6),
    el(73, "Ta", "Tantalum", 5, 6),
    el(74, "W", "Tungsten", 6, 6),
    el(75, "Re", "Rhenium", 7, 6),
    el(76, "Os", "Osmium", 8, 6),
    el(77, "Ir", "Iridium", 9, 6),
    el(78, "Pt", "Platinum", 10, 6),
    el(79, "Au", "Gold", 11, 6),
    el(80, "Hg", "Mercury", 12, 6),
    el(81, "Tl", "Thallium", 13, 6),
    el(82, "Pb", "Lead", 14, 6),
    el(83, "Bi", "Bismuth", 15, 6),
    el(84, "Po", "Polonium", 16, 6),
    el(85, "At", "Astatine", 17, 6),
    el(86, "Rn", "Radon", 18, 6),
    // Period 7
    el(87, "Fr", "Francium", 1, 7),
    el(88, "Ra", "Radium", 2, 7),
    el(89, "Ac", "Actinium", 3, 7),
    el(90, "Th", "Thorium", 3, 7),
    el(91, "Pa", "Protactinium", 3, 7),
    el(92, "U", "Uranium", 3, 7),
    el(93, "Np", "Neptunium", 3, 7),
    el(94, "Pu", "Plutonium", 3, 7),
    el(95, "Am", "Americium", 3, 7),
    el(96, "Cm", "Curium", 3, 7),
    el(97, "Bk", "Berkelium", 3, 7),
    el(98, "Cf", "Californium", 3, 7),
    el(99, "Es", "Einsteinium", 3, 7),
    el(100, "Fm", "Fermium", 3, 7),
    el(101, "Md", "Mendelevium", 3, 7),
    el(102, "No", "Nobelium", 3, 7),
    el(103, "Lr", "Lawrencium", 3, 7),
    el(104, "Rf", "Rutherfordium", 4, 7),
    el(105, "Db", "Dubnium", 5, 7),
    el(106, "Sg", "Seaborgium", 6, 7),
    el(107, "Bh", "Bohrium", 7, 7),
    el(108, "Hs", "Hassium", 8, 7),
    el(109, "Mt", "Meitnerium", 9, 7),
    el(110, "Ds", "Darmstadtium", 10, 7),
    el(111, "Rg", "Roentgenium", 11, 7),
    el(112, "Cn", "Copernicium", 12, 7),
    el(113, "Nh", "Nihonium", 13, 7),
    el(114, "Fl", "Flerovium", 14, 7),
    el(115, "Mc", "Moscovium", 15, 7),
    el(116, "Lv", "Livermorium", 16, 7),
    el(117, "Ts", "Tennessine", 17, 7),
    el(118, "Og", "Oganesson", 18, 7),
];

/// Errors detected while validating a geometry table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The table does not hold exactly [`ELEMENT_COUNT`] entries.
    #[error("expected {expected} elements, found {found}")]
    WrongCount {
        /// Required entry count
        expected: usize,
        /// Actual entry count
        found: usize,
    },
    /// Two entries share an atomic number.
    #[error("duplicate atomic number {0}")]
    DuplicateNumber(u8),
    /// Two entries share a symbol.
    #[error("duplicate symbol '{0}'")]
    DuplicateSymbol(&'static str),
    /// An entry lies outside the 18x7 grid or has an invalid number.
    #[error("element {symbol} ({number}) has invalid position group {group}, period {period}")]
    OutOfRange {
        /// Offending atomic number
        number: u8,
        /// Offending symbol
        symbol: &'static str,
        /// Group coordinate
        group: u8,
        /// Period coordinate
        period: u8,
    },
}

/// Returns the compiled-in element table.
#[must_use]
pub fn elements() -> &'static [GeometryEntry] {
    &ELEMENTS
}

/// Checks count, uniqueness of numbers and symbols, and coordinate ranges.
pub fn validate_table(entries: &[GeometryEntry]) -> Result<(), GeometryError> {
    if entries.len() != ELEMENT_COUNT {
        return Err(GeometryError::WrongCount {
            expected: ELEMENT_COUNT,
            found: entries.len(),
        });
    }

    let mut numbers = HashSet::new();
    let mut symbols = HashSet::new();

    for entry in entries {
        let in_range = (1..=ELEMENT_COUNT).contains(&usize::from(entry.number))
            && (1..=GROUP_COUNT).contains(&entry.group)
            && (1..=PERIOD_COUNT).contains(&entry.period);
        if !in_range {
            return Err(GeometryError::OutOfRange {
                number: entry.number,
                symbol: entry.symbol,
                group: entry.group,
                period: entry.period,
            });
        }
        if !numbers.insert(entry.number) {
            return Err(GeometryError::DuplicateNumber(entry.number));
        }
        if !symbols.insert(entry.symbol) {
            return Err(GeometryError::DuplicateSymbol(entry.symbol));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_is_valid() {
        assert_eq!(validate_table(elements()), Ok(()));
    }

    #[test]
    fn test_table_is_ordered_by_number() {
        for (idx, entry) in ELEMENTS.iter().enumerate() {
            assert_eq!(
                usize::from(entry.number),
                idx + 1,
                "{} out of order",
                entry.symbol
            );
        }
    }

    #[test]
    fn test_iron_entry() {
        let iron = &elements()[25];
        assert_eq!(iron.number, 26);
        assert_eq!(iron.symbol, "Fe");
        assert_eq!(iron.name, "Iron");
        assert_eq!((iron.group, iron.period), (8, 4));
        assert_eq!(elements()[117].symbol, "Og");
    }

    #[test]
    fn test_f_block_shares_group_three() {
        let lanthanides: Vec<_> = ELEMENTS
            .iter()
            .filter(|e| (57..=71).contains(&e.number))
            .collect();
        let actinides: Vec<_> = ELEMENTS
            .iter()
            .filter(|e| (89..=103).contains(&e.number))
            .collect();

        assert_eq!(lanthanides.len(), 15);
        assert_eq!(actinides.len(), 15);
        assert!(lanthanides.iter().all(|e| e.group == 3 && e.period == 6));
        assert!(actinides.iter().all(|e| e.group == 3 && e.period == 7));
    }

    #[test]
    fn test_validate_rejects_duplicates() {
        let mut entries = ELEMENTS.to_vec();
        entries[1].symbol = "H";
        assert_eq!(
            validate_table(&entries),
            Err(GeometryError::DuplicateSymbol("H"))
        );

        let mut entries = ELEMENTS.to_vec();
        entries[5].number = 5;
        assert_eq!(
            validate_table(&entries),
            Err(GeometryError::DuplicateNumber(5))
        );
    }

    #[test]
    fn test_validate_rejects_bad_count_and_range() {
        assert!(matches!(
            validate_table(&ELEMENTS[..117]),
            Err(GeometryError::WrongCount { found: 117, .. })
        ));

        let mut entries = ELEMENTS.to_vec();
        entries[0].group = 19;
        assert!(matches!(
            validate_table(&entries),
            Err(GeometryError::OutOfRange { number: 1, .. })
        ));
    }
}
