//! Cation and anion reference tables for the IGCSE/A-Level syllabus.

use serde::Serialize;

/// A single ion from the reference tables. Immutable static data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Ion {
    /// Display symbol carrying the charge, e.g. "Fe3+", "SO4 2-".
    pub symbol: &'static str,
    /// Bare element/group symbol, e.g. "Fe", "SO4".
    pub core: &'static str,
    /// English name ("iron", "sulfate"); anion names already carry their suffix.
    pub name: &'static str,
    /// Signed charge.
    pub charge: i32,
    /// Polyatomic ions get parenthesized in formulas when taken more than once.
    pub poly: bool,
    /// More than one common charge; always named with a Roman numeral.
    pub variable: bool,
}

pub const CATIONS: &[Ion] = &[
    Ion { symbol: "H+", core: "H", name: "hydrogen", charge: 1, poly: false, variable: false },
    Ion { symbol: "Na+", core: "Na", name: "sodium", charge: 1, poly: false, variable: false },
    Ion { symbol: "K+", core: "K", name: "potassium", charge: 1, poly: false, variable: false },
    Ion { symbol: "Mg2+", core: "Mg", name: "magnesium", charge: 2, poly: false, variable: false },
    Ion { symbol: "Ca2+", core: "Ca", name: "calcium", charge: 2, poly: false, variable: false },
    Ion { symbol: "Al3+", core: "Al", name: "aluminium", charge: 3, poly: false, variable: false },
    Ion { symbol: "NH4+", core: "NH4", name: "ammonium", charge: 1, poly: true, variable: false },
    Ion { symbol: "Fe2+", core: "Fe", name: "iron", charge: 2, poly: false, variable: true },
    Ion { symbol: "Fe3+", core: "Fe", name: "iron", charge: 3, poly: false, variable: true },
    Ion { symbol: "Cu+", core: "Cu", name: "copper", charge: 1, poly: false, variable: true },
    Ion { symbol: "Cu2+", core: "Cu", name: "copper", charge: 2, poly: false, variable: true },
    Ion { symbol: "Sn2+", core: "Sn", name: "tin", charge: 2, poly: false, variable: true },
    Ion { symbol: "Sn4+", core: "Sn", name: "tin", charge: 4, poly: false, variable: true },
    Ion { symbol: "Pb2+", core: "Pb", name: "lead", charge: 2, poly: false, variable: true },
    Ion { symbol: "Pb4+", core: "Pb", name: "lead", charge: 4, poly: false, variable: true },
    Ion { symbol: "Ag+", core: "Ag", name: "silver", charge: 1, poly: false, variable: false },
    Ion { symbol: "Zn2+", core: "Zn", name: "zinc", charge: 2, poly: false, variable: false },
];

pub const ANIONS: &[Ion] = &[
    Ion { symbol: "F-", core: "F", name: "fluoride", charge: -1, poly: false, variable: false },
    Ion { symbol: "Cl-", core: "Cl", name: "chloride", charge: -1, poly: false, variable: false },
    Ion { symbol: "Br-", core: "Br", name: "bromide", charge: -1, poly: false, variable: false },
    Ion { symbol: "I-", core: "I", name: "iodide", charge: -1, poly: false, variable: false },
    Ion { symbol: "O2-", core: "O", name: "oxide", charge: -2, poly: false, variable: false },
    Ion { symbol: "S2-", core: "S", name: "sulfide", charge: -2, poly: false, variable: false },
    Ion { symbol: "N3-", core: "N", name: "nitride", charge: -3, poly: false, variable: false },
    Ion { symbol: "OH-", core: "OH", name: "hydroxide", charge: -1, poly: true, variable: false },
    Ion { symbol: "NO3-", core: "NO3", name: "nitrate", charge: -1, poly: true, variable: false },
    Ion { symbol: "NO2-", core: "NO2", name: "nitrite", charge: -1, poly: true, variable: false },
    Ion { symbol: "SO4 2-", core: "SO4", name: "sulfate", charge: -2, poly: true, variable: false },
    Ion { symbol: "SO3 2-", core: "SO3", name: "sulfite", charge: -2, poly: true, variable: false },
    Ion { symbol: "CO3 2-", core: "CO3", name: "carbonate", charge: -2, poly: true, variable: false },
    Ion { symbol: "HCO3-", core: "HCO3", name: "hydrogencarbonate", charge: -1, poly: true, variable: false },
    Ion { symbol: "PO4 3-", core: "PO4", name: "phosphate", charge: -3, poly: true, variable: false },
    Ion { symbol: "CN-", core: "CN", name: "cyanide", charge: -1, poly: true, variable: false },
    Ion { symbol: "CH3COO-", core: "CH3COO", name: "ethanoate", charge: -1, poly: true, variable: false },
];

/// Metals commonly taught with more than one oxidation state.
const VARIABLE_METALS: &[&str] = &["Fe", "Cu", "Sn", "Pb", "Cr", "Mn", "Co", "Ni", "Hg"];

pub fn is_variable_metal(symbol: &str) -> bool {
    VARIABLE_METALS.contains(&symbol)
}

pub fn cation_by_symbol(symbol: &str) -> Option<&'static Ion> {
    CATIONS.iter().find(|ion| ion.symbol == symbol)
}

pub fn anion_by_symbol(symbol: &str) -> Option<&'static Ion> {
    ANIONS.iter().find(|ion| ion.symbol == symbol)
}

/// Look up any ion, cation tables first.
pub fn ion_by_symbol(symbol: &str) -> Option<&'static Ion> {
    cation_by_symbol(symbol).or_else(|| anion_by_symbol(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_symbol() {
        let fe = cation_by_symbol("Fe3+").unwrap();
        assert_eq!(fe.core, "Fe");
        assert_eq!(fe.charge, 3);
        assert!(fe.variable);

        let sulfate = anion_by_symbol("SO4 2-").unwrap();
        assert_eq!(sulfate.name, "sulfate");
        assert_eq!(sulfate.charge, -2);
        assert!(sulfate.poly);
    }

    #[test]
    fn unknown_symbol_returns_none() {
        assert!(cation_by_symbol("Xx+").is_none());
        assert!(anion_by_symbol("Cl").is_none());
        assert!(ion_by_symbol("").is_none());
    }

    #[test]
    fn charges_have_the_right_sign() {
        assert!(CATIONS.iter().all(|ion| ion.charge > 0));
        assert!(ANIONS.iter().all(|ion| ion.charge < 0));
    }

    #[test]
    fn variable_metals_are_flagged() {
        for symbol in ["Fe2+", "Fe3+", "Cu+", "Cu2+", "Sn2+", "Pb4+"] {
            assert!(cation_by_symbol(symbol).unwrap().variable, "{symbol}");
        }
        assert!(!cation_by_symbol("Ag+").unwrap().variable);
        assert!(!cation_by_symbol("Zn2+").unwrap().variable);
        assert!(is_variable_metal("Fe"));
        assert!(!is_variable_metal("Zn"));
    }
}
