//! Nonmetal elements and the covalent-naming prefix/root tables.

use serde::Serialize;

/// A nonmetal element available in covalent compounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Element {
    pub symbol: &'static str,
    pub name: &'static str,
}

pub const NONMETALS: &[Element] = &[
    Element { symbol: "H", name: "hydrogen" },
    Element { symbol: "C", name: "carbon" },
    Element { symbol: "N", name: "nitrogen" },
    Element { symbol: "O", name: "oxygen" },
    Element { symbol: "F", name: "fluorine" },
    Element { symbol: "P", name: "phosphorus" },
    Element { symbol: "S", name: "sulfur" },
    Element { symbol: "Cl", name: "chlorine" },
    Element { symbol: "Br", name: "bromine" },
    Element { symbol: "I", name: "iodine" },
];

/// Greek numeric prefixes for atom counts 1-10.
pub const GREEK_PREFIXES: [&str; 10] =
    ["mono", "di", "tri", "tetra", "penta", "hexa", "hepta", "octa", "nona", "deca"];

/// Prefix for an atom count, `None` outside 1-10.
pub fn greek_prefix(count: u32) -> Option<&'static str> {
    if (1..=10).contains(&count) {
        Some(GREEK_PREFIXES[(count - 1) as usize])
    } else {
        None
    }
}

/// Consonant stems used for "-ide" names and acid roots ("carb" + "ide").
const ELEMENT_ROOTS: &[(&str, &str)] = &[
    ("H", "hydr"),
    ("C", "carb"),
    ("N", "nitr"),
    ("O", "ox"),
    ("F", "fluor"),
    ("P", "phosph"),
    ("S", "sulf"),
    ("Cl", "chlor"),
    ("Br", "brom"),
    ("I", "iod"),
];

/// Naming root for an element; unknown symbols fall back to lowercase.
pub fn element_root(symbol: &str) -> String {
    ELEMENT_ROOTS
        .iter()
        .find(|(sym, _)| *sym == symbol)
        .map(|(_, root)| root.to_string())
        .unwrap_or_else(|| symbol.to_lowercase())
}

pub fn nonmetal_by_symbol(symbol: &str) -> Option<&'static Element> {
    NONMETALS.iter().find(|e| e.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_for_known_elements() {
        assert_eq!(element_root("H"), "hydr");
        assert_eq!(element_root("Cl"), "chlor");
        assert_eq!(element_root("S"), "sulf");
        assert_eq!(element_root("O"), "ox");
    }

    #[test]
    fn unknown_root_falls_back_to_lowercase() {
        assert_eq!(element_root("X"), "x");
        assert_eq!(element_root("Xe"), "xe");
    }

    #[test]
    fn prefix_bounds() {
        assert_eq!(greek_prefix(1), Some("mono"));
        assert_eq!(greek_prefix(5), Some("penta"));
        assert_eq!(greek_prefix(10), Some("deca"));
        assert_eq!(greek_prefix(0), None);
        assert_eq!(greek_prefix(11), None);
    }

    #[test]
    fn nonmetal_lookup() {
        assert_eq!(nonmetal_by_symbol("N").unwrap().name, "nitrogen");
        assert!(nonmetal_by_symbol("Na").is_none());
    }
}
