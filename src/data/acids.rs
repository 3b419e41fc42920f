//! Acid reference tables and the acid naming rules, plus the molecular
//! (gas-phase) compounds whose aqueous solutions are named as acids/bases.

use serde::Serialize;

use super::bases::base_by_formula;
use super::elements::element_root;
use super::ions::Ion;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AcidKind {
    /// Hydrogen + a nonmetal, named "hydro...ic acid".
    Binary,
    /// Hydrogen + an oxygen-bearing polyatomic ion, named by suffix swap.
    Oxyacid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Acid {
    pub formula: &'static str,
    pub name: &'static str,
    pub kind: AcidKind,
    /// Hydrogen plus the nonmetal or polyatomic core.
    pub components: [&'static str; 2],
    /// Always "aq"; acid naming only applies in solution.
    pub state: &'static str,
}

pub const ACIDS: &[Acid] = &[
    Acid { formula: "HCl", name: "hydrochloric acid", kind: AcidKind::Binary, components: ["H", "Cl"], state: "aq" },
    Acid { formula: "HBr", name: "hydrobromic acid", kind: AcidKind::Binary, components: ["H", "Br"], state: "aq" },
    Acid { formula: "HI", name: "hydroiodic acid", kind: AcidKind::Binary, components: ["H", "I"], state: "aq" },
    Acid { formula: "HF", name: "hydrofluoric acid", kind: AcidKind::Binary, components: ["H", "F"], state: "aq" },
    Acid { formula: "H2S", name: "hydrosulfuric acid", kind: AcidKind::Binary, components: ["H", "S"], state: "aq" },
    Acid { formula: "HNO3", name: "nitric acid", kind: AcidKind::Oxyacid, components: ["H", "NO3"], state: "aq" },
    Acid { formula: "HNO2", name: "nitrous acid", kind: AcidKind::Oxyacid, components: ["H", "NO2"], state: "aq" },
    Acid { formula: "H2SO4", name: "sulfuric acid", kind: AcidKind::Oxyacid, components: ["H", "SO4"], state: "aq" },
    Acid { formula: "H2SO3", name: "sulfurous acid", kind: AcidKind::Oxyacid, components: ["H", "SO3"], state: "aq" },
    Acid { formula: "H3PO4", name: "phosphoric acid", kind: AcidKind::Oxyacid, components: ["H", "PO4"], state: "aq" },
    Acid { formula: "H3PO3", name: "phosphorous acid", kind: AcidKind::Oxyacid, components: ["H", "PO3"], state: "aq" },
    Acid { formula: "HClO4", name: "perchloric acid", kind: AcidKind::Oxyacid, components: ["H", "ClO4"], state: "aq" },
    Acid { formula: "HClO3", name: "chloric acid", kind: AcidKind::Oxyacid, components: ["H", "ClO3"], state: "aq" },
    Acid { formula: "HClO2", name: "chlorous acid", kind: AcidKind::Oxyacid, components: ["H", "ClO2"], state: "aq" },
    Acid { formula: "HClO", name: "hypochlorous acid", kind: AcidKind::Oxyacid, components: ["H", "ClO"], state: "aq" },
    Acid { formula: "H2CO3", name: "carbonic acid", kind: AcidKind::Oxyacid, components: ["H", "CO3"], state: "aq" },
    Acid { formula: "H2CrO4", name: "chromic acid", kind: AcidKind::Oxyacid, components: ["H", "CrO4"], state: "aq" },
    Acid { formula: "H2Cr2O7", name: "dichromic acid", kind: AcidKind::Oxyacid, components: ["H", "Cr2O7"], state: "aq" },
];

/// A covalent gas/liquid molecule whose aqueous solution takes an acid or
/// base name (HCl(g) "hydrogen chloride" vs HCl(aq) "hydrochloric acid").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MolecularCompound {
    pub formula: &'static str,
    pub name: &'static str,
    pub components: [&'static str; 2],
    pub state: &'static str,
    /// Name the same formula takes in aqueous solution.
    pub aqueous_name: &'static str,
    /// The solution is a base (ammonia) rather than an acid.
    pub aqueous_is_base: bool,
}

pub const MOLECULAR_COMPOUNDS: &[MolecularCompound] = &[
    MolecularCompound { formula: "HCl", name: "hydrogen chloride", components: ["H", "Cl"], state: "g", aqueous_name: "hydrochloric acid", aqueous_is_base: false },
    MolecularCompound { formula: "HBr", name: "hydrogen bromide", components: ["H", "Br"], state: "g", aqueous_name: "hydrobromic acid", aqueous_is_base: false },
    MolecularCompound { formula: "HI", name: "hydrogen iodide", components: ["H", "I"], state: "g", aqueous_name: "hydroiodic acid", aqueous_is_base: false },
    MolecularCompound { formula: "HF", name: "hydrogen fluoride", components: ["H", "F"], state: "g", aqueous_name: "hydrofluoric acid", aqueous_is_base: false },
    MolecularCompound { formula: "H2S", name: "hydrogen sulfide", components: ["H", "S"], state: "g", aqueous_name: "hydrosulfuric acid", aqueous_is_base: false },
    MolecularCompound { formula: "NH3", name: "ammonia", components: ["N", "H"], state: "g", aqueous_name: "ammonium hydroxide", aqueous_is_base: true },
    MolecularCompound { formula: "CO2", name: "carbon dioxide", components: ["C", "O"], state: "g", aqueous_name: "carbonic acid", aqueous_is_base: false },
    MolecularCompound { formula: "SO2", name: "sulfur dioxide", components: ["S", "O"], state: "g", aqueous_name: "sulfurous acid", aqueous_is_base: false },
    MolecularCompound { formula: "SO3", name: "sulfur trioxide", components: ["S", "O"], state: "g", aqueous_name: "sulfuric acid", aqueous_is_base: false },
    MolecularCompound { formula: "NO2", name: "nitrogen dioxide", components: ["N", "O"], state: "g", aqueous_name: "nitrous acid", aqueous_is_base: false },
    MolecularCompound { formula: "N2O3", name: "dinitrogen trioxide", components: ["N", "O"], state: "g", aqueous_name: "nitrous acid", aqueous_is_base: false },
    MolecularCompound { formula: "N2O5", name: "dinitrogen pentoxide", components: ["N", "O"], state: "g", aqueous_name: "nitric acid", aqueous_is_base: false },
];

pub fn acid_by_formula(formula: &str) -> Option<&'static Acid> {
    ACIDS.iter().find(|a| a.formula == formula)
}

pub fn molecular_by_formula(formula: &str) -> Option<&'static MolecularCompound> {
    MOLECULAR_COMPOUNDS.iter().find(|m| m.formula == formula)
}

/// "hydro" + element root + "ic acid", e.g. Cl -> "hydrochloric acid".
pub fn name_binary_acid(symbol: &str) -> String {
    format!("hydro{}ic acid", element_root(symbol))
}

/// Mechanical oxyacid suffix swap: -ate -> -ic acid, -ite -> -ous acid.
/// Names without the expected suffix pass through unchanged.
pub fn name_oxyacid(polyatomic_name: &str, more_oxygen: bool) -> String {
    if more_oxygen {
        match polyatomic_name.strip_suffix("ate") {
            Some(stem) => format!("{stem}ic acid"),
            None => polyatomic_name.to_string(),
        }
    } else {
        match polyatomic_name.strip_suffix("ite") {
            Some(stem) => format!("{stem}ous acid"),
            None => polyatomic_name.to_string(),
        }
    }
}

/// Formula for the oxyacid of a polyatomic anion: one hydrogen per unit of
/// charge, e.g. SO4(2-) -> "H2SO4".
pub fn oxyacid_formula(polyatomic: &Ion) -> String {
    let h_count = polyatomic.charge.unsigned_abs();
    if h_count > 1 {
        format!("H{}{}", h_count, polyatomic.core)
    } else {
        format!("H{}", polyatomic.core)
    }
}

/// State-aware name: aqueous formulas use the acid/base tables, everything
/// else the molecular table; unknown formulas fall back to the formula.
pub fn compound_name(formula: &str, state: &str) -> String {
    if state == "aq" {
        if let Some(acid) = acid_by_formula(formula) {
            return acid.name.to_string();
        }
        if let Some(base) = base_by_formula(formula) {
            return base.name.to_string();
        }
    } else if let Some(molecular) = molecular_by_formula(formula) {
        return molecular.name.to_string();
    }
    formula.to_string()
}

/// Molecular vs aqueous naming of the same formula, for side-by-side display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormComparison {
    pub formula: &'static str,
    pub molecular_name: &'static str,
    pub molecular_state: &'static str,
    pub aqueous_name: &'static str,
    pub aqueous_state: &'static str,
    pub aqueous_is_base: bool,
}

pub fn compare_forms(formula: &str) -> Option<FormComparison> {
    let molecular = molecular_by_formula(formula)?;
    Some(FormComparison {
        formula: molecular.formula,
        molecular_name: molecular.name,
        molecular_state: molecular.state,
        aqueous_name: molecular.aqueous_name,
        aqueous_state: "aq",
        aqueous_is_base: molecular.aqueous_is_base,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ions::anion_by_symbol;

    #[test]
    fn binary_acid_names() {
        assert_eq!(name_binary_acid("Cl"), "hydrochloric acid");
        assert_eq!(name_binary_acid("F"), "hydrofluoric acid");
        assert_eq!(name_binary_acid("Br"), "hydrobromic acid");
    }

    #[test]
    fn oxyacid_suffix_swap() {
        assert_eq!(name_oxyacid("sulfate", true), "sulfic acid");
        assert_eq!(name_oxyacid("sulfite", false), "sulfous acid");
        // No matching suffix: passes through untouched
        assert_eq!(name_oxyacid("sulfite", true), "sulfite");
    }

    #[test]
    fn oxyacid_formula_from_charge() {
        assert_eq!(oxyacid_formula(anion_by_symbol("NO3-").unwrap()), "HNO3");
        assert_eq!(oxyacid_formula(anion_by_symbol("SO4 2-").unwrap()), "H2SO4");
        assert_eq!(oxyacid_formula(anion_by_symbol("PO4 3-").unwrap()), "H3PO4");
    }

    #[test]
    fn state_aware_naming() {
        assert_eq!(compound_name("HCl", "aq"), "hydrochloric acid");
        assert_eq!(compound_name("HCl", "g"), "hydrogen chloride");
        assert_eq!(compound_name("NaOH", "aq"), "sodium hydroxide");
        assert_eq!(compound_name("Unknown", "aq"), "Unknown");
    }

    #[test]
    fn form_comparison() {
        let forms = compare_forms("HCl").unwrap();
        assert_eq!(forms.molecular_name, "hydrogen chloride");
        assert_eq!(forms.aqueous_name, "hydrochloric acid");
        assert_eq!(forms.molecular_state, "g");
        assert_eq!(forms.aqueous_state, "aq");
        assert!(!forms.aqueous_is_base);

        let ammonia = compare_forms("NH3").unwrap();
        assert!(ammonia.aqueous_is_base);

        assert!(compare_forms("Unknown").is_none());
    }

    #[test]
    fn table_shape() {
        assert!(ACIDS.iter().all(|a| a.formula.starts_with('H') && a.state == "aq"));
        assert!(ACIDS.iter().any(|a| a.kind == AcidKind::Binary));
        assert!(ACIDS.iter().any(|a| a.kind == AcidKind::Oxyacid));
        assert_eq!(acid_by_formula("H2SO4").unwrap().name, "sulfuric acid");
    }
}
