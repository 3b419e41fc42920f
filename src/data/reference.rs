//! Help-screen reference tables: oxyanion naming progressions and state
//! symbols. Leaf data for display, no behavior beyond lookup.

use serde::Serialize;

/// One step in an oxyanion series (e.g. perchlorate -> hypochlorite).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Oxyanion {
    /// Display formula with Unicode sub/superscripts, e.g. "ClO₄⁻".
    pub formula: &'static str,
    pub name: &'static str,
    pub oxygen: u8,
    /// Naming pattern at this oxygen count ("per...ate (most oxygen)").
    pub pattern: &'static str,
    pub examples: &'static [&'static str],
    pub uses: &'static str,
}

/// Oxyanion progression for one element, most oxygen first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OxyanionSeries {
    pub element: &'static str,
    pub symbol: &'static str,
    pub base_charge: i32,
    pub progression: &'static [Oxyanion],
}

pub const OXYANION_SERIES: &[OxyanionSeries] = &[
    OxyanionSeries {
        element: "Chlorine",
        symbol: "Cl",
        base_charge: -1,
        progression: &[
            Oxyanion { formula: "ClO₄⁻", name: "perchlorate", oxygen: 4, pattern: "per...ate (most oxygen)", examples: &["KClO₄", "NaClO₄"], uses: "Oxidizing agents, explosives" },
            Oxyanion { formula: "ClO₃⁻", name: "chlorate", oxygen: 3, pattern: "ate (more oxygen)", examples: &["KClO₃", "NaClO₃"], uses: "Disinfectants, weed killers" },
            Oxyanion { formula: "ClO₂⁻", name: "chlorite", oxygen: 2, pattern: "ite (less oxygen)", examples: &["NaClO₂", "KClO₂"], uses: "Bleaching agents" },
            Oxyanion { formula: "ClO⁻", name: "hypochlorite", oxygen: 1, pattern: "hypo...ite (least oxygen)", examples: &["NaClO", "Ca(ClO)₂"], uses: "Bleach, disinfectants" },
        ],
    },
    OxyanionSeries {
        element: "Sulfur",
        symbol: "S",
        base_charge: -2,
        progression: &[
            Oxyanion { formula: "SO₄²⁻", name: "sulfate", oxygen: 4, pattern: "ate (more oxygen)", examples: &["Na₂SO₄", "CaSO₄"], uses: "Fertilizers, construction materials" },
            Oxyanion { formula: "SO₃²⁻", name: "sulfite", oxygen: 3, pattern: "ite (less oxygen)", examples: &["Na₂SO₃", "K₂SO₃"], uses: "Preservatives, reducing agents" },
        ],
    },
    OxyanionSeries {
        element: "Nitrogen",
        symbol: "N",
        base_charge: -1,
        progression: &[
            Oxyanion { formula: "NO₃⁻", name: "nitrate", oxygen: 3, pattern: "ate (more oxygen)", examples: &["KNO₃", "NaNO₃"], uses: "Fertilizers, explosives" },
            Oxyanion { formula: "NO₂⁻", name: "nitrite", oxygen: 2, pattern: "ite (less oxygen)", examples: &["NaNO₂", "KNO₂"], uses: "Food preservatives, curing agents" },
        ],
    },
    OxyanionSeries {
        element: "Phosphorus",
        symbol: "P",
        base_charge: -3,
        progression: &[
            Oxyanion { formula: "PO₄³⁻", name: "phosphate", oxygen: 4, pattern: "ate (more oxygen)", examples: &["Na₃PO₄", "Ca₃(PO₄)₂"], uses: "Fertilizers, detergents" },
            Oxyanion { formula: "PO₃³⁻", name: "phosphite", oxygen: 3, pattern: "ite (less oxygen)", examples: &["Na₃PO₃", "K₃PO₃"], uses: "Reducing agents, plant nutrients" },
        ],
    },
    OxyanionSeries {
        element: "Carbon",
        symbol: "C",
        base_charge: -2,
        progression: &[
            Oxyanion { formula: "CO₃²⁻", name: "carbonate", oxygen: 3, pattern: "ate (more oxygen)", examples: &["Na₂CO₃", "CaCO₃"], uses: "Construction, antacids" },
            Oxyanion { formula: "CO₂²⁻", name: "carbonite", oxygen: 2, pattern: "ite (less oxygen)", examples: &["Na₂CO₂"], uses: "Laboratory research only" },
        ],
    },
];

/// Physical state symbol shown after a formula, e.g. "(aq)".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StateSymbol {
    pub symbol: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const STATE_SYMBOLS: &[StateSymbol] = &[
    StateSymbol { symbol: "(g)", name: "gas", description: "Gaseous state at room temperature" },
    StateSymbol { symbol: "(l)", name: "liquid", description: "Liquid state at room temperature" },
    StateSymbol { symbol: "(s)", name: "solid", description: "Solid state at room temperature" },
    StateSymbol { symbol: "(aq)", name: "aqueous", description: "Dissolved in water (solution)" },
    StateSymbol { symbol: "(cr)", name: "crystalline", description: "Crystalline solid form" },
    StateSymbol { symbol: "(am)", name: "amorphous", description: "Amorphous solid form" },
];

pub fn series_for(symbol: &str) -> Option<&'static OxyanionSeries> {
    OXYANION_SERIES.iter().find(|s| s.symbol == symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progressions_run_most_oxygen_first() {
        for series in OXYANION_SERIES {
            let oxygens: Vec<u8> = series.progression.iter().map(|o| o.oxygen).collect();
            let mut sorted = oxygens.clone();
            sorted.sort_unstable_by(|a, b| b.cmp(a));
            assert_eq!(oxygens, sorted, "{}", series.element);
        }
    }

    #[test]
    fn chlorine_series_is_complete() {
        let cl = series_for("Cl").unwrap();
        let names: Vec<&str> = cl.progression.iter().map(|o| o.name).collect();
        assert_eq!(names, ["perchlorate", "chlorate", "chlorite", "hypochlorite"]);
    }

    #[test]
    fn state_symbols_cover_the_syllabus() {
        assert_eq!(STATE_SYMBOLS.len(), 6);
        assert!(STATE_SYMBOLS.iter().any(|s| s.symbol == "(aq)"));
    }
}
