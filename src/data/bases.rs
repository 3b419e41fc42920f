//! Base reference table and hydroxide naming.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseKind {
    MetalHydroxide,
    AmmoniaSolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Base {
    pub formula: &'static str,
    pub name: &'static str,
    pub kind: BaseKind,
    /// Metal (or ammonium) core plus the hydroxide group.
    pub components: [&'static str; 2],
    /// Metal with more than one common charge; name carries a Roman numeral.
    pub variable: bool,
    pub state: &'static str,
}

pub const BASES: &[Base] = &[
    Base { formula: "NaOH", name: "sodium hydroxide", kind: BaseKind::MetalHydroxide, components: ["Na", "OH"], variable: false, state: "aq" },
    Base { formula: "KOH", name: "potassium hydroxide", kind: BaseKind::MetalHydroxide, components: ["K", "OH"], variable: false, state: "aq" },
    Base { formula: "Ca(OH)2", name: "calcium hydroxide", kind: BaseKind::MetalHydroxide, components: ["Ca", "OH"], variable: false, state: "aq" },
    Base { formula: "Mg(OH)2", name: "magnesium hydroxide", kind: BaseKind::MetalHydroxide, components: ["Mg", "OH"], variable: false, state: "aq" },
    Base { formula: "Al(OH)3", name: "aluminium hydroxide", kind: BaseKind::MetalHydroxide, components: ["Al", "OH"], variable: false, state: "aq" },
    Base { formula: "Fe(OH)2", name: "iron(II) hydroxide", kind: BaseKind::MetalHydroxide, components: ["Fe", "OH"], variable: true, state: "aq" },
    Base { formula: "Fe(OH)3", name: "iron(III) hydroxide", kind: BaseKind::MetalHydroxide, components: ["Fe", "OH"], variable: true, state: "aq" },
    Base { formula: "Cu(OH)2", name: "copper(II) hydroxide", kind: BaseKind::MetalHydroxide, components: ["Cu", "OH"], variable: true, state: "aq" },
    Base { formula: "NH4OH", name: "ammonium hydroxide", kind: BaseKind::AmmoniaSolution, components: ["NH4", "OH"], variable: false, state: "aq" },
];

pub fn base_by_formula(formula: &str) -> Option<&'static Base> {
    BASES.iter().find(|b| b.formula == formula)
}

/// Metal name + "hydroxide"; the hydroxide count never changes the name.
pub fn name_base(metal_name: &str) -> String {
    format!("{metal_name} hydroxide")
}

/// Plain formula for a metal hydroxide: one OH group per unit of charge,
/// parenthesized past one ("NaOH", "Ca(OH)2").
pub fn base_formula(metal_core: &str, oh_count: u32) -> String {
    if oh_count > 1 {
        format!("{metal_core}(OH){oh_count}")
    } else {
        format!("{metal_core}OH")
    }
}
