//! Display helpers: HTML markup for formulas and ion tokens, condensed
//! plain formulas, and the ionic/covalent classifier.

use std::sync::OnceLock;

use regex::Regex;

use crate::core::models::{FormulaPart, Kind};
use crate::data::ions::ion_by_symbol;

fn digit_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+)").unwrap())
}

fn trailing_charge() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s*[0-9]*[+\-−]$").unwrap())
}

/// Digits inside a core become subscripts: "SO4" -> "SO<sub>4</sub>".
pub fn core_markup(core: &str) -> String {
    digit_runs().replace_all(core, "<sub>$1</sub>").into_owned()
}

/// Ion token with superscript charge: ("Fe", 3) -> "Fe<sup>3+</sup>".
/// A magnitude of one is omitted; minus renders as U+2212.
pub fn ion_markup(core: &str, charge: i32) -> String {
    let magnitude = charge.unsigned_abs();
    let sign = if charge > 0 { '+' } else { '−' };
    let charge_str = if magnitude == 1 {
        sign.to_string()
    } else {
        format!("{magnitude}{sign}")
    };
    format!("{}<sup>{}</sup>", core_markup(core), charge_str)
}

/// Core token of a part, preferring `core` over `symbol`, with any stray
/// charge notation and whitespace stripped ("SO4 2-" -> "SO4").
fn clean_token(part: &FormulaPart) -> String {
    let token = if part.core.is_empty() { &part.symbol } else { &part.core };
    trailing_charge().replace(token, "").replace(char::is_whitespace, "")
}

/// Neutral formula markup, tokens concatenated in input order. Counts past
/// one render as subscripts; polyatomic groups taken more than once are
/// parenthesized first (Ca(OH)₂, not CaOH₂). Empty input yields "".
pub fn format_formula(parts: &[FormulaPart]) -> String {
    parts
        .iter()
        .map(|part| {
            let token = clean_token(part);
            if part.poly && part.count > 1 {
                format!("({})<sub>{}</sub>", core_markup(&token), part.count)
            } else if part.count > 1 {
                format!("{}<sub>{}</sub>", core_markup(&token), part.count)
            } else {
                core_markup(&token)
            }
        })
        .collect()
}

/// Condensed plain-text formula ("H2O", "N2O5"); used as the alias and
/// common-compound lookup key.
pub fn plain_formula(parts: &[FormulaPart]) -> String {
    parts
        .iter()
        .map(|part| {
            let token = clean_token(part);
            if part.count > 1 {
                format!("{}{}", token, part.count)
            } else {
                token
            }
        })
        .collect()
}

/// Ionic if any part's symbol appears in the ion tables, else covalent.
pub fn classify(parts: &[FormulaPart]) -> Kind {
    if parts.iter().any(|p| ion_by_symbol(&p.symbol).is_some()) {
        Kind::Ionic
    } else {
        Kind::Covalent
    }
}

/// Classroom heuristic: the element/count pair matches a well-known
/// molecular formula (H2O, CO2, NH3, ...) once sorted by symbol.
pub fn looks_common(parts: &[FormulaPart]) -> bool {
    const COMMON: &[&str] = &[
        "H2O", "NH3", "CO", "CO2", "NO", "NO2", "N2O", "N2O4", "SO2", "SO3", "CH4", "CCl4",
        "OF2", "SF6", "HF", "HCl", "HBr", "HI", "PCl3", "PCl5", "P4", "S8", "O2", "N2", "F2",
        "Cl2", "Br2", "I2",
    ];

    let mut sorted: Vec<&FormulaPart> = parts.iter().collect();
    sorted.sort_by(|a, b| a.symbol.cmp(&b.symbol));
    let formula: String = sorted
        .iter()
        .map(|p| {
            if p.count > 1 {
                format!("{}{}", p.symbol, p.count)
            } else {
                p.symbol.clone()
            }
        })
        .collect();
    COMMON.contains(&formula.as_str())
}
