//! Hand-curated accepted answer aliases for well-known compounds, keyed by
//! condensed plain formula. A fixed lookup table; no general rule exists.

use crate::core::models::FormulaPart;
use crate::naming::formula::plain_formula;

const ALIASES: &[(&str, &[&str])] = &[
    ("H2O", &["water", "dihydrogen monoxide"]),
    ("NH3", &["ammonia", "nitrogen trihydride"]),
    ("NO", &["nitrogen monoxide"]),
    ("N2O", &["dinitrogen monoxide"]),
];

/// Alternate names accepted for the compound alongside its systematic name.
pub fn accepted_aliases(parts: &[FormulaPart]) -> Vec<String> {
    let formula = plain_formula(parts);
    ALIASES
        .iter()
        .find(|(key, _)| *key == formula)
        .map(|(_, names)| names.iter().map(|n| n.to_string()).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn water_gets_both_aliases() {
        let parts = vec![FormulaPart::element("H", 2), FormulaPart::element("O", 1)];
        assert_eq!(accepted_aliases(&parts), ["water", "dihydrogen monoxide"]);
    }

    #[test]
    fn unlisted_compound_gets_none() {
        let parts = vec![FormulaPart::element("C", 1), FormulaPart::element("O", 2)];
        assert!(accepted_aliases(&parts).is_empty());
    }
}
