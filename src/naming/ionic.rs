//! Ionic naming: GCD charge balancing and Roman-numeral cation names.

use crate::core::errors::Error;
use crate::core::models::FormulaPart;
use crate::core::roman::to_roman;
use crate::data::ions::{anion_by_symbol, cation_by_symbol, is_variable_metal, Ion};

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}

/// Charge-balanced subscripts for a cation/anion pair, plus the oxidation
/// number the balance recovers for the cation.
///
/// g = gcd(|c|, |a|); counts are |a|/g and |c|/g, so that
/// count_c * |c| == count_a * |a|.
pub fn balance(cation: &Ion, anion: &Ion) -> Result<(u32, u32, u32), Error> {
    let c = cation.charge.unsigned_abs();
    let a = anion.charge.unsigned_abs();
    if c == 0 || a == 0 {
        return Err(Error::ZeroCharge);
    }

    let g = gcd(c, a);
    let cation_count = a / g;
    let anion_count = c / g;
    let oxidation = anion_count * a / cation_count;
    Ok((cation_count, anion_count, oxidation))
}

fn cation_display_name(cation: &Ion, oxidation: u32) -> String {
    if cation.variable || is_variable_metal(cation.core) {
        format!("{}({})", cation.name, to_roman(oxidation))
    } else {
        cation.name.to_string()
    }
}

/// Systematic name: cation name (with Roman numeral for variable-valence
/// metals) followed by the anion name, which already carries its suffix.
pub fn name_ionic(cation: &Ion, anion: &Ion) -> Result<String, Error> {
    let (_, _, oxidation) = balance(cation, anion)?;
    Ok(format!("{} {}", cation_display_name(cation, oxidation), anion.name))
}

/// The charge-balanced formula parts for a cation/anion pair.
pub fn ionic_parts(cation: &Ion, anion: &Ion) -> Result<Vec<FormulaPart>, Error> {
    let (cation_count, anion_count, _) = balance(cation, anion)?;
    Ok(vec![
        FormulaPart::from_ion(cation, cation_count),
        FormulaPart::from_ion(anion, anion_count),
    ])
}

/// Symbol-keyed convenience for UI selection inputs ("Fe3+", "Cl-").
pub fn name_by_symbols(cation_symbol: &str, anion_symbol: &str) -> Result<String, Error> {
    let cation = cation_by_symbol(cation_symbol)
        .ok_or_else(|| Error::UnknownIon(cation_symbol.to_string()))?;
    let anion = anion_by_symbol(anion_symbol)
        .ok_or_else(|| Error::UnknownIon(anion_symbol.to_string()))?;
    name_ionic(cation, anion)
}
