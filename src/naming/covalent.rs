//! Covalent naming: Greek prefixes with vowel elision before "oxide".

use crate::core::errors::Error;
use crate::core::models::FormulaPart;
use crate::data::elements::{element_root, greek_prefix, nonmetal_by_symbol, Element};

/// Drop a trailing 'a' or 'o' from the prefix when the root opens with 'o':
/// "mono" + "oxide" -> "monoxide", "penta" + "oxide" -> "pentoxide".
/// The only root this fires for is "oxide"; no wider rule is applied.
fn elide(prefix: &'static str, root: &str) -> &'static str {
    if (prefix.ends_with('a') || prefix.ends_with('o')) && root.starts_with('o') {
        &prefix[..prefix.len() - 1]
    } else {
        prefix
    }
}

/// Systematic covalent name for two elements and their atom counts (1-10).
///
/// The first element drops its prefix at count one ("carbon dioxide", never
/// "monocarbon dioxide"); the second always keeps one and takes the element
/// root + "ide".
pub fn name_covalent(
    first: &Element,
    first_count: u32,
    second: &Element,
    second_count: u32,
) -> Result<String, Error> {
    let first_prefix =
        greek_prefix(first_count).ok_or(Error::CountOutOfRange(first_count))?;
    let second_prefix =
        greek_prefix(second_count).ok_or(Error::CountOutOfRange(second_count))?;

    let root = format!("{}ide", element_root(second.symbol));
    let second_prefix = elide(second_prefix, &root);

    let first_name = if first_count == 1 {
        first.name.to_string()
    } else {
        format!("{}{}", first_prefix, first.name)
    };

    Ok(format!("{} {}{}", first_name, second_prefix, root))
}

/// Formula parts for a covalent pair; plain element tokens, no parentheses.
pub fn covalent_parts(
    first: &Element,
    first_count: u32,
    second: &Element,
    second_count: u32,
) -> Vec<FormulaPart> {
    vec![
        FormulaPart::element(first.symbol, first_count),
        FormulaPart::element(second.symbol, second_count),
    ]
}

/// Symbol-keyed convenience for UI selection inputs ("N", "O").
pub fn name_by_symbols(
    first_symbol: &str,
    first_count: u32,
    second_symbol: &str,
    second_count: u32,
) -> Result<String, Error> {
    let first = nonmetal_by_symbol(first_symbol)
        .ok_or_else(|| Error::UnknownElement(first_symbol.to_string()))?;
    let second = nonmetal_by_symbol(second_symbol)
        .ok_or_else(|| Error::UnknownElement(second_symbol.to_string()))?;
    name_covalent(first, first_count, second, second_count)
}
