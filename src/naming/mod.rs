pub mod covalent;
pub mod formula;
pub mod ionic;

pub use covalent::{covalent_parts, name_covalent};
pub use formula::{classify, core_markup, format_formula, ion_markup, plain_formula};
pub use ionic::{balance, ionic_parts, name_ionic};

#[cfg(test)]
mod naming_tests;
