//! Core engine for a chemical nomenclature practice tool: immutable
//! reference tables, formula markup, ionic/covalent/acid/base naming rules,
//! and random quiz challenge generation with free-text answer checking.

pub mod challenge;
pub mod core;
pub mod data;
pub mod naming;

pub use crate::challenge::{check, generate, generate_with, Challenge, Verdict};
pub use crate::core::{Error, FormulaPart, Kind, Score};
pub use crate::naming::{format_formula, name_covalent, name_ionic};
