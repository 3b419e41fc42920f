pub mod acids;
pub mod aliases;
pub mod bases;
pub mod elements;
pub mod ions;
pub mod reference;

pub use acids::{Acid, AcidKind, MolecularCompound, ACIDS, MOLECULAR_COMPOUNDS};
pub use bases::{Base, BaseKind, BASES};
pub use elements::{Element, GREEK_PREFIXES, NONMETALS};
pub use ions::{Ion, ANIONS, CATIONS};
pub use reference::{OxyanionSeries, StateSymbol, OXYANION_SERIES, STATE_SYMBOLS};
