pub mod checker;
pub mod generator;

pub use checker::{check, normalize_name, Verdict};
pub use generator::{generate, generate_with, Challenge};
