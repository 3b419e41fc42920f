pub mod errors;
pub mod models;
pub mod roman;

pub use errors::Error;
pub use models::{FormulaPart, Kind, Score};
pub use roman::to_roman;
