#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown ion symbol: {0}")]
    UnknownIon(String),

    #[error("Unknown nonmetal symbol: {0}")]
    UnknownElement(String),

    #[error("No Greek prefix for count {0} (supported range is 1-10)")]
    CountOutOfRange(u32),

    #[error("Ion charge must be nonzero")]
    ZeroCharge,
}
