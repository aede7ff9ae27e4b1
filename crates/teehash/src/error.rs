#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no hasher registered under {0:?}")]
    UnknownHasher(String),

    #[error("hasher {0:?} is already registered")]
    DuplicateHasher(String),

    #[error("{name} digest mismatch: expected {expected}, got {actual}")]
    Mismatch {
        name:     String,
        expected: String,
        actual:   String,
    },

    #[error(transparent)]
    InvalidHex(#[from] hex::FromHexError),
}

pub type Result<T> = std::result::Result<T, Error>;
