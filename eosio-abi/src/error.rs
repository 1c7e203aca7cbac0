use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] eosio_codec::Error),

    #[error(transparent)]
    Chain(#[from] eosio_chain::Error),

    #[error("invalid format: {0}")]
    InvalidFormat(String),

    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    #[error("unknown type: {0}")]
    UnknownType(String),

    #[error("unknown variant arm: {0}")]
    UnknownVariant(String),

    #[error("value out of range: {0}")]
    OutOfRange(String),

    #[error("circular reference in struct base chain at {0}")]
    CircularReference(String),
}

impl Error {
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::Codec(e) if e.is_eof())
    }
}
