use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Codec(#[from] eosio_codec::Error),

    #[error(transparent)]
    Crypto(#[from] eosio_crypto::Error),

    #[error("invalid asset string: {0}")]
    InvalidAsset(String),

    #[error("invalid symbol string: {0}")]
    InvalidSymbol(String),

    #[error("invalid time string: {0}")]
    InvalidTime(String),

    #[error("invalid base64: {0}")]
    InvalidBase64(String),

    #[error("value out of range: {0}")]
    OutOfRange(String),
}
