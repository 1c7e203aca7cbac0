use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] eosio_codec::Error),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("base58check checksum mismatch")]
    ChecksumMismatch,

    #[error("base58 decode error: {0}")]
    InvalidBase58(String),

    #[error("base58check payload too short")]
    PayloadTooShort,
}
