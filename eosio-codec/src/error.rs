use thiserror::Error;

/// Errors raised by the stream codec.
///
/// [`Error::UnexpectedEof`] is kept distinct from the general [`Error::Io`]
/// variant so that callers (notably the ABI engine's extension-field rule)
/// can recognize end-of-input without string matching.
#[derive(Error, Debug)]
pub enum Error {
    #[error("unexpected end of input")]
    UnexpectedEof,

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("varuint does not fit in 64 bits")]
    VaruintOverflow,

    #[error("invalid utf-8 in string field")]
    InvalidUtf8,
}

impl Error {
    /// True if this error represents the stream running out of bytes.
    pub fn is_eof(&self) -> bool {
        matches!(self, Error::UnexpectedEof)
    }
}

pub(crate) fn map_io(e: std::io::Error) -> Error {
    match e.kind() {
        std::io::ErrorKind::UnexpectedEof => Error::UnexpectedEof,
        _ => Error::Io(e),
    }
}
