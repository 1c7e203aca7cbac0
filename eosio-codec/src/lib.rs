//! Stream-oriented binary codec for the EOSIO wire format: little-endian
//! fixed-width integers, LEB128 varuint/varint, and length-prefixed
//! bytes/strings, plus the `Encode`/`Decode` traits every higher layer of
//! the workspace builds on.

mod codec;
mod error;
mod stream;
mod varint;

pub use codec::{Decode, Encode, Fragment};
pub use error::Error;
pub use stream::{Reader, Writer};
pub use varint::ZigZag;
