//! Cryptographic support types for the EOSIO wire format: fixed-size
//! checksums, sha256/ripemd160 hashing, base58check, and the `PublicKey`/
//! `Signature` tagged unions.

mod base58check;
mod checksum;
mod error;
mod hasher;
mod key;

pub use base58check::{check_decode, check_decode_eosio, check_encode, check_encode_eosio};
pub use checksum::{Checksum, Checksum160, Checksum256, Checksum512};
pub use error::Error;
pub use hasher::{ripemd160, sha256, sha256d};
pub use key::{KeyType, PublicKey, Signature};
