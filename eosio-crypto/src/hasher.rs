//! Digest helpers used by `Checksum160`/`256` and base58check.
//!
//! Grounded on `pallas_crypto::hash::Hasher`'s pattern of wrapping a
//! `cryptoxide` digest behind a tiny handful of convenience functions,
//! swapping Blake2b for the sha256/ripemd160 algorithms EOSIO actually uses.

use cryptoxide::digest::Digest;
use cryptoxide::ripemd160::Ripemd160;
use cryptoxide::sha256::Sha256;

use crate::checksum::{Checksum160, Checksum256};

/// `sha256(bytes)`
pub fn sha256(bytes: &[u8]) -> Checksum256 {
    let mut hasher = Sha256::new();
    hasher.input(bytes);
    let mut out = [0u8; 32];
    hasher.result(&mut out);
    Checksum256::new(out)
}

/// `sha256(sha256(bytes))`, used by legacy base58check.
pub fn sha256d(bytes: &[u8]) -> Checksum256 {
    sha256(sha256(bytes).as_bytes())
}

/// `ripemd160(bytes)`
pub fn ripemd160(bytes: &[u8]) -> Checksum160 {
    let mut hasher = Ripemd160::new();
    hasher.input(bytes);
    let mut out = [0u8; 20];
    hasher.result(&mut out);
    Checksum160::new(out)
}
