//! base58check encode/decode, in both the legacy Bitcoin-style variant
//! (double sha256 checksum) and the EOSIO variant (ripemd160 of the payload
//! plus a type-suffix, used for `PUB_`/`SIG_`-prefixed keys and signatures).
//!
//! Grounded directly on `pkg/base58/base58check.go`.

use base58::{FromBase58, ToBase58};

use crate::error::Error;
use crate::hasher::{ripemd160, sha256d};

const CHECKSUM_LEN: usize = 4;

fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = sha256d(payload);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest.as_bytes()[..CHECKSUM_LEN]);
    out
}

fn checksum_eosio(payload: &[u8], suffix: &[u8]) -> [u8; CHECKSUM_LEN] {
    let mut buf = Vec::with_capacity(payload.len() + suffix.len());
    buf.extend_from_slice(payload);
    buf.extend_from_slice(suffix);
    let digest = ripemd160(&buf);
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest.as_bytes()[..CHECKSUM_LEN]);
    out
}

/// Legacy Bitcoin-style base58check: `base58(payload || sha256d(payload)[..4])`.
pub fn check_encode(payload: &[u8]) -> String {
    let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum(payload));
    buf.to_base58()
}

pub fn check_decode(text: &str) -> Result<Vec<u8>, Error> {
    let decoded = text
        .from_base58()
        .map_err(|e| Error::InvalidBase58(format!("{e:?}")))?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(Error::PayloadTooShort);
    }
    let (payload, check) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if checksum(payload)[..] != check[..] {
        return Err(Error::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}

/// EOSIO base58check variant: checksum is `ripemd160(payload || suffix)[..4]`
/// where `suffix` is the ASCII key-type tag (e.g. `b"K1"`).
pub fn check_encode_eosio(payload: &[u8], suffix: &[u8]) -> String {
    let mut buf = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    buf.extend_from_slice(payload);
    buf.extend_from_slice(&checksum_eosio(payload, suffix));
    buf.to_base58()
}

pub fn check_decode_eosio(text: &str, suffix: &[u8]) -> Result<Vec<u8>, Error> {
    let decoded = text
        .from_base58()
        .map_err(|e| Error::InvalidBase58(format!("{e:?}")))?;
    if decoded.len() < CHECKSUM_LEN {
        return Err(Error::PayloadTooShort);
    }
    let (payload, check) = decoded.split_at(decoded.len() - CHECKSUM_LEN);
    if checksum_eosio(payload, suffix)[..] != check[..] {
        return Err(Error::ChecksumMismatch);
    }
    Ok(payload.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_round_trip() {
        let payload = [1u8, 2, 3, 4, 5];
        let encoded = check_encode(&payload);
        assert_eq!(check_decode(&encoded).unwrap(), payload);
    }

    #[test]
    fn eosio_round_trip_with_suffix() {
        let payload = [9u8; 33];
        let encoded = check_encode_eosio(&payload, b"K1");
        assert_eq!(check_decode_eosio(&encoded, b"K1").unwrap(), payload);
    }

    #[test]
    fn eosio_decode_rejects_wrong_suffix() {
        let payload = [9u8; 33];
        let encoded = check_encode_eosio(&payload, b"K1");
        assert!(check_decode_eosio(&encoded, b"R1").is_err());
    }

    #[test]
    fn decode_rejects_corrupted_checksum() {
        let payload = [1u8, 2, 3];
        let mut encoded = check_encode(&payload).into_bytes();
        let last = encoded.len() - 1;
        encoded[last] = if encoded[last] == b'1' { b'2' } else { b'1' };
        let encoded = String::from_utf8(encoded).unwrap();
        assert!(check_decode(&encoded).is_err());
    }
}
