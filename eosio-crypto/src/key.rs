//! `PublicKey`/`Signature`: tagged unions over `{K1, P1, WA}`, with both a
//! binary wire form and the `PUB_`/`SIG_`-prefixed base58check text form.
//!
//! Grounded on `pkg/chain/public_key.go`, `pkg/chain/signature.go` and
//! `pkg/chain/key_type.go`.

use std::fmt;
use std::io::{Read, Write};

use eosio_codec::{Decode, Encode, Error as CodecError, Reader, Writer};

use crate::base58check::{check_decode, check_decode_eosio, check_encode, check_encode_eosio};
use crate::error::Error;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum KeyType {
    K1 = 0,
    P1 = 1,
    Wa = 2,
}

impl KeyType {
    pub fn tag(self) -> &'static str {
        match self {
            KeyType::K1 => "K1",
            KeyType::P1 => "P1",
            KeyType::Wa => "WA",
        }
    }

    fn from_byte(b: u8) -> Result<Self, Error> {
        match b {
            0 => Ok(KeyType::K1),
            1 => Ok(KeyType::P1),
            2 => Ok(KeyType::Wa),
            other => Err(Error::InvalidBase58(format!("unknown key type: {other}"))),
        }
    }

    fn from_tag(tag: &str) -> Result<Self, Error> {
        match tag {
            "K1" => Ok(KeyType::K1),
            "P1" => Ok(KeyType::P1),
            "WA" => Ok(KeyType::Wa),
            other => Err(Error::InvalidBase58(format!("unknown key type: {other}"))),
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Reads one varuint-length-prefixed segment, returning both the length (so
/// it can be re-encoded) and the segment's bytes.
fn read_varuint_segment<R: Read>(r: &mut Reader<R>) -> Result<(u32, Vec<u8>), CodecError> {
    let len = r.read_varuint32()?;
    let bytes = r.read_exact(len as usize)?;
    Ok((len, bytes))
}

/// Appends a varuint-length-prefixed segment to `data`, re-encoding `len` in
/// shortest form even if the peer sent a non-shortest encoding on the wire.
fn append_varuint_segment(data: &mut Vec<u8>, len: u32, bytes: &[u8]) -> Result<(), CodecError> {
    let mut len_buf = Vec::new();
    Writer::new(&mut len_buf).write_varuint32(len)?;
    data.extend_from_slice(&len_buf);
    data.extend_from_slice(bytes);
    Ok(())
}

/// Reads `key_bytes` fixed-size bytes for `K1`/`P1`. For `Wa`, reads
/// `wa_fixed_bytes` fixed bytes (key/signature data, plus for `PublicKey` the
/// trailing user-presence byte) followed by `wa_segments` varuint-length-
/// prefixed trailing segments (`PublicKey`: one, the `rpid`; `Signature`:
/// two, `auth_data` then `client_json`), concatenated into the stored `data`
/// buffer in wire order. Mirrors `public_key.go`'s and `signature.go`'s
/// `UnmarshalABI` exactly.
fn read_tagged_body<R: Read>(
    r: &mut Reader<R>,
    ty: KeyType,
    key_bytes: usize,
    wa_fixed_bytes: usize,
    wa_segments: usize,
) -> Result<Vec<u8>, CodecError> {
    match ty {
        KeyType::K1 | KeyType::P1 => r.read_exact(key_bytes),
        KeyType::Wa => {
            let mut data = r.read_exact(wa_fixed_bytes)?;
            for _ in 0..wa_segments {
                let (len, bytes) = read_varuint_segment(r)?;
                append_varuint_segment(&mut data, len, &bytes)?;
            }
            Ok(data)
        }
    }
}

macro_rules! tagged_key_type {
    ($name:ident, $prefix:literal, $fixed_bytes:expr, $wa_fixed_bytes:expr, $wa_segments:expr) => {
        #[derive(Clone, PartialEq, Eq, Debug)]
        pub struct $name {
            pub key_type: KeyType,
            pub data: Vec<u8>,
        }

        impl $name {
            pub fn new(key_type: KeyType, data: Vec<u8>) -> Self {
                Self { key_type, data }
            }

            pub fn from_string(s: &str) -> Result<Self, Error> {
                if s.len() < 7 {
                    return Err(Error::PayloadTooShort);
                }
                if let Some(rest) = s.strip_prefix($prefix) {
                    let tag = &rest[..2];
                    let ty = KeyType::from_tag(tag)?;
                    let body = &rest[3..];
                    let data = check_decode_eosio(body, tag.as_bytes())?;
                    Ok(Self::new(ty, data))
                } else {
                    Self::from_legacy(s)
                }
            }

            fn from_legacy(s: &str) -> Result<Self, Error> {
                if s.len() < 50 {
                    return Err(Error::PayloadTooShort);
                }
                let body = &s[s.len() - 50..];
                let data = check_decode(body)?;
                Ok(Self::new(KeyType::K1, data))
            }

            /// Panics if this key is not `K1`, matching the original source's
            /// own "legacy format is K1-only" invariant.
            pub fn to_legacy_string(&self, prefix: &str) -> String {
                assert_eq!(
                    self.key_type,
                    KeyType::K1,
                    "only K1 keys can be converted to legacy format"
                );
                format!("{prefix}{}", check_encode(&self.data))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(
                    f,
                    "{}{}_{}",
                    $prefix,
                    self.key_type,
                    check_encode_eosio(&self.data, self.key_type.tag().as_bytes())
                )
            }
        }

        impl Encode for $name {
            fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
                w.write_u8(self.key_type as u8)?;
                w.write_raw(&self.data)
            }
        }

        impl Decode for $name {
            fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
                let ty = KeyType::from_byte(r.read_u8()?).map_err(|_| CodecError::InvalidUtf8)?;
                let data = read_tagged_body(r, ty, $fixed_bytes, $wa_fixed_bytes, $wa_segments)?;
                Ok(Self::new(ty, data))
            }
        }
    };
}

tagged_key_type!(PublicKey, "PUB_", 33, 34, 1);
tagged_key_type!(Signature, "SIG_", 65, 65, 2);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_key_k1_round_trips_through_wire_and_text() {
        let key = PublicKey::new(KeyType::K1, vec![1u8; 33]);
        let mut buf = Vec::new();
        key.encode(&mut Writer::new(&mut buf)).unwrap();
        let decoded = PublicKey::decode(&mut Reader::new(&buf[..])).unwrap();
        assert_eq!(key, decoded);

        let text = key.to_string();
        assert!(text.starts_with("PUB_K1_"));
        let reparsed = PublicKey::from_string(&text).unwrap();
        assert_eq!(reparsed, key);
    }

    /// Built from spec.md §8 scenario 5's literal WA signature layout:
    /// `02 <65 sig bytes> <varuint al> <al bytes authdata> <varuint cl> <cl
    /// bytes clientjson>`. The decoded `data` must be the concatenation
    /// `sig ⧺ varuint(al) ⧺ authdata ⧺ varuint(cl) ⧺ clientjson`.
    #[test]
    fn signature_wa_layout_matches_auth_data_then_client_json() {
        let sig_bytes = [2u8; 65];
        let auth_data = [9u8, 9, 9];
        let client_json = b"{\"a\":1}";

        let mut buf = Vec::new();
        let mut w = Writer::new(&mut buf);
        w.write_u8(KeyType::Wa as u8).unwrap();
        w.write_raw(&sig_bytes).unwrap();
        w.write_varuint32(auth_data.len() as u32).unwrap();
        w.write_raw(&auth_data).unwrap();
        w.write_varuint32(client_json.len() as u32).unwrap();
        w.write_raw(client_json).unwrap();

        let sig = Signature::decode(&mut Reader::new(&buf[..])).unwrap();
        assert_eq!(sig.key_type, KeyType::Wa);

        let mut expected = Vec::new();
        expected.extend_from_slice(&sig_bytes);
        let mut len_buf = Vec::new();
        Writer::new(&mut len_buf)
            .write_varuint32(auth_data.len() as u32)
            .unwrap();
        expected.extend_from_slice(&len_buf);
        expected.extend_from_slice(&auth_data);
        let mut len_buf = Vec::new();
        Writer::new(&mut len_buf)
            .write_varuint32(client_json.len() as u32)
            .unwrap();
        expected.extend_from_slice(&len_buf);
        expected.extend_from_slice(client_json);
        assert_eq!(sig.data, expected);

        let mut re_encoded = Vec::new();
        sig.encode(&mut Writer::new(&mut re_encoded)).unwrap();
        assert_eq!(re_encoded, buf);
    }

    /// WA public keys carry a 1-byte user-presence flag appended to the
    /// 33-byte key before the varuint-prefixed `rpid`.
    #[test]
    fn public_key_wa_layout_includes_presence_byte_and_rpid() {
        let key_bytes = [7u8; 33];
        let presence = 1u8;
        let rpid = b"example.com";

        let mut buf = Vec::new();
        let mut w = Writer::new(&mut buf);
        w.write_u8(KeyType::Wa as u8).unwrap();
        w.write_raw(&key_bytes).unwrap();
        w.write_u8(presence).unwrap();
        w.write_varuint32(rpid.len() as u32).unwrap();
        w.write_raw(rpid).unwrap();

        let key = PublicKey::decode(&mut Reader::new(&buf[..])).unwrap();
        assert_eq!(key.key_type, KeyType::Wa);

        let mut expected = Vec::new();
        expected.extend_from_slice(&key_bytes);
        expected.push(presence);
        let mut len_buf = Vec::new();
        Writer::new(&mut len_buf)
            .write_varuint32(rpid.len() as u32)
            .unwrap();
        expected.extend_from_slice(&len_buf);
        expected.extend_from_slice(rpid);
        assert_eq!(key.data, expected);

        let mut re_encoded = Vec::new();
        key.encode(&mut Writer::new(&mut re_encoded)).unwrap();
        assert_eq!(re_encoded, buf);
    }

    #[test]
    fn legacy_format_rejected_for_non_k1() {
        let key = PublicKey::new(KeyType::P1, vec![1u8; 33]);
        let result = std::panic::catch_unwind(|| key.to_legacy_string("EOS"));
        assert!(result.is_err());
    }
}
