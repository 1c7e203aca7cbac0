//! `Bytes`/`Blob`: identical on the wire (varuint-length + payload); differ
//! only in their text form (hex vs. padding-tolerant base64).
//!
//! Grounded on `pkg/chain/bytes.go` and `pkg/chain/blob.go`.

use std::io::{Read, Write};
use std::str::FromStr;

use base64::Engine;
use eosio_codec::{Decode, Encode, Error as CodecError, Reader, Writer};

use crate::error::Error;

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    pub fn hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl FromStr for Bytes {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Ok(Bytes(
            hex::decode(s).map_err(|e| Error::InvalidBase64(e.to_string()))?,
        ))
    }
}

impl Encode for Bytes {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_bytes(&self.0)
    }
}

impl Decode for Bytes {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(Bytes(r.read_bytes()?))
    }
}

#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct Blob(pub Vec<u8>);

impl Blob {
    pub fn base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.0)
    }
}

/// Pads a base64 string missing trailing `=` to a multiple of 4, matching
/// the original source's tolerant decode (EOSIO's own base64 emitter omits
/// padding in some cases).
fn repad_base64(text: &str) -> String {
    match text.len() % 4 {
        2 => format!("{text}=="),
        3 => format!("{text}="),
        _ => text.to_string(),
    }
}

impl FromStr for Blob {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let padded = repad_base64(s);
        let data = base64::engine::general_purpose::STANDARD
            .decode(padded)
            .map_err(|e| Error::InvalidBase64(e.to_string()))?;
        Ok(Blob(data))
    }
}

impl Encode for Blob {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_bytes(&self.0)
    }
}

impl Decode for Blob {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(Blob(r.read_bytes()?))
    }
}

#[cfg(feature = "json")]
mod json_impl {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Bytes {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&self.hex())
        }
    }

    impl<'de> Deserialize<'de> for Bytes {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            String::deserialize(d)?.parse().map_err(D::Error::custom)
        }
    }

    impl Serialize for Blob {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&self.base64())
        }
    }

    impl<'de> Deserialize<'de> for Blob {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            String::deserialize(d)?.parse().map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_wire_round_trip() {
        let original = Bytes(vec![1, 2, 3, 4, 5]);
        let mut buf = Vec::new();
        original.encode(&mut Writer::new(&mut buf)).unwrap();
        assert_eq!(buf[0], 5);
        assert_eq!(Bytes::decode(&mut Reader::new(&buf[..])).unwrap(), original);
    }

    #[test]
    fn bytes_hex_text_form() {
        let value = Bytes(vec![0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(value.hex(), "deadbeef");
        assert_eq!("deadbeef".parse::<Bytes>().unwrap(), value);
    }

    #[test]
    fn blob_base64_repads_missing_padding() {
        let value = Blob(vec![1, 2, 3, 4]);
        let full = value.base64();
        assert_eq!(full, "AQIDBA==");
        let unpadded = full.trim_end_matches('=');
        assert_eq!(unpadded.parse::<Blob>().unwrap(), value);
    }
}
