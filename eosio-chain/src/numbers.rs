//! `Int128`/`Uint128`/`Float128`/`Uint64`/`BlockNum`.
//!
//! Grounded on `pkg/chain/numbers.go`, with one deliberate deviation: the Go
//! source represents 128-bit integers as a `{Lo, Hi uint64}` pair because Go
//! has no native 128-bit integer type. Rust does, so `Int128`/`Uint128` here
//! are thin newtypes over `i128`/`u128` with the same little-endian wire
//! layout and decimal text form.

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use eosio_codec::{Decode, Encode, Error as CodecError, Reader, Writer};

use crate::error::Error;

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Uint128(pub u128);

impl fmt::Display for Uint128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Uint128 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        s.parse()
            .map(Uint128)
            .map_err(|_| Error::OutOfRange(format!("invalid unsigned integer: {s}")))
    }
}

impl Encode for Uint128 {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_u128(self.0)
    }
}

impl Decode for Uint128 {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(Uint128(r.read_u128()?))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Int128(pub i128);

impl fmt::Display for Int128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Int128 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        s.parse()
            .map(Int128)
            .map_err(|_| Error::OutOfRange(format!("invalid signed integer: {s}")))
    }
}

impl Encode for Int128 {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_i128(self.0)
    }
}

impl Decode for Int128 {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(Int128(r.read_i128()?))
    }
}

/// Opaque 16-byte quad-precision float. No arithmetic is provided; the
/// original source carries the same caveat.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Float128(pub [u8; 16]);

impl Float128 {
    pub fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Float128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Float128({})", hex::encode(self.0))
    }
}

impl fmt::Display for Float128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for Float128 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let mut bytes = [0u8; 16];
        hex::decode_to_slice(s, &mut bytes)
            .map_err(|e| Error::OutOfRange(e.to_string()))?;
        Ok(Float128(bytes))
    }
}

impl Encode for Float128 {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_raw(&self.0)
    }
}

impl Decode for Float128 {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        let bytes = r.read_exact(16)?;
        let mut array = [0u8; 16];
        array.copy_from_slice(&bytes);
        Ok(Float128(array))
    }
}

/// A `u64` that serializes to a JSON string when it exceeds `u32::MAX`, so
/// JavaScript consumers of ABI-decoded JSON don't lose precision.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct Uint64(pub u64);

impl Encode for Uint64 {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_u64(self.0)
    }
}

impl Decode for Uint64 {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(Uint64(r.read_u64()?))
    }
}

/// EOSIO chains are only expected to live for 68 years, per the original
/// source's own remark: a 500ms-slotted `u32` block number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug)]
pub struct BlockNum(pub u32);

impl fmt::Display for BlockNum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:010}", self.0)
    }
}

impl Encode for BlockNum {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_u32(self.0)
    }
}

impl Decode for BlockNum {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(BlockNum(r.read_u32()?))
    }
}

#[cfg(feature = "json")]
mod json_impl {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    fn serialize_large_uint<S: Serializer>(value: u64, s: S) -> Result<S::Ok, S::Error> {
        if value > u32::MAX as u64 {
            s.serialize_str(&value.to_string())
        } else {
            s.serialize_u64(value)
        }
    }

    fn deserialize_large_uint<'de, D: Deserializer<'de>>(d: D) -> Result<u64, D::Error> {
        let value = serde_json::Value::deserialize(d)?;
        match value {
            serde_json::Value::String(s) => s.parse().map_err(D::Error::custom),
            serde_json::Value::Number(n) => n
                .as_u64()
                .ok_or_else(|| D::Error::custom("expected unsigned integer")),
            _ => Err(D::Error::custom("expected number or numeric string")),
        }
    }

    impl Serialize for Uint64 {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            serialize_large_uint(self.0, s)
        }
    }

    impl<'de> Deserialize<'de> for Uint64 {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            deserialize_large_uint(d).map(Uint64)
        }
    }

    impl Serialize for BlockNum {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            serialize_large_uint(self.0 as u64, s)
        }
    }

    impl<'de> Deserialize<'de> for BlockNum {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let value = deserialize_large_uint(d)?;
            if value > u32::MAX as u64 {
                return Err(D::Error::custom(format!("block number {value} is too large")));
            }
            Ok(BlockNum(value as u32))
        }
    }

    impl Serialize for Uint128 {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Uint128 {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            String::deserialize(d)?.parse().map_err(D::Error::custom)
        }
    }

    impl Serialize for Int128 {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Int128 {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            String::deserialize(d)?.parse().map_err(D::Error::custom)
        }
    }

    impl Serialize for Float128 {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Float128 {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            String::deserialize(d)?.parse().map_err(D::Error::custom)
        }
    }
}
