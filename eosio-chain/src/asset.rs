//! `Asset`/`ExtendedAsset`: a signed 64-bit amount paired with a `Symbol`.
//!
//! Grounded on `pkg/chain/asset.go`.

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use eosio_codec::{Decode, Encode, Error as CodecError, Reader, Writer};

use crate::error::Error;
use crate::name::Name;
use crate::symbol::Symbol;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Asset {
    pub value: i64,
    pub symbol: Symbol,
}

impl Asset {
    pub fn new(value: i64, symbol: Symbol) -> Self {
        Self { value, symbol }
    }

    /// Convenience constructor matching the original source's `A(s)`
    /// helper. Panics on an invalid asset string.
    pub fn parse_or_panic(s: &str) -> Self {
        s.parse().expect("invalid asset string")
    }

    pub fn float_value(&self) -> f64 {
        let integer_part = self.to_string();
        let number = integer_part.split(' ').next().unwrap_or("0");
        number.parse().expect("asset string always parses as f64")
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value < 0 { "-" } else { "" };
        let magnitude = self.value.unsigned_abs();
        let precision = self.symbol.precision();
        write!(f, "{sign}{}", magnitude / precision)?;
        let decimals = self.symbol.decimals();
        if decimals > 0 {
            let fraction = magnitude % precision;
            write!(f, ".{fraction:0width$}", width = decimals as usize)?;
        }
        write!(f, " {}", self.symbol.name())
    }
}

impl FromStr for Asset {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let parts: Vec<&str> = s.split(' ').collect();
        if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
            return Err(Error::InvalidAsset(s.to_string()));
        }
        let mut found_point = false;
        let mut precision: u8 = 0;
        let mut digits = String::new();
        for (i, c) in parts[0].chars().enumerate() {
            if c == '.' {
                if found_point {
                    return Err(Error::InvalidAsset(s.to_string()));
                }
                found_point = true;
                continue;
            }
            digits.push(c);
            if c == '-' && i == 0 {
                continue;
            }
            if found_point {
                precision += 1;
                if precision > 18 {
                    return Err(Error::InvalidAsset(s.to_string()));
                }
            }
            if !c.is_ascii_digit() {
                return Err(Error::InvalidAsset(s.to_string()));
            }
        }
        let value: i64 = digits
            .parse()
            .map_err(|_| Error::InvalidAsset(s.to_string()))?;
        let symbol = Symbol::new(precision, parts[1])?;
        Ok(Asset { value, symbol })
    }
}

impl Encode for Asset {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_i64(self.value)?;
        self.symbol.encode(w)
    }
}

impl Decode for Asset {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        let value = r.read_i64()?;
        let symbol = Symbol::decode(r)?;
        Ok(Asset { value, symbol })
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ExtendedAsset {
    pub quantity: Asset,
    pub contract: Name,
}

impl Encode for ExtendedAsset {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        self.quantity.encode(w)?;
        self.contract.encode(w)
    }
}

impl Decode for ExtendedAsset {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(ExtendedAsset {
            quantity: Asset::decode(r)?,
            contract: Name::decode(r)?,
        })
    }
}

#[cfg(feature = "json")]
mod json_impl {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Asset {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Asset {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            String::deserialize(d)?.parse().map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_eos_round_trips_through_wire_bytes() {
        let asset: Asset = "1.0000 EOS".parse().unwrap();
        let mut buf = Vec::new();
        asset.encode(&mut Writer::new(&mut buf)).unwrap();
        assert_eq!(buf.len(), 16);
        let decoded = Asset::decode(&mut Reader::new(&buf[..])).unwrap();
        assert_eq!(asset, decoded);
        assert_eq!(asset.to_string(), "1.0000 EOS");
    }

    #[test]
    fn ninety_nine_point_nine_wax() {
        let asset: Asset = "99.9 WAX".parse().unwrap();
        assert_eq!(asset.value, 999);
        assert_eq!(asset.symbol.decimals(), 1);
    }

    #[test]
    fn integer_only_asset() {
        let asset: Asset = "99 WAX".parse().unwrap();
        assert_eq!(asset.value, 99);
        assert_eq!(asset.symbol.decimals(), 0);
        assert_eq!(asset.to_string(), "99 WAX");
    }

    #[test]
    fn negative_fractional_preserves_sign() {
        let asset: Asset = "-0.0001 EOS".parse().unwrap();
        assert_eq!(asset.value, -1);
        assert_eq!(asset.to_string(), "-0.0001 EOS");
    }

    /// Cross-checked against the `kudu` crate's own `test_serialize_asset`
    /// vector (`other_examples/d72e0dbb_digigaia-kudu__tests-abiencoder_test.rs.rs`).
    #[test]
    fn one_two_three_four_five_foo_matches_kudu_crate_vector() {
        let asset: Asset = "1.2345 FOO".parse().unwrap();
        assert_eq!(asset.value, 12345);
        assert_eq!(asset.symbol.decimals(), 4);
        assert_eq!(asset.symbol.precision(), 10000);
        let mut buf = Vec::new();
        asset.encode(&mut Writer::new(&mut buf)).unwrap();
        assert_eq!(hex::encode(&buf), "393000000000000004464f4f00000000");
    }

    #[test]
    fn missing_symbol_is_rejected() {
        assert!("1.0000".parse::<Asset>().is_err());
    }

    #[test]
    fn double_decimal_point_is_rejected() {
        assert!("1.0.0 EOS".parse::<Asset>().is_err());
    }
}
