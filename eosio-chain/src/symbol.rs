//! `Symbol`/`SymbolCode`: a 64-bit integer whose low byte is the decimal
//! precision and whose upper 7 bytes hold the uppercase A-Z symbol name,
//! LSB-first, zero-terminated. `SymbolCode` is the same layout without the
//! precision byte occupying the low 8 bits (it is simply absent, not
//! shifted back down).
//!
//! Grounded on `pkg/chain/symbol.go`.

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use eosio_codec::{Decode, Encode, Error as CodecError, Reader, Writer};

use crate::error::Error;

fn raw_symbol_value(precision: u8, name: &str) -> Result<u64, Error> {
    if precision > 18 {
        return Err(Error::InvalidSymbol(format!(
            "precision {precision} exceeds 18"
        )));
    }
    let mut rv: u64 = 0;
    for (i, b) in name.bytes().enumerate() {
        if !b.is_ascii_uppercase() {
            return Err(Error::InvalidSymbol(format!(
                "invalid character in symbol name: {name}"
            )));
        }
        rv |= (b as u64) << (8 * (i as u32 + 1));
    }
    rv |= precision as u64;
    Ok(rv)
}

fn name_from_shifted(mut v: u64) -> String {
    let mut out = String::new();
    while v > 0 {
        out.push((v & 0xff) as u8 as char);
        v >>= 8;
    }
    out
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Symbol(pub u64);

impl Symbol {
    pub fn new(precision: u8, name: &str) -> Result<Self, Error> {
        Ok(Symbol(raw_symbol_value(precision, name)?))
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn name(self) -> String {
        name_from_shifted(self.0 >> 8)
    }

    pub fn code(self) -> SymbolCode {
        SymbolCode(self.0 >> 8)
    }

    pub fn decimals(self) -> u8 {
        (self.0 & 0xff) as u8
    }

    pub fn precision(self) -> u64 {
        10u64.pow(self.decimals() as u32)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.decimals(), self.name())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({self})")
    }
}

impl FromStr for Symbol {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 2 {
            return Err(Error::InvalidSymbol(s.to_string()));
        }
        let precision: u8 = parts[0]
            .parse()
            .map_err(|_| Error::InvalidSymbol(s.to_string()))?;
        Symbol::new(precision, parts[1])
    }
}

impl Encode for Symbol {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_u64(self.0)
    }
}

impl Decode for Symbol {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(Symbol(r.read_u64()?))
    }
}

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SymbolCode(pub u64);

impl SymbolCode {
    pub fn value(self) -> u64 {
        self.0
    }

    pub fn name(self) -> String {
        name_from_shifted(self.0)
    }
}

impl fmt::Display for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl fmt::Debug for SymbolCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolCode({self})")
    }
}

impl FromStr for SymbolCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let symbol: Symbol = format!("0,{s}").parse()?;
        Ok(symbol.code())
    }
}

impl Encode for SymbolCode {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_u64(self.0)
    }
}

impl Decode for SymbolCode {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(SymbolCode(r.read_u64()?))
    }
}

#[cfg(feature = "json")]
mod json_impl {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Symbol {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Symbol {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            String::deserialize(d)?.parse().map_err(D::Error::custom)
        }
    }

    impl Serialize for SymbolCode {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for SymbolCode {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            String::deserialize(d)?.parse().map_err(D::Error::custom)
        }
    }
}
