//! `Name`: a 64-bit integer packing up to 13 characters from the alphabet
//! `.12345abcdefghijklmnopqrstuvwxyz`.
//!
//! Grounded on `pkg/chain/name.go`, itself ported from eos-go.

use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use eosio_codec::{Decode, Encode, Error as CodecError, Reader, Writer};

const BASE32_ALPHABET: &[u8; 32] = b".12345abcdefghijklmnopqrstuvwxyz";

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Name(pub u64);

impl Name {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for Name {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Name> for u64 {
    fn from(name: Name) -> Self {
        name.0
    }
}

fn char_to_symbol(c: u8) -> u8 {
    if c.is_ascii_lowercase() {
        c - b'a' + 6
    } else if (b'1'..=b'5').contains(&c) {
        c - b'1' + 1
    } else {
        0
    }
}

fn string_to_name(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let len = bytes.len() as u32;
    let mut rv: u64 = 0;
    for i in 0..=12u32 {
        let mut c: u64 = if i < len {
            char_to_symbol(bytes[i as usize]) as u64
        } else {
            0
        };
        if i < 12 {
            c &= 0x1f;
            c <<= 64 - 5 * (i + 1);
        } else {
            c &= 0x0f;
        }
        rv |= c;
    }
    rv
}

fn name_to_string(value: u64) -> String {
    let mut chars = [b'.'; 13];
    let mut tmp = value;
    for i in 0..=12u32 {
        let bit: u64 = if i == 0 { 0x0f } else { 0x1f };
        let c = BASE32_ALPHABET[(tmp & bit) as usize];
        chars[(12 - i) as usize] = c;
        let shift = if i == 0 { 4 } else { 5 };
        tmp >>= shift;
    }
    trim_right_dots(&chars)
}

fn trim_right_dots(chars: &[u8; 13]) -> String {
    let mut trim_upto: Option<usize> = None;
    for i in (0..=12usize).rev() {
        if chars[i] == b'.' {
            trim_upto = Some(i);
        } else {
            break;
        }
    }
    match trim_upto {
        Some(cut) => String::from_utf8_lossy(&chars[..cut]).into_owned(),
        None => String::from_utf8_lossy(chars).into_owned(),
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&name_to_string(self.0))
    }
}

impl fmt::Debug for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name({})", self)
    }
}

impl FromStr for Name {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Name(string_to_name(s)))
    }
}

impl Encode for Name {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_u64(self.0)
    }
}

impl Decode for Name {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(Name(r.read_u64()?))
    }
}

#[cfg(feature = "json")]
mod json_impl {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Name {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&self.to_string())
        }
    }

    impl<'de> Deserialize<'de> for Name {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let text = String::deserialize(d)?;
            text.parse().map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("a" => 3458764513820540928)]
    #[test_case("foobar" => 6712742083569909760)]
    #[test_case("teamgreymass" => 14595364149838066048)]
    #[test_case("zzzzzzzzzzzzj" => u64::MAX)]
    fn value_matches_known_encoding(s: &str) -> u64 {
        let name: Name = s.parse().unwrap();
        name.value()
    }

    #[test]
    fn teamgreymass_round_trips_to_known_bytes() {
        let name: Name = "teamgreymass".parse().unwrap();
        let mut buf = Vec::new();
        name.encode(&mut Writer::new(&mut buf)).unwrap();
        assert_eq!(buf, vec![0x80, 0xb1, 0x91, 0x5e, 0x5d, 0x26, 0x8d, 0xca]);
        assert_eq!(name.to_string(), "teamgreymass");
    }

    /// Cross-checked against the `kudu` crate's own `test_serialize_name`
    /// vector (`other_examples/d72e0dbb_digigaia-kudu__tests-abiencoder_test.rs.rs`).
    #[test]
    fn foobar_matches_kudu_crate_vector() {
        let name: Name = "foobar".parse().unwrap();
        assert_eq!(name.value(), 6712742083569909760);
        let mut buf = Vec::new();
        name.encode(&mut Writer::new(&mut buf)).unwrap();
        assert_eq!(hex::encode(&buf), "000000005c73285d");
    }

    #[test]
    fn empty_string_is_all_dots_trimmed_to_empty() {
        let name: Name = "".parse().unwrap();
        assert_eq!(name.value(), 0);
        assert_eq!(name.to_string(), "");
    }

    #[test]
    fn all_z_name_uses_max_bit_pattern() {
        let name: Name = "zzzzzzzzzzzzj".parse().unwrap();
        assert_eq!(name.value(), u64::MAX);
    }

    #[test]
    fn invalid_characters_decode_to_zero_symbol() {
        assert_eq!(char_to_symbol(b'0'), 0);
        assert_eq!(char_to_symbol(b'6'), 0);
        assert_eq!(char_to_symbol(b'Z'), 0);
    }
}
