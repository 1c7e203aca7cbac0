use std::fmt;
use std::io::{Read, Write};
use std::str::FromStr;

use eosio_codec::{Decode, Encode, Error as CodecError, Reader, Writer};

use crate::error::Error;

/// A fixed-size digest of `N` bytes, generalizing `Checksum160`/`256`/`512`
/// into a single newtype.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Checksum<const N: usize>([u8; N]);

impl<const N: usize> Checksum<N> {
    pub const fn new(bytes: [u8; N]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; N] {
        &self.0
    }
}

impl<const N: usize> From<[u8; N]> for Checksum<N> {
    fn from(bytes: [u8; N]) -> Self {
        Self::new(bytes)
    }
}

impl<const N: usize> AsRef<[u8]> for Checksum<N> {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl<const N: usize> fmt::Debug for Checksum<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(&format!("Checksum<{N}>")).field(&hex::encode(self.0)).finish()
    }
}

impl<const N: usize> fmt::Display for Checksum<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl<const N: usize> FromStr for Checksum<N> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; N];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self::new(bytes))
    }
}

impl<const N: usize> Encode for Checksum<N> {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_raw(&self.0)
    }
}

impl<const N: usize> Decode for Checksum<N> {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        let bytes = r.read_exact(N)?;
        let mut array = [0u8; N];
        array.copy_from_slice(&bytes);
        Ok(Self::new(array))
    }
}

pub type Checksum160 = Checksum<20>;
pub type Checksum256 = Checksum<32>;
pub type Checksum512 = Checksum<64>;

#[cfg(feature = "json")]
mod json_impl {
    use super::*;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl<const N: usize> Serialize for Checksum<N> {
        fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            s.serialize_str(&self.to_string())
        }
    }

    impl<'de, const N: usize> Deserialize<'de> for Checksum<N> {
        fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            let text = String::deserialize(d)?;
            text.parse().map_err(D::Error::custom)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_round_trip() {
        let digest: Checksum256 =
            "0000000000000000000000000000000000000000000000000000000000000001"
                [2..]
                .parse()
                .unwrap();
        assert_eq!(digest.to_string().len(), 64);
    }

    #[test]
    fn wire_round_trip() {
        let original = Checksum160::new([7u8; 20]);
        let mut buf = Vec::new();
        original.encode(&mut Writer::new(&mut buf)).unwrap();
        assert_eq!(buf.len(), 20);
        let decoded = Checksum160::decode(&mut Reader::new(&buf[..])).unwrap();
        assert_eq!(original, decoded);
    }
}
