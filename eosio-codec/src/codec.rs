//! `Encode`/`Decode` traits every wire type in the workspace implements,
//! mirroring the shape of `minicbor::Encode`/`Decode` used throughout the
//! teacher codebase, but over the stream codec's `Writer`/`Reader` instead
//! of a CBOR encoder.

use std::io::{Read, Write};

use crate::error::Error;
use crate::stream::{Reader, Writer};

pub trait Encode {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), Error>;
}

pub trait Decode: Sized {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, Error>;
}

macro_rules! impl_scalar {
    ($ty:ty, $write:ident, $read:ident) => {
        impl Encode for $ty {
            fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), Error> {
                w.$write(*self)
            }
        }

        impl Decode for $ty {
            fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, Error> {
                r.$read()
            }
        }
    };
}

impl_scalar!(bool, write_bool, read_bool);
impl_scalar!(u8, write_u8, read_u8);
impl_scalar!(i8, write_i8, read_i8);
impl_scalar!(u16, write_u16, read_u16);
impl_scalar!(i16, write_i16, read_i16);
impl_scalar!(u32, write_u32, read_u32);
impl_scalar!(i32, write_i32, read_i32);
impl_scalar!(u64, write_u64, read_u64);
impl_scalar!(i64, write_i64, read_i64);
impl_scalar!(u128, write_u128, read_u128);
impl_scalar!(i128, write_i128, read_i128);
impl_scalar!(f32, write_f32, read_f32);
impl_scalar!(f64, write_f64, read_f64);

impl Encode for String {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), Error> {
        w.write_string(self)
    }
}

impl Decode for String {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, Error> {
        r.read_string()
    }
}

/// Varuint-length-prefixed array, per the wire format's standard array rule.
impl<T: Encode> Encode for Vec<T> {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), Error> {
        w.write_varuint32(self.len() as u32)?;
        for item in self {
            item.encode(w)?;
        }
        Ok(())
    }
}

impl<T: Decode> Decode for Vec<T> {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, Error> {
        let len = r.read_varuint32()? as usize;
        let mut items = Vec::with_capacity(len.min(1 << 20));
        for _ in 0..len {
            items.push(T::decode(r)?);
        }
        Ok(items)
    }
}

/// Bool-prefixed optional, per the wire format's standard optional rule.
impl<T: Encode> Encode for Option<T> {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), Error> {
        match self {
            Some(value) => {
                w.write_bool(true)?;
                value.encode(w)
            }
            None => w.write_bool(false),
        }
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, Error> {
        if r.read_bool()? {
            Ok(Some(T::decode(r)?))
        } else {
            Ok(None)
        }
    }
}

/// Convenience entry points for encoding to / decoding from an owned buffer,
/// mirroring `pallas_primitives::framework::Fragment`'s
/// `encode_fragment`/`decode_fragment` pair.
pub trait Fragment: Encode + Decode {
    fn encode_fragment(&self) -> Result<Vec<u8>, Error> {
        let mut buf = Vec::new();
        self.encode(&mut Writer::new(&mut buf))?;
        Ok(buf)
    }

    fn decode_fragment(bytes: &[u8]) -> Result<Self, Error> {
        Self::decode(&mut Reader::new(bytes))
    }
}

impl<T: Encode + Decode> Fragment for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec_round_trip() {
        let original: Vec<u32> = vec![1, 2, 3, 4];
        let bytes = original.encode_fragment().unwrap();
        let decoded = Vec::<u32>::decode_fragment(&bytes).unwrap();
        assert_eq!(original, decoded);
    }

    #[test]
    fn option_round_trip() {
        let some: Option<u8> = Some(7);
        let none: Option<u8> = None;
        assert_eq!(
            Option::<u8>::decode_fragment(&some.encode_fragment().unwrap()).unwrap(),
            some
        );
        assert_eq!(
            Option::<u8>::decode_fragment(&none.encode_fragment().unwrap()).unwrap(),
            none
        );
    }
}
