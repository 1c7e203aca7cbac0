//! `TransactionHeader`/`TransactionExtension`/`Transaction`.
//!
//! Grounded on `pkg/chain/transaction.go`.

use std::io::{Read, Write};

use eosio_codec::{Decode, Encode, Error as CodecError, Reader, Writer};

use crate::action::Action;
use crate::bytes::Bytes;
use crate::time::TimePointSec;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TransactionHeader {
    pub expiration: TimePointSec,
    pub ref_block_num: u16,
    pub ref_block_prefix: u32,
    pub max_net_usage_words: u32,
    pub max_cpu_usage_ms: u8,
    pub delay_sec: u32,
}

impl Encode for TransactionHeader {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        self.expiration.encode(w)?;
        w.write_u16(self.ref_block_num)?;
        w.write_u32(self.ref_block_prefix)?;
        w.write_varuint32(self.max_net_usage_words)?;
        w.write_u8(self.max_cpu_usage_ms)?;
        w.write_varuint32(self.delay_sec)
    }
}

impl Decode for TransactionHeader {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(TransactionHeader {
            expiration: TimePointSec::decode(r)?,
            ref_block_num: r.read_u16()?,
            ref_block_prefix: r.read_u32()?,
            max_net_usage_words: r.read_varuint32()?,
            max_cpu_usage_ms: r.read_u8()?,
            delay_sec: r.read_varuint32()?,
        })
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct TransactionExtension {
    pub ty: u16,
    pub data: Bytes,
}

impl Encode for TransactionExtension {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        w.write_u16(self.ty)?;
        self.data.encode(w)
    }
}

impl Decode for TransactionExtension {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(TransactionExtension {
            ty: r.read_u16()?,
            data: Bytes::decode(r)?,
        })
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Transaction {
    pub header: TransactionHeader,
    pub context_free_actions: Vec<Action>,
    pub actions: Vec<Action>,
    pub transaction_extensions: Vec<TransactionExtension>,
}

impl Encode for Transaction {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        self.header.encode(w)?;
        self.context_free_actions.encode(w)?;
        self.actions.encode(w)?;
        self.transaction_extensions.encode(w)
    }
}

impl Decode for Transaction {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(Transaction {
            header: TransactionHeader::decode(r)?,
            context_free_actions: Vec::<Action>::decode(r)?,
            actions: Vec::<Action>::decode(r)?,
            transaction_extensions: Vec::<TransactionExtension>::decode(r)?,
        })
    }
}

#[cfg(feature = "json")]
mod json_impl {
    use super::*;
    use serde::{Deserialize, Serialize};

    impl Serialize for TransactionHeader {
        fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            use serde::ser::SerializeStruct;
            let mut st = s.serialize_struct("TransactionHeader", 6)?;
            st.serialize_field("expiration", &self.expiration)?;
            st.serialize_field("ref_block_num", &self.ref_block_num)?;
            st.serialize_field("ref_block_prefix", &self.ref_block_prefix)?;
            st.serialize_field("max_net_usage_words", &self.max_net_usage_words)?;
            st.serialize_field("max_cpu_usage_ms", &self.max_cpu_usage_ms)?;
            st.serialize_field("delay_sec", &self.delay_sec)?;
            st.end()
        }
    }

    impl<'de> Deserialize<'de> for TransactionHeader {
        fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            #[derive(Deserialize)]
            struct Raw {
                expiration: TimePointSec,
                ref_block_num: u16,
                ref_block_prefix: u32,
                max_net_usage_words: u32,
                max_cpu_usage_ms: u8,
                delay_sec: u32,
            }
            let raw = Raw::deserialize(d)?;
            Ok(TransactionHeader {
                expiration: raw.expiration,
                ref_block_num: raw.ref_block_num,
                ref_block_prefix: raw.ref_block_prefix,
                max_net_usage_words: raw.max_net_usage_words,
                max_cpu_usage_ms: raw.max_cpu_usage_ms,
                delay_sec: raw.delay_sec,
            })
        }
    }

    impl Serialize for TransactionExtension {
        fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            use serde::ser::SerializeStruct;
            let mut st = s.serialize_struct("TransactionExtension", 2)?;
            st.serialize_field("type", &self.ty)?;
            st.serialize_field("data", &self.data)?;
            st.end()
        }
    }

    impl<'de> Deserialize<'de> for TransactionExtension {
        fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            #[derive(Deserialize)]
            struct Raw {
                #[serde(rename = "type")]
                ty: u16,
                data: Bytes,
            }
            let raw = Raw::deserialize(d)?;
            Ok(TransactionExtension {
                ty: raw.ty,
                data: raw.data,
            })
        }
    }
}
