//! The untyped value tree that flows through the dynamic encode/decode
//! engine. Mirrors the Go source's use of `interface{}`/`map[string]interface{}`
//! in `pkg/chain/abi.go`, but as a closed, typed enum instead of reflection.
//!
//! Optionals are not a dedicated variant: an absent optional field is the
//! absence of a key in a `Mapping`, or a `None` at call sites, never
//! `Value::Null` standing in for it. `Null` exists only for JSON's literal
//! `null`, which the engine never produces on its own.

use eosio_chain::{
    Asset, BlockTimestamp, Checksum160, Checksum256, Checksum512, ExtendedAsset, Name, PublicKey,
    Signature, Symbol, SymbolCode, TimePoint, TimePointSec,
};
use indexmap::IndexMap;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),

    Int8(i8),
    Uint8(u8),
    Int16(i16),
    Uint16(u16),
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Uint64(u64),
    Int128(i128),
    Uint128(u128),

    VarInt32(i32),
    VarUint32(u32),

    Float32(f32),
    Float64(f64),
    Float128([u8; 16]),

    String(String),
    Bytes(Vec<u8>),

    Name(Name),
    Symbol(Symbol),
    SymbolCode(SymbolCode),
    Asset(Asset),
    ExtendedAsset(ExtendedAsset),

    Checksum160(Checksum160),
    Checksum256(Checksum256),
    Checksum512(Checksum512),

    PublicKey(PublicKey),
    Signature(Signature),

    TimePoint(TimePoint),
    TimePointSec(TimePointSec),
    BlockTimestamp(BlockTimestamp),

    Sequence(Vec<Value>),
    Mapping(IndexMap<String, Value>),
    Variant(String, Box<Value>),
}

impl Value {
    pub fn type_tag(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int8(_) => "int8",
            Value::Uint8(_) => "uint8",
            Value::Int16(_) => "int16",
            Value::Uint16(_) => "uint16",
            Value::Int32(_) => "int32",
            Value::Uint32(_) => "uint32",
            Value::Int64(_) => "int64",
            Value::Uint64(_) => "uint64",
            Value::Int128(_) => "int128",
            Value::Uint128(_) => "uint128",
            Value::VarInt32(_) => "varint32",
            Value::VarUint32(_) => "varuint32",
            Value::Float32(_) => "float32",
            Value::Float64(_) => "float64",
            Value::Float128(_) => "float128",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Name(_) => "name",
            Value::Symbol(_) => "symbol",
            Value::SymbolCode(_) => "symbol_code",
            Value::Asset(_) => "asset",
            Value::ExtendedAsset(_) => "extended_asset",
            Value::Checksum160(_) => "checksum160",
            Value::Checksum256(_) => "checksum256",
            Value::Checksum512(_) => "checksum512",
            Value::PublicKey(_) => "publickey",
            Value::Signature(_) => "signature",
            Value::TimePoint(_) => "time_point",
            Value::TimePointSec(_) => "time_point_sec",
            Value::BlockTimestamp(_) => "block_timestamp_type",
            Value::Sequence(_) => "array",
            Value::Mapping(_) => "struct",
            Value::Variant(_, _) => "variant",
        }
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_variant(&self) -> Option<(&str, &Value)> {
        match self {
            Value::Variant(name, v) => Some((name.as_str(), v)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_tag_identifies_each_shape() {
        assert_eq!(Value::Uint64(1).type_tag(), "uint64");
        assert_eq!(Value::Sequence(vec![]).type_tag(), "array");
        assert_eq!(
            Value::Variant("foo".to_string(), Box::new(Value::Null)).type_tag(),
            "variant"
        );
    }

    #[test]
    fn mapping_preserves_field_declaration_order() {
        let mut m = IndexMap::new();
        m.insert("from".to_string(), Value::String("a".to_string()));
        m.insert("to".to_string(), Value::String("b".to_string()));
        let v = Value::Mapping(m);
        let keys: Vec<_> = v.as_mapping().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["from".to_string(), "to".to_string()]);
    }
}
