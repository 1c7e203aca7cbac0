//! Dynamic encode/decode over a resolved type graph, driven by an untyped
//! [`Value`] tree instead of Go reflection.
//!
//! Grounded on `pkg/chain/abi.go`'s `encodeType`/`encodeInner`/`decodeType`/
//! `decodeInner`. Two deliberate corrections over the Go source, both called
//! out where they happen below: a missing non-optional struct field is a
//! hard error here (the Go source silently encodes/decodes a zero value),
//! and struct/variant base-name lookups use the already-stripped base name
//! (the Go source passes the unstripped reference string to `GetStruct`,
//! which cannot match an array or optional reference to a struct).

use std::io::{Read, Write};

use eosio_chain::{
    Asset, BlockTimestamp, Checksum160, Checksum256, Checksum512, ExtendedAsset, Name, PublicKey,
    Signature, Symbol, SymbolCode, TimePoint, TimePointSec,
};
use eosio_codec::{Decode, Encode, Reader, Writer};
use indexmap::IndexMap;

use crate::error::Error;
use crate::resolver::{NodeId, Resolver};
use crate::value::Value;

fn type_mismatch(expected: &str, value: &Value) -> Error {
    Error::TypeMismatch {
        expected: expected.to_string(),
        found: value.type_tag().to_string(),
    }
}

/// Encodes `value` against the ABI type named `type_name`, the entry point
/// mirroring `Abi.Encode`.
pub fn encode<W: Write>(
    resolver: &mut Resolver,
    type_name: &str,
    value: &Value,
    w: &mut Writer<W>,
) -> Result<(), Error> {
    let id = resolver.resolve(type_name)?;
    encode_field(resolver, id, Some(value), w)
}

/// Decodes a value of the ABI type named `type_name`, the entry point
/// mirroring `Abi.Decode`.
pub fn decode<R: Read>(resolver: &mut Resolver, type_name: &str, r: &mut Reader<R>) -> Result<Value, Error> {
    let id = resolver.resolve(type_name)?;
    decode_field(resolver, id, r)?.ok_or_else(|| Error::InvalidFormat("top-level value was omitted as an extension".to_string()))
}

fn encode_field<W: Write>(
    resolver: &Resolver,
    node_id: NodeId,
    value: Option<&Value>,
    w: &mut Writer<W>,
) -> Result<(), Error> {
    let node = resolver.node(node_id);
    if node.is_optional {
        match value {
            None => w.write_bool(false).map_err(Error::from),
            Some(v) => {
                w.write_bool(true)?;
                encode_array_or_inner(resolver, node_id, v, w)
            }
        }
    } else {
        match value {
            None => Err(Error::TypeMismatch {
                expected: node.base_name.clone(),
                found: "missing field".to_string(),
            }),
            Some(v) => encode_array_or_inner(resolver, node_id, v, w),
        }
    }
}

fn decode_field<R: Read>(resolver: &Resolver, node_id: NodeId, r: &mut Reader<R>) -> Result<Option<Value>, Error> {
    let node = resolver.node(node_id);
    if node.is_optional {
        if !r.read_bool()? {
            return Ok(None);
        }
    }
    match decode_array_or_inner(resolver, node_id, r) {
        Ok(v) => Ok(Some(v)),
        Err(e) if e.is_eof() && node.is_extension => {
            log::warn!("swallowing end-of-input at extension field {:?}", node.name);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}

fn encode_array_or_inner<W: Write>(
    resolver: &Resolver,
    node_id: NodeId,
    value: &Value,
    w: &mut Writer<W>,
) -> Result<(), Error> {
    let node = resolver.node(node_id);
    if node.is_array {
        let seq = value.as_sequence().ok_or_else(|| type_mismatch("array", value))?;
        w.write_varuint32(seq.len() as u32)?;
        for item in seq {
            encode_inner(resolver, node_id, item, w)?;
        }
        Ok(())
    } else {
        encode_inner(resolver, node_id, value, w)
    }
}

fn decode_array_or_inner<R: Read>(resolver: &Resolver, node_id: NodeId, r: &mut Reader<R>) -> Result<Value, Error> {
    let node = resolver.node(node_id);
    if node.is_array {
        let len = r.read_varuint32()? as usize;
        let mut items = Vec::with_capacity(len.min(1 << 20));
        for _ in 0..len {
            items.push(decode_inner(resolver, node_id, r)?);
        }
        Ok(Value::Sequence(items))
    } else {
        decode_inner(resolver, node_id, r)
    }
}

fn encode_inner<W: Write>(resolver: &Resolver, node_id: NodeId, value: &Value, w: &mut Writer<W>) -> Result<(), Error> {
    let node = resolver.node(node_id);

    if let Some(ref_id) = node.reference {
        return encode_field(resolver, ref_id, Some(value), w);
    }

    if node.fields.is_some() {
        let fields = resolver.all_fields(node_id)?;
        let mapping = value.as_mapping().ok_or_else(|| type_mismatch("struct", value))?;
        for f in &fields {
            encode_field(resolver, f.type_id, mapping.get(&f.name), w)?;
        }
        return Ok(());
    }

    if let Some(arms) = &node.variant {
        let (arm_name, inner) = value.as_variant().ok_or_else(|| type_mismatch("variant", value))?;
        let idx = arms
            .iter()
            .position(|&a| resolver.node(a).name == arm_name)
            .ok_or_else(|| Error::UnknownVariant(arm_name.to_string()))?;
        w.write_varuint32(idx as u32)?;
        return encode_field(resolver, arms[idx], Some(inner), w);
    }

    encode_builtin(&node.base_name, value, w)
}

fn decode_inner<R: Read>(resolver: &Resolver, node_id: NodeId, r: &mut Reader<R>) -> Result<Value, Error> {
    let node = resolver.node(node_id);

    if let Some(ref_id) = node.reference {
        return Ok(decode_field(resolver, ref_id, r)?.unwrap_or(Value::Null));
    }

    if node.fields.is_some() {
        let fields = resolver.all_fields(node_id)?;
        let mut mapping = IndexMap::with_capacity(fields.len());
        for f in &fields {
            if let Some(v) = decode_field(resolver, f.type_id, r)? {
                mapping.insert(f.name.clone(), v);
            }
        }
        return Ok(Value::Mapping(mapping));
    }

    if let Some(arms) = &node.variant {
        let idx = r.read_varuint32()? as usize;
        if idx >= arms.len() {
            return Err(Error::UnknownVariant(format!(
                "index {} out of range for {} arms",
                idx,
                arms.len()
            )));
        }
        let arm_id = arms[idx];
        let arm_name = resolver.node(arm_id).name.clone();
        let inner = decode_field(resolver, arm_id, r)?.unwrap_or(Value::Null);
        return Ok(Value::Variant(arm_name, Box::new(inner)));
    }

    decode_builtin(&node.base_name, r)
}

fn encode_builtin<W: Write>(base_name: &str, value: &Value, w: &mut Writer<W>) -> Result<(), Error> {
    use Value::*;
    match (base_name, value) {
        ("bool", Bool(b)) => Ok(w.write_bool(*b)?),
        ("int8", Int8(v)) => Ok(v.encode(w)?),
        ("uint8", Uint8(v)) => Ok(v.encode(w)?),
        ("int16", Int16(v)) => Ok(v.encode(w)?),
        ("uint16", Uint16(v)) => Ok(v.encode(w)?),
        ("int32", Int32(v)) => Ok(v.encode(w)?),
        ("uint32", Uint32(v)) => Ok(v.encode(w)?),
        ("int64", Int64(v)) => Ok(v.encode(w)?),
        ("uint64", Uint64(v)) => Ok(v.encode(w)?),
        ("int128", Int128(v)) => Ok(v.encode(w)?),
        ("uint128", Uint128(v)) => Ok(v.encode(w)?),
        ("varint32", VarInt32(v)) => Ok(w.write_varint32(*v)?),
        ("varuint32", VarUint32(v)) => Ok(w.write_varuint32(*v)?),
        ("float32", Float32(v)) => Ok(v.encode(w)?),
        ("float64", Float64(v)) => Ok(v.encode(w)?),
        ("float128", Float128(bytes)) => Ok(w.write_raw(bytes)?),
        ("string", String(s)) => Ok(s.encode(w)?),
        ("bytes", Bytes(b)) => Ok(w.write_bytes(b)?),
        ("name" | "eosio::name", Name(n)) => Ok(n.encode(w)?),
        ("symbol", Symbol(s)) => Ok(s.encode(w)?),
        ("symbol_code", SymbolCode(s)) => Ok(s.encode(w)?),
        ("asset", Asset(a)) => Ok(a.encode(w)?),
        ("extended_asset", ExtendedAsset(a)) => Ok(a.encode(w)?),
        ("checksum160", Checksum160(c)) => Ok(c.encode(w)?),
        ("checksum256", Checksum256(c)) => Ok(c.encode(w)?),
        ("checksum512", Checksum512(c)) => Ok(c.encode(w)?),
        ("publickey", PublicKey(k)) => Ok(k.encode(w)?),
        ("signature", Signature(s)) => Ok(s.encode(w)?),
        ("time_point", TimePoint(t)) => Ok(t.encode(w)?),
        ("time_point_sec", TimePointSec(t)) => Ok(t.encode(w)?),
        ("block_timestamp_type", BlockTimestamp(t)) => Ok(t.encode(w)?),
        (other, v) => Err(Error::UnknownType(format!("{other} (found {})", v.type_tag()))),
    }
}

fn decode_builtin<R: Read>(base_name: &str, r: &mut Reader<R>) -> Result<Value, Error> {
    Ok(match base_name {
        "bool" => Value::Bool(r.read_bool()?),
        "int8" => Value::Int8(i8::decode(r)?),
        "uint8" => Value::Uint8(u8::decode(r)?),
        "int16" => Value::Int16(i16::decode(r)?),
        "uint16" => Value::Uint16(u16::decode(r)?),
        "int32" => Value::Int32(i32::decode(r)?),
        "uint32" => Value::Uint32(u32::decode(r)?),
        "int64" => Value::Int64(i64::decode(r)?),
        "uint64" => Value::Uint64(u64::decode(r)?),
        "int128" => Value::Int128(i128::decode(r)?),
        "uint128" => Value::Uint128(u128::decode(r)?),
        "varint32" => Value::VarInt32(r.read_varint32()?),
        "varuint32" => Value::VarUint32(r.read_varuint32()?),
        "float32" => Value::Float32(f32::decode(r)?),
        "float64" => Value::Float64(f64::decode(r)?),
        "float128" => {
            let bytes = r.read_exact(16)?;
            let mut arr = [0u8; 16];
            arr.copy_from_slice(&bytes);
            Value::Float128(arr)
        }
        "string" => Value::String(String::decode(r)?),
        "bytes" => Value::Bytes(r.read_bytes()?),
        "name" | "eosio::name" => Value::Name(Name::decode(r)?),
        "symbol" => Value::Symbol(Symbol::decode(r)?),
        "symbol_code" => Value::SymbolCode(SymbolCode::decode(r)?),
        "asset" => Value::Asset(Asset::decode(r)?),
        "extended_asset" => Value::ExtendedAsset(ExtendedAsset::decode(r)?),
        "checksum160" => Value::Checksum160(Checksum160::decode(r)?),
        "checksum256" => Value::Checksum256(Checksum256::decode(r)?),
        "checksum512" => Value::Checksum512(Checksum512::decode(r)?),
        "publickey" => Value::PublicKey(PublicKey::decode(r)?),
        "signature" => Value::Signature(Signature::decode(r)?),
        "time_point" => Value::TimePoint(TimePoint::decode(r)?),
        "time_point_sec" => Value::TimePointSec(TimePointSec::decode(r)?),
        "block_timestamp_type" => Value::BlockTimestamp(BlockTimestamp::decode(r)?),
        other => return Err(Error::UnknownType(other.to_string())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{AbiDocument, AbiField, AbiStruct, AbiVariant};

    fn transfer_doc() -> AbiDocument {
        AbiDocument {
            structs: vec![AbiStruct {
                name: "transfer".to_string(),
                base: String::new(),
                fields: vec![
                    AbiField { name: "from".to_string(), type_: "name".to_string() },
                    AbiField { name: "to".to_string(), type_: "name".to_string() },
                    AbiField { name: "quantity".to_string(), type_: "asset".to_string() },
                    AbiField { name: "memo".to_string(), type_: "string".to_string() },
                ],
            }],
            ..Default::default()
        }
    }

    fn transfer_value() -> Value {
        let mut m = IndexMap::new();
        m.insert("from".to_string(), Value::Name("alice".parse().unwrap()));
        m.insert("to".to_string(), Value::Name("bob".parse().unwrap()));
        m.insert(
            "quantity".to_string(),
            Value::Asset("1.0000 EOS".parse().unwrap()),
        );
        m.insert("memo".to_string(), Value::String("hi".to_string()));
        Value::Mapping(m)
    }

    #[test]
    fn encodes_and_decodes_a_simple_struct() {
        let doc = transfer_doc();
        let mut resolver = Resolver::new(&doc);
        let value = transfer_value();

        let mut buf = Vec::new();
        encode(&mut resolver, "transfer", &value, &mut Writer::new(&mut buf)).unwrap();

        let decoded = decode(&mut resolver, "transfer", &mut Reader::new(&buf[..])).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn missing_non_optional_field_is_an_error() {
        let doc = transfer_doc();
        let mut resolver = Resolver::new(&doc);
        let mut m = IndexMap::new();
        m.insert("from".to_string(), Value::Name("alice".parse().unwrap()));
        let value = Value::Mapping(m);

        let mut buf = Vec::new();
        let err = encode(&mut resolver, "transfer", &value, &mut Writer::new(&mut buf)).unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { .. }));
    }

    #[test]
    fn trailing_extension_field_is_omitted_when_buffer_is_exhausted() {
        let doc = AbiDocument {
            structs: vec![AbiStruct {
                name: "msg".to_string(),
                base: String::new(),
                fields: vec![
                    AbiField { name: "id".to_string(), type_: "uint64".to_string() },
                    AbiField { name: "note".to_string(), type_: "string$".to_string() },
                ],
            }],
            ..Default::default()
        };
        let mut resolver = Resolver::new(&doc);

        let mut buf = Vec::new();
        7u64.encode(&mut Writer::new(&mut buf)).unwrap();

        let decoded = decode(&mut resolver, "msg", &mut Reader::new(&buf[..])).unwrap();
        let mapping = decoded.as_mapping().unwrap();
        assert!(mapping.contains_key("id"));
        assert!(!mapping.contains_key("note"));
    }

    #[test]
    fn variant_round_trips_with_tag_and_inherited_base() {
        let doc = AbiDocument {
            structs: vec![
                AbiStruct {
                    name: "base_transfer".to_string(),
                    base: String::new(),
                    fields: vec![AbiField { name: "memo".to_string(), type_: "string".to_string() }],
                },
                AbiStruct {
                    name: "megatransfer".to_string(),
                    base: "base_transfer".to_string(),
                    fields: vec![AbiField { name: "extra".to_string(), type_: "uint64".to_string() }],
                },
            ],
            variants: vec![AbiVariant {
                name: "any_transfer".to_string(),
                types: vec!["base_transfer".to_string(), "megatransfer".to_string()],
            }],
            ..Default::default()
        };
        let mut resolver = Resolver::new(&doc);

        let mut inner = IndexMap::new();
        inner.insert("memo".to_string(), Value::String("hello".to_string()));
        inner.insert("extra".to_string(), Value::Uint64(42));
        let value = Value::Variant("megatransfer".to_string(), Box::new(Value::Mapping(inner)));

        let mut buf = Vec::new();
        encode(&mut resolver, "any_transfer", &value, &mut Writer::new(&mut buf)).unwrap();
        let decoded = decode(&mut resolver, "any_transfer", &mut Reader::new(&buf[..])).unwrap();
        assert_eq!(decoded, value);
    }

    #[test]
    fn unknown_variant_arm_name_is_rejected() {
        let doc = AbiDocument {
            variants: vec![AbiVariant {
                name: "either".to_string(),
                types: vec!["uint64".to_string()],
            }],
            ..Default::default()
        };
        let mut resolver = Resolver::new(&doc);
        let value = Value::Variant("ghost".to_string(), Box::new(Value::Uint64(1)));
        let mut buf = Vec::new();
        let err = encode(&mut resolver, "either", &value, &mut Writer::new(&mut buf)).unwrap_err();
        assert!(matches!(err, Error::UnknownVariant(_)));
    }
}
