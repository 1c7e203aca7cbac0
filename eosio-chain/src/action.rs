//! `PermissionLevel`/`Action`.
//!
//! Grounded on `pkg/chain/action.go`.

use std::io::{Read, Write};

use eosio_codec::{Decode, Encode, Error as CodecError, Reader, Writer};
use eosio_crypto::{sha256, Checksum256};

use crate::bytes::Bytes;
use crate::name::Name;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PermissionLevel {
    pub actor: Name,
    pub permission: Name,
}

impl Encode for PermissionLevel {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        self.actor.encode(w)?;
        self.permission.encode(w)
    }
}

impl Decode for PermissionLevel {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(PermissionLevel {
            actor: Name::decode(r)?,
            permission: Name::decode(r)?,
        })
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Action {
    pub account: Name,
    pub name: Name,
    pub authorization: Vec<PermissionLevel>,
    pub data: Bytes,
}

impl Action {
    pub fn new(account: Name, name: Name, authorization: Vec<PermissionLevel>, data: Bytes) -> Self {
        Self {
            account,
            name,
            authorization,
            data,
        }
    }

    /// `sha256` of this action's own binary encoding.
    pub fn digest(&self) -> Checksum256 {
        let mut buf = Vec::new();
        self.encode(&mut Writer::new(&mut buf))
            .expect("encoding to an in-memory buffer is infallible");
        sha256(&buf)
    }
}

impl Encode for Action {
    fn encode<W: Write>(&self, w: &mut Writer<W>) -> Result<(), CodecError> {
        self.account.encode(w)?;
        self.name.encode(w)?;
        self.authorization.encode(w)?;
        self.data.encode(w)
    }
}

impl Decode for Action {
    fn decode<R: Read>(r: &mut Reader<R>) -> Result<Self, CodecError> {
        Ok(Action {
            account: Name::decode(r)?,
            name: Name::decode(r)?,
            authorization: Vec::<PermissionLevel>::decode(r)?,
            data: Bytes::decode(r)?,
        })
    }
}

#[cfg(feature = "json")]
mod json_impl {
    use super::*;
    use serde::{Deserialize, Serialize};

    impl Serialize for PermissionLevel {
        fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            use serde::ser::SerializeStruct;
            let mut st = s.serialize_struct("PermissionLevel", 2)?;
            st.serialize_field("actor", &self.actor)?;
            st.serialize_field("permission", &self.permission)?;
            st.end()
        }
    }

    impl<'de> Deserialize<'de> for PermissionLevel {
        fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            #[derive(Deserialize)]
            struct Raw {
                actor: Name,
                permission: Name,
            }
            let raw = Raw::deserialize(d)?;
            Ok(PermissionLevel {
                actor: raw.actor,
                permission: raw.permission,
            })
        }
    }

    impl Serialize for Action {
        fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
            use serde::ser::SerializeStruct;
            let mut st = s.serialize_struct("Action", 4)?;
            st.serialize_field("account", &self.account)?;
            st.serialize_field("name", &self.name)?;
            st.serialize_field("authorization", &self.authorization)?;
            st.serialize_field("data", &self.data)?;
            st.end()
        }
    }

    impl<'de> Deserialize<'de> for Action {
        fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
            #[derive(Deserialize)]
            struct Raw {
                account: Name,
                name: Name,
                authorization: Vec<PermissionLevel>,
                data: Bytes,
            }
            let raw = Raw::deserialize(d)?;
            Ok(Action {
                account: raw.account,
                name: raw.name,
                authorization: raw.authorization,
                data: raw.data,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_round_trips_on_wire() {
        let action = Action::new(
            "eosio.token".parse().unwrap(),
            "transfer".parse().unwrap(),
            vec![PermissionLevel {
                actor: "alice".parse().unwrap(),
                permission: "active".parse().unwrap(),
            }],
            Bytes(vec![1, 2, 3]),
        );
        let mut buf = Vec::new();
        action.encode(&mut Writer::new(&mut buf)).unwrap();
        let decoded = Action::decode(&mut Reader::new(&buf[..])).unwrap();
        assert_eq!(action, decoded);
    }

    #[test]
    fn digest_is_stable_for_same_encoding() {
        let action = Action::new(
            "eosio.token".parse().unwrap(),
            "transfer".parse().unwrap(),
            vec![],
            Bytes(vec![]),
        );
        assert_eq!(action.digest(), action.clone().digest());
    }
}
