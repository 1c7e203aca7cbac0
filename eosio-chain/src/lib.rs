//! EOSIO/Antelope chain domain types: `Name`, `Symbol`/`SymbolCode`,
//! `Asset`/`ExtendedAsset`, checksums, keys, time types, 128-bit numbers,
//! `Bytes`/`Blob`, and the action/transaction envelope types, all encoded
//! via `eosio-codec`'s `Encode`/`Decode` traits.

mod action;
mod asset;
mod bytes;
mod error;
mod name;
mod numbers;
mod symbol;
mod time;
mod transaction;

pub use action::{Action, PermissionLevel};
pub use asset::{Asset, ExtendedAsset};
pub use bytes::{Blob, Bytes};
pub use error::Error;
pub use name::Name;
pub use numbers::{BlockNum, Float128, Int128, Uint128, Uint64};
pub use symbol::{Symbol, SymbolCode};
pub use time::{BlockTimestamp, TimePoint, TimePointSec};
pub use transaction::{Transaction, TransactionExtension, TransactionHeader};

pub use eosio_crypto::{Checksum, Checksum160, Checksum256, Checksum512, KeyType, PublicKey, Signature};
