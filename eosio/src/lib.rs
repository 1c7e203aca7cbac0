//! Rust-native building blocks for the EOSIO/Antelope wire format.
//!
//! This crate doesn't implement a node or a wallet; it re-exports the
//! workspace's layered crates under one namespace and hosts the
//! value-routing shim ([`dispatcher`]) that ties a user extension hook to
//! the crates' own `Encode`/`Decode` implementations, mirroring
//! `pallas/src/lib.rs`'s re-export pattern.

pub mod dispatcher;

#[doc(inline)]
pub use eosio_codec as codec;

#[doc(inline)]
pub use eosio_crypto as crypto;

#[doc(inline)]
pub use eosio_chain as chain;

#[doc(inline)]
pub use eosio_abi as abi;

pub use dispatcher::Dispatcher;
