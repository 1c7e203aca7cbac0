//! ABI document model and dynamic encode/decode engine: loads an ABI JSON
//! schema, resolves its type-reference grammar into a type graph, and walks
//! that graph to encode/decode an untyped [`Value`] tree to and from the
//! wire format.

mod document;
mod engine;
mod error;
mod resolver;
mod value;

pub use document::{AbiAction, AbiClause, AbiDocument, AbiField, AbiStruct, AbiTable, AbiType, AbiVariant};
pub use engine::{decode, encode};
pub use error::Error;
pub use resolver::{Field, NodeId, ResolvedType, Resolver};
pub use value::Value;
