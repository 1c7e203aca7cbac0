//! Resolves ABI type-reference strings into a type graph, memoized by name
//! and safe against cyclic struct bases.
//!
//! Grounded on `pkg/chain/abi.go`'s `resolver`/`resolvedType`: the Go source
//! keeps a `map[string]*resolvedType` and stores a partially-built pointer
//! into that map *before* recursing into the referenced type, which is what
//! lets a self-referential struct resolve without looping forever. Rust has
//! no safe way to hand out a pointer to a `Vec` slot that might still grow,
//! so the same trick is done with indices instead of pointers: `NodeId` is
//! an index into `Resolver::nodes`, inserted into the memo map before the
//! recursive `resolve` calls that fill in its base/fields/variant/ref.

use std::collections::HashMap;

use crate::document::AbiDocument;
use crate::error::Error;

pub type NodeId = usize;

#[derive(Clone, Debug)]
pub struct Field {
    pub name: String,
    pub type_id: NodeId,
}

#[derive(Clone, Debug)]
pub struct ResolvedType {
    pub name: String,
    pub base_name: String,
    pub is_array: bool,
    pub is_optional: bool,
    pub is_extension: bool,
    pub base: Option<NodeId>,
    pub fields: Option<Vec<Field>>,
    pub variant: Option<Vec<NodeId>>,
    pub reference: Option<NodeId>,
}

impl ResolvedType {
    fn placeholder(name: String, base_name: String, is_array: bool, is_optional: bool, is_extension: bool) -> Self {
        ResolvedType {
            name,
            base_name,
            is_array,
            is_optional,
            is_extension,
            base: None,
            fields: None,
            variant: None,
            reference: None,
        }
    }
}

pub struct Resolver<'a> {
    abi: &'a AbiDocument,
    pub nodes: Vec<ResolvedType>,
    memo: HashMap<String, NodeId>,
}

impl<'a> Resolver<'a> {
    pub fn new(abi: &'a AbiDocument) -> Self {
        Resolver {
            abi,
            nodes: Vec::new(),
            memo: HashMap::new(),
        }
    }

    pub fn node(&self, id: NodeId) -> &ResolvedType {
        &self.nodes[id]
    }

    /// Resolves a type-reference string such as `"transfer[]"`, `"uint64?"`,
    /// or `"asset$"`, stripping modifiers outside-in in the order `?`, `$`,
    /// `[]` and memoizing by the full original name.
    pub fn resolve(&mut self, name: &str) -> Result<NodeId, Error> {
        if let Some(&id) = self.memo.get(name) {
            return Ok(id);
        }

        log::trace!("resolving type reference {name:?}");

        let mut rest = name;
        let is_optional = rest.ends_with('?');
        if is_optional {
            rest = &rest[..rest.len() - 1];
        }
        let is_extension = rest.ends_with('$');
        if is_extension {
            rest = &rest[..rest.len() - 1];
        }
        let is_array = rest.ends_with("[]");
        if is_array {
            rest = &rest[..rest.len() - 2];
        }
        let base_name = rest.to_string();

        let id = self.nodes.len();
        self.nodes.push(ResolvedType::placeholder(
            name.to_string(),
            base_name.clone(),
            is_array,
            is_optional,
            is_extension,
        ));
        self.memo.insert(name.to_string(), id);

        log::debug!("caching resolved node {id} for {name:?} (base_name {base_name:?})");

        if let Some(abi_struct) = self.abi.get_struct(&base_name) {
            let base_id = if abi_struct.base.is_empty() {
                None
            } else {
                Some(self.resolve(&abi_struct.base)?)
            };
            let mut fields = Vec::with_capacity(abi_struct.fields.len());
            for f in &abi_struct.fields {
                let field_type_id = self.resolve(&f.type_)?;
                fields.push(Field {
                    name: f.name.clone(),
                    type_id: field_type_id,
                });
            }
            self.nodes[id].base = base_id;
            self.nodes[id].fields = Some(fields);
        } else if let Some(abi_variant) = self.abi.get_variant(&base_name) {
            let mut arms = Vec::with_capacity(abi_variant.types.len());
            for t in &abi_variant.types {
                arms.push(self.resolve(t)?);
            }
            self.nodes[id].variant = Some(arms);
        } else if let Some(abi_type) = self.abi.get_type(&base_name) {
            let ref_id = self.resolve(&abi_type.type_)?;
            self.nodes[id].reference = Some(ref_id);
        }
        // else: base_name names a builtin; the engine dispatches on
        // base_name directly and no further graph structure is needed.

        Ok(id)
    }

    /// Flattens a struct's own fields together with every field inherited
    /// from its base chain, base-first. Detects two distinct failure modes
    /// that the Go source conflates into a silent empty list: a true cycle
    /// in the base chain, and a `base` name that does not resolve to any
    /// known struct at all.
    pub fn all_fields(&self, node_id: NodeId) -> Result<Vec<Field>, Error> {
        let mut out = Vec::new();
        let mut seen = Vec::new();
        let mut cur = Some(node_id);
        while let Some(id) = cur {
            if seen.contains(&id) {
                let name = &self.nodes[node_id].name;
                log::warn!("circular struct base chain detected at {name:?}");
                return Err(Error::CircularReference(name.clone()));
            }
            seen.push(id);
            let node = &self.nodes[id];
            let fields = node.fields.as_ref().ok_or_else(|| Error::UnknownType(node.base_name.clone()))?;
            let mut prefix = fields.clone();
            prefix.extend(out);
            out = prefix;
            cur = node.base;
        }
        Ok(out)
    }
}
