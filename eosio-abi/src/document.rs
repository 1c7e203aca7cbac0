//! The ABI document model: type aliases, structs, variants, and the
//! metadata objects (actions/tables/ricardian clauses) carried verbatim
//! even though the wire codec itself never reads them.
//!
//! Grounded on `pkg/chain/abi.go`'s `Abi`/`AbiType`/`AbiVariant`/
//! `AbiStruct`/`AbiField`/`AbiAction`/`AbiTable`/`AbiClause`, naming chosen
//! to match the `ABIDefinition`/`Struct`/`Field` convention seen in the
//! `kudu`/`antelope` Rust crate's own test suite.

#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbiDocument {
    pub version: String,
    pub types: Vec<AbiType>,
    pub variants: Vec<AbiVariant>,
    pub structs: Vec<AbiStruct>,
    pub actions: Vec<AbiAction>,
    pub tables: Vec<AbiTable>,
    pub ricardian_clauses: Vec<AbiClause>,
}

#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbiType {
    pub new_type_name: String,
    #[cfg_attr(feature = "json", serde(rename = "type"))]
    pub type_: String,
}

#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbiVariant {
    pub name: String,
    pub types: Vec<String>,
}

#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbiStruct {
    pub name: String,
    pub base: String,
    pub fields: Vec<AbiField>,
}

#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbiField {
    pub name: String,
    #[cfg_attr(feature = "json", serde(rename = "type"))]
    pub type_: String,
}

#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbiAction {
    pub name: String,
    #[cfg_attr(feature = "json", serde(rename = "type"))]
    pub type_: String,
    pub ricardian_contract: String,
}

#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "json", serde(default))]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AbiTable {
    pub name: String,
    pub index_type: String,
    pub key_names: Vec<String>,
    pub key_types: Vec<String>,
    #[cfg_attr(feature = "json", serde(rename = "type"))]
    pub type_: String,
}

#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AbiClause {
    pub id: String,
    pub body: String,
}

impl AbiDocument {
    pub fn get_struct(&self, name: &str) -> Option<&AbiStruct> {
        self.structs.iter().find(|s| s.name == name)
    }

    pub fn get_variant(&self, name: &str) -> Option<&AbiVariant> {
        self.variants.iter().find(|v| v.name == name)
    }

    pub fn get_type(&self, name: &str) -> Option<&AbiType> {
        self.types.iter().find(|t| t.new_type_name == name)
    }

    pub fn get_action(&self, name: &str) -> Option<&AbiAction> {
        self.actions.iter().find(|a| a.name == name)
    }

    pub fn get_table(&self, name: &str) -> Option<&AbiTable> {
        self.tables.iter().find(|t| t.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_helpers_find_by_name() {
        let doc = AbiDocument {
            structs: vec![AbiStruct {
                name: "transfer".to_string(),
                base: String::new(),
                fields: vec![AbiField {
                    name: "from".to_string(),
                    type_: "name".to_string(),
                }],
            }],
            ..Default::default()
        };
        assert!(doc.get_struct("transfer").is_some());
        assert!(doc.get_struct("missing").is_none());
    }
}
