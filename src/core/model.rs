//! Models: objects that supply values for template variables
//!
//! A model exposes named fields as [`FieldValue`]s. Lookups try the exact name
//! first and fall back to a case-insensitive match, so `{UserId}` resolves
//! against a field declared as `userid`.
//!
//! Statically typed models describe their shape once with a [`FieldTable`],
//! usually generated by [`impl_model!`](crate::impl_model). Dynamic JSON
//! objects are models too.

use crate::core::field::FieldValue;
use indexmap::IndexMap;
use std::collections::HashMap;

/// Read-only, name-based access to a model's fields
///
/// `resolve_field` returns:
/// - `None` when no field matches the name, exactly or ignoring case
/// - `Some(FieldValue::Null)` when the field exists but holds no value
/// - `Some(value)` otherwise
pub trait Model {
    /// Name used to look up the model's link templates (e.g., "user")
    fn model_name(&self) -> &str;

    /// Field names in declaration order
    fn field_names(&self) -> Vec<&str>;

    /// Exact-name field lookup
    fn field_value(&self, name: &str) -> Option<FieldValue>;

    /// Exact-name lookup with a case-insensitive fallback
    ///
    /// The fallback returns the first declared field whose name matches
    /// ignoring case.
    fn resolve_field(&self, name: &str) -> Option<FieldValue> {
        if let Some(value) = self.field_value(name) {
            return Some(value);
        }

        let folded = name.to_lowercase();
        let matched = self
            .field_names()
            .into_iter()
            .find(|candidate| candidate.to_lowercase() == folded)?;
        self.field_value(matched)
    }
}

/// A model whose fields are described by a cached [`FieldTable`]
///
/// Implemented by [`impl_model!`](crate::impl_model), which also implements
/// [`Model`] on top of the table.
pub trait StaticModel: Sized + 'static {
    /// The accessor table for this model type, built on first use
    fn field_table() -> &'static FieldTable<Self>;
}

/// Reads one field from a model
pub type FieldAccessor<M> = fn(&M) -> FieldValue;

/// Field accessors for one model shape
///
/// Holds an exact-name table in declaration order and a secondary table keyed
/// by lowercased name. On case collisions the first declared field owns the
/// lowercased key.
pub struct FieldTable<M> {
    exact: IndexMap<&'static str, FieldAccessor<M>>,
    folded: HashMap<String, FieldAccessor<M>>,
}

impl<M> FieldTable<M> {
    pub fn new() -> Self {
        Self {
            exact: IndexMap::new(),
            folded: HashMap::new(),
        }
    }

    /// Register a field accessor
    ///
    /// Registering a name twice replaces the accessor but keeps the original
    /// position.
    pub fn field(mut self, name: &'static str, accessor: FieldAccessor<M>) -> Self {
        self.exact.insert(name, accessor);
        self.folded.entry(name.to_lowercase()).or_insert(accessor);
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.exact.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.exact.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty()
    }

    /// Exact-name lookup
    pub fn get(&self, model: &M, name: &str) -> Option<FieldValue> {
        self.exact.get(name).map(|accessor| accessor(model))
    }

    /// Exact-name lookup, then the lowercased table
    pub fn resolve(&self, model: &M, name: &str) -> Option<FieldValue> {
        self.get(model, name).or_else(|| {
            self.folded
                .get(&name.to_lowercase())
                .map(|accessor| accessor(model))
        })
    }
}

impl<M> Default for FieldTable<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> std::fmt::Debug for FieldTable<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FieldTable")
            .field("fields", &self.names())
            .finish()
    }
}

fn json_to_field_value(value: &serde_json::Value) -> FieldValue {
    use serde_json::Value;

    match value {
        Value::Null => FieldValue::Null,
        Value::Bool(b) => FieldValue::Boolean(*b),
        Value::Number(n) => match n.as_i64() {
            Some(i) => FieldValue::Integer(i),
            None => match n.as_f64() {
                Some(f) if n.is_f64() => FieldValue::Float(f),
                _ => FieldValue::String(n.to_string()),
            },
        },
        Value::String(s) => FieldValue::String(s.clone()),
        // Nested structures are substituted as their JSON text
        other => FieldValue::String(other.to_string()),
    }
}

/// A JSON object is a model whose fields are its keys
///
/// Its model name is empty; look up its builder explicitly.
impl Model for serde_json::Map<String, serde_json::Value> {
    fn model_name(&self) -> &str {
        ""
    }

    fn field_names(&self) -> Vec<&str> {
        self.keys().map(String::as_str).collect()
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        self.get(name).map(json_to_field_value)
    }
}

/// Any JSON value; only objects expose fields
impl Model for serde_json::Value {
    fn model_name(&self) -> &str {
        ""
    }

    fn field_names(&self) -> Vec<&str> {
        match self {
            serde_json::Value::Object(map) => map.field_names(),
            _ => Vec::new(),
        }
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        match self {
            serde_json::Value::Object(map) => map.field_value(name),
            _ => None,
        }
    }
}

/// A model with no fields, e.g. for resources whose links are all static
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoFields;

impl Model for NoFields {
    fn model_name(&self) -> &str {
        ""
    }

    fn field_names(&self) -> Vec<&str> {
        Vec::new()
    }

    fn field_value(&self, _name: &str) -> Option<FieldValue> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Account {
        id: i64,
        owner: Option<String>,
    }

    fn account_table() -> FieldTable<Account> {
        FieldTable::<Account>::new()
            .field("AccountId", |a| a.id.into())
            .field("accountid", |a| (a.id + 1).into())
            .field("owner", |a| a.owner.clone().into())
    }

    #[test]
    fn test_table_exact_lookup() {
        let table = account_table();
        let account = Account {
            id: 7,
            owner: Some("ann".to_string()),
        };

        assert_eq!(table.get(&account, "accountid"), Some(FieldValue::Integer(8)));
        assert_eq!(table.get(&account, "ACCOUNTID"), None);
    }

    #[test]
    fn test_table_fallback_prefers_first_declared() {
        let table = account_table();
        let account = Account { id: 7, owner: None };

        assert_eq!(table.resolve(&account, "ACCOUNTID"), Some(FieldValue::Integer(7)));
        assert_eq!(table.resolve(&account, "missing"), None);
    }

    #[test]
    fn test_table_distinguishes_null_from_missing() {
        let table = account_table();
        let account = Account { id: 1, owner: None };

        assert_eq!(table.resolve(&account, "Owner"), Some(FieldValue::Null));
        assert_eq!(table.resolve(&account, "tenant"), None);
    }

    #[test]
    fn test_table_names_in_declaration_order() {
        let table = account_table();
        assert_eq!(table.names(), vec!["AccountId", "accountid", "owner"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_json_object_model() {
        let model = json!({
            "UserId": 42,
            "name": "a b",
            "score": 1.5,
            "nickname": null,
            "tags": ["x"]
        });

        assert_eq!(model.resolve_field("userid"), Some(FieldValue::Integer(42)));
        assert_eq!(
            model.resolve_field("NAME"),
            Some(FieldValue::String("a b".to_string()))
        );
        assert_eq!(model.resolve_field("score"), Some(FieldValue::Float(1.5)));
        assert_eq!(model.resolve_field("nickname"), Some(FieldValue::Null));
        assert_eq!(
            model.resolve_field("tags"),
            Some(FieldValue::String("[\"x\"]".to_string()))
        );
        assert_eq!(model.resolve_field("missing"), None);
    }

    #[test]
    fn test_non_object_json_has_no_fields() {
        let model = json!("just a string");
        assert!(model.field_names().is_empty());
        assert_eq!(model.resolve_field("len"), None);
    }

    #[test]
    fn test_no_fields_model() {
        assert_eq!(NoFields.resolve_field("id"), None);
    }
}
