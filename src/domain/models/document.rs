use std::ops;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

/// An immutable configuration document.
///
/// A document is a mapping from string keys to YAML values (strings,
/// integers, booleans, sequences, nested mappings). It is produced by the
/// loader once parsing succeeds and is read-only from then on: no mutating
/// accessor is exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigDocument(Mapping);

impl ConfigDocument {
    /// Parse a document from YAML source.
    ///
    /// Fails if the source is not well-formed YAML or its top level is not
    /// a mapping.
    pub fn from_yaml(source: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(source)
    }

    /// Look up a top-level value by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(Value::from(key))
    }

    /// Look up a top-level string value.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Look up a top-level integer value.
    pub fn get_i64(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_i64)
    }

    /// Look up a top-level boolean value.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }

    /// Look up a nested section, such as a named encoding or transfer
    /// profile.
    pub fn section(&self, key: &str) -> Option<&Mapping> {
        self.get(key).and_then(Value::as_mapping)
    }

    /// Resolve a key that holds either a single string or a sequence of
    /// strings into a list of string references.
    ///
    /// Returns `None` when the key is absent or holds anything other than a
    /// string or a sequence made entirely of strings. An empty sequence
    /// resolves to an empty list.
    pub fn string_list(&self, key: &str) -> Option<Vec<&str>> {
        match self.get(key)? {
            Value::String(single) => Some(vec![single.as_str()]),
            Value::Sequence(items) => items.iter().map(Value::as_str).collect(),
            _ => None,
        }
    }

    /// Whether the document has no keys at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl From<Mapping> for ConfigDocument {
    fn from(mapping: Mapping) -> Self {
        Self(mapping)
    }
}

impl ops::Index<&str> for ConfigDocument {
    type Output = Value;

    /// Absent keys index to `Value::Null` rather than panicking.
    fn index(&self, key: &str) -> &Value {
        static NULL: Value = Value::Null;
        self.get(key).unwrap_or(&NULL)
    }
}
