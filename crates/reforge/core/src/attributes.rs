//! Namespaced typed attributes attached to items.
//!
//! The attribute container is the persistent metadata bag the host keeps
//! on every item. This crate reads the reforge and stone ids from it and
//! owns one scratch key for the name-revert round trip; everything else
//! in the container belongs to other systems and is left untouched.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Namespaced key into an item's attribute container.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeKey {
    pub namespace: String,
    pub key: String,
}

impl AttributeKey {
    pub fn new(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            key: key.into(),
        }
    }
}

impl std::fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.namespace, self.key)
    }
}

/// Typed attribute values.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttributeValue {
    Str(String),
    Int(i64),
}

/// Keyed store of typed attributes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeContainer {
    values: HashMap<AttributeKey, AttributeValue>,
}

impl AttributeContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: AttributeKey, value: AttributeValue) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: &AttributeKey) -> Option<&AttributeValue> {
        self.values.get(key)
    }

    /// String value under `key`, if present and string-typed.
    pub fn get_str(&self, key: &AttributeKey) -> Option<&str> {
        match self.values.get(key) {
            Some(AttributeValue::Str(value)) => Some(value),
            _ => None,
        }
    }

    pub fn set_str(&mut self, key: AttributeKey, value: impl Into<String>) {
        self.values.insert(key, AttributeValue::Str(value.into()));
    }

    pub fn has(&self, key: &AttributeKey) -> bool {
        self.values.contains_key(key)
    }

    pub fn remove(&mut self, key: &AttributeKey) -> Option<AttributeValue> {
        self.values.remove(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
