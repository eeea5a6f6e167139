//! Host defined build properties.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A property value together with the component that set it.
///
/// Serialized as the host's `[value, source]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property(Value, String);

impl Property {
    pub fn new(value: impl Into<Value>, source: impl Into<String>) -> Self {
        Self(value.into(), source.into())
    }

    pub fn value(&self) -> &Value {
        &self.0
    }

    pub fn source(&self) -> &str {
        &self.1
    }

    /// The value as message text.
    ///
    /// Strings are taken verbatim and `null` is empty. Everything else is
    /// rendered as compact JSON.
    pub fn value_text(&self) -> String {
        match &self.0 {
            Value::Null => String::new(),
            Value::String(value) => value.clone(),
            other => other.to_string(),
        }
    }
}

/// Properties of a build keyed by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, Property>);

impl Properties {
    pub fn get(&self, name: &str) -> Option<&Property> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, property: Property) -> Option<Property> {
        self.0.insert(name.into(), property)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn branch(&self) -> Option<&Property> {
        self.get("branch")
    }

    pub fn pull_request_url(&self) -> Option<&Property> {
        self.get("pullrequesturl")
    }

    pub fn scheduler(&self) -> Option<&Property> {
        self.get("scheduler")
    }

    pub fn builder_name(&self) -> Option<&Property> {
        self.get("buildername")
    }

    pub fn worker_name(&self) -> Option<&Property> {
        self.get("workername")
    }
}

impl<K: Into<String>> FromIterator<(K, Property)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, Property)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, property)| (name.into(), property))
                .collect(),
        )
    }
}
