//! Open, tagged property maps attached to report items
//!
//! Items carry an open `name -> value` map whose shape is only loosely
//! described by the catalog. Values are tagged by the kind of property they
//! hold; on the wire they are plain JSON scalars, so string-bearing kinds
//! (text, color, choice, data field) are told apart by the catalog schema
//! rather than by the JSON itself. See [`crate::ItemCatalog::normalize`].
//!
//! Because the tag is derived, equality ignores it: `Text("#fff")` and
//! `Color("#fff")` are the same value.

use crate::{ModelError, PropertyKind, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;

/// A single property value
#[derive(Debug, Clone)]
pub enum PropertyValue {
    Text(String),
    Number(f64),
    Boolean(bool),
    Color(String),
    /// One of a fixed set of options (`select` in the catalog schema)
    Choice(String),
    /// Reference to a data field, e.g. `customer.name`
    DataField(String),
    /// Anything the catalog does not describe (arrays, objects, null)
    Other(serde_json::Value),
}

impl PropertyValue {
    pub fn text(value: impl Into<String>) -> Self {
        PropertyValue::Text(value.into())
    }

    pub fn color(value: impl Into<String>) -> Self {
        PropertyValue::Color(value.into())
    }

    pub fn choice(value: impl Into<String>) -> Self {
        PropertyValue::Choice(value.into())
    }

    pub fn data_field(value: impl Into<String>) -> Self {
        PropertyValue::DataField(value.into())
    }

    /// Build an untyped value from JSON. Strings become [`PropertyValue::Text`].
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => PropertyValue::Text(s),
            serde_json::Value::Bool(b) => PropertyValue::Boolean(b),
            serde_json::Value::Number(n) => match n.as_f64() {
                Some(f) => PropertyValue::Number(f),
                None => PropertyValue::Other(serde_json::Value::Number(n)),
            },
            other => PropertyValue::Other(other),
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            PropertyValue::Text(s)
            | PropertyValue::Color(s)
            | PropertyValue::Choice(s)
            | PropertyValue::DataField(s) => serde_json::Value::String(s.clone()),
            PropertyValue::Number(n) => serde_json::Number::from_f64(*n)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            PropertyValue::Boolean(b) => serde_json::Value::Bool(*b),
            PropertyValue::Other(v) => v.clone(),
        }
    }

    /// Re-tag a string value according to a schema kind.
    ///
    /// Only string-bearing values change; numbers, booleans and other
    /// values are returned as they are.
    pub fn retag(self, kind: PropertyKind) -> Self {
        let s = match self {
            PropertyValue::Text(s)
            | PropertyValue::Color(s)
            | PropertyValue::Choice(s)
            | PropertyValue::DataField(s) => s,
            other => return other,
        };
        match kind {
            PropertyKind::Color => PropertyValue::Color(s),
            PropertyKind::Select => PropertyValue::Choice(s),
            PropertyKind::DataField => PropertyValue::DataField(s),
            PropertyKind::Text | PropertyKind::Number | PropertyKind::Boolean => {
                PropertyValue::Text(s)
            }
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(s)
            | PropertyValue::Color(s)
            | PropertyValue::Choice(s)
            | PropertyValue::DataField(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropertyValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropertyValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Whether the value counts as "set" for default fallbacks.
    ///
    /// Empty strings, zero, NaN, `false` and `null` count as unset.
    pub fn is_set(&self) -> bool {
        match self {
            PropertyValue::Text(s)
            | PropertyValue::Color(s)
            | PropertyValue::Choice(s)
            | PropertyValue::DataField(s) => !s.is_empty(),
            PropertyValue::Number(n) => *n != 0.0 && !n.is_nan(),
            PropertyValue::Boolean(b) => *b,
            PropertyValue::Other(v) => !v.is_null(),
        }
    }
}

impl PartialEq for PropertyValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (PropertyValue::Number(a), PropertyValue::Number(b)) => a == b,
            (PropertyValue::Boolean(a), PropertyValue::Boolean(b)) => a == b,
            (PropertyValue::Other(a), PropertyValue::Other(b)) => a == b,
            _ => match (self.as_str(), other.as_str()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Text(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        PropertyValue::Text(s)
    }
}

impl From<f64> for PropertyValue {
    fn from(n: f64) -> Self {
        PropertyValue::Number(n)
    }
}

impl From<i32> for PropertyValue {
    fn from(n: i32) -> Self {
        PropertyValue::Number(f64::from(n))
    }
}

impl From<bool> for PropertyValue {
    fn from(b: bool) -> Self {
        PropertyValue::Boolean(b)
    }
}

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            PropertyValue::Text(s)
            | PropertyValue::Color(s)
            | PropertyValue::Choice(s)
            | PropertyValue::DataField(s) => serializer.serialize_str(s),
            PropertyValue::Number(n) => serializer.serialize_f64(*n),
            PropertyValue::Boolean(b) => serializer.serialize_bool(*b),
            PropertyValue::Other(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(PropertyValue::from_json(value))
    }
}

/// Open property map of an item, ordered by name
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(BTreeMap<String, PropertyValue>);

impl Properties {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&PropertyValue> {
        self.0.get(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Option<PropertyValue> {
        self.0.insert(name.into(), value.into())
    }

    pub fn remove(&mut self, name: &str) -> Option<PropertyValue> {
        self.0.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.0.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&String, &mut PropertyValue)> {
        self.0.iter_mut()
    }

    /// Overwrite entries with those from `other`, key by key
    pub fn merge(&mut self, other: Properties) {
        self.0.extend(other.0);
    }

    /// Numeric property, or `default` when missing, non-numeric, zero or NaN
    pub fn number_or(&self, name: &str, default: f64) -> f64 {
        match self.get(name) {
            Some(value) if value.is_set() => value.as_number().unwrap_or(default),
            _ => default,
        }
    }

    /// String property, or `None` when missing, non-string or empty
    pub fn str_opt(&self, name: &str) -> Option<&str> {
        self.get(name)
            .filter(|value| value.is_set())
            .and_then(PropertyValue::as_str)
    }

    /// String property, or `default` when missing, non-string or empty
    pub fn str_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.str_opt(name).unwrap_or(default)
    }

    /// Fail on the first NaN or infinite number
    pub fn check_finite(&self) -> Result<()> {
        match self.0.iter().find(|(_, value)| matches!(value, PropertyValue::Number(n) if !n.is_finite())) {
            Some((name, _)) => Err(ModelError::NonFiniteNumber(name.clone())),
            None => Ok(()),
        }
    }

    /// Build from a JSON object; any other JSON yields an empty map
    pub fn from_json(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(map) => map
                .into_iter()
                .map(|(k, v)| (k, PropertyValue::from_json(v)))
                .collect(),
            _ => Self::new(),
        }
    }
}

impl FromIterator<(String, PropertyValue)> for Properties {
    fn from_iter<I: IntoIterator<Item = (String, PropertyValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Properties {
    type Item = (String, PropertyValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, PropertyValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
