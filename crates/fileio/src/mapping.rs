//! Read-only key/value view over a parsed YAML or JSON document
//!
//! Values are kept as [`serde_yaml::Value`] so YAML-only content survives:
//! `.inf`/`.nan` floats, non-string keys and tags.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_yaml::mapping::Index;
use serde_yaml::Value;

/// Why a parsed document could not become a [`Mapping`]
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Rejected {
    /// `null` or `{}`
    Empty,
    /// Top-level value is not a mapping
    NotAMapping(&'static str),
}

impl std::fmt::Display for Rejected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "document is empty"),
            Self::NotAMapping(found) => {
                write!(f, "expected a mapping at the top level, found {}", found)
            }
        }
    }
}

impl std::error::Error for Rejected {}

/// Parsed configuration document. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Mapping {
    entries: serde_yaml::Mapping,
}

impl Mapping {
    pub(crate) fn try_from_value(value: Value) -> Result<Self, Rejected> {
        match value {
            Value::Null => Err(Rejected::Empty),
            Value::Mapping(entries) if entries.is_empty() => Err(Rejected::Empty),
            Value::Mapping(entries) => Ok(Self { entries }),
            Value::Bool(_) => Err(Rejected::NotAMapping("a boolean")),
            Value::Number(_) => Err(Rejected::NotAMapping("a number")),
            Value::String(_) => Err(Rejected::NotAMapping("a string")),
            Value::Sequence(_) => Err(Rejected::NotAMapping("a sequence")),
            Value::Tagged(_) => Err(Rejected::NotAMapping("a tagged value")),
        }
    }

    /// Top-level value for `key`. Takes `&str` or any YAML key value.
    pub fn get<I: Index>(&self, key: I) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Walk nested mappings with a dotted path, e.g. `data_ingestion.root_dir`
    pub fn lookup(&self, dotted: &str) -> Option<&Value> {
        let mut parts = dotted.split('.');
        let mut current = self.entries.get(parts.next()?)?;
        for part in parts {
            current = current.as_mapping()?.get(part)?;
        }
        Some(current)
    }

    pub fn get_str(&self, dotted: &str) -> Option<&str> {
        self.lookup(dotted).and_then(Value::as_str)
    }

    pub fn get_i64(&self, dotted: &str) -> Option<i64> {
        self.lookup(dotted).and_then(Value::as_i64)
    }

    /// Includes the non-finite YAML floats `.inf`, `-.inf` and `.nan`
    pub fn get_f64(&self, dotted: &str) -> Option<f64> {
        self.lookup(dotted).and_then(Value::as_f64)
    }

    pub fn get_bool(&self, dotted: &str) -> Option<bool> {
        self.lookup(dotted).and_then(Value::as_bool)
    }

    pub fn contains_key<I: Index>(&self, key: I) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false for a constructed mapping
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Typed view of the whole document
    pub fn deserialize<T: DeserializeOwned>(&self) -> serde_yaml::Result<T> {
        serde_yaml::from_value(Value::Mapping(self.entries.clone()))
    }

    pub fn into_inner(self) -> serde_yaml::Mapping {
        self.entries
    }
}

impl<'de> Deserialize<'de> for Mapping {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::try_from_value(value).map_err(de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a Mapping {
    type Item = (&'a Value, &'a Value);
    type IntoIter = serde_yaml::mapping::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
