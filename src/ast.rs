//! Parse tree for i18n expressions.
//!
//! A parsed input is either opaque literal text or a translation-key
//! reference (`i18n:key.path`) with an optional parameter block. Parameter
//! values are raw quoted strings or further translation-key references.
//!
//! `Display` re-serializes a tree in the expression syntax, so
//! `parse(&node.to_string())` yields the same tree back.

use std::fmt;

use serde::{Serialize, Serializer, ser::SerializeMap};

/// Marker that introduces a translation-key reference.
pub const MARKER: &str = "i18n:";

/// Root of a parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Node {
    /// Passthrough text. Always covers the rest of the input.
    Literal(String),
    /// A translation-key reference.
    Translate(TranslateCall),
}

/// A translation key plus the parameter block that followed it, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranslateCall {
    /// Dotted key path, never empty.
    pub key: String,
    /// `None` when no `{...}` block followed the key. An empty block
    /// yields `Some` of an empty map.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ParamMap>,
}

impl TranslateCall {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            params: None,
        }
    }

    pub fn with_params(key: impl Into<String>, params: ParamMap) -> Self {
        Self {
            key: key.into(),
            params: Some(params),
        }
    }
}

/// A parameter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Raw literal text including the surrounding quotes and any backslash
    /// escapes. Unescaping is left to whoever resolves the translation.
    String(String),
    /// A translation-key reference used as a value.
    Nested(TranslateCall),
}

/// Named parameters in source order.
///
/// Names are unique. Inserting a name that is already present drops the
/// earlier entry and appends the new one, so a duplicated parameter keeps
/// only its last value and its last position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamMap {
    entries: Vec<(String, Value)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, returning the value it replaced.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        let name = name.into();
        let previous = self
            .entries
            .iter()
            .position(|(existing, _)| *existing == name)
            .map(|index| self.entries.remove(index).1);
        self.entries.push((name, value));
        previous
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for ParamMap {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (name, value) in iter {
            map.insert(name, value);
        }
        map
    }
}

impl Serialize for ParamMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.write_str(text),
            Self::Translate(call) => call.fmt(f),
        }
    }
}

impl fmt::Display for TranslateCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", MARKER, self.key)?;
        if let Some(params) = &self.params {
            f.write_str("{")?;
            for (index, (name, value)) in params.iter().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}: {}", name, value)?;
            }
            f.write_str("}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(raw) => f.write_str(raw),
            Self::Nested(call) => call.fmt(f),
        }
    }
}
