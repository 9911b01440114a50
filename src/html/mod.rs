//! HTML tag serialization.
//!
//! [`Attributes`] is an insertion-ordered attribute map with mapping-union
//! semantics: inserting a key that already exists replaces its value but keeps
//! its position. Built-in attributes are inserted first and caller-supplied
//! attributes merged afterwards, so `type`/`src` and `rel`/`href` lead the
//! rendered tag and callers can still override them.
//!
//! Values are written verbatim. Attribute values only ever come from template
//! and configuration authors, never from end users, so no escaping is applied.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// `true` renders as a bare boolean attribute, `false` is omitted.
    Flag(bool),
    /// Rendered as `name="value"`.
    Text(String),
    /// Omitted from output.
    Null,
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<serde_json::Value> for AttributeValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Flag(flag),
            serde_json::Value::String(text) => Self::Text(text),
            other => Self::Text(other.to_string()),
        }
    }
}

/// Insertion-ordered attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttributeValue)>,
}

impl Attributes {
    /// An empty attribute set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert or replace `name`. A replaced key keeps its original position.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttributeValue>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(name, value);
        self
    }

    /// Merge `other` into `self`; keys from `other` win.
    #[must_use]
    pub fn merged(mut self, other: &Self) -> Self {
        for (name, value) in &other.entries {
            self.insert(name.clone(), value.clone());
        }
        self
    }

    /// Look up a value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.entries.iter().find(|(existing, _)| existing == name).map(|(_, value)| value)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttributeValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of entries, including ones that will not render.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attributes = Self::new();
        for (name, value) in iter {
            attributes.insert(name, value);
        }
        attributes
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // serde_json is built with `preserve_order`, so the map keeps author order.
        let map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        Ok(map.into_iter().collect())
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Flag(flag) => serializer.serialize_bool(*flag),
            Self::Text(text) => serializer.serialize_str(text),
            Self::Null => serializer.serialize_none(),
        }
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// The two tags this crate emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagName {
    /// `<script ...></script>`
    Script,
    /// `<link ...>`
    Link,
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Script => "script",
            Self::Link => "link",
        })
    }
}

/// Serialize a tag with its attributes.
///
/// # Examples
///
/// ```
/// use vite_tags::html::{Attributes, TagName, render_tag};
///
/// let attributes = Attributes::new()
///     .with("type", "module")
///     .with("src", "/dist/main.js")
///     .with("defer", true)
///     .with("nomodule", false);
///
/// assert_eq!(
///     render_tag(TagName::Script, &attributes),
///     r#"<script type="module" src="/dist/main.js" defer></script>"#
/// );
/// ```
#[must_use]
pub fn render_tag(tag: TagName, attributes: &Attributes) -> String {
    let rendered: Vec<String> = attributes
        .iter()
        .filter_map(|(name, value)| match value {
            AttributeValue::Flag(true) => Some(name.to_string()),
            AttributeValue::Flag(false) | AttributeValue::Null => None,
            AttributeValue::Text(text) => Some(format!("{name}=\"{text}\"")),
        })
        .collect();

    let open = if rendered.is_empty() {
        format!("<{tag}")
    } else {
        format!("<{tag} {}", rendered.join(" "))
    };

    match tag {
        TagName::Script => format!("{open}></script>"),
        TagName::Link => format!("{open}>"),
    }
}
