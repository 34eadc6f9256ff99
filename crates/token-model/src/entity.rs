//! Token entities as exported by the design-token source

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// A single design token as exported upstream
///
/// Every field is optional at this layer: entities are checked for required
/// fields by the pipeline, not by deserialization, so that one bad entity
/// never prevents the rest of an export from loading.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenEntity {
    /// Token identifier, may carry the private marker
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub name: Option<String>,
    /// Category discriminator (e.g. "color")
    #[serde(
        rename = "type",
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<String>,
    /// Raw light-mode value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    /// Raw dark-mode value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_value: Option<Value>,
    /// All other fields, in source order
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Accept any JSON value, keeping only strings
///
/// A non-string `name` or `type` reads as absent, so the pipeline reports the
/// entity as missing that field instead of the whole export failing to load.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}

impl TokenEntity {
    /// Create an entity with a name and type
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            kind: Some(kind.into()),
            ..Default::default()
        }
    }

    /// Create a color entity with a light-mode value
    pub fn color(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(name, crate::COLOR_TYPE).with_value(value)
    }

    /// Set the light-mode value
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the dark-mode value
    pub fn with_dark_value(mut self, value: impl Into<Value>) -> Self {
        self.dark_value = Some(value.into());
        self
    }

    /// Add a pass-through field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Get the name
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the type discriminator
    pub fn kind(&self) -> Option<&str> {
        self.kind.as_deref()
    }

    /// Name for diagnostics, `<unnamed>` when absent
    pub fn display_name(&self) -> &str {
        self.name().unwrap_or("<unnamed>")
    }

    /// Check if a light-mode value is declared
    pub fn declares_value(&self) -> bool {
        self.value.as_ref().is_some_and(|v| !v.is_null())
    }

    /// Check if a dark-mode value is declared
    pub fn declares_dark_value(&self) -> bool {
        self.dark_value.as_ref().is_some_and(|v| !v.is_null())
    }

    /// Get a pass-through field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
