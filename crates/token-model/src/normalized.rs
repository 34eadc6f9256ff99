//! Normalized tokens consumed by code generators

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use token_color::ParsedColor;

/// A token after filtering and normalization
///
/// Built fresh by the pipeline; nothing in it borrows from or aliases the
/// input entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedToken {
    /// Output identifier (marker stripped, first letter lowercased)
    pub name: String,
    /// Output discriminator (e.g. "internalColor")
    #[serde(rename = "type")]
    pub kind: String,
    /// Parsed light-mode color
    pub value: ParsedColor,
    /// Parsed dark-mode color, absent for single-mode colors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_value: Option<ParsedColor>,
    /// Light-mode value in its upstream string form
    pub hex: String,
    /// Dark-mode value in its upstream string form
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dark_hex: Option<String>,
    /// Pass-through fields from the source entity, in source order
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NormalizedToken {
    /// Check if this token has a dark-mode variant
    pub fn is_semantic(&self) -> bool {
        self.dark_value.is_some()
    }

    /// Get a pass-through field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}
