//! Token normalizer
//!
//! Rewrites a filtered entity into a [`NormalizedToken`]: output name,
//! parsed color values, upstream hex strings, and the output discriminator.
//! Callers are expected to have run the entity through the category's
//! predicates first, but every field is re-validated here.

use crate::config::{MarkerStrip, PipelineConfig};
use crate::error::{Result, TokenError};
use serde_json::{Map, Value};
use token_color::{parse_color, ParsedColor, RawColorValue};
use token_model::{fields, NormalizedToken, TokenEntity, INTERNAL_COLOR_TYPE};

/// Remove the private marker from a name
pub fn strip_marker(name: &str, marker: &str, mode: MarkerStrip) -> String {
    match mode {
        MarkerStrip::FirstOccurrence => name.replacen(marker, "", 1),
        MarkerStrip::Prefix => name.strip_prefix(marker).unwrap_or(name).to_string(),
    }
}

/// Lowercase the first character
pub fn lowercase_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Output identifier for a private token
pub fn private_output_name(name: &str, config: &PipelineConfig) -> String {
    lowercase_first(&strip_marker(name, &config.marker, config.marker_strip))
}

/// Normalize a private semantic color with the default configuration
pub fn normalize(entity: &TokenEntity) -> Result<NormalizedToken> {
    normalize_with(entity, &PipelineConfig::default())
}

/// Normalize a private semantic color
pub fn normalize_with(entity: &TokenEntity, config: &PipelineConfig) -> Result<NormalizedToken> {
    let name = required_name(entity)?;
    normalize_semantic(entity, private_output_name(name, config), INTERNAL_COLOR_TYPE)
}

/// Build a token that has both light and dark values
pub(crate) fn normalize_semantic(
    entity: &TokenEntity,
    name: String,
    output_type: &str,
) -> Result<NormalizedToken> {
    let name = non_empty(name)?;
    let (value, hex) = parse_field(entity.value.as_ref(), fields::VALUE)?;
    let (dark_value, dark_hex) = parse_field(entity.dark_value.as_ref(), fields::DARK_VALUE)?;

    Ok(NormalizedToken {
        name,
        kind: output_type.to_string(),
        value,
        dark_value: Some(dark_value),
        hex: upstream_string(entity, fields::HEX).unwrap_or(hex),
        dark_hex: Some(upstream_string(entity, fields::DARK_HEX).unwrap_or(dark_hex)),
        extra: pass_through_fields(entity),
    })
}

/// Build a token that only has a light value
pub(crate) fn normalize_single_mode(
    entity: &TokenEntity,
    name: String,
    output_type: &str,
) -> Result<NormalizedToken> {
    let name = non_empty(name)?;
    let (value, hex) = parse_field(entity.value.as_ref(), fields::VALUE)?;

    Ok(NormalizedToken {
        name,
        kind: output_type.to_string(),
        value,
        dark_value: None,
        hex: upstream_string(entity, fields::HEX).unwrap_or(hex),
        dark_hex: None,
        extra: pass_through_fields(entity),
    })
}

pub(crate) fn required_name(entity: &TokenEntity) -> Result<&str> {
    entity
        .name()
        .ok_or(TokenError::MissingRequiredField(fields::NAME))
}

fn non_empty(name: String) -> Result<String> {
    if name.is_empty() {
        return Err(TokenError::MissingRequiredField(fields::NAME));
    }
    Ok(name)
}

/// Parse a color field, returning the parsed color and the raw string form
///
/// The string comes from the raw value, not the parsed one, so upstream
/// spelling (`#ff9400`, `rgb(0 0 0)`) is kept verbatim.
pub(crate) fn parse_field(raw: Option<&Value>, field: &'static str) -> Result<(ParsedColor, String)> {
    let raw = raw
        .filter(|v| !v.is_null())
        .ok_or(TokenError::MissingRequiredField(field))?;
    let malformed = |source| TokenError::MalformedColorValue { field, source };

    let raw = RawColorValue::from_json(raw).map_err(malformed)?;
    let parsed = parse_color(&raw).map_err(malformed)?;
    Ok((parsed, raw.to_string()))
}

/// A string `hex`/`darkHex` already present on the entity
///
/// Upstream values win over the computed ones; anything that is not a string
/// is ignored.
fn upstream_string(entity: &TokenEntity, key: &str) -> Option<String> {
    entity.field(key).and_then(Value::as_str).map(str::to_string)
}

/// Fields carried over unchanged; `hex`/`darkHex` live in their own slots
fn pass_through_fields(entity: &TokenEntity) -> Map<String, Value> {
    entity
        .extra
        .iter()
        .filter(|(key, _)| key.as_str() != fields::HEX && key.as_str() != fields::DARK_HEX)
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
