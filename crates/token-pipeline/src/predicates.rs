//! Entity predicates
//!
//! Pure, independent checks over a [`TokenEntity`]. None of them panic on
//! missing or malformed fields; they simply return `false`.

use crate::error::{Result, TokenError};
use token_color::is_parseable;
use token_model::{fields, TokenEntity, COLOR_TYPE, DEFAULT_PRIVATE_MARKER};

/// Check if the entity is a color token
pub fn is_color_type(entity: &TokenEntity) -> bool {
    entity.kind() == Some(COLOR_TYPE)
}

/// Check if the entity has usable light and dark values
pub fn is_semantic_color(entity: &TokenEntity) -> bool {
    match (&entity.value, &entity.dark_value) {
        (Some(value), Some(dark_value)) => is_parseable(value) && is_parseable(dark_value),
        _ => false,
    }
}

/// Check if the entity has a usable light value and no dark value
pub fn is_single_mode_color(entity: &TokenEntity) -> bool {
    !entity.declares_dark_value() && entity.value.as_ref().is_some_and(is_parseable)
}

/// Check if the entity name carries the default private marker
pub fn is_private_color(entity: &TokenEntity) -> bool {
    is_private_color_with(entity, DEFAULT_PRIVATE_MARKER)
}

/// Check if the entity name starts with `marker` (case-sensitive)
pub fn is_private_color_with(entity: &TokenEntity, marker: &str) -> bool {
    entity.name().is_some_and(|name| name.starts_with(marker))
}

/// Check that `name` and `type` are present
pub fn has_required_fields(entity: &TokenEntity) -> Result<()> {
    if entity.name.is_none() {
        return Err(TokenError::MissingRequiredField(fields::NAME));
    }
    if entity.kind.is_none() {
        return Err(TokenError::MissingRequiredField(fields::TYPE));
    }
    Ok(())
}
