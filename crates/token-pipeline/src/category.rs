//! Token categories
//!
//! A category pairs a filter with a normalizer. The pipeline driver runs any
//! category the same way; adding a new kind of output token means adding a
//! new [`TokenCategory`] implementation.

use crate::config::PipelineConfig;
use crate::error::{Result, TokenError};
use crate::normalizer::{
    lowercase_first, normalize_semantic, normalize_single_mode, normalize_with, parse_field,
    required_name,
};
use crate::predicates::{
    is_color_type, is_private_color_with, is_semantic_color, is_single_mode_color,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use token_model::{
    fields, NormalizedToken, TokenEntity, INTERNAL_COLOR_TYPE, SEMANTIC_COLOR_TYPE,
    STATIC_COLOR_TYPE,
};

/// A filter and normalizer pair for one kind of output token
pub trait TokenCategory: Send + Sync {
    /// Which category this is
    fn kind(&self) -> CategoryKind;

    /// Check if the entity belongs to this category
    fn accepts(&self, entity: &TokenEntity) -> bool;

    /// Explain why a near-miss entity was rejected
    ///
    /// Returns an error for entities that were clearly meant for this
    /// category but are malformed. Entities that simply belong elsewhere
    /// return `None` and are dropped silently.
    fn diagnose(&self, entity: &TokenEntity) -> Option<TokenError>;

    /// Normalize an accepted entity
    fn normalize(&self, entity: &TokenEntity) -> Result<NormalizedToken>;

    /// Output discriminator written to normalized tokens
    fn output_type(&self) -> &'static str {
        self.kind().output_type()
    }
}

/// Identifies a built-in category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryKind {
    /// Private colors with light and dark values
    InternalColor,
    /// Public colors with light and dark values
    SemanticColor,
    /// Public colors with a single value
    StaticColor,
}

impl CategoryKind {
    /// All built-in categories
    pub fn all() -> [CategoryKind; 3] {
        [
            CategoryKind::InternalColor,
            CategoryKind::SemanticColor,
            CategoryKind::StaticColor,
        ]
    }

    /// Output discriminator for this category
    pub fn output_type(&self) -> &'static str {
        match self {
            CategoryKind::InternalColor => INTERNAL_COLOR_TYPE,
            CategoryKind::SemanticColor => SEMANTIC_COLOR_TYPE,
            CategoryKind::StaticColor => STATIC_COLOR_TYPE,
        }
    }

    /// Stable identifier, also used for output file names
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::InternalColor => "internal-color",
            CategoryKind::SemanticColor => "semantic-color",
            CategoryKind::StaticColor => "static-color",
        }
    }

    /// Build the category implementation
    pub fn build(&self, config: &PipelineConfig) -> Box<dyn TokenCategory> {
        match self {
            CategoryKind::InternalColor => Box::new(InternalColors::new(config.clone())),
            CategoryKind::SemanticColor => Box::new(SemanticColors::new(config.clone())),
            CategoryKind::StaticColor => Box::new(StaticColors::new(config.clone())),
        }
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CategoryKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "internal-color" | "internalcolor" => Ok(CategoryKind::InternalColor),
            "semantic-color" | "semanticcolor" => Ok(CategoryKind::SemanticColor),
            "static-color" | "staticcolor" => Ok(CategoryKind::StaticColor),
            _ => Err(format!("Unknown category: {}", s)),
        }
    }
}

/// First parse error among the entity's declared color fields
fn color_error(entity: &TokenEntity) -> Option<TokenError> {
    if let Err(err) = parse_field(entity.value.as_ref(), fields::VALUE) {
        return Some(err);
    }
    if entity.declares_dark_value() {
        if let Err(err) = parse_field(entity.dark_value.as_ref(), fields::DARK_VALUE) {
            return Some(err);
        }
    }
    None
}

// =============================================================================
// Internal Colors
// =============================================================================

/// Private semantic colors, emitted as `internalColor`
#[derive(Debug, Clone, Default)]
pub struct InternalColors {
    config: PipelineConfig,
}

impl InternalColors {
    /// Create the category
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }
}

impl TokenCategory for InternalColors {
    fn kind(&self) -> CategoryKind {
        CategoryKind::InternalColor
    }

    fn accepts(&self, entity: &TokenEntity) -> bool {
        is_color_type(entity)
            && is_semantic_color(entity)
            && is_private_color_with(entity, &self.config.marker)
    }

    fn diagnose(&self, entity: &TokenEntity) -> Option<TokenError> {
        let candidate = is_color_type(entity)
            && is_private_color_with(entity, &self.config.marker)
            && entity.declares_value()
            && entity.declares_dark_value();
        if candidate {
            color_error(entity)
        } else {
            None
        }
    }

    fn normalize(&self, entity: &TokenEntity) -> Result<NormalizedToken> {
        normalize_with(entity, &self.config)
    }
}

// =============================================================================
// Semantic Colors
// =============================================================================

/// Public semantic colors, emitted as `semanticColor`
#[derive(Debug, Clone, Default)]
pub struct SemanticColors {
    config: PipelineConfig,
}

impl SemanticColors {
    /// Create the category
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }
}

impl TokenCategory for SemanticColors {
    fn kind(&self) -> CategoryKind {
        CategoryKind::SemanticColor
    }

    fn accepts(&self, entity: &TokenEntity) -> bool {
        is_color_type(entity)
            && is_semantic_color(entity)
            && !is_private_color_with(entity, &self.config.marker)
    }

    fn diagnose(&self, entity: &TokenEntity) -> Option<TokenError> {
        let candidate = is_color_type(entity)
            && !is_private_color_with(entity, &self.config.marker)
            && entity.declares_value()
            && entity.declares_dark_value();
        if candidate {
            color_error(entity)
        } else {
            None
        }
    }

    fn normalize(&self, entity: &TokenEntity) -> Result<NormalizedToken> {
        let name = lowercase_first(required_name(entity)?);
        normalize_semantic(entity, name, self.output_type())
    }
}

// =============================================================================
// Static Colors
// =============================================================================

/// Public single-mode colors, emitted as `staticColor`
#[derive(Debug, Clone, Default)]
pub struct StaticColors {
    config: PipelineConfig,
}

impl StaticColors {
    /// Create the category
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }
}

impl TokenCategory for StaticColors {
    fn kind(&self) -> CategoryKind {
        CategoryKind::StaticColor
    }

    fn accepts(&self, entity: &TokenEntity) -> bool {
        is_color_type(entity)
            && is_single_mode_color(entity)
            && !is_private_color_with(entity, &self.config.marker)
    }

    fn diagnose(&self, entity: &TokenEntity) -> Option<TokenError> {
        let candidate = is_color_type(entity)
            && !is_private_color_with(entity, &self.config.marker)
            && entity.declares_value()
            && !entity.declares_dark_value();
        if candidate {
            color_error(entity)
        } else {
            None
        }
    }

    fn normalize(&self, entity: &TokenEntity) -> Result<NormalizedToken> {
        let name = lowercase_first(required_name(entity)?);
        normalize_single_mode(entity, name, self.output_type())
    }
}
