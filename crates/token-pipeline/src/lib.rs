//! Design-token transformation pipeline
//!
//! This crate filters a flat list of exported design tokens and rewrites the
//! ones that belong to a category into normalized tokens for code generation.
//!
//! # Stages
//!
//! - [`predicates`] - pure checks: color type, semantic, private
//! - [`normalizer`] - name rewrite, color parsing, output discriminator
//! - [`category`] - predicate/normalizer pairs for each output token kind
//! - [`pipeline`] - the filter and normalize driver
//!
//! # Example
//!
//! ```rust
//! use token_model::TokenEntity;
//! use token_pipeline::process_internal_colors;
//!
//! let entities = vec![
//!     TokenEntity::color("privateAbisko", "#5A489B").with_dark_value("#5A489B"),
//!     TokenEntity::color("publicFoo", "#000000"),
//! ];
//!
//! let tokens = process_internal_colors(&entities);
//! assert_eq!(tokens.len(), 1);
//! assert_eq!(tokens[0].name, "abisko");
//! assert_eq!(tokens[0].kind, "internalColor");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod config;
pub mod error;
pub mod normalizer;
pub mod pipeline;
pub mod predicates;

pub use category::{CategoryKind, InternalColors, SemanticColors, StaticColors, TokenCategory};
pub use config::{MarkerStrip, PipelineConfig};
pub use error::{ErrorKind, Result, SkippedEntity, TokenError};
pub use normalizer::{lowercase_first, normalize, normalize_with, strip_marker};
pub use pipeline::{
    filter_entities, normalize_entities, process_internal_colors,
    process_internal_colors_with_report, FilterOutcome, Pipeline, PipelineReport,
};
pub use predicates::{
    has_required_fields, is_color_type, is_private_color, is_private_color_with,
    is_semantic_color, is_single_mode_color,
};
