//! Token data model
//!
//! This crate defines the records that flow through the token pipeline:
//! - [`TokenEntity`] - a design token as exported by the upstream source
//! - [`NormalizedToken`] - a token ready for per-platform code generation
//!
//! Both types keep every field they do not understand in an order-preserving
//! `extra` map, so unknown upstream fields survive a round trip.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity;
pub mod normalized;

pub use entity::TokenEntity;
pub use normalized::NormalizedToken;

/// Input discriminator for color tokens
pub const COLOR_TYPE: &str = "color";

/// Output discriminator for private semantic colors
pub const INTERNAL_COLOR_TYPE: &str = "internalColor";

/// Output discriminator for public semantic colors
pub const SEMANTIC_COLOR_TYPE: &str = "semanticColor";

/// Output discriminator for single-mode colors
pub const STATIC_COLOR_TYPE: &str = "staticColor";

/// Name prefix that marks a token as private
pub const DEFAULT_PRIVATE_MARKER: &str = "private";

/// Field names used by the token export
pub mod fields {
    /// Token identifier
    pub const NAME: &str = "name";
    /// Category discriminator
    pub const TYPE: &str = "type";
    /// Light-mode value
    pub const VALUE: &str = "value";
    /// Dark-mode value
    pub const DARK_VALUE: &str = "darkValue";
    /// Light-mode hex string (output only)
    pub const HEX: &str = "hex";
    /// Dark-mode hex string (output only)
    pub const DARK_HEX: &str = "darkHex";
}
