//! Color value parsing for design tokens
//!
//! This crate turns the loosely typed color values found in a design-token
//! export into a normalized [`ParsedColor`].
//!
//! # Accepted inputs
//!
//! A raw value is either a structured channel object or a string literal:
//! - `{ "r": 90, "g": 72, "b": 155, "a": 1 }` - channels 0-255, alpha 0-1
//! - `"#5A489B"`, `"#5A4"`, `"#5A489B80"` - hex literals
//! - `"rgb(90, 72, 155)"`, `"rgba(90 72 155 / 50%)"` - functional syntax
//! - `"white"`, `"transparent"` - CSS basic named colors
//!
//! # Example
//!
//! ```rust
//! use token_color::{parse_color, ParsedColor, RawColorValue};
//!
//! let raw = RawColorValue::Literal("#5A489B".to_string());
//! let color = parse_color(&raw).unwrap();
//! assert_eq!(color, ParsedColor::rgb(90, 72, 155));
//! assert_eq!(color.to_rgb_string(), "rgb(90, 72, 155)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod parsed;
pub mod parser;
pub mod raw;

pub use parsed::ParsedColor;
pub use parser::{
    is_parseable, parse_color, parse_color_json, parse_color_str, ColorError, Result,
};
pub use raw::{ColorChannels, RawColorValue};
