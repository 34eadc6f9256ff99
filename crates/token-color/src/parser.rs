//! Color value parser
//!
//! Converts a [`RawColorValue`] (or a JSON value holding one) into a
//! [`ParsedColor`]. The parser re-validates everything it is given, so it is
//! safe to call on values that never went through an upstream filter.

use crate::parsed::{alpha_byte, channel_byte, ParsedColor};
use crate::raw::RawColorValue;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors that can occur while parsing a color value
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// Empty or whitespace-only string
    #[error("Empty color value")]
    Empty,

    /// Malformed hex literal
    #[error("Invalid hex color: {0}")]
    InvalidHex(String),

    /// Malformed rgb()/rgba() expression
    #[error("Invalid color function: {0}")]
    InvalidFunction(String),

    /// String that is neither hex, a color function, nor a known name
    #[error("Unknown color name: {0}")]
    UnknownName(String),

    /// Channel value outside its allowed range
    #[error("Channel {channel} out of range: {value}")]
    ChannelOutOfRange {
        /// Channel name (r, g, b or a)
        channel: &'static str,
        /// Offending value
        value: f64,
    },

    /// Value that is neither a channel object nor a string
    #[error("Unsupported color value: {0}")]
    UnsupportedShape(String),
}

/// Result type for color parsing
pub type Result<T> = std::result::Result<T, ColorError>;

/// Parse a raw color value
pub fn parse_color(raw: &RawColorValue) -> Result<ParsedColor> {
    match raw {
        RawColorValue::Channels(channels) => ParsedColor::try_from(*channels),
        RawColorValue::Literal(s) => parse_color_str(s),
    }
}

/// Parse a color straight from a JSON value
pub fn parse_color_json(value: &Value) -> Result<ParsedColor> {
    parse_color(&RawColorValue::from_json(value)?)
}

/// Check if a JSON value holds a parseable color
pub fn is_parseable(value: &Value) -> bool {
    parse_color_json(value).is_ok()
}

/// Parse a color string literal
pub fn parse_color_str(input: &str) -> Result<ParsedColor> {
    let s = input.trim();
    if s.is_empty() {
        return Err(ColorError::Empty);
    }

    if let Some(hex) = s.strip_prefix('#') {
        return parse_hex(hex);
    }

    let lower = s.to_ascii_lowercase();
    if lower.starts_with("rgb") {
        return parse_rgb_function(s);
    }

    named_color(&lower).ok_or_else(|| ColorError::UnknownName(s.to_string()))
}

/// Parse the digits of a hex color (without the leading `#`)
fn parse_hex(hex: &str) -> Result<ParsedColor> {
    let invalid = || ColorError::InvalidHex(format!("#{}", hex));

    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let nibble = |i: usize| {
        u8::from_str_radix(&hex[i..i + 1], 16)
            .map(|v| v * 17)
            .map_err(|_| invalid())
    };
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| invalid());

    match hex.len() {
        // #RGB
        3 => Ok(ParsedColor::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
        // #RGBA
        4 => Ok(ParsedColor::rgba(nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?)),
        // #RRGGBB
        6 => Ok(ParsedColor::rgb(byte(0)?, byte(2)?, byte(4)?)),
        // #RRGGBBAA
        8 => Ok(ParsedColor::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => Err(invalid()),
    }
}

fn rgb_function_regex() -> &'static Regex {
    static RGB_REGEX: OnceLock<Regex> = OnceLock::new();
    RGB_REGEX.get_or_init(|| {
        // Matches rgb(...) and rgba(...), capturing the argument list
        Regex::new(r"(?i)^rgba?\(\s*([^()]*?)\s*\)$").unwrap()
    })
}

/// Parse `rgb()` or `rgba()`
///
/// Arguments may be separated by commas or whitespace, with an optional `/`
/// before the alpha. Alpha is either 0-1 or a percentage.
fn parse_rgb_function(s: &str) -> Result<ParsedColor> {
    let invalid = || ColorError::InvalidFunction(s.to_string());

    let caps = rgb_function_regex().captures(s).ok_or_else(invalid)?;
    let args = caps.get(1).map(|m| m.as_str()).unwrap_or_default();

    let parts: Vec<&str> = args
        .split(|c: char| c == ',' || c == '/' || c.is_whitespace())
        .filter(|p| !p.is_empty())
        .collect();

    if parts.len() != 3 && parts.len() != 4 {
        return Err(invalid());
    }

    let channel = |name: &'static str, part: &str| -> Result<u8> {
        let value = part.parse::<f64>().map_err(|_| invalid())?;
        channel_byte(name, value)
    };

    let r = channel("r", parts[0])?;
    let g = channel("g", parts[1])?;
    let b = channel("b", parts[2])?;

    let a = match parts.get(3) {
        Some(part) => {
            let value = match part.strip_suffix('%') {
                Some(pct) => pct.parse::<f64>().map_err(|_| invalid())? / 100.0,
                None => part.parse::<f64>().map_err(|_| invalid())?,
            };
            alpha_byte(value)?
        }
        None => 255,
    };

    Ok(ParsedColor::rgba(r, g, b, a))
}

/// Look up a CSS basic color keyword (already lowercased)
fn named_color(name: &str) -> Option<ParsedColor> {
    let color = match name {
        "transparent" => ParsedColor::rgba(0, 0, 0, 0),
        "black" => ParsedColor::rgb(0, 0, 0),
        "white" => ParsedColor::rgb(255, 255, 255),
        "red" => ParsedColor::rgb(255, 0, 0),
        "green" => ParsedColor::rgb(0, 128, 0),
        "blue" => ParsedColor::rgb(0, 0, 255),
        "yellow" => ParsedColor::rgb(255, 255, 0),
        "cyan" | "aqua" => ParsedColor::rgb(0, 255, 255),
        "magenta" | "fuchsia" => ParsedColor::rgb(255, 0, 255),
        "gray" | "grey" => ParsedColor::rgb(128, 128, 128),
        "silver" => ParsedColor::rgb(192, 192, 192),
        "maroon" => ParsedColor::rgb(128, 0, 0),
        "olive" => ParsedColor::rgb(128, 128, 0),
        "lime" => ParsedColor::rgb(0, 255, 0),
        "teal" => ParsedColor::rgb(0, 128, 128),
        "navy" => ParsedColor::rgb(0, 0, 128),
        "purple" => ParsedColor::rgb(128, 0, 128),
        "orange" => ParsedColor::rgb(255, 165, 0),
        "pink" => ParsedColor::rgb(255, 192, 203),
        _ => return None,
    };
    Some(color)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raw::ColorChannels;
    use serde_json::json;

    // ==========================================================================
    // Hex Tests
    // ==========================================================================

    #[test]
    fn test_parse_hex_long() {
        assert_eq!(parse_color_str("#5A489B"), Ok(ParsedColor::rgb(90, 72, 155)));
        assert_eq!(parse_color_str("#ff9400"), Ok(ParsedColor::rgb(255, 148, 0)));
        assert_eq!(parse_color_str("  #000000 "), Ok(ParsedColor::rgb(0, 0, 0)));
    }

    #[test]
    fn test_parse_hex_short() {
        assert_eq!(parse_color_str("#FFF"), Ok(ParsedColor::rgb(255, 255, 255)));
        assert_eq!(parse_color_str("#0F08"), Ok(ParsedColor::rgba(0, 255, 0, 136)));
    }

    #[test]
    fn test_parse_hex_with_alpha() {
        assert_eq!(parse_color_str("#00000033"), Ok(ParsedColor::rgba(0, 0, 0, 51)));
    }

    #[test]
    fn test_parse_hex_invalid() {
        assert_eq!(
            parse_color_str("#GG0000"),
            Err(ColorError::InvalidHex("#GG0000".to_string()))
        );
        assert!(matches!(parse_color_str("#12345"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(parse_color_str("#"), Err(ColorError::InvalidHex(_))));
        assert!(matches!(parse_color_str("#ÀÀÀ"), Err(ColorError::InvalidHex(_))));
    }

    #[test]
    fn test_equivalent_spellings_compare_equal() {
        assert_eq!(parse_color_str("#FFF"), parse_color_str("#ffffff"));
        assert_eq!(parse_color_str("white"), parse_color_str("rgb(255, 255, 255)"));
    }

    // ==========================================================================
    // Function Tests
    // ==========================================================================

    #[test]
    fn test_parse_rgb_function() {
        assert_eq!(
            parse_color_str("rgb(90, 72, 155)"),
            Ok(ParsedColor::rgb(90, 72, 155))
        );
        assert_eq!(parse_color_str("RGB(0 0 0)"), Ok(ParsedColor::rgb(0, 0, 0)));
    }

    #[test]
    fn test_parse_rgba_function() {
        assert_eq!(
            parse_color_str("rgba(0, 0, 0, 0.2)"),
            Ok(ParsedColor::rgba(0, 0, 0, 51))
        );
        assert_eq!(
            parse_color_str("rgba(255 148 0 / 50%)"),
            Ok(ParsedColor::rgba(255, 148, 0, 128))
        );
    }

    #[test]
    fn test_parse_rgb_function_invalid() {
        assert!(matches!(
            parse_color_str("rgb(1, 2)"),
            Err(ColorError::InvalidFunction(_))
        ));
        assert!(matches!(
            parse_color_str("rgb(a, b, c)"),
            Err(ColorError::InvalidFunction(_))
        ));
        assert!(matches!(
            parse_color_str("rgb(1, 2, 3"),
            Err(ColorError::InvalidFunction(_))
        ));
        assert_eq!(
            parse_color_str("rgb(300, 0, 0)"),
            Err(ColorError::ChannelOutOfRange { channel: "r", value: 300.0 })
        );
    }

    // ==========================================================================
    // Named Color Tests
    // ==========================================================================

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(parse_color_str("black"), Ok(ParsedColor::rgb(0, 0, 0)));
        assert_eq!(parse_color_str("White"), Ok(ParsedColor::rgb(255, 255, 255)));
        assert_eq!(parse_color_str("transparent"), Ok(ParsedColor::rgba(0, 0, 0, 0)));
        assert_eq!(parse_color_str("grey"), parse_color_str("gray"));
    }

    #[test]
    fn test_parse_unknown_name() {
        assert_eq!(
            parse_color_str("not-a-color"),
            Err(ColorError::UnknownName("not-a-color".to_string()))
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse_color_str(""), Err(ColorError::Empty));
        assert_eq!(parse_color_str("   "), Err(ColorError::Empty));
    }

    // ==========================================================================
    // Raw Value Tests
    // ==========================================================================

    #[test]
    fn test_parse_color_channels() {
        let raw = RawColorValue::Channels(ColorChannels::rgb(90.0, 72.0, 155.0));
        assert_eq!(parse_color(&raw), Ok(ParsedColor::rgb(90, 72, 155)));
    }

    #[test]
    fn test_parse_color_json() {
        assert_eq!(
            parse_color_json(&json!("#5A489B")),
            Ok(ParsedColor::rgb(90, 72, 155))
        );
        assert_eq!(
            parse_color_json(&json!({ "r": 0, "g": 0, "b": 0, "a": 0 })),
            Ok(ParsedColor::rgba(0, 0, 0, 0))
        );
        assert!(parse_color_json(&json!(true)).is_err());
    }

    #[test]
    fn test_is_parseable() {
        assert!(is_parseable(&json!("#000000")));
        assert!(!is_parseable(&json!("")));
        assert!(!is_parseable(&json!("not-a-color")));
        assert!(!is_parseable(&json!(null)));
        assert!(!is_parseable(&json!(7)));
    }
}
