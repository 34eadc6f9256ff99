//! Raw color values as they appear in a token export
//!
//! Token sources are loosely typed: the same field may hold a hex string in
//! one entity and a channel object in the next. [`RawColorValue`] makes the
//! two shapes explicit so the parser can handle both exhaustively.

use crate::parsed::ParsedColor;
use crate::parser::{ColorError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Channel data for a color supplied as a structured object
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorChannels {
    /// Red channel (0-255)
    #[serde(alias = "red")]
    pub r: f64,
    /// Green channel (0-255)
    #[serde(alias = "green")]
    pub g: f64,
    /// Blue channel (0-255)
    #[serde(alias = "blue")]
    pub b: f64,
    /// Alpha channel (0-1)
    #[serde(alias = "alpha", default = "default_alpha")]
    pub a: f64,
}

fn default_alpha() -> f64 {
    1.0
}

impl ColorChannels {
    /// Create opaque channels
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create channels with alpha
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Channels rounded and clamped to bytes, alpha scaled to 0-255
    fn clamped_bytes(&self) -> [u8; 4] {
        let clamp = |v: f64| {
            if v.is_finite() {
                v.round().clamp(0.0, 255.0) as u8
            } else {
                0
            }
        };
        let alpha = if self.a.is_finite() {
            (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
        } else {
            255
        };
        [clamp(self.r), clamp(self.g), clamp(self.b), alpha]
    }
}

impl From<ParsedColor> for ColorChannels {
    fn from(color: ParsedColor) -> Self {
        Self {
            r: f64::from(color.r),
            g: f64::from(color.g),
            b: f64::from(color.b),
            a: (f64::from(color.a) / 255.0 * 1000.0).round() / 1000.0,
        }
    }
}

/// A color value before parsing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawColorValue {
    /// Structured object with numeric channels
    Channels(ColorChannels),
    /// String literal (hex, rgb() function, or color name)
    Literal(String),
}

impl RawColorValue {
    /// Interpret a JSON value as a raw color
    ///
    /// Strings become [`RawColorValue::Literal`] without any validation;
    /// objects must carry `r`, `g` and `b`. Every other JSON shape is rejected.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(RawColorValue::Literal(s.clone())),
            Value::Object(_) => serde_json::from_value::<ColorChannels>(value.clone())
                .map(RawColorValue::Channels)
                .map_err(|e| ColorError::UnsupportedShape(e.to_string())),
            Value::Null => Err(ColorError::UnsupportedShape("null".to_string())),
            Value::Bool(_) => Err(ColorError::UnsupportedShape("boolean".to_string())),
            Value::Number(n) => Err(ColorError::UnsupportedShape(format!("number {}", n))),
            Value::Array(_) => Err(ColorError::UnsupportedShape("array".to_string())),
        }
    }

    /// Check if this is a string literal
    pub fn is_literal(&self) -> bool {
        matches!(self, RawColorValue::Literal(_))
    }
}

impl From<&str> for RawColorValue {
    fn from(s: &str) -> Self {
        RawColorValue::Literal(s.to_string())
    }
}

impl From<ColorChannels> for RawColorValue {
    fn from(channels: ColorChannels) -> Self {
        RawColorValue::Channels(channels)
    }
}

/// The raw value's natural string form
///
/// Literals print exactly as written upstream. Channel objects have no
/// upstream spelling and print as uppercase hex.
impl fmt::Display for RawColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawColorValue::Literal(s) => f.write_str(s),
            RawColorValue::Channels(channels) => {
                let [r, g, b, a] = channels.clamped_bytes();
                if a == 255 {
                    write!(f, "#{:02X}{:02X}{:02X}", r, g, b)
                } else {
                    write!(f, "#{:02X}{:02X}{:02X}{:02X}", r, g, b, a)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ==========================================================================
    // JSON Interpretation Tests
    // ==========================================================================

    #[test]
    fn test_from_json_string() {
        let raw = RawColorValue::from_json(&json!("#FF9400")).unwrap();
        assert_eq!(raw, RawColorValue::Literal("#FF9400".to_string()));
        assert!(raw.is_literal());
    }

    #[test]
    fn test_from_json_channels() {
        let raw = RawColorValue::from_json(&json!({ "r": 90, "g": 72, "b": 155 })).unwrap();
        assert_eq!(raw, RawColorValue::Channels(ColorChannels::rgb(90.0, 72.0, 155.0)));
    }

    #[test]
    fn test_from_json_channel_aliases() {
        let raw =
            RawColorValue::from_json(&json!({ "red": 1, "green": 2, "blue": 3, "alpha": 0.5 }))
                .unwrap();
        assert_eq!(raw, RawColorValue::Channels(ColorChannels::rgba(1.0, 2.0, 3.0, 0.5)));
    }

    #[test]
    fn test_from_json_rejects_other_shapes() {
        assert!(matches!(
            RawColorValue::from_json(&json!(42)),
            Err(ColorError::UnsupportedShape(_))
        ));
        assert!(matches!(
            RawColorValue::from_json(&json!(null)),
            Err(ColorError::UnsupportedShape(_))
        ));
        assert!(matches!(
            RawColorValue::from_json(&json!(["#FFF"])),
            Err(ColorError::UnsupportedShape(_))
        ));
        assert!(matches!(
            RawColorValue::from_json(&json!({ "hue": 120 })),
            Err(ColorError::UnsupportedShape(_))
        ));
    }

    // ==========================================================================
    // Display Tests
    // ==========================================================================

    #[test]
    fn test_literal_display_is_verbatim() {
        assert_eq!(RawColorValue::from("#ff9400").to_string(), "#ff9400");
        assert_eq!(RawColorValue::from("rgb(0 0 0)").to_string(), "rgb(0 0 0)");
    }

    #[test]
    fn test_channels_display_as_hex() {
        let opaque = RawColorValue::from(ColorChannels::rgb(90.0, 72.0, 155.0));
        assert_eq!(opaque.to_string(), "#5A489B");

        let translucent = RawColorValue::from(ColorChannels::rgba(0.0, 0.0, 0.0, 0.2));
        assert_eq!(translucent.to_string(), "#00000033");
    }

    #[test]
    fn test_channels_from_parsed_color() {
        let channels = ColorChannels::from(ParsedColor::rgba(255, 148, 0, 128));
        assert_eq!(channels.r, 255.0);
        assert_eq!(channels.g, 148.0);
        assert_eq!(channels.b, 0.0);
        assert_eq!(channels.a, 0.502);
    }
}
