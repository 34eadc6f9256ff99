//! Normalized color representation

use crate::parser::{parse_color_str, ColorError, Result};
use crate::raw::ColorChannels;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A parsed color with 8-bit channels
///
/// Two colors are equal when their normalized channels are equal, regardless
/// of how the source spelled them (`#FFF`, `#ffffff` and `white` compare equal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "ColorChannels", try_from = "ColorChannels")]
pub struct ParsedColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl ParsedColor {
    /// Create an opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color with alpha
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Check if fully opaque
    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// Get the alpha as a float (0.0 - 1.0)
    pub fn alpha_f32(&self) -> f32 {
        f32::from(self.a) / 255.0
    }

    /// Hex serialization, `#RRGGBB` or `#RRGGBBAA` when translucent
    pub fn to_hex(&self) -> String {
        if self.is_opaque() {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }

    /// CSS functional form, e.g. `rgb(90, 72, 155)`
    pub fn to_rgb_string(&self) -> String {
        if self.is_opaque() {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            format!(
                "rgba({}, {}, {}, {})",
                self.r,
                self.g,
                self.b,
                round3(f64::from(self.a) / 255.0)
            )
        }
    }

    /// Channels scaled to 0.0 - 1.0 and rounded to three decimals
    ///
    /// Generated constant tables embed colors in this form
    /// (`red: 0.353, green: 0.282, blue: 0.608, alpha: 1`).
    pub fn unit_channels(&self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a].map(|c| round3(f64::from(c) / 255.0))
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Convert a 0-255 channel to a byte
pub(crate) fn channel_byte(channel: &'static str, value: f64) -> Result<u8> {
    if !value.is_finite() || !(0.0..=255.0).contains(&value) {
        return Err(ColorError::ChannelOutOfRange { channel, value });
    }
    Ok(value.round() as u8)
}

/// Convert a 0-1 alpha to a byte
pub(crate) fn alpha_byte(value: f64) -> Result<u8> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ColorError::ChannelOutOfRange { channel: "a", value });
    }
    Ok((value * 255.0).round() as u8)
}

impl TryFrom<ColorChannels> for ParsedColor {
    type Error = ColorError;

    fn try_from(channels: ColorChannels) -> Result<Self> {
        Ok(Self::rgba(
            channel_byte("r", channels.r)?,
            channel_byte("g", channels.g)?,
            channel_byte("b", channels.b)?,
            alpha_byte(channels.a)?,
        ))
    }
}

impl FromStr for ParsedColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        parse_color_str(s)
    }
}

impl fmt::Display for ParsedColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
