//! Pipeline configuration

use serde::{Deserialize, Serialize};
use token_model::DEFAULT_PRIVATE_MARKER;

/// How the private marker is removed from a token name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerStrip {
    /// Remove the first occurrence anywhere in the name
    ///
    /// Names that passed the private check start with the marker, so this
    /// only differs from [`Prefix`] when a name is normalized without being
    /// filtered first: `"fooprivateBar"` becomes `"fooBar"`.
    ///
    /// [`Prefix`]: MarkerStrip::Prefix
    #[default]
    FirstOccurrence,
    /// Remove the marker only when the name starts with it
    Prefix,
}

/// Pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    /// Name prefix that marks a token as private
    pub marker: String,
    /// How the marker is removed from output names
    pub marker_strip: MarkerStrip,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            marker: DEFAULT_PRIVATE_MARKER.to_string(),
            marker_strip: MarkerStrip::FirstOccurrence,
        }
    }
}

impl PipelineConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the private marker
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    /// Set the marker strip mode
    pub fn marker_strip(mut self, mode: MarkerStrip) -> Self {
        self.marker_strip = mode;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_config() {
        let config = PipelineConfig::default();
        assert_eq!(config.marker, "private");
        assert_eq!(config.marker_strip, MarkerStrip::FirstOccurrence);
    }

    #[test]
    fn test_builder() {
        let config = PipelineConfig::new()
            .marker("internal")
            .marker_strip(MarkerStrip::Prefix);
        assert_eq!(config.marker, "internal");
        assert_eq!(config.marker_strip, MarkerStrip::Prefix);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: PipelineConfig =
            serde_json::from_value(json!({ "markerStrip": "prefix" })).unwrap();
        assert_eq!(config.marker, "private");
        assert_eq!(config.marker_strip, MarkerStrip::Prefix);
    }
}
