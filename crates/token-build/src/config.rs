//! Build configuration
//!
//! A [`BuildConfig`] can be assembled in code with chained setters or loaded
//! from a JSON file; the CLI layers its flags on top of either.

use crate::error::{BuildError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use token_pipeline::{CategoryKind, PipelineConfig};

/// Token build configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BuildConfig {
    /// Token export to read
    pub input: PathBuf,
    /// Directory receiving one JSON file per category
    pub out_dir: PathBuf,
    /// Categories to emit
    pub categories: Vec<CategoryKind>,
    /// Pipeline settings
    pub pipeline: PipelineConfig,
    /// Fail the build when any entity is skipped
    pub strict: bool,
    /// Pretty-print output JSON
    pub pretty: bool,
    /// Optional path for a JSON build report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("tokens.json"),
            out_dir: PathBuf::from("build/tokens"),
            categories: vec![CategoryKind::InternalColor],
            pipeline: PipelineConfig::default(),
            strict: false,
            pretty: true,
            report: None,
        }
    }
}

impl BuildConfig {
    /// Create a configuration for an input file
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            ..Default::default()
        }
    }

    /// Load a configuration file
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| BuildError::io(path, e))?;
        let config: BuildConfig = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the output directory
    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Set the categories to emit
    pub fn categories(mut self, categories: impl IntoIterator<Item = CategoryKind>) -> Self {
        self.categories = categories.into_iter().collect();
        self
    }

    /// Set the pipeline configuration
    pub fn pipeline(mut self, pipeline: PipelineConfig) -> Self {
        self.pipeline = pipeline;
        self
    }

    /// Enable or disable strict mode
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Enable or disable pretty output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Set the build report path
    pub fn report(mut self, path: impl Into<PathBuf>) -> Self {
        self.report = Some(path.into());
        self
    }

    /// Check the configuration for obvious mistakes
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(BuildError::Config("no categories selected".to_string()));
        }
        if self.pipeline.marker.is_empty() {
            return Err(BuildError::Config("private marker must not be empty".to_string()));
        }
        let mut seen = Vec::with_capacity(self.categories.len());
        for kind in &self.categories {
            if seen.contains(kind) {
                return Err(BuildError::Config(format!("category {} listed twice", kind)));
            }
            seen.push(*kind);
        }
        Ok(())
    }
}
