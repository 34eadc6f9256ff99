//! Command-line flags for the `token-build` binary
//!
//! Flags override values loaded from `--config`; anything left unset falls
//! back to [`BuildConfig::default`].

use crate::config::BuildConfig;
use crate::error::Result;
use crate::logging::LogFormat;
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use token_pipeline::{CategoryKind, MarkerStrip};

/// Normalize design tokens for platform code generators
#[derive(Debug, Clone, Parser)]
#[command(name = "token-build", version)]
pub struct Cli {
    /// Token export to read
    #[arg(short, long, env = "TOKEN_BUILD_INPUT")]
    pub input: Option<PathBuf>,

    /// Directory for the normalized JSON files
    #[arg(short, long = "out-dir", env = "TOKEN_BUILD_OUT_DIR")]
    pub out_dir: Option<PathBuf>,

    /// JSON build configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Category to emit (repeatable): internal-color, semantic-color, static-color
    #[arg(short = 'k', long = "category")]
    pub categories: Vec<CategoryKind>,

    /// Name marker for private tokens
    #[arg(long)]
    pub marker: Option<String>,

    /// Only strip the marker when it starts the name
    #[arg(long)]
    pub anchored_marker: bool,

    /// Fail without writing outputs if any entity is skipped
    #[arg(long, conflicts_with = "no_strict")]
    pub strict: bool,

    /// Write outputs even if entities were skipped
    #[arg(long)]
    pub no_strict: bool,

    /// Write single-line JSON
    #[arg(long, conflicts_with = "pretty")]
    pub compact: bool,

    /// Write indented JSON
    #[arg(long)]
    pub pretty: bool,

    /// Write a JSON build report to this path
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

impl Cli {
    /// Layer command-line flags over a base configuration
    pub fn apply(&self, mut config: BuildConfig) -> BuildConfig {
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(out_dir) = &self.out_dir {
            config.out_dir = out_dir.clone();
        }
        if !self.categories.is_empty() {
            config.categories = self.categories.clone();
        }
        if let Some(marker) = &self.marker {
            config.pipeline.marker = marker.clone();
        }
        if self.anchored_marker {
            config.pipeline.marker_strip = MarkerStrip::Prefix;
        }
        if self.strict {
            config.strict = true;
        } else if self.no_strict {
            config.strict = false;
        }
        if self.compact {
            config.pretty = false;
        } else if self.pretty {
            config.pretty = true;
        }
        if let Some(report) = &self.report {
            config.report = Some(report.clone());
        }
        config
    }

    /// Build the effective configuration
    pub async fn resolve_config(&self) -> Result<BuildConfig> {
        let base = match &self.config {
            Some(path) => {
                tracing::debug!("Loading build configuration from {}", path.display());
                BuildConfig::load(path).await?
            }
            None => BuildConfig::default(),
        };
        let config = self.apply(base);
        config.validate()?;
        Ok(config)
    }
}
