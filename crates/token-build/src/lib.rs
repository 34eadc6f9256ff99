//! Build tooling around the token pipeline
//!
//! This crate does the I/O the pipeline itself never does: it loads a
//! design-token export, runs the configured categories, reports skipped
//! entities, and writes one normalized JSON file per category for the
//! per-platform code generators.
//!
//! # Modules
//!
//! - [`config`] - build configuration (file and builder)
//! - [`loader`] - token export parsing
//! - [`writer`] - normalized output files
//! - [`runner`] - the end-to-end build and its report
//! - [`logging`] - tracing subscriber setup
//! - [`cli`] - command-line flags for the `token-build` binary

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;
pub mod runner;
pub mod writer;

pub use config::BuildConfig;
pub use error::{BuildError, Result};
pub use loader::{load_tokens, parse_tokens};
pub use logging::{init_logging, LogFormat};
pub use runner::{process_entities, run_build, BuildReport, CategorySummary, SkipRecord};
pub use writer::{output_path, render_tokens, write_category};
