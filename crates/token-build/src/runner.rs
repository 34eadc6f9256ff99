//! End-to-end token build

use crate::config::BuildConfig;
use crate::error::{BuildError, Result};
use crate::loader::load_tokens;
use crate::writer::write_category;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use token_model::TokenEntity;
use token_pipeline::{CategoryKind, ErrorKind, Pipeline, PipelineReport};

/// A skipped entity, as reported to token authors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkipRecord {
    /// First category that reported the entity
    pub category: CategoryKind,
    /// Position in the token export
    pub index: usize,
    /// Entity name, if present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Error kind
    pub kind: ErrorKind,
    /// Human-readable reason
    pub message: String,
}

/// Per-category build outcome
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    /// Category
    pub category: CategoryKind,
    /// Tokens emitted
    pub tokens: usize,
    /// Entities skipped by this category
    pub skipped: usize,
    /// Output file, once written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

/// Outcome of a token build
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    /// Entities read from the export
    pub entities: usize,
    /// One summary per category, in configured order
    pub categories: Vec<CategorySummary>,
    /// Skipped entities, one record per entity and error
    pub skipped: Vec<SkipRecord>,
}

impl BuildReport {
    /// Collect the pipeline results of every category
    ///
    /// An entity missing its name is rejected by every category; it is
    /// recorded once, under the first category that reported it.
    pub fn from_results(entities: usize, results: &[(CategoryKind, PipelineReport)]) -> Self {
        let mut categories = Vec::with_capacity(results.len());
        let mut skipped = Vec::new();
        let mut seen: HashSet<(usize, String)> = HashSet::new();

        for (category, result) in results {
            categories.push(CategorySummary {
                category: *category,
                tokens: result.tokens.len(),
                skipped: result.skipped.len(),
                output: None,
            });

            for entity in &result.skipped {
                let message = entity.error.to_string();
                if seen.insert((entity.index, message.clone())) {
                    skipped.push(SkipRecord {
                        category: *category,
                        index: entity.index,
                        name: entity.name.clone(),
                        kind: entity.kind(),
                        message,
                    });
                }
            }
        }
        // stable, so records for one entity stay in category order
        skipped.sort_by_key(|r: &SkipRecord| r.index);

        Self {
            entities,
            categories,
            skipped,
        }
    }

    /// Remember where a category's output went
    pub fn set_output(&mut self, category: CategoryKind, path: PathBuf) {
        if let Some(summary) = self.categories.iter_mut().find(|s| s.category == category) {
            summary.output = Some(path);
        }
    }

    /// Check if no entity was skipped
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Total tokens across categories
    pub fn total_tokens(&self) -> usize {
        self.categories.iter().map(|s| s.tokens).sum()
    }

    /// Get a category's summary
    pub fn category(&self, category: CategoryKind) -> Option<&CategorySummary> {
        self.categories.iter().find(|s| s.category == category)
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        let parts: Vec<String> = self
            .categories
            .iter()
            .map(|s| format!("{} {}", s.tokens, s.category))
            .collect();
        format!(
            "{} entities -> {} ({} skipped)",
            self.entities,
            parts.join(", "),
            self.skipped.len()
        )
    }

    /// Log every skipped entity
    pub fn log_skipped(&self) {
        for record in &self.skipped {
            tracing::warn!(
                "Skipped token {} (#{}) [{}]: {}",
                record.name.as_deref().unwrap_or("<unnamed>"),
                record.index,
                record.kind,
                record.message
            );
        }
    }
}

/// Run the configured categories over already-loaded entities
pub fn process_entities(
    config: &BuildConfig,
    entities: &[TokenEntity],
) -> (BuildReport, Vec<(CategoryKind, PipelineReport)>) {
    let pipeline = Pipeline::new(config.pipeline.clone());
    let results = pipeline.run_all(&config.categories, entities);

    let report = BuildReport::from_results(entities.len(), &results);
    (report, results)
}

/// Load, transform, and write a token export
///
/// In strict mode nothing is written when any entity was skipped.
pub async fn run_build(config: &BuildConfig) -> Result<BuildReport> {
    config.validate()?;

    let entities = load_tokens(&config.input).await?;
    let (mut report, results) = process_entities(config, &entities);
    report.log_skipped();

    if config.strict && !report.is_clean() {
        return Err(BuildError::SkippedEntities {
            count: report.skipped.len(),
        });
    }

    for (kind, result) in &results {
        let path = write_category(&config.out_dir, *kind, &result.tokens, config.pretty).await?;
        report.set_output(*kind, path);
    }

    if let Some(path) = &config.report {
        let body = serde_json::to_string_pretty(&report)?;
        tokio::fs::write(path, body)
            .await
            .map_err(|e| BuildError::io(path, e))?;
    }

    tracing::info!("Token build finished: {}", report.summary());
    Ok(report)
}
