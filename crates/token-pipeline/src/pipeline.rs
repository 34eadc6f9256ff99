//! Pipeline driver
//!
//! Runs a category over an entity list in two named stages:
//! 1. [`filter_entities`] - keep entities the category accepts, record
//!    entities that are missing required fields or hold malformed colors
//! 2. [`normalize_entities`] - rewrite each kept entity into a
//!    [`NormalizedToken`]
//!
//! Output order is the input order restricted to accepted entities. Errors
//! never abort a run; the affected entity is skipped and recorded.

use crate::category::{CategoryKind, InternalColors, TokenCategory};
use crate::config::PipelineConfig;
use crate::error::SkippedEntity;
use crate::predicates::has_required_fields;
use token_model::{NormalizedToken, TokenEntity};

/// Result of running one category over an entity list
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineReport {
    /// Normalized tokens, in input order
    pub tokens: Vec<NormalizedToken>,
    /// Entities excluded because of an error, in input order
    pub skipped: Vec<SkippedEntity>,
}

impl PipelineReport {
    /// Check if no entity was skipped
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }

    /// Names of skipped entities (unnamed entities are left out)
    pub fn skipped_names(&self) -> Vec<&str> {
        self.skipped.iter().filter_map(|s| s.name.as_deref()).collect()
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        format!("{} tokens, {} skipped", self.tokens.len(), self.skipped.len())
    }
}

/// Output of the filter stage
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome<'a> {
    /// Accepted entities with their input index
    pub accepted: Vec<(usize, &'a TokenEntity)>,
    /// Entities rejected with an error
    pub rejected: Vec<SkippedEntity>,
}

/// Filter stage: classify every entity against the category
pub fn filter_entities<'a>(
    category: &dyn TokenCategory,
    entities: &'a [TokenEntity],
) -> FilterOutcome<'a> {
    let mut outcome = FilterOutcome::default();

    for (index, entity) in entities.iter().enumerate() {
        if let Err(error) = has_required_fields(entity) {
            outcome.rejected.push(SkippedEntity::new(index, entity, error));
            continue;
        }

        if category.accepts(entity) {
            outcome.accepted.push((index, entity));
        } else if let Some(error) = category.diagnose(entity) {
            outcome.rejected.push(SkippedEntity::new(index, entity, error));
        }
    }

    outcome
}

/// Normalize stage: rewrite accepted entities, in order
pub fn normalize_entities(
    category: &dyn TokenCategory,
    accepted: &[(usize, &TokenEntity)],
) -> (Vec<NormalizedToken>, Vec<SkippedEntity>) {
    let mut tokens = Vec::with_capacity(accepted.len());
    let mut skipped = Vec::new();

    for &(index, entity) in accepted {
        match category.normalize(entity) {
            Ok(token) => tokens.push(token),
            Err(error) => skipped.push(SkippedEntity::new(index, entity, error)),
        }
    }

    (tokens, skipped)
}

/// Runs token categories over entity lists
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Get the configuration
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Run one category
    pub fn run(&self, category: &dyn TokenCategory, entities: &[TokenEntity]) -> PipelineReport {
        let FilterOutcome { accepted, mut rejected } = filter_entities(category, entities);
        let (tokens, normalize_skipped) = normalize_entities(category, &accepted);

        rejected.extend(normalize_skipped);
        rejected.sort_by_key(|s| s.index);

        for skipped in &rejected {
            tracing::debug!("Skipping {} for {}", skipped, category.kind());
        }
        tracing::debug!(
            "Processed {} entities for {}: {} tokens, {} skipped",
            entities.len(),
            category.kind(),
            tokens.len(),
            rejected.len()
        );

        PipelineReport {
            tokens,
            skipped: rejected,
        }
    }

    /// Run a built-in category
    pub fn run_kind(&self, kind: CategoryKind, entities: &[TokenEntity]) -> PipelineReport {
        let category = kind.build(&self.config);
        self.run(category.as_ref(), entities)
    }

    /// Run several built-in categories over the same entities
    pub fn run_all(
        &self,
        kinds: &[CategoryKind],
        entities: &[TokenEntity],
    ) -> Vec<(CategoryKind, PipelineReport)> {
        kinds
            .iter()
            .map(|&kind| (kind, self.run_kind(kind, entities)))
            .collect()
    }
}

/// Extract private semantic colors as `internalColor` tokens
pub fn process_internal_colors(entities: &[TokenEntity]) -> Vec<NormalizedToken> {
    process_internal_colors_with_report(entities).tokens
}

/// Like [`process_internal_colors`], also returning skipped entities
pub fn process_internal_colors_with_report(entities: &[TokenEntity]) -> PipelineReport {
    Pipeline::default().run(&InternalColors::default(), entities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ErrorKind, TokenError};
    use crate::predicates::{is_color_type, is_private_color, is_semantic_color};
    use serde_json::json;
    use token_color::ParsedColor;

    fn mixed_entities() -> Vec<TokenEntity> {
        vec![
            TokenEntity::color("privateFirst", "#000000").with_dark_value("#FFFFFF"),
            TokenEntity::color("publicFoo", "#000000"),
            TokenEntity::color("privateSecond", "#111111").with_dark_value("#EEEEEE"),
            TokenEntity::new("privateSpacing", "size")
                .with_value("#000")
                .with_dark_value("#000"),
            TokenEntity::color("TextPrimary", "#161616").with_dark_value("#FFFFFF"),
            TokenEntity::color("privateThird", "#222222").with_dark_value("#DDDDDD"),
        ]
    }

    // ==========================================================================
    // Scenario Tests
    // ==========================================================================

    #[test]
    fn test_abisko_scenario() {
        let entities = vec![
            TokenEntity::color("privateAbisko", "#5A489B").with_dark_value("#5A489B"),
            TokenEntity::color("publicFoo", "#000000"),
        ];

        let tokens = process_internal_colors(&entities);

        assert_eq!(tokens.len(), 1);
        let token = &tokens[0];
        assert_eq!(token.name, "abisko");
        assert_eq!(token.kind, "internalColor");
        assert_eq!(token.value, ParsedColor::rgb(90, 72, 155));
        assert_eq!(token.dark_value, Some(ParsedColor::rgb(90, 72, 155)));
        assert_eq!(token.hex, "#5A489B");
        assert_eq!(token.dark_hex.as_deref(), Some("#5A489B"));
    }

    #[test]
    fn test_empty_input() {
        assert!(process_internal_colors(&[]).is_empty());
        let report = process_internal_colors_with_report(&[]);
        assert!(report.is_clean());
        assert_eq!(report.summary(), "0 tokens, 0 skipped");
    }

    #[test]
    fn test_no_matching_entities() {
        let entities = vec![
            TokenEntity::color("publicFoo", "#000000"),
            TokenEntity::new("privateGap", "size").with_value("4px"),
        ];
        let report = process_internal_colors_with_report(&entities);
        assert!(report.tokens.is_empty());
        assert!(report.is_clean());
    }

    #[test]
    fn test_malformed_value_scenario() {
        let entities =
            vec![TokenEntity::color("privateBad", "not-a-color").with_dark_value("#000000")];

        let report = process_internal_colors_with_report(&entities);

        assert!(report.tokens.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name.as_deref(), Some("privateBad"));
        assert_eq!(report.skipped[0].kind(), ErrorKind::MalformedColorValue);
        assert_eq!(report.skipped_names(), vec!["privateBad"]);
    }

    #[test]
    fn test_malformed_entity_does_not_abort_run() {
        let entities = vec![
            TokenEntity::color("privateGood", "#000000").with_dark_value("#FFFFFF"),
            TokenEntity::color("privateBad", "#000000").with_dark_value(json!({ "h": 1 })),
            TokenEntity::color("privateAlsoGood", "#FFFFFF").with_dark_value("#000000"),
        ];

        let report = process_internal_colors_with_report(&entities);

        let names: Vec<&str> = report.tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["good", "alsoGood"]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].index, 1);
    }

    #[test]
    fn test_missing_required_fields_are_recorded() {
        let mut no_type = TokenEntity::color("privateFoo", "#000").with_dark_value("#FFF");
        no_type.kind = None;
        let no_name = TokenEntity {
            kind: Some("color".to_string()),
            value: Some(json!("#000")),
            dark_value: Some(json!("#FFF")),
            ..Default::default()
        };

        let report = process_internal_colors_with_report(&[no_type, no_name]);

        assert!(report.tokens.is_empty());
        assert_eq!(
            report.skipped.iter().map(|s| s.error.clone()).collect::<Vec<_>>(),
            vec![
                TokenError::MissingRequiredField("type"),
                TokenError::MissingRequiredField("name"),
            ]
        );
        assert_eq!(report.skipped_names(), vec!["privateFoo"]);
    }

    #[test]
    fn test_wrongly_typed_name_is_recorded() {
        let entities: Vec<TokenEntity> = serde_json::from_value(json!([
            { "name": "privateAbisko", "type": "color", "value": "#5A489B", "darkValue": "#5A489B" },
            { "name": 42, "type": "color", "value": "#000", "darkValue": "#FFF" }
        ]))
        .unwrap();

        let report = process_internal_colors_with_report(&entities);

        assert_eq!(report.tokens.len(), 1);
        assert_eq!(report.tokens[0].name, "abisko");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].index, 1);
        assert_eq!(report.skipped[0].error, TokenError::MissingRequiredField("name"));
    }

    // ==========================================================================
    // Property Tests
    // ==========================================================================

    #[test]
    fn test_output_only_contains_filtered_entities() {
        let entities = mixed_entities();
        let tokens = process_internal_colors(&entities);

        let expected: Vec<&TokenEntity> = entities
            .iter()
            .filter(|e| is_color_type(e) && is_semantic_color(e) && is_private_color(e))
            .collect();
        assert_eq!(tokens.len(), expected.len());
        assert!(tokens.iter().all(|t| t.kind == "internalColor"));
    }

    #[test]
    fn test_order_is_preserved() {
        let tokens = process_internal_colors(&mixed_entities());
        let names: Vec<&str> = tokens.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_pass_through_fields_survive() {
        let entities = vec![TokenEntity::color("privateFoo", "#000")
            .with_dark_value("#FFF")
            .with_field("category", "internal")
            .with_field("originalValue", "{!black}")
            .with_field("order", 7)];

        let tokens = process_internal_colors(&entities);

        assert_eq!(tokens[0].field("category"), Some(&json!("internal")));
        assert_eq!(tokens[0].field("originalValue"), Some(&json!("{!black}")));
        assert_eq!(tokens[0].field("order"), Some(&json!(7)));
        let keys: Vec<&str> = tokens[0].extra.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["category", "originalValue", "order"]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let entities = mixed_entities();
        let before = entities.clone();
        let _ = process_internal_colors(&entities);
        assert_eq!(entities, before);
    }

    #[test]
    fn test_runs_are_independent() {
        let entities = mixed_entities();
        assert_eq!(process_internal_colors(&entities), process_internal_colors(&entities));
    }

    // ==========================================================================
    // Stage Tests
    // ==========================================================================

    #[test]
    fn test_filter_stage() {
        let entities = mixed_entities();
        let outcome = filter_entities(&InternalColors::default(), &entities);

        let indices: Vec<usize> = outcome.accepted.iter().map(|(i, _)| *i).collect();
        assert_eq!(indices, vec![0, 2, 5]);
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn test_normalize_stage_records_failures() {
        // Bypasses the filter stage, so the normalizer sees an unusable value
        let bad = TokenEntity::color("privateBad", "#000");
        let good = TokenEntity::color("privateGood", "#000").with_dark_value("#FFF");
        let accepted = vec![(0, &bad), (1, &good)];

        let (tokens, skipped) = normalize_entities(&InternalColors::default(), &accepted);

        assert_eq!(tokens.len(), 1);
        assert_eq!(skipped.len(), 1);
        assert_eq!(skipped[0].error, TokenError::MissingRequiredField("darkValue"));
    }

    // ==========================================================================
    // Multi-Category Tests
    // ==========================================================================

    #[test]
    fn test_run_all() {
        let pipeline = Pipeline::default();
        let results = pipeline.run_all(&CategoryKind::all(), &mixed_entities());

        let counts: Vec<(CategoryKind, usize)> = results
            .iter()
            .map(|(kind, report)| (*kind, report.tokens.len()))
            .collect();
        assert_eq!(
            counts,
            vec![
                (CategoryKind::InternalColor, 3),
                (CategoryKind::SemanticColor, 1),
                (CategoryKind::StaticColor, 1),
            ]
        );
    }

    #[test]
    fn test_custom_marker() {
        let pipeline = Pipeline::new(PipelineConfig::new().marker("internal"));
        let entities = vec![
            TokenEntity::color("internalFoo", "#000").with_dark_value("#FFF"),
            TokenEntity::color("privateBar", "#000").with_dark_value("#FFF"),
        ];

        let report = pipeline.run_kind(CategoryKind::InternalColor, &entities);

        assert_eq!(report.tokens.len(), 1);
        assert_eq!(report.tokens[0].name, "foo");
        assert_eq!(pipeline.config().marker, "internal");
    }
}
