//! Pipeline errors and skip records

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use token_color::ColorError;
use token_model::TokenEntity;

/// Errors raised while classifying or normalizing an entity
///
/// These never abort a run: the offending entity is skipped and recorded in
/// the run's [`SkippedEntity`] list.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TokenError {
    /// A color field could not be parsed
    #[error("Malformed color value in {field}: {source}")]
    MalformedColorValue {
        /// Field that failed ("value" or "darkValue")
        field: &'static str,
        /// Parser error
        source: ColorError,
    },

    /// A required field is absent
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),
}

/// Result type for pipeline operations
pub type Result<T> = std::result::Result<T, TokenError>;

impl TokenError {
    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        match self {
            TokenError::MalformedColorValue { .. } => ErrorKind::MalformedColorValue,
            TokenError::MissingRequiredField(_) => ErrorKind::MissingRequiredField,
        }
    }
}

/// Kind of a [`TokenError`], for reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// See [`TokenError::MalformedColorValue`]
    MalformedColorValue,
    /// See [`TokenError::MissingRequiredField`]
    MissingRequiredField,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::MalformedColorValue => write!(f, "MalformedColorValue"),
            ErrorKind::MissingRequiredField => write!(f, "MissingRequiredField"),
        }
    }
}

/// An input entity that was excluded because of an error
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntity {
    /// Position in the input list
    pub index: usize,
    /// Entity name, if it had one
    pub name: Option<String>,
    /// Why it was skipped
    pub error: TokenError,
}

impl SkippedEntity {
    /// Record a skipped entity
    pub fn new(index: usize, entity: &TokenEntity, error: TokenError) -> Self {
        Self {
            index,
            name: entity.name.clone(),
            error,
        }
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

impl fmt::Display for SkippedEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "entity #{} ({}): {}", self.index, name, self.error),
            None => write!(f, "entity #{}: {}", self.index, self.error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind() {
        let malformed = TokenError::MalformedColorValue {
            field: "value",
            source: ColorError::Empty,
        };
        assert_eq!(malformed.kind(), ErrorKind::MalformedColorValue);
        assert_eq!(
            TokenError::MissingRequiredField("name").kind(),
            ErrorKind::MissingRequiredField
        );
    }

    #[test]
    fn test_error_display() {
        let err = TokenError::MalformedColorValue {
            field: "darkValue",
            source: ColorError::UnknownName("nope".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Malformed color value in darkValue: Unknown color name: nope"
        );
        assert_eq!(
            TokenError::MissingRequiredField("type").to_string(),
            "Missing required field: type"
        );
    }

    #[test]
    fn test_skipped_entity_display() {
        let entity = TokenEntity::color("privateBad", "not-a-color");
        let skipped = SkippedEntity::new(3, &entity, TokenError::MissingRequiredField("type"));
        assert_eq!(
            skipped.to_string(),
            "entity #3 (privateBad): Missing required field: type"
        );

        let unnamed = SkippedEntity::new(0, &TokenEntity::default(), TokenError::MissingRequiredField("name"));
        assert_eq!(unnamed.to_string(), "entity #0: Missing required field: name");
        assert_eq!(unnamed.kind(), ErrorKind::MissingRequiredField);
    }
}
