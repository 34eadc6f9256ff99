//! Token export loader
//!
//! Accepts the shapes design-token exporters commonly produce:
//! - a top-level array of entities
//! - an object with a `props` or `properties` field holding an array
//! - either of the above with an object keyed by token name instead of an
//!   array; the key fills in a missing `name`

use crate::error::{BuildError, Result};
use serde_json::{Map, Value};
use std::path::Path;
use token_model::TokenEntity;

/// Wrapper fields that may hold the entity list
const LIST_KEYS: [&str; 2] = ["props", "properties"];

/// Read and parse a token export file
pub async fn load_tokens(path: impl AsRef<Path>) -> Result<Vec<TokenEntity>> {
    let path = path.as_ref();
    let text = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| BuildError::io(path, e))?;

    let entities = parse_tokens(&text)?;
    tracing::info!("Loaded {} token entities from {}", entities.len(), path.display());
    Ok(entities)
}

/// Parse a token export
pub fn parse_tokens(text: &str) -> Result<Vec<TokenEntity>> {
    let root: Value = serde_json::from_str(text)?;
    entities_from_value(root)
}

fn entities_from_value(root: Value) -> Result<Vec<TokenEntity>> {
    match root {
        Value::Array(items) => entities_from_array(items),
        Value::Object(mut map) => match take_list(&mut map) {
            Some(Value::Array(items)) => entities_from_array(items),
            Some(Value::Object(props)) => entities_from_map(props),
            Some(_) => Err(BuildError::InvalidInput(
                "props must be an array or an object".to_string(),
            )),
            None => entities_from_map(map),
        },
        _ => Err(BuildError::InvalidInput(
            "expected an array or object of tokens".to_string(),
        )),
    }
}

fn take_list(map: &mut Map<String, Value>) -> Option<Value> {
    LIST_KEYS.iter().find_map(|key| map.remove(*key))
}

fn entities_from_array(items: Vec<Value>) -> Result<Vec<TokenEntity>> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item)
                .map_err(|e| BuildError::InvalidInput(format!("entity #{}: {}", index, e)))
        })
        .collect()
}

fn entities_from_map(map: Map<String, Value>) -> Result<Vec<TokenEntity>> {
    map.into_iter()
        .map(|(key, item)| {
            let mut entity: TokenEntity = serde_json::from_value(item)
                .map_err(|e| BuildError::InvalidInput(format!("entity {}: {}", key, e)))?;
            if entity.name.is_none() {
                entity.name = Some(key);
            }
            Ok(entity)
        })
        .collect()
}
