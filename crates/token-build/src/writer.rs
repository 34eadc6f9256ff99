//! Normalized output files

use crate::error::{BuildError, Result};
use std::path::{Path, PathBuf};
use token_model::NormalizedToken;
use token_pipeline::CategoryKind;

/// Output file for a category, `<out_dir>/<category>.json`
pub fn output_path(out_dir: &Path, kind: CategoryKind) -> PathBuf {
    out_dir.join(format!("{}.json", kind))
}

/// Serialize tokens as a JSON array
pub fn render_tokens(tokens: &[NormalizedToken], pretty: bool) -> Result<String> {
    let mut body = if pretty {
        serde_json::to_string_pretty(tokens)?
    } else {
        serde_json::to_string(tokens)?
    };
    body.push('\n');
    Ok(body)
}

/// Write one category's tokens, creating the output directory if needed
pub async fn write_category(
    out_dir: &Path,
    kind: CategoryKind,
    tokens: &[NormalizedToken],
    pretty: bool,
) -> Result<PathBuf> {
    tokio::fs::create_dir_all(out_dir)
        .await
        .map_err(|e| BuildError::io(out_dir, e))?;

    let path = output_path(out_dir, kind);
    let body = render_tokens(tokens, pretty)?;
    tokio::fs::write(&path, body)
        .await
        .map_err(|e| BuildError::io(&path, e))?;

    tracing::info!("Wrote {} {} tokens to {}", tokens.len(), kind, path.display());
    Ok(path)
}
