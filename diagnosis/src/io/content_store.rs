//! Content load/save helpers with schema + invariant validation.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use jsonschema::validator_for;
use serde_json::Value;
use tracing::debug;

use crate::content::DiagnosisContent;
use crate::core::invariants::validate_invariants;

/// JSON Schema the content file must conform to. Embedded: the schema is part
/// of the program, only the content is data.
pub const CONTENT_SCHEMA: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../schemas/diagnosis/v1.schema.json"
));

/// Where the content came from, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Compiled-in defaults (no file present).
    Bundled,
    /// Loaded from the given path.
    File(String),
}

/// Load and validate content from disk (schema + invariants).
pub fn load_content(path: &Path) -> Result<DiagnosisContent> {
    debug!(path = %path.display(), "loading diagnosis content");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read content {}", path.display()))?;
    let value: Value = serde_json::from_str(&contents)
        .with_context(|| format!("parse content {}", path.display()))?;
    validate_schema(&value)?;
    let content: DiagnosisContent = serde_json::from_value(value)
        .with_context(|| format!("deserialize content {}", path.display()))?;
    validate_content_invariants(&content)?;
    Ok(content)
}

/// Load content from `path` if it exists, otherwise fall back to the bundled
/// defaults.
pub fn load_content_or_bundled(path: &Path) -> Result<(DiagnosisContent, ContentSource)> {
    if !path.exists() {
        debug!(path = %path.display(), "content file missing, using bundled defaults");
        return Ok((DiagnosisContent::bundled(), ContentSource::Bundled));
    }
    let content = load_content(path)?;
    Ok((content, ContentSource::File(path.display().to_string())))
}

/// Atomically write content to disk with pretty formatting.
pub fn write_content(path: &Path, content: &DiagnosisContent) -> Result<()> {
    validate_content_invariants(content)?;
    let mut buf = serde_json::to_string_pretty(content)?;
    buf.push('\n');
    let parent = path
        .parent()
        .with_context(|| format!("content path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("json.tmp");
    fs::write(&tmp_path, &buf)
        .with_context(|| format!("write temp content {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace content {}", path.display()))?;
    Ok(())
}

fn validate_schema(content: &Value) -> Result<()> {
    let schema_value: Value =
        serde_json::from_str(CONTENT_SCHEMA).context("parse embedded content schema")?;
    let compiled =
        validator_for(&schema_value).map_err(|err| anyhow!("invalid schema: {}", err))?;
    if !compiled.is_valid(content) {
        let messages = compiled
            .iter_errors(content)
            .map(|err| err.to_string())
            .collect::<Vec<_>>();
        return Err(anyhow!(
            "content schema validation failed: {}",
            messages.join("; ")
        ));
    }
    Ok(())
}

fn validate_content_invariants(content: &DiagnosisContent) -> Result<()> {
    let errors = validate_invariants(content);
    if errors.is_empty() {
        return Ok(());
    }
    Err(anyhow!("content invariants failed: {}", errors.join("; ")))
}
