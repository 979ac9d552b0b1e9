//! Validation helpers for `diagnosis validate`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::io::config::load_config;
use crate::io::content_store::{ContentSource, load_content_or_bundled};
use crate::io::init::SitePaths;

/// Where the config came from, for reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// `site.toml` missing; defaults in effect.
    Default,
    /// Loaded from the given path.
    File(String),
}

/// High-level validation outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidateOutcome {
    pub config: ConfigSource,
    pub content: ContentSource,
    pub questions: usize,
    pub results: usize,
}

/// Validate config and diagnosis content under `root`.
///
/// Missing files fall back to the bundled defaults and are reported as such;
/// files that exist must pass schema and invariant validation.
pub fn validate_site(root: &Path) -> Result<ValidateOutcome> {
    let paths = SitePaths::new(root);

    let config_source = if paths.config_path.exists() {
        ConfigSource::File(paths.config_path.display().to_string())
    } else {
        ConfigSource::Default
    };
    load_config(&paths.config_path).with_context(|| "load site.toml")?;

    let (content, content_source) = load_content_or_bundled(&paths.diagnosis_content_path)
        .with_context(|| "load diagnosis content")?;

    Ok(ValidateOutcome {
        config: config_source,
        content: content_source,
        questions: content.questions.len(),
        results: content.results.len(),
    })
}
