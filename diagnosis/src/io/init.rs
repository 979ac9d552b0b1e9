//! Initialization helpers for site content scaffolding.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};

use crate::content::DiagnosisContent;
use crate::io::config::{SiteConfig, write_config};
use crate::io::content_store::write_content;

/// Page copy bundled for `init`; the `site` crate owns its data model, this
/// crate only scaffolds the file.
const PAGE_CONTENT: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../content/page.json"
));

/// All canonical content/config paths for a project root.
#[derive(Debug, Clone)]
pub struct SitePaths {
    pub root: PathBuf,
    pub content_dir: PathBuf,
    pub diagnosis_content_path: PathBuf,
    pub page_content_path: PathBuf,
    pub config_path: PathBuf,
}

impl SitePaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let content_dir = root.join("content");
        Self {
            root: root.clone(),
            content_dir: content_dir.clone(),
            diagnosis_content_path: content_dir.join("diagnosis.json"),
            page_content_path: content_dir.join("page.json"),
            config_path: root.join("site.toml"),
        }
    }
}

/// Options for `init_site`.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// If true, overwrite existing content/config files.
    pub force: bool,
}

/// Write the bundled content files and a default `site.toml` under `root`.
///
/// Fails if `content/` already exists unless `options.force` is set.
pub fn init_site(root: &Path, options: &InitOptions) -> Result<SitePaths> {
    let paths = SitePaths::new(root);
    if paths.content_dir.exists() && !options.force {
        return Err(anyhow!(
            "init: content/ already exists (use --force to overwrite)"
        ));
    }
    if paths.content_dir.exists() && !paths.content_dir.is_dir() {
        return Err(anyhow!("init: content exists but is not a directory"));
    }

    fs::create_dir_all(&paths.content_dir)
        .with_context(|| format!("create directory {}", paths.content_dir.display()))?;

    write_content(&paths.diagnosis_content_path, &DiagnosisContent::bundled())?;
    fs::write(&paths.page_content_path, PAGE_CONTENT)
        .with_context(|| format!("write {}", paths.page_content_path.display()))?;
    write_config(&paths.config_path, &SiteConfig::default())?;

    Ok(paths)
}
