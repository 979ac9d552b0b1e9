//! Site configuration stored in `site.toml`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};

/// Deploy-time knobs (TOML).
///
/// This file is intended to be edited by humans and must remain stable and
/// automatable. Missing fields default to the values the salon ships with.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Salon display name used across the page and the CLI.
    pub salon_name: String,

    /// Outbound reservation link (external booking platform).
    pub booking_url: String,

    /// Directory `site render` writes into.
    pub output_dir: String,

    pub hero: HeroConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct HeroConfig {
    /// Background video for the hero section. Empty means image-only.
    pub video_url: String,

    /// Still image shown until the video loads (and as the fallback).
    pub poster_image: String,
}

impl Default for HeroConfig {
    fn default() -> Self {
        Self {
            video_url: "https://videos.pexels.com/video-files/2882118/2882118-hd_1920_1080_24fps.mp4"
                .to_string(),
            poster_image:
                "https://images.unsplash.com/photo-1511497584788-876760111969?ixlib=rb-4.0.3&auto=format&fit=crop&w=1920&q=80"
                    .to_string(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            salon_name: "森の日々".to_string(),
            booking_url: "https://beauty.hotpepper.jp/slnH000771707/".to_string(),
            output_dir: "dist".to_string(),
            hero: HeroConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn validate(&self) -> Result<()> {
        if self.salon_name.trim().is_empty() {
            return Err(anyhow!("salon_name must not be empty"));
        }
        if !self.booking_url.starts_with("http://") && !self.booking_url.starts_with("https://") {
            return Err(anyhow!("booking_url must be an http(s) URL"));
        }
        if self.output_dir.trim().is_empty() {
            return Err(anyhow!("output_dir must not be empty"));
        }
        if self.hero.poster_image.trim().is_empty() {
            return Err(anyhow!("hero.poster_image must not be empty"));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `SiteConfig::default()`.
pub fn load_config(path: &Path) -> Result<SiteConfig> {
    if !path.exists() {
        let cfg = SiteConfig::default();
        cfg.validate()?;
        return Ok(cfg);
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: SiteConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Atomically write config to disk (temp file + rename).
pub fn write_config(path: &Path, cfg: &SiteConfig) -> Result<()> {
    cfg.validate()?;
    let mut buf = toml::to_string_pretty(cfg).context("serialize config toml")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("config path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let tmp_path = path.with_extension("toml.tmp");
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp config {}", tmp_path.display()))?;
    fs::rename(&tmp_path, path).with_context(|| format!("replace config {}", path.display()))?;
    Ok(())
}
