//! Page copy for the landing page (`content/page.json`).
//!
//! Everything here is display configuration, parsed strictly: unknown fields
//! are rejected so typos in hand-edited content fail the render instead of
//! silently dropping a section.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct PageContent {
    pub hero: HeroCopy,
    pub problems: Vec<Problem>,
    pub features: Vec<Feature>,
    pub menu: Vec<MenuItem>,
    pub technologies: Vec<Technology>,
    pub voices: Vec<Voice>,
    pub faq: Vec<FaqItem>,
    pub salon: SalonInfo,
    pub footer: FooterCopy,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct HeroCopy {
    pub lead: String,
    /// Heading segments; each gets its own break point on small screens.
    pub heading: Vec<String>,
    pub cta: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Problem {
    pub icon: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Feature {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct MenuItem {
    pub name: String,
    pub price: String,
    pub description: String,
    pub image: String,
    /// Immutable display flag (e.g. "Popular", "Special"). Rendered as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Technology {
    pub icon: String,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Voice {
    pub quote: String,
    /// Star rating, 1–5.
    pub rating: u8,
    pub byline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SalonInfo {
    pub name: String,
    pub postal_code: String,
    pub address: String,
    pub hours: String,
    pub closed: String,
    pub map_query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct FooterCopy {
    pub heading: Vec<String>,
    pub cta: String,
    pub background_image: String,
    pub copyright: String,
}

const BUNDLED_PAGE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../content/page.json"
));

impl PageContent {
    /// Page copy compiled into the binary, used when no file overrides it.
    pub fn bundled() -> Self {
        serde_json::from_str(BUNDLED_PAGE).expect("bundled page content should be valid")
    }
}

/// Check semantic expectations the type system does not enforce.
pub fn validate_page(page: &PageContent) -> Vec<String> {
    let mut errors = Vec::new();

    if page.hero.heading.is_empty() {
        errors.push("hero.heading must have at least one segment".to_string());
    }
    for (name, len) in [
        ("problems", page.problems.len()),
        ("features", page.features.len()),
        ("menu", page.menu.len()),
        ("technologies", page.technologies.len()),
        ("voices", page.voices.len()),
        ("faq", page.faq.len()),
    ] {
        if len == 0 {
            errors.push(format!("{name} must not be empty"));
        }
    }
    for (position, voice) in page.voices.iter().enumerate() {
        if !(1..=5).contains(&voice.rating) {
            errors.push(format!(
                "voices[{position}]: rating {} out of range 1-5",
                voice.rating
            ));
        }
    }
    if page.salon.map_query.trim().is_empty() {
        errors.push("salon.map_query must not be empty".to_string());
    }

    errors
}

/// Load and validate page copy from disk.
pub fn load_page(path: &Path) -> Result<PageContent> {
    debug!(path = %path.display(), "loading page content");
    let contents =
        fs::read_to_string(path).with_context(|| format!("read page content {}", path.display()))?;
    let page: PageContent = serde_json::from_str(&contents)
        .with_context(|| format!("parse page content {}", path.display()))?;
    let errors = validate_page(&page);
    if !errors.is_empty() {
        return Err(anyhow!("page content invalid: {}", errors.join("; ")));
    }
    Ok(page)
}

/// Load page copy from `path` if present, otherwise the bundled defaults.
pub fn load_page_or_bundled(path: &Path) -> Result<PageContent> {
    if !path.exists() {
        debug!(path = %path.display(), "page content missing, using bundled defaults");
        return Ok(PageContent::bundled());
    }
    load_page(path)
}
