//! Landing page rendering.
//!
//! One embedded template, one HTML file out. All media URLs pass through the
//! share-link rewriter before reaching the template.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use diagnosis::content::{DiagnosisContent, ResultEntry};
use diagnosis::io::config::SiteConfig;
use minijinja::{Environment, context};
use serde::Serialize;

use crate::media::{MediaKind, resolve_media_url};
use crate::page::{PageContent, Voice};

const PAGE_TEMPLATE: &str = include_str!("../templates/page.html");

/// Everything the template needs.
#[derive(Debug, Clone)]
pub struct RenderInputs {
    pub config: SiteConfig,
    pub page: PageContent,
    pub diagnosis: DiagnosisContent,
}

/// Hero context with media already resolved.
#[derive(Debug, Clone, Serialize)]
struct HeroContext {
    lead: String,
    heading: Vec<String>,
    cta: String,
    poster: String,
    video: String,
}

/// Voice context with the rating pre-rendered as stars.
#[derive(Debug, Clone, Serialize)]
struct VoiceContext {
    quote: String,
    stars: String,
    byline: String,
}

impl VoiceContext {
    fn from_voice(voice: &Voice) -> Self {
        Self {
            quote: voice.quote.clone(),
            stars: "★".repeat(usize::from(voice.rating)),
            byline: voice.byline.clone(),
        }
    }
}

/// Render the landing page to an HTML string.
pub fn render_page(inputs: &RenderInputs) -> Result<String> {
    let mut env = Environment::new();
    env.add_template("page.html", PAGE_TEMPLATE)
        .expect("page template should be valid");
    let template = env.get_template("page.html")?;

    let hero = HeroContext {
        lead: inputs.page.hero.lead.clone(),
        heading: inputs.page.hero.heading.clone(),
        cta: inputs.page.hero.cta.clone(),
        poster: resolve_media_url(&inputs.config.hero.poster_image, MediaKind::Image),
        video: resolve_media_url(&inputs.config.hero.video_url, MediaKind::Video),
    };

    let mut page = inputs.page.clone();
    for item in &mut page.menu {
        item.image = resolve_media_url(&item.image, MediaKind::Image);
    }
    page.footer.background_image =
        resolve_media_url(&page.footer.background_image, MediaKind::Image);
    let voices: Vec<VoiceContext> = page.voices.iter().map(VoiceContext::from_voice).collect();

    let results: Vec<ResultEntry> = inputs
        .diagnosis
        .results
        .iter()
        .map(|entry| ResultEntry {
            image: resolve_media_url(&entry.image, MediaKind::Image),
            ..entry.clone()
        })
        .collect();

    // Data island for the client-side quiz surface; the decision logic stays
    // in the engine crate.
    let diagnosis_json = serde_json::to_string(&serde_json::json!({
        "questions": inputs.diagnosis.questions,
        "results": results,
    }))
    .context("serialize diagnosis data island")?;

    let rendered = template.render(context! {
        salon_name => inputs.config.salon_name,
        booking_url => inputs.config.booking_url,
        hero => hero,
        problems => page.problems,
        features => page.features,
        menu => page.menu,
        technologies => page.technologies,
        voices => voices,
        faq => page.faq,
        salon => page.salon,
        footer => page.footer,
        questions => inputs.diagnosis.questions,
        results => results,
        diagnosis_json => diagnosis_json,
    })?;
    Ok(rendered)
}

/// Write the rendered page under `out_dir` and return the file path.
pub fn write_page(out_dir: &Path, html: &str) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;
    let path = out_dir.join("index.html");
    fs::write(&path, html).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}
