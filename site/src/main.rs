//! Static landing page generator for the Mori no Hibi salon site.
//!
//! Reads `site.toml`, `content/diagnosis.json` and `content/page.json` from
//! the working directory (bundled defaults when absent) and renders the
//! single-page site. The quiz decision logic lives in the `diagnosis` crate;
//! this binary only displays its content.

mod media;
mod page;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use diagnosis::io::config::load_config;
use diagnosis::io::content_store::load_content_or_bundled;
use diagnosis::io::init::SitePaths;

use crate::page::load_page_or_bundled;
use crate::render::{RenderInputs, render_page, write_page};

#[derive(Parser)]
#[command(
    name = "site",
    version,
    about = "Static landing page generator for the salon site"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render `index.html` from content and templates.
    Render {
        /// Output directory (defaults to `output_dir` from site.toml).
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Load and render everything without writing output.
    Check,
}

fn main() {
    diagnosis::logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let root = std::env::current_dir().context("resolve working directory")?;
    let inputs = load_inputs(&root)?;
    match cli.command {
        Command::Render { out } => {
            let html = render_page(&inputs)?;
            let out_dir = out.unwrap_or_else(|| root.join(&inputs.config.output_dir));
            let path = write_page(&out_dir, &html)?;
            info!(path = %path.display(), bytes = html.len(), "page rendered");
            println!("wrote {}", path.display());
        }
        Command::Check => {
            let html = render_page(&inputs)?;
            println!("render ok ({} bytes)", html.len());
        }
    }
    Ok(())
}

fn load_inputs(root: &Path) -> Result<RenderInputs> {
    let paths = SitePaths::new(root);
    let config = load_config(&paths.config_path)?;
    let (diagnosis_content, _) = load_content_or_bundled(&paths.diagnosis_content_path)?;
    let page = load_page_or_bundled(&paths.page_content_path)?;
    Ok(RenderInputs {
        config,
        page,
        diagnosis: diagnosis_content,
    })
}
