//! Course diagnosis CLI for the Mori no Hibi salon site.
//!
//! Owns the engine content (`content/diagnosis.json`) and configuration
//! (`site.toml`) in the working directory, with bundled defaults when the
//! files are absent.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use diagnosis::interactive::run_quiz;
use diagnosis::io::config::load_config;
use diagnosis::io::content_store::load_content_or_bundled;
use diagnosis::io::init::{InitOptions, SitePaths, init_site};
use diagnosis::simulate::{parse_answers, simulate};
use diagnosis::validate::{ConfigSource, validate_site};

#[derive(Parser)]
#[command(
    name = "diagnosis",
    version,
    about = "Course diagnosis engine for the salon site"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Write the bundled content files and a default `site.toml`.
    Init {
        /// Overwrite existing files.
        #[arg(short, long)]
        force: bool,
    },
    /// Check config and content against schema and invariants.
    Validate,
    /// Run a category sequence (e.g. `A,B,C,D,A`) through a fresh session.
    Simulate {
        /// Comma or whitespace separated categories, one per question.
        answers: String,
        /// Print the outcome as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Interactive quiz on stdin/stdout.
    Run,
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
    match cli.command {
        Command::Init { force } => cmd_init(&root, force),
        Command::Validate => cmd_validate(&root),
        Command::Simulate { answers, json } => cmd_simulate(&root, &answers, json),
        Command::Run => cmd_run(&root),
    }
}

fn cmd_init(root: &Path, force: bool) -> Result<()> {
    let paths = init_site(root, &InitOptions { force })?;
    println!("wrote {}", paths.diagnosis_content_path.display());
    println!("wrote {}", paths.page_content_path.display());
    println!("wrote {}", paths.config_path.display());
    Ok(())
}

fn cmd_validate(root: &Path) -> Result<()> {
    let outcome = validate_site(root)?;
    match outcome.config {
        ConfigSource::Default => println!("config: defaults (site.toml missing)"),
        ConfigSource::File(path) => println!("config: {path}"),
    }
    match outcome.content {
        diagnosis::io::content_store::ContentSource::Bundled => {
            println!("content: bundled defaults (content/diagnosis.json missing)");
        }
        diagnosis::io::content_store::ContentSource::File(path) => println!("content: {path}"),
    }
    println!("{} questions, {} results, all checks passed", outcome.questions, outcome.results);
    Ok(())
}

fn cmd_simulate(root: &Path, answers: &str, json: bool) -> Result<()> {
    let paths = SitePaths::new(root);
    let (content, _) = load_content_or_bundled(&paths.diagnosis_content_path)?;
    let (bank, catalog) = content.into_parts();
    let answers = parse_answers(answers)?;
    let outcome = simulate(&bank, &catalog, &answers)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }
    println!("result: {}", outcome.result);
    println!("course: {}  {}", outcome.course, outcome.price);
    println!(
        "tally: A={} B={} C={} D={}",
        outcome.tally.a, outcome.tally.b, outcome.tally.c, outcome.tally.d
    );
    Ok(())
}

fn cmd_run(root: &Path) -> Result<()> {
    let paths = SitePaths::new(root);
    let config = load_config(&paths.config_path)?;
    let (content, _) = load_content_or_bundled(&paths.diagnosis_content_path)?;
    let (bank, catalog) = content.into_parts();

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_quiz(stdin.lock(), stdout.lock(), &bank, &catalog, &config)
}
