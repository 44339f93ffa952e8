mod get;
mod import;
mod parse;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use colored::Colorize;

use crate::models::{config::UserConfig, Language, Problem, ProblemCache};

#[derive(Parser)]
#[command(name = "lchelper")]
#[command(about = "Generate local testing projects for LeetCode contests", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store a crawled problem list in the cache
    Import {
        url: String,
        /// JSON array of problems
        file: PathBuf,
    },
    /// Print the parsed signatures of cached problems
    Parse {
        url: String,
        /// Only parse the problem at this position
        #[arg(long)]
        index: Option<usize>,
    },
    /// Create one project per language for a contest
    Get {
        url: String,
        #[arg(short, long = "lang", value_enum)]
        languages: Vec<Language>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Read problems from this file instead of the cache
        #[arg(long)]
        input: Option<PathBuf>,
    },
}

pub fn run(cli: Cli) {
    let result = match cli.command {
        Commands::Import { url, file } => import::import_problems(&url, &file),
        Commands::Parse { url, index } => parse::parse_problems(&url, index),
        Commands::Get {
            url,
            languages,
            output,
            input,
        } => get::get_problems(&url, languages, output, input),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn load_cache(config: &UserConfig) -> anyhow::Result<(ProblemCache, PathBuf)> {
    let path = config.cache_path();
    let cache = ProblemCache::load(&path)
        .with_context(|| format!("failed to load problem cache '{}'", path.display()))?;
    Ok((cache, path))
}

fn read_problem_file(path: &Path) -> anyhow::Result<Vec<Problem>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read '{}'", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("'{}' is not a JSON list of problems", path.display()))
}

fn cached_problems<'a>(cache: &'a ProblemCache, url: &str) -> anyhow::Result<&'a [Problem]> {
    if let Some(problems) = cache.get(url) {
        return Ok(problems);
    }
    let known: Vec<&str> = cache.contests().collect();
    if known.is_empty() {
        bail!("no problems cached for '{}' (the cache is empty)", url);
    }
    bail!(
        "no problems cached for '{}'; cached contests:\n  {}",
        url,
        known.join("\n  ")
    )
}
