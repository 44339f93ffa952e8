use std::path::Path;

use anyhow::Context;
use colored::Colorize;

use crate::models::config;

use super::{load_cache, read_problem_file};

pub fn import_problems(url: &str, file: &Path) -> anyhow::Result<()> {
    let user_config = config::load_config();
    let problems = read_problem_file(file)?;
    let (mut cache, cache_path) = load_cache(&user_config)?;

    let count = problems.len();
    cache.insert(url, problems);
    cache
        .save(&cache_path)
        .with_context(|| format!("failed to save problem cache '{}'", cache_path.display()))?;

    println!(
        "{}",
        format!("Imported {} problems for {}", count, url).green()
    );
    Ok(())
}
