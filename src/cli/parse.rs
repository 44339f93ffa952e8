use anyhow::bail;
use colored::Colorize;
use tracing::info;

use crate::models::config;
use crate::parser::parse_problem;

use super::{cached_problems, load_cache};

pub fn parse_problems(url: &str, index: Option<usize>) -> anyhow::Result<()> {
    let user_config = config::load_config();
    let (cache, _) = load_cache(&user_config)?;
    let problems = cached_problems(&cache, url)?;

    let selected: Vec<_> = match index {
        Some(idx) if idx >= problems.len() => {
            bail!("index {} out of range, contest has {} problems", idx, problems.len())
        }
        Some(idx) => vec![&problems[idx]],
        None => problems.iter().collect(),
    };

    for problem in selected {
        match parse_problem(problem) {
            Ok(signature) => {
                info!(
                    problem = %problem.name,
                    examples = signature.example_count(),
                    "parsed problem"
                );
                println!("{}", serde_json::to_string_pretty(&signature)?);
            }
            Err(e) => {
                eprintln!(
                    "{}",
                    format!("Skipping '{}': {}", problem.name, e).yellow()
                );
            }
        }
    }
    Ok(())
}
