use std::path::PathBuf;

use anyhow::Context;
use colored::Colorize;

use crate::lang::create_codegen;
use crate::models::{config, Language};
use crate::project::{render_project, write_project};

use super::{cached_problems, load_cache, read_problem_file};

pub fn get_problems(
    url: &str,
    languages: Vec<Language>,
    output: Option<PathBuf>,
    input: Option<PathBuf>,
) -> anyhow::Result<()> {
    let user_config = config::load_config();
    let (mut cache, cache_path) = load_cache(&user_config)?;

    if let Some(input) = input {
        let problems = read_problem_file(&input)?;
        cache.insert(url, problems);
        cache
            .save(&cache_path)
            .with_context(|| format!("failed to save problem cache '{}'", cache_path.display()))?;
    }
    let problems = cached_problems(&cache, url)?;

    let languages = if languages.is_empty() {
        user_config.languages.clone()
    } else {
        languages
    };
    let output_dir = output.unwrap_or_else(|| user_config.output_dir.clone());
    let contest = contest_name(url);

    for language in languages {
        let codegen = create_codegen(language);
        let project = render_project(codegen.as_ref(), problems);
        let project_path = output_dir.join(format!("{}_{}", contest, language.tag()));

        write_project(&project_path, &project)
            .with_context(|| format!("failed to write project '{}'", project_path.display()))?;

        for name in &project.failed {
            eprintln!(
                "{}",
                format!("Warning: no code generated for '{}'", name).yellow()
            );
        }
        println!(
            "{}",
            format!(
                "{} project created at {}",
                language.display_name(),
                project_path.display()
            )
            .green()
        );
    }
    Ok(())
}

/// Last non-empty path segment of a contest URL.
fn contest_name(url: &str) -> &str {
    url.split('/')
        .rev()
        .find(|segment| !segment.is_empty())
        .unwrap_or("contest")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contest_name() {
        assert_eq!(
            contest_name("https://leetcode.com/contest/weekly-contest-183/"),
            "weekly-contest-183"
        );
        assert_eq!(
            contest_name("https://leetcode.cn/contest/biweekly-contest-20"),
            "biweekly-contest-20"
        );
        assert_eq!(contest_name(""), "contest");
    }
}
