use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use tracing::{error, info, warn};

use crate::error::Result;
use crate::lang::CodeGen;
use crate::models::Problem;

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectFile {
    pub name: String,
    pub contents: String,
}

impl ProjectFile {
    pub fn new(name: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            contents: contents.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct RenderedProject {
    pub files: Vec<ProjectFile>,
    /// Names of problems that could not be generated.
    pub failed: Vec<String>,
}

/// `A`, `B`, ..., `Z`, `AA`, `AB`, ...
pub fn problem_file_stem(idx: usize) -> String {
    let mut stem = Vec::new();
    let mut n = idx + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        stem.push(char::from(b'A' + rem as u8));
        n = (n - 1) / 26;
    }
    stem.iter().rev().collect()
}

/// Generate every file of a project. A problem that fails to parse or
/// generate is logged and left out; the rest are still produced.
pub fn render_project(codegen: &dyn CodeGen, problems: &[Problem]) -> RenderedProject {
    let mut project = RenderedProject::default();
    let mut generated = Vec::new();

    for (idx, problem) in problems.iter().enumerate() {
        let file_name = format!("{}.{}", problem_file_stem(idx), codegen.extension());
        match codegen.render_problem(problem) {
            Ok(contents) => {
                info!(problem = %problem.name, file = %file_name, "generated code");
                generated.push(file_name.clone());
                project.files.push(ProjectFile::new(file_name, contents));
            }
            Err(e) => {
                error!(
                    problem = %problem.name,
                    language = codegen.language(),
                    error = %e,
                    "failed to generate code, skipping problem"
                );
                project.failed.push(problem.name.clone());
            }
        }
    }

    project.files.extend(codegen.extra_files());
    if let Some(descriptor) = codegen.build_descriptor(&generated) {
        project.files.push(descriptor);
    }
    project
}

pub fn write_project(path: &Path, project: &RenderedProject) -> Result<()> {
    fs::create_dir_all(path)?;
    for file in &project.files {
        write_and_backup(&path.join(&file.name), &file.contents)?;
    }
    Ok(())
}

/// Write `contents` to `path`. An existing file with different contents is
/// first moved to `<stem>_<timestamp><ext>`; the backup path is returned.
pub fn write_and_backup(path: &Path, contents: &str) -> Result<Option<PathBuf>> {
    let mut backup = None;
    if path.exists() {
        let original = fs::read_to_string(path)?;
        if original != contents {
            let modified: DateTime<Local> = fs::metadata(path)?.modified()?.into();
            let dest = backup_path(path, &modified.format("%Y%m%d_%H%M%S").to_string());
            fs::rename(path, &dest)?;
            warn!(
                path = %path.display(),
                backup = %dest.display(),
                "file was modified, backup created"
            );
            backup = Some(dest);
        }
    }
    fs::write(path, contents)?;
    Ok(backup)
}

fn backup_path(path: &Path, timestamp: &str) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let name = match path.extension() {
        Some(ext) => format!("{}_{}.{}", stem, timestamp, ext.to_string_lossy()),
        None => format!("{}_{}", stem, timestamp),
    };
    path.with_file_name(name)
}
