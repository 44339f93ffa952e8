//! Persisted store of crawled problems, keyed by contest URL.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::problem::Problem;

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ProblemCache {
    contests: BTreeMap<String, Vec<Problem>>,
}

impl ProblemCache {
    /// A missing file yields an empty cache.
    pub fn load(path: &Path) -> Result<ProblemCache> {
        if !path.exists() {
            return Ok(ProblemCache::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn get(&self, url: &str) -> Option<&[Problem]> {
        self.contests.get(normalize_url(url)).map(Vec::as_slice)
    }

    pub fn insert(&mut self, url: &str, problems: Vec<Problem>) {
        self.contests.insert(normalize_url(url).to_string(), problems);
    }

    pub fn contests(&self) -> impl Iterator<Item = &str> {
        self.contests.keys().map(String::as_str)
    }
}

fn normalize_url(url: &str) -> &str {
    url.trim().trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Problem> {
        vec![Problem::new(
            "https://leetcode.com/contest/weekly-contest-183/problems/a",
            "Shift 2D Grid",
            "",
            vec!["Input: grid = [[1]], k = 1\nOutput: [[1]]".to_string()],
            vec!["class Solution {".to_string(), "};".to_string()],
        )]
    }

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = ProblemCache::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(cache.contests().count(), 0);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("problems.json");

        let mut cache = ProblemCache::default();
        cache.insert("https://leetcode.com/contest/weekly-contest-183/", sample());
        cache.save(&path).unwrap();

        let reloaded = ProblemCache::load(&path).unwrap();
        let problems = reloaded
            .get("https://leetcode.com/contest/weekly-contest-183")
            .unwrap();
        assert_eq!(problems, sample().as_slice());
        assert_eq!(
            reloaded.contests().collect::<Vec<_>>(),
            vec!["https://leetcode.com/contest/weekly-contest-183"]
        );
    }
}
