use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::language::Language;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_languages")]
    pub languages: Vec<Language>,
    #[serde(default)]
    pub cache_path: Option<PathBuf>,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_languages() -> Vec<Language> {
    vec![Language::Cpp]
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            languages: default_languages(),
            cache_path: None,
        }
    }
}

impl UserConfig {
    pub fn cache_path(&self) -> PathBuf {
        self.cache_path
            .clone()
            .unwrap_or_else(|| config_dir().join("problems.json"))
    }
}

fn config_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("lchelper")
}

pub fn get_config_path() -> PathBuf {
    config_dir().join("config.json")
}

pub fn load_config() -> UserConfig {
    let path = get_config_path();
    if !path.exists() {
        return UserConfig::default();
    }

    match fs::read_to_string(&path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => UserConfig::default(),
    }
}
