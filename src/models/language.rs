use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Cpp,
    Py,
}

impl Language {
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::Cpp => "C++",
            Language::Py => "Python",
        }
    }

    /// Short tag used in project directory names.
    pub fn tag(&self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Py => "py",
        }
    }
}
