use thiserror::Error;

/// Failures that abort processing of a single problem, plus the I/O errors of
/// the cache, config and project writer.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no class definition found in template code")]
    NoClass,

    #[error("class '{class_name}' is never closed (expected a line '}};')")]
    UnclosedClass { class_name: String },

    #[error("no member functions found in class '{class_name}'")]
    NoFunctions { class_name: String },

    #[error("expected class '{expected}', found '{found}'")]
    UnexpectedClass { expected: String, found: String },

    #[error("tag '{tag}' not found in example")]
    MissingTag { tag: String },

    #[error("failed to parse value from '{input}'")]
    InvalidValue {
        input: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("expected an array of {what}, found '{found}'")]
    NotAnArray { what: &'static str, found: String },

    #[error("example calls unknown function '{0}'")]
    UnknownFunction(String),

    #[error("template section '{0}' not found")]
    MissingSection(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
