pub mod cache;
pub mod config;
pub mod language;
pub mod problem;
pub mod signature;
pub mod types;

pub use cache::ProblemCache;
pub use language::Language;
pub use problem::Problem;
pub use signature::{
    Argument, Example, FunctionSignature, Interaction, InteractiveProblemSignature,
    ProblemSignature, Signature, SOLUTION_CLASS,
};
pub use types::{remove_cv_ref, TemplateType};
