use serde::{Deserialize, Serialize};

/// Raw description of a problem as scraped from the contest page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub url: String,
    pub name: String,
    /// Full statement, including examples and constraints.
    pub statement: String,
    /// Raw example blocks: inputs, outputs and possibly explanations.
    pub examples: Vec<String>,
    /// Template code, one entry per line.
    pub code: Vec<String>,
}

#[cfg(test)]
impl Problem {
    pub fn new(
        url: impl Into<String>,
        name: impl Into<String>,
        statement: impl Into<String>,
        examples: Vec<String>,
        code: Vec<String>,
    ) -> Self {
        Self {
            url: url.into(),
            name: name.into(),
            statement: statement.into(),
            examples,
            code,
        }
    }
}
