use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Argument {
    /// Type as spelled in the template, e.g. `vector<int>&`.
    pub ty: String,
    pub name: String,
}

impl Argument {
    pub fn new(ty: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionSignature {
    pub name: String,
    pub arguments: Vec<Argument>,
    /// For constructors this is the class name itself.
    pub return_type: String,
}

impl FunctionSignature {
    pub fn new(
        name: impl Into<String>,
        arguments: Vec<Argument>,
        return_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            arguments,
            return_type: return_type.into(),
        }
    }
}

/// One input/output pair of a single-function problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Example {
    pub input: Map<String, Value>,
    pub output: Value,
}

/// One call within an example of an interactive problem.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Interaction {
    pub function: String,
    pub input: Map<String, Value>,
    pub output: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProblemSignature {
    pub function: FunctionSignature,
    pub examples: Vec<Example>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractiveProblemSignature {
    pub class_name: String,
    pub functions: Vec<FunctionSignature>,
    pub examples: Vec<Vec<Interaction>>,
}

impl InteractiveProblemSignature {
    pub fn function(&self, name: &str) -> Option<&FunctionSignature> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn is_constructor(&self, function: &str) -> bool {
        function == self.class_name
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Signature {
    Single(ProblemSignature),
    Interactive(InteractiveProblemSignature),
}

impl Signature {
    pub fn class_name(&self) -> &str {
        match self {
            Signature::Single(_) => SOLUTION_CLASS,
            Signature::Interactive(sig) => &sig.class_name,
        }
    }

    pub fn functions(&self) -> &[FunctionSignature] {
        match self {
            Signature::Single(sig) => std::slice::from_ref(&sig.function),
            Signature::Interactive(sig) => &sig.functions,
        }
    }

    pub fn example_count(&self) -> usize {
        match self {
            Signature::Single(sig) => sig.examples.len(),
            Signature::Interactive(sig) => sig.examples.len(),
        }
    }
}

/// Class name every single-function template uses.
pub const SOLUTION_CLASS: &str = "Solution";

#[cfg(test)]
mod tests {
    use super::*;

    fn find_elements() -> InteractiveProblemSignature {
        InteractiveProblemSignature {
            class_name: "FindElements".to_string(),
            functions: vec![
                FunctionSignature::new(
                    "FindElements",
                    vec![Argument::new("TreeNode*", "root")],
                    "FindElements",
                ),
                FunctionSignature::new("find", vec![Argument::new("int", "target")], "bool"),
            ],
            examples: vec![],
        }
    }

    #[test]
    fn test_constructor_detected_by_class_name() {
        let sig = find_elements();
        assert!(sig.is_constructor("FindElements"));
        assert!(!sig.is_constructor("find"));
        assert_eq!(sig.function("find").unwrap().return_type, "bool");
        assert!(sig.function("missing").is_none());
    }

    #[test]
    fn test_signature_accessors() {
        let single = Signature::Single(ProblemSignature {
            function: FunctionSignature::new("maxSumDivThree", vec![], "int"),
            examples: vec![],
        });
        assert_eq!(single.class_name(), "Solution");
        assert_eq!(single.functions().len(), 1);

        let interactive = Signature::Interactive(find_elements());
        assert_eq!(interactive.class_name(), "FindElements");
        assert_eq!(interactive.functions().len(), 2);
        assert_eq!(interactive.example_count(), 0);
    }
}
