use crate::models::{Problem, Signature, TemplateType};

use super::{indent, list_join, Code, CodeGen, INSTANCE};

pub struct PythonCodeGen;

const TEMPLATE: &str = r#"
from typing import *

class TreeNode:
    def __init__(self, x):
        self.val = x
        self.left = None
        self.right = None

# BEGIN SUBMIT

# BEGIN USER TEMPLATE

# END USER TEMPLATE

# BEGIN SOLUTION CLASS

# END SOLUTION CLASS

# END SUBMIT

# BEGIN STATEMENT

# END STATEMENT


def _construct_tree(parent: List[Optional[int]]) -> Optional[TreeNode]:
    from collections import deque
    q: 'deque[TreeNode]' = deque()
    ptr = 0

    def _add_node() -> Optional[TreeNode]:
        nonlocal ptr
        if ptr >= len(parent):
            return None
        val = parent[ptr]
        ptr += 1
        if val is None:
            return None
        p = TreeNode(val)
        q.append(p)
        return p

    root = _add_node()
    while q:
        p = q.popleft()
        p.left = _add_node()
        p.right = _add_node()
    return root


def evaluate(msg: str, a, b):
    if a == b:
        print(f"{msg} [OK]")
    else:
        print(f"{msg} [WRONG]")
        print(f"Expected: {a!r}")
        print(f"Received: {b!r}")


# BEGIN TEST

# END TEST
"#;

/// Python type hint for a template type.
fn type_hint(ty: &TemplateType) -> String {
    match ty {
        TemplateType::Void => "None".to_string(),
        TemplateType::Bool => "bool".to_string(),
        TemplateType::Char | TemplateType::Str => "str".to_string(),
        TemplateType::Integer => "int".to_string(),
        TemplateType::Float => "float".to_string(),
        TemplateType::Vector(inner) => format!("List[{}]", type_hint(inner)),
        TemplateType::TreeNode => "TreeNode".to_string(),
        TemplateType::Other(name) => name.trim_end_matches(['*', '&', ' ']).to_string(),
    }
}

impl CodeGen for PythonCodeGen {
    fn language(&self) -> &'static str {
        "Python"
    }

    fn extension(&self) -> &'static str {
        "py"
    }

    fn line_comment(&self) -> &'static str {
        "#"
    }

    fn template_code(&self) -> &'static str {
        TEMPLATE
    }

    /// A class skeleton translated from the C++ template's signatures.
    fn solution_code(&self, _problem: &Problem, signature: &Signature) -> Code {
        let class_name = signature.class_name();
        let methods: Vec<Code> = signature
            .functions()
            .iter()
            .map(|func| {
                let args: String = func
                    .arguments
                    .iter()
                    .map(|a| format!(", {}: {}", a.name, type_hint(&TemplateType::parse(&a.ty))))
                    .collect();
                let header = if func.name == class_name {
                    format!("    def __init__(self{}):", args)
                } else {
                    format!(
                        "    def {}(self{}) -> {}:",
                        func.name,
                        args,
                        type_hint(&TemplateType::parse(&func.return_type))
                    )
                };
                vec![header, "        pass".to_string()]
            })
            .collect();

        let mut code = vec![format!("class {}:", class_name)];
        code.extend(list_join(methods, &[""]));
        code
    }

    fn list_literal(&self, items: Vec<String>) -> String {
        format!("[{}]", items.join(", "))
    }

    fn map_literal(&self, entries: Vec<(String, String)>) -> String {
        let entries: Vec<String> = entries
            .into_iter()
            .map(|(k, v)| format!("{}: {}", k, v))
            .collect();
        format!("{{{}}}", entries.join(", "))
    }

    fn char_literal(&self, s: &str) -> String {
        self.string_literal(s)
    }

    fn bool_literal(&self, b: bool) -> String {
        let literal = if b { "True" } else { "False" };
        literal.to_string()
    }

    fn null_literal(&self) -> &'static str {
        "None"
    }

    fn absent_node(&self) -> &'static str {
        "None"
    }

    fn tree_literal(&self, nodes: Vec<String>) -> String {
        format!("_construct_tree({})", self.list_literal(nodes))
    }

    fn declare_assign(&self, _ty: &str, name: &str, value: &str) -> String {
        self.assign(name, value)
    }

    fn declare(&self, _ty: &str, _names: &[String]) -> Option<String> {
        None
    }

    fn assign(&self, name: &str, value: &str) -> String {
        format!("{} = {}", name, value)
    }

    fn construct(&self, class_name: &str, instance: &str, args: &[String]) -> String {
        format!("{} = {}({})", instance, class_name, args.join(", "))
    }

    fn statement(&self, expr: String) -> String {
        expr
    }

    fn report_function(&self) -> &'static str {
        "evaluate"
    }

    fn test_function_name(&self, idx: usize) -> String {
        format!("eval_example_{}", idx)
    }

    fn test_function(&self, name: &str, solution_class: Option<&str>, body: Code) -> Code {
        let params = solution_class
            .map(|class| format!("{}: {}", INSTANCE, class))
            .unwrap_or_default();
        let mut code = vec![format!("def {}({}):", name, params)];
        if body.is_empty() {
            code.push("    pass".to_string());
        } else {
            code.extend(indent(body));
        }
        code
    }

    fn driver(&self, test_names: &[String], solution_class: Option<&str>) -> Code {
        let mut body = Vec::new();
        let arg = match solution_class {
            Some(class) => {
                body.push(format!("{} = {}()", INSTANCE, class));
                INSTANCE
            }
            None => "",
        };
        body.extend(test_names.iter().map(|name| format!("{}({})", name, arg)));
        if body.is_empty() {
            body.push("pass".to_string());
        }

        let mut code = vec!["def main():".to_string()];
        code.extend(indent(body));
        code.extend([
            String::new(),
            String::new(),
            "if __name__ == '__main__':".to_string(),
            "    main()".to_string(),
        ]);
        code
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        Argument, Example, FunctionSignature, Interaction, InteractiveProblemSignature,
        ProblemSignature,
    };
    use serde_json::{json, Map, Value};

    fn input(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_type_hints() {
        assert_eq!(
            type_hint(&TemplateType::parse("vector<vector<int>>&")),
            "List[List[int]]"
        );
        assert_eq!(type_hint(&TemplateType::parse("const string&")), "str");
        assert_eq!(type_hint(&TemplateType::parse("long long")), "int");
        assert_eq!(type_hint(&TemplateType::parse("TreeNode*")), "TreeNode");
        assert_eq!(type_hint(&TemplateType::parse("ListNode*")), "ListNode");
        assert_eq!(type_hint(&TemplateType::parse("void")), "None");
    }

    #[test]
    fn test_single_function_code() {
        let problem = Problem::new("", "Greatest Sum Divisible by Three", "", vec![], vec![]);
        let signature = Signature::Single(ProblemSignature {
            function: FunctionSignature::new(
                "maxSumDivThree",
                vec![Argument::new("vector<int>&", "nums")],
                "int",
            ),
            examples: vec![
                Example {
                    input: input(&[("nums", json!([3, 6, 5, 1, 8]))]),
                    output: json!(18),
                },
                Example {
                    input: input(&[("nums", json!([4]))]),
                    output: json!(0),
                },
            ],
        });

        let (solution, test) = PythonCodeGen.generate_code(&problem, &signature);
        assert_eq!(
            solution,
            vec![
                "class Solution:",
                "    def maxSumDivThree(self, nums: List[int]) -> int:",
                "        pass",
            ]
        );
        assert_eq!(
            test,
            vec![
                "def eval_example_0(_sol: Solution):",
                "    nums = [3, 6, 5, 1, 8]",
                "    _ret_ans = 18",
                "    _ret = _sol.maxSumDivThree(nums)",
                "    evaluate(\"Greatest Sum Divisible by Three - Example 0\", _ret_ans, _ret)",
                "",
                "",
                "def eval_example_1(_sol: Solution):",
                "    nums = [4]",
                "    _ret_ans = 0",
                "    _ret = _sol.maxSumDivThree(nums)",
                "    evaluate(\"Greatest Sum Divisible by Three - Example 1\", _ret_ans, _ret)",
                "",
                "",
                "def main():",
                "    _sol = Solution()",
                "    eval_example_0(_sol)",
                "    eval_example_1(_sol)",
                "",
                "",
                "if __name__ == '__main__':",
                "    main()",
            ]
        );
    }

    #[test]
    fn test_interactive_code() {
        let problem = Problem::new("", "Find Elements", "", vec![], vec![]);
        let signature = Signature::Interactive(InteractiveProblemSignature {
            class_name: "FindElements".to_string(),
            functions: vec![
                FunctionSignature::new(
                    "FindElements",
                    vec![Argument::new("TreeNode*", "root")],
                    "FindElements",
                ),
                FunctionSignature::new("find", vec![Argument::new("int", "target")], "bool"),
            ],
            examples: vec![vec![
                Interaction {
                    function: "FindElements".to_string(),
                    input: input(&[("root", json!([-1, null, -1]))]),
                    output: None,
                },
                Interaction {
                    function: "find".to_string(),
                    input: input(&[("target", json!(2))]),
                    output: Some(json!(true)),
                },
            ]],
        });

        let (solution, test) = PythonCodeGen.generate_code(&problem, &signature);
        assert_eq!(
            solution,
            vec![
                "class FindElements:",
                "    def __init__(self, root: TreeNode):",
                "        pass",
                "",
                "    def find(self, target: int) -> bool:",
                "        pass",
            ]
        );
        assert_eq!(
            &test[..7],
            &[
                "def eval_example_0():",
                "    FindElements_root = _construct_tree([-1, None, -1])",
                "    _sol = FindElements(FindElements_root)",
                "    find_target = 2",
                "    _ret_ans1 = True",
                "    _ret1 = _sol.find(find_target)",
                "    evaluate(\"Find Elements - Example 0 - Interaction 1\", _ret_ans1, _ret1)",
            ]
        );
        assert_eq!(test[9], "def main():");
        assert_eq!(test[10], "    eval_example_0()");
    }

    #[test]
    fn test_literals() {
        let gen = PythonCodeGen;
        assert_eq!(
            gen.format_value(&json!([true, false]), &TemplateType::parse("vector<bool>")),
            "[True, False]"
        );
        assert_eq!(gen.format_value(&json!("a"), &TemplateType::Char), "\"a\"");
        assert_eq!(gen.untyped_value(&json!({"k": null})), "{\"k\": None}");
    }

    #[test]
    fn test_render_problem_without_build_descriptor() {
        let problem = Problem::new(
            "",
            "Greatest Sum Divisible by Three",
            "Given an array nums of integers.",
            vec!["Input: nums = [4]\nOutput: 0".to_string()],
            vec![
                "class Solution {".to_string(),
                "public:".to_string(),
                "    int maxSumDivThree(vector<int>& nums) {".to_string(),
                "    }".to_string(),
                "};".to_string(),
            ],
        );
        let contents = PythonCodeGen.render_problem(&problem).unwrap();
        assert!(contents.contains("# BEGIN SOLUTION CLASS\nclass Solution:\n"));
        assert!(contents.contains("# Given an array nums of integers.\n"));
        assert!(contents.contains("    nums = [4]\n"));
        assert!(PythonCodeGen.build_descriptor(&["A.py".to_string()]).is_none());
        assert!(PythonCodeGen.extra_files().is_empty());
    }
}
