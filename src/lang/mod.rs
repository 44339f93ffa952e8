mod cpp;
mod python;

use serde_json::Value;

use crate::error::{Error, Result};
use crate::models::{
    remove_cv_ref, FunctionSignature, InteractiveProblemSignature, Language, Problem,
    ProblemSignature, Signature, TemplateType, SOLUTION_CLASS,
};
use crate::parser::parse_problem;
use crate::project::ProjectFile;

pub use cpp::CppCodeGen;
pub use python::PythonCodeGen;

/// Lines of generated source code.
pub type Code = Vec<String>;

/// Name of the solution instance inside generated tests.
const INSTANCE: &str = "_sol";

/// Rendered statement lines never exceed this many columns.
const STATEMENT_WIDTH: usize = 100;

pub fn create_codegen(lang: Language) -> Box<dyn CodeGen> {
    match lang {
        Language::Cpp => Box::new(CppCodeGen),
        Language::Py => Box::new(PythonCodeGen),
    }
}

/// Per-language generation. Implementors supply the syntax; everything that
/// decides *what* to emit lives in the provided methods.
pub trait CodeGen {
    fn language(&self) -> &'static str;

    /// File extension without the dot.
    fn extension(&self) -> &'static str;

    fn line_comment(&self) -> &'static str;

    /// Project template containing the `BEGIN`/`END` section markers.
    fn template_code(&self) -> &'static str;

    /// Prelude spliced into the optional `USER TEMPLATE` section.
    fn user_template_code(&self) -> &'static str {
        ""
    }

    /// Files copied verbatim into every project.
    fn extra_files(&self) -> Vec<ProjectFile> {
        Vec::new()
    }

    /// Build descriptor listing one target per generated file.
    fn build_descriptor(&self, _file_names: &[String]) -> Option<ProjectFile> {
        None
    }

    fn solution_code(&self, problem: &Problem, signature: &Signature) -> Code;

    // --- literals ---

    fn list_literal(&self, items: Vec<String>) -> String;

    fn map_literal(&self, entries: Vec<(String, String)>) -> String;

    fn char_literal(&self, s: &str) -> String;

    fn bool_literal(&self, b: bool) -> String;

    fn null_literal(&self) -> &'static str;

    /// Marker for a missing node in a level-order tree array.
    fn absent_node(&self) -> &'static str;

    /// Expression building a tree from rendered level-order nodes.
    fn tree_literal(&self, nodes: Vec<String>) -> String;

    // --- statements ---

    /// `ty` is the template spelling of the type.
    fn declare_assign(&self, ty: &str, name: &str, value: &str) -> String;

    /// Declaration of several variables of one type, if the language needs one.
    fn declare(&self, ty: &str, names: &[String]) -> Option<String>;

    fn assign(&self, name: &str, value: &str) -> String;

    fn construct(&self, class_name: &str, instance: &str, args: &[String]) -> String;

    fn statement(&self, expr: String) -> String;

    /// Function comparing `(message, expected, actual)` and printing the verdict.
    fn report_function(&self) -> &'static str;

    fn test_function_name(&self, idx: usize) -> String;

    /// Wrap `body` in a test function; with `solution_class` the function
    /// receives the shared solution instance.
    fn test_function(&self, name: &str, solution_class: Option<&str>, body: Code) -> Code;

    /// Entry point calling every test function.
    fn driver(&self, test_names: &[String], solution_class: Option<&str>) -> Code;

    // --- provided ---

    fn string_literal(&self, s: &str) -> String {
        Value::String(s.to_string()).to_string()
    }

    /// Render `value` as a literal of the template type `ty`.
    fn format_value(&self, value: &Value, ty: &TemplateType) -> String {
        match (ty, value) {
            (TemplateType::TreeNode, Value::Array(nodes)) => self.tree_literal(
                nodes
                    .iter()
                    .map(|node| match node {
                        Value::Null => self.absent_node().to_string(),
                        other => self.untyped_value(other),
                    })
                    .collect(),
            ),
            (TemplateType::TreeNode, Value::Null) => self.tree_literal(Vec::new()),
            (TemplateType::Vector(inner), Value::Array(items)) => self.list_literal(
                items
                    .iter()
                    .map(|item| self.format_value(item, inner))
                    .collect(),
            ),
            (TemplateType::Char, Value::String(s)) => self.char_literal(s),
            _ => self.untyped_value(value),
        }
    }

    /// Render `value` by its own shape.
    fn untyped_value(&self, value: &Value) -> String {
        match value {
            Value::Null => self.null_literal().to_string(),
            Value::Bool(b) => self.bool_literal(*b),
            Value::Number(n) => n.to_string(),
            Value::String(s) => self.string_literal(s),
            Value::Array(items) => {
                self.list_literal(items.iter().map(|v| self.untyped_value(v)).collect())
            }
            Value::Object(entries) => self.map_literal(
                entries
                    .iter()
                    .map(|(k, v)| (self.string_literal(k), self.untyped_value(v)))
                    .collect(),
            ),
        }
    }

    /// Solution scaffold and test harness for one problem.
    fn generate_code(&self, problem: &Problem, signature: &Signature) -> (Code, Code) {
        let solution_code = self.solution_code(problem, signature);

        let (test_functions, driver) = match signature {
            Signature::Single(sig) => self.single_tests(problem, sig),
            Signature::Interactive(sig) => self.interactive_tests(problem, sig),
        };

        let mut blocks = test_functions;
        blocks.push(driver);
        (solution_code, list_join(blocks, &["", ""]))
    }

    fn single_tests(&self, problem: &Problem, sig: &ProblemSignature) -> (Vec<Code>, Code) {
        let func = &sig.function;
        let ret_ty = TemplateType::parse(&func.return_type);
        let args: Vec<String> = func.arguments.iter().map(|a| a.name.clone()).collect();

        let mut names = Vec::new();
        let mut functions = Vec::new();
        for (idx, example) in sig.examples.iter().enumerate() {
            let mut body = Vec::new();
            for arg in &func.arguments {
                let value = example.input.get(&arg.name).unwrap_or(&Value::Null);
                let literal = self.format_value(value, &TemplateType::parse(&arg.ty));
                body.push(self.declare_assign(&arg.ty, &arg.name, &literal));
            }

            let message = self.string_literal(&format!("{} - Example {}", problem.name, idx));
            let invocation = method_call(INSTANCE, &func.name, &args);
            if ret_ty.is_void() {
                // In-place problems: compare the first reference argument.
                body.push(self.statement(invocation));
                if let Some(arg) = func.arguments.iter().find(|a| a.ty.trim_end().ends_with('&')) {
                    let expected =
                        self.format_value(&example.output, &TemplateType::parse(&arg.ty));
                    body.push(self.declare_assign(&arg.ty, "_ret_ans", &expected));
                    body.push(self.statement(call(
                        self.report_function(),
                        &[message, "_ret_ans".to_string(), arg.name.clone()],
                    )));
                }
            } else {
                let expected = self.format_value(&example.output, &ret_ty);
                body.push(self.declare_assign(&func.return_type, "_ret_ans", &expected));
                body.push(self.declare_assign(&func.return_type, "_ret", &invocation));
                body.push(self.statement(call(
                    self.report_function(),
                    &[message, "_ret_ans".to_string(), "_ret".to_string()],
                )));
            }

            let name = self.test_function_name(idx);
            functions.push(self.test_function(&name, Some(SOLUTION_CLASS), body));
            names.push(name);
        }

        (functions, self.driver(&names, Some(SOLUTION_CLASS)))
    }

    fn interactive_tests(
        &self,
        problem: &Problem,
        sig: &InteractiveProblemSignature,
    ) -> (Vec<Code>, Code) {
        let mut names = Vec::new();
        let mut functions = Vec::new();
        for (idx, example) in sig.examples.iter().enumerate() {
            let used: Vec<&FunctionSignature> = sig
                .functions
                .iter()
                .filter(|f| example.iter().any(|i| i.function == f.name))
                .collect();
            let mut body: Code = group_declarations(&used)
                .into_iter()
                .filter_map(|(ty, vars)| self.declare(&ty, &vars))
                .collect();

            for (ex_idx, interaction) in example.iter().enumerate() {
                let Some(func) = sig.function(&interaction.function) else {
                    continue;
                };

                let args: Vec<String> = func
                    .arguments
                    .iter()
                    .map(|a| variable_name(func, &a.name))
                    .collect();
                for (arg, var) in func.arguments.iter().zip(&args) {
                    let value = interaction.input.get(&arg.name).unwrap_or(&Value::Null);
                    let literal = self.format_value(value, &TemplateType::parse(&arg.ty));
                    body.push(self.assign(var, &literal));
                }

                let invocation = method_call(INSTANCE, &func.name, &args);
                if sig.is_constructor(&interaction.function) {
                    body.push(self.construct(&sig.class_name, INSTANCE, &args));
                    continue;
                }

                let ret_ty = TemplateType::parse(&func.return_type);
                if ret_ty.is_void() {
                    body.push(self.statement(invocation));
                    continue;
                }

                let expected_var = format!("_ret_ans{}", ex_idx);
                let actual_var = format!("_ret{}", ex_idx);
                let expected = interaction.output.as_ref().unwrap_or(&Value::Null);
                let message = self.string_literal(&format!(
                    "{} - Example {} - Interaction {}",
                    problem.name, idx, ex_idx
                ));
                body.push(self.declare_assign(
                    &func.return_type,
                    &expected_var,
                    &self.format_value(expected, &ret_ty),
                ));
                body.push(self.declare_assign(&func.return_type, &actual_var, &invocation));
                body.push(self.statement(call(
                    self.report_function(),
                    &[message, expected_var, actual_var],
                )));
            }

            let name = self.test_function_name(idx);
            functions.push(self.test_function(&name, None, body));
            names.push(name);
        }

        (functions, self.driver(&names, None))
    }

    /// The statement as a comment block, hard-wrapped to the column budget.
    fn statement_comment(&self, statement: &str) -> Code {
        let comment = self.line_comment();
        let width = STATEMENT_WIDTH.saturating_sub(comment.chars().count() + 1).max(1);

        let mut code = Vec::new();
        for line in statement.lines() {
            let chars: Vec<char> = line.trim_end().chars().collect();
            if chars.is_empty() {
                code.push(comment.to_string());
                continue;
            }
            for chunk in chars.chunks(width) {
                code.push(format!("{} {}", comment, chunk.iter().collect::<String>()));
            }
        }
        code
    }

    /// Parse one problem and splice the generated code into the template.
    fn render_problem(&self, problem: &Problem) -> Result<String> {
        let signature = parse_problem(problem)?;
        let (solution_code, test_code) = self.generate_code(problem, &signature);

        let comment = self.line_comment();
        let mut code = template_lines(self.template_code());
        code = replace_section(
            code,
            comment,
            "USER TEMPLATE",
            &template_lines(self.user_template_code()),
            true,
        )?;
        code = replace_section(code, comment, "SOLUTION CLASS", &solution_code, false)?;
        code = replace_section(
            code,
            comment,
            "STATEMENT",
            &self.statement_comment(&problem.statement),
            true,
        )?;
        code = replace_section(code, comment, "TEST", &test_code, false)?;

        let mut contents = code.join("\n");
        contents.push('\n');
        Ok(contents)
    }
}

fn call(func_name: &str, args: &[String]) -> String {
    format!("{}({})", func_name, args.join(", "))
}

fn method_call(instance: &str, func_name: &str, args: &[String]) -> String {
    format!("{}.{}", instance, call(func_name, args))
}

/// Local variable holding `arg` of `func` in interactive tests.
fn variable_name(func: &FunctionSignature, arg: &str) -> String {
    format!("{}_{}", func.name, arg)
}

/// Variables of the given functions grouped by declared type, in first-seen
/// order.
fn group_declarations(functions: &[&FunctionSignature]) -> Vec<(String, Vec<String>)> {
    let mut groups: Vec<(String, Vec<String>)> = Vec::new();
    for func in functions {
        for arg in &func.arguments {
            let ty = remove_cv_ref(&arg.ty);
            let var = variable_name(func, &arg.name);
            match groups.iter_mut().find(|(t, _)| *t == ty) {
                Some((_, vars)) => vars.push(var),
                None => groups.push((ty, vec![var])),
            }
        }
    }
    groups
}

fn indent(body: Code) -> impl Iterator<Item = String> {
    body.into_iter().map(|line| {
        if line.is_empty() {
            line
        } else {
            format!("    {}", line)
        }
    })
}

fn list_join(blocks: Vec<Code>, separator: &[&str]) -> Code {
    let mut code = Vec::new();
    for (idx, block) in blocks.into_iter().enumerate() {
        if idx > 0 {
            code.extend(separator.iter().map(|s| s.to_string()));
        }
        code.extend(block);
    }
    code
}

fn template_lines(template: &str) -> Code {
    template
        .trim_start_matches('\n')
        .lines()
        .map(str::to_string)
        .collect()
}

/// Replace the lines strictly between `<comment> BEGIN <name>` and the next
/// `<comment> END <name>` with `replacement`.
pub fn replace_section(
    code: Code,
    comment: &str,
    name: &str,
    replacement: &[String],
    optional: bool,
) -> Result<Code> {
    let begin = format!("{} BEGIN {}", comment, name);
    let end = format!("{} END {}", comment, name);

    let span = code.iter().position(|line| *line == begin).and_then(|start| {
        code[start + 1..]
            .iter()
            .position(|line| *line == end)
            .map(|offset| (start, start + 1 + offset))
    });

    match span {
        Some((start, stop)) => {
            let mut spliced = Vec::with_capacity(code.len() + replacement.len());
            spliced.extend_from_slice(&code[..=start]);
            spliced.extend_from_slice(replacement);
            spliced.extend_from_slice(&code[stop..]);
            Ok(spliced)
        }
        None if optional => Ok(code),
        None => Err(Error::MissingSection(name.to_string())),
    }
}
