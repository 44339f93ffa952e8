mod functions;
mod section;
mod value;
mod vardef;

use std::collections::HashMap;

use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{Error, Result};
use crate::models::{
    Example, FunctionSignature, Interaction, InteractiveProblemSignature, Problem,
    ProblemSignature, Signature, SOLUTION_CLASS,
};

use functions::find_functions;
use section::locate_sections;
use value::parse_value;

/// Parse the signature and examples of a crawled problem.
///
/// A template with exactly one member function yields [`Signature::Single`];
/// anything more is an interactive problem.
pub fn parse_problem(problem: &Problem) -> Result<Signature> {
    let (class_name, signatures) = find_functions(&problem.code)?;

    match <[FunctionSignature; 1]>::try_from(signatures) {
        Ok([function]) => parse_single(problem, class_name, function).map(Signature::Single),
        Err(signatures) if signatures.is_empty() => Err(Error::NoFunctions { class_name }),
        Err(signatures) => {
            parse_interactive(problem, class_name, signatures).map(Signature::Interactive)
        }
    }
}

fn parse_single(
    problem: &Problem,
    class_name: String,
    function: FunctionSignature,
) -> Result<ProblemSignature> {
    if class_name != SOLUTION_CLASS {
        return Err(Error::UnexpectedClass {
            expected: SOLUTION_CLASS.to_string(),
            found: class_name,
        });
    }

    let examples = problem
        .examples
        .iter()
        .map(|example| parse_example(&problem.name, &function, example))
        .collect::<Result<Vec<_>>>()?;

    Ok(ProblemSignature { function, examples })
}

fn parse_example(problem: &str, function: &FunctionSignature, example: &str) -> Result<Example> {
    let sections = locate_sections(example)?;

    let mut rest = sections.input;
    let mut input = Map::new();
    for (idx, argument) in function.arguments.iter().enumerate() {
        if idx > 0 {
            if let Some(after_comma) = rest.strip_prefix(',') {
                rest = after_comma.trim_start();
            }
        }

        match split_assignment(rest) {
            Some((name, value)) => {
                if name != argument.name {
                    warn!(
                        problem = %problem,
                        expected = %argument.name,
                        found = %name,
                        "argument name does not match declaration"
                    );
                }
                rest = value;
            }
            // The first argument's name is sometimes omitted.
            None if idx > 0 => {
                warn!(
                    problem = %problem,
                    argument = %argument.name,
                    "unnamed argument in example input"
                );
            }
            None => {}
        }

        let (value, remaining) = parse_value(rest)?;
        input.insert(argument.name.clone(), value);
        rest = remaining;
    }
    warn_leftover(problem, "input", rest);

    let (output, rest) = parse_value(sections.output)?;
    warn_leftover(problem, "output", rest);

    Ok(Example { input, output })
}

/// Split `name = value...` into the name token and the text after `=`.
fn split_assignment(s: &str) -> Option<(&str, &str)> {
    let end = s
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(s.len());
    if end == 0 {
        return None;
    }
    let (name, rest) = s.split_at(end);
    let value = rest.trim_start().strip_prefix('=')?;
    Some((name, value.trim_start()))
}

fn parse_interactive(
    problem: &Problem,
    class_name: String,
    functions: Vec<FunctionSignature>,
) -> Result<InteractiveProblemSignature> {
    let func_map: HashMap<&str, &FunctionSignature> =
        functions.iter().map(|f| (f.name.as_str(), f)).collect();

    let examples = problem
        .examples
        .iter()
        .map(|example| parse_interactions(&problem.name, &func_map, example))
        .collect::<Result<Vec<_>>>()?;

    Ok(InteractiveProblemSignature {
        class_name,
        functions,
        examples,
    })
}

fn parse_interactions(
    problem: &str,
    func_map: &HashMap<&str, &FunctionSignature>,
    example: &str,
) -> Result<Vec<Interaction>> {
    let sections = locate_sections(example)?;

    let (names, rest) = parse_value(sections.input)?;
    let (arg_lists, rest) = parse_value(rest)?;
    warn_leftover(problem, "input", rest);
    let (ret_vals, rest) = parse_value(sections.output)?;
    warn_leftover(problem, "output", rest);

    let names = into_array(names, "function names")?;
    let arg_lists = into_array(arg_lists, "argument lists")?;
    let ret_vals = into_array(ret_vals, "return values")?;
    if names.len() != arg_lists.len() || names.len() != ret_vals.len() {
        warn!(
            problem = %problem,
            calls = names.len(),
            argument_lists = arg_lists.len(),
            return_values = ret_vals.len(),
            "interaction arrays have different lengths"
        );
    }

    names
        .into_iter()
        .zip(arg_lists)
        .zip(ret_vals)
        .map(|((name, args), ret)| {
            let name = match name {
                Value::String(name) => name,
                other => return Err(Error::UnknownFunction(other.to_string())),
            };
            let signature = func_map
                .get(name.as_str())
                .ok_or_else(|| Error::UnknownFunction(name.clone()))?;

            let args = into_array(args, "arguments")?;
            if args.len() != signature.arguments.len() {
                warn!(
                    problem = %problem,
                    function = %name,
                    expected = signature.arguments.len(),
                    found = args.len(),
                    "argument count does not match declaration"
                );
            }
            let input = signature
                .arguments
                .iter()
                .zip(args)
                .map(|(argument, value)| (argument.name.clone(), value))
                .collect();
            let output = match ret {
                Value::Null => None,
                value => Some(value),
            };

            Ok(Interaction {
                function: name,
                input,
                output,
            })
        })
        .collect()
}

fn into_array(value: Value, what: &'static str) -> Result<Vec<Value>> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(Error::NotAnArray {
            what,
            found: other.to_string(),
        }),
    }
}

fn warn_leftover(problem: &str, section: &str, rest: &str) {
    if !rest.is_empty() {
        warn!(
            problem = %problem,
            section = %section,
            leftover = %rest,
            "unconsumed text in example"
        );
    }
}
