use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::models::{Argument, FunctionSignature};

use super::vardef::parse_vardef;

const CLASS_KEYWORDS: &[&str] = &["class ", "struct "];
const CLASS_END: &str = "};";
const INDENT: &str = "    ";

/// Find the solution class in the template and parse the signatures of its
/// member functions, in declaration order.
///
/// Candidate functions are lines inside the class body indented by exactly one
/// level and ending with `{`. This is a heuristic and relies on the template
/// being formatted the way contest sites serve it.
pub fn find_functions(code: &[String]) -> Result<(String, Vec<FunctionSignature>)> {
    let (start_line, class_name) = code
        .iter()
        .enumerate()
        .find_map(|(idx, line)| class_header(line).map(|name| (idx, name)))
        .ok_or(Error::NoClass)?;

    let end_line = code[start_line + 1..]
        .iter()
        .position(|line| line.trim_end() == CLASS_END)
        .map(|offset| start_line + 1 + offset)
        .ok_or_else(|| Error::UnclosedClass {
            class_name: class_name.clone(),
        })?;

    let mut signatures = Vec::new();
    for line in &code[start_line + 1..end_line] {
        let line = line.trim_end();
        if !is_member_line(line) {
            continue;
        }

        let Some(paren_open) = line.find('(') else {
            debug!(line = %line, "skipping nested block without a parameter list");
            continue;
        };
        let Some(paren_close) = find_matching_paren(line, paren_open) else {
            warn!(line = %line, "unmatched parenthesis in function declaration, skipping");
            continue;
        };

        let (return_type, name) = parse_vardef(&line[..paren_open]);
        let arguments = split_top_level(&line[paren_open + 1..paren_close])
            .into_iter()
            .map(|fragment| {
                let (ty, name) = parse_vardef(fragment);
                Argument::new(ty, name)
            })
            .collect();

        signatures.push(FunctionSignature::new(name, arguments, return_type));
    }

    Ok((class_name, signatures))
}

fn class_header(line: &str) -> Option<String> {
    let line = line.trim_end();
    let body = CLASS_KEYWORDS
        .iter()
        .find_map(|keyword| line.strip_prefix(keyword))?
        .strip_suffix('{')?;
    let name: String = body
        .trim()
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

fn is_member_line(line: &str) -> bool {
    let Some(rest) = line.strip_prefix(INDENT) else {
        return false;
    };
    match rest.chars().next() {
        Some(c) if !c.is_whitespace() => line.ends_with('{'),
        _ => false,
    }
}

fn find_matching_paren(s: &str, open: usize) -> Option<usize> {
    let mut depth = 0;
    for (i, c) in s[open..].char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(open + i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split a parameter list on commas that are not nested inside `<>` or `()`.
fn split_top_level(s: &str) -> Vec<&str> {
    if s.trim().is_empty() {
        return Vec::new();
    }

    let mut parts = Vec::new();
    let mut depth = 0i32;
    let mut start = 0;

    for (i, c) in s.char_indices() {
        match c {
            '<' | '(' => depth += 1,
            '>' | ')' => depth -= 1,
            ',' if depth == 0 => {
                parts.push(&s[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }

    parts.push(&s[start..]);
    parts
}
