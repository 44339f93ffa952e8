use crate::error::{Error, Result};

/// Section tags of one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagSet {
    pub input: &'static str,
    pub output: &'static str,
    pub explanation: &'static str,
}

/// Candidates in lookup order; the first set whose input tag occurs in an
/// example is used for the whole example.
pub const TAG_SETS: &[TagSet] = &[
    TagSet {
        input: "输入",
        output: "输出",
        explanation: "解释",
    },
    TagSet {
        input: "Input",
        output: "Output",
        explanation: "Explanation",
    },
];

const COLONS: &[char] = &[':', '：'];

pub fn select_tags(example: &str) -> &'static TagSet {
    TAG_SETS
        .iter()
        .find(|tags| example.contains(tags.input))
        .unwrap_or(&TAG_SETS[TAG_SETS.len() - 1])
}

/// Text between `cur_tag` (and an optional colon after it) and `next_tag`,
/// trimmed. Runs to the end of `s` when `next_tag` does not occur.
///
/// A missing `cur_tag` is an error when `required`, otherwise the section
/// starts at the beginning of `s`.
pub fn find_section<'a>(
    s: &'a str,
    cur_tag: &str,
    next_tag: Option<&str>,
    required: bool,
) -> Result<&'a str> {
    let start = match find_tag(s, cur_tag) {
        Some(pos) => {
            let after = pos + cur_tag.len();
            match s[after..].chars().next() {
                Some(c) if COLONS.contains(&c) => after + c.len_utf8(),
                _ => after,
            }
        }
        None if required => {
            return Err(Error::MissingTag {
                tag: cur_tag.to_string(),
            })
        }
        None => 0,
    };

    let end = next_tag
        .and_then(|tag| find_tag(&s[start..], tag))
        .map_or(s.len(), |offset| start + offset);

    Ok(s[start..end].trim())
}

/// Position of `tag`, preferring an occurrence that opens a line so that tag
/// words inside values are skipped.
fn find_tag(s: &str, tag: &str) -> Option<usize> {
    let opens_line = |pos: usize| {
        let line_start = s[..pos].rfind('\n').map_or(0, |nl| nl + 1);
        s[line_start..pos].trim().is_empty()
    };
    s.match_indices(tag)
        .map(|(pos, _)| pos)
        .find(|&pos| opens_line(pos))
        .or_else(|| s.find(tag))
}

/// Input and output sections of one raw example block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections<'a> {
    pub input: &'a str,
    pub output: &'a str,
}

pub fn locate_sections(example: &str) -> Result<Sections<'_>> {
    let tags = select_tags(example);
    let input = find_section(example, tags.input, Some(tags.output), true)?;
    let output = find_section(example, tags.output, Some(tags.explanation), true)?;
    Ok(Sections { input, output })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_with_colons() {
        let example = "  Input: x = [1,2]  \nOutput: 3\n  ";
        let sections = locate_sections(example).unwrap();
        assert_eq!(sections.input, "x = [1,2]");
        assert_eq!(sections.output, "3");
    }

    #[test]
    fn test_english_without_colons() {
        let example = "Input\n[\"A\",\"b\"]\n[[],[]]\nOutput\n[null,1]\nExplanation\nA a = new A();";
        let sections = locate_sections(example).unwrap();
        assert_eq!(sections.input, "[\"A\",\"b\"]\n[[],[]]");
        assert_eq!(sections.output, "[null,1]");
    }

    #[test]
    fn test_secondary_locale_full_width_colon() {
        let example = "输入：nums = [3,6,5,1,8]\n输出：18\n解释：选出数字 3, 6, 1 和 8";
        let sections = locate_sections(example).unwrap();
        assert_eq!(sections.input, "nums = [3,6,5,1,8]");
        assert_eq!(sections.output, "18");
        assert_eq!(select_tags(example).explanation, "解释");
    }

    #[test]
    fn test_tag_word_inside_value_is_skipped() {
        let example = "Input: s = \"Output\", k = 2\nOutput: \"tuptuO\"";
        let sections = locate_sections(example).unwrap();
        assert_eq!(sections.input, "s = \"Output\", k = 2");
        assert_eq!(sections.output, "\"tuptuO\"");
    }

    #[test]
    fn test_next_tag_on_same_line() {
        let s = "Input: x = 1 Output: 2";
        assert_eq!(find_section(s, "Input", Some("Output"), true).unwrap(), "x = 1");
    }

    #[test]
    fn test_missing_next_tag_runs_to_end() {
        let s = "Output: [1, 2]  ";
        assert_eq!(find_section(s, "Output", Some("Explanation"), true).unwrap(), "[1, 2]");
    }

    #[test]
    fn test_optional_missing_tag_starts_at_beginning() {
        let s = "x = 1\nOutput: 2";
        assert_eq!(find_section(s, "Input", Some("Output"), false).unwrap(), "x = 1");
        assert!(matches!(
            find_section(s, "Input", Some("Output"), true),
            Err(Error::MissingTag { .. })
        ));
    }
}
