fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Split a declaration fragment into `(type, identifier)`.
///
/// `TreeNode *node` gives `("TreeNode *", "node")`. A fragment that is a bare
/// identifier, as in a constructor line, is returned as both type and name.
pub fn parse_vardef(s: &str) -> (String, String) {
    let s = s.trim();
    let boundary = s
        .char_indices()
        .rev()
        .find(|&(_, c)| !is_identifier_char(c))
        .map(|(idx, c)| idx + c.len_utf8());

    match boundary {
        Some(boundary) => (
            s[..boundary].trim().to_string(),
            s[boundary..].trim().to_string(),
        ),
        None => (s.to_string(), s.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(s: &str) -> (String, String) {
        parse_vardef(s)
    }

    #[test]
    fn test_nested_generic_reference() {
        assert_eq!(
            split("vector<vector<int>>& grid"),
            ("vector<vector<int>>&".to_string(), "grid".to_string())
        );
    }

    #[test]
    fn test_pointer_with_space() {
        assert_eq!(
            split("  TreeNode *node "),
            ("TreeNode *".to_string(), "node".to_string())
        );
    }

    #[test]
    fn test_multi_word_type() {
        assert_eq!(
            split("const unsigned long long value_2"),
            ("const unsigned long long".to_string(), "value_2".to_string())
        );
    }

    #[test]
    fn test_bare_constructor() {
        assert_eq!(
            split("    FindElements"),
            ("FindElements".to_string(), "FindElements".to_string())
        );
    }

    #[test]
    fn test_return_type_and_name() {
        assert_eq!(split("    int x"), ("int".to_string(), "x".to_string()));
    }
}
