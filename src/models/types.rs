/// Classification of a template type string, used to drive literal
/// formatting and type-hint translation.
#[derive(Debug, Clone, PartialEq)]
pub enum TemplateType {
    Void,
    Bool,
    Char,
    Integer,
    Float,
    Str,
    Vector(Box<TemplateType>),
    TreeNode,
    Other(String),
}

const INTEGER_TYPES: &[&str] = &[
    "int",
    "long",
    "long long",
    "unsigned",
    "unsigned int",
    "unsigned long",
    "unsigned long long",
    "short",
    "size_t",
    "int64_t",
    "uint64_t",
    "int32_t",
    "uint32_t",
];

const FLOAT_TYPES: &[&str] = &["double", "float", "long double"];

impl TemplateType {
    pub fn parse(ty: &str) -> TemplateType {
        let ty = remove_cv_ref(ty);

        if ty.replace(char::is_whitespace, "") == "TreeNode*" {
            return TemplateType::TreeNode;
        }

        if let Some(rest) = ty.strip_prefix("vector<") {
            if let Some(inner) = rest.strip_suffix('>') {
                return TemplateType::Vector(Box::new(TemplateType::parse(inner)));
            }
        }

        match ty.as_str() {
            "void" => TemplateType::Void,
            "bool" => TemplateType::Bool,
            "char" => TemplateType::Char,
            "string" | "std::string" => TemplateType::Str,
            t if INTEGER_TYPES.contains(&t) => TemplateType::Integer,
            t if FLOAT_TYPES.contains(&t) => TemplateType::Float,
            t => TemplateType::Other(t.to_string()),
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TemplateType::Void)
    }
}

/// Strip leading `const`/`volatile` qualifiers and trailing references.
pub fn remove_cv_ref(ty: &str) -> String {
    let mut ty = ty.trim();
    loop {
        if let Some(rest) = strip_keyword(ty, "const") {
            ty = rest;
        } else if let Some(rest) = strip_keyword(ty, "volatile") {
            ty = rest;
        } else if let Some(rest) = ty.strip_suffix('&') {
            ty = rest;
        } else {
            break;
        }
        ty = ty.trim();
    }
    ty.to_string()
}

fn strip_keyword<'a>(ty: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = ty.strip_prefix(keyword)?;
    match rest.chars().next() {
        Some(c) if c.is_alphanumeric() || c == '_' => None,
        _ => Some(rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_cv_ref() {
        assert_eq!(remove_cv_ref("vector<vector<int>>&"), "vector<vector<int>>");
        assert_eq!(remove_cv_ref("const string &"), "string");
        assert_eq!(remove_cv_ref("int"), "int");
        assert_eq!(remove_cv_ref("TreeNode*"), "TreeNode*");
        assert_eq!(remove_cv_ref("constant"), "constant");
    }

    #[test]
    fn test_parse_nested_vector() {
        assert_eq!(
            TemplateType::parse("vector<vector<int>>&"),
            TemplateType::Vector(Box::new(TemplateType::Vector(Box::new(
                TemplateType::Integer
            ))))
        );
    }

    #[test]
    fn test_parse_tree_node() {
        assert_eq!(TemplateType::parse("TreeNode*"), TemplateType::TreeNode);
        assert_eq!(TemplateType::parse("TreeNode *"), TemplateType::TreeNode);
    }

    #[test]
    fn test_parse_scalars() {
        assert_eq!(TemplateType::parse("void"), TemplateType::Void);
        assert_eq!(TemplateType::parse("bool"), TemplateType::Bool);
        assert_eq!(
            TemplateType::parse("vector<char>&"),
            TemplateType::Vector(Box::new(TemplateType::Char))
        );
        assert_eq!(TemplateType::parse("const string&"), TemplateType::Str);
        assert_eq!(TemplateType::parse("double"), TemplateType::Float);
        assert_eq!(TemplateType::parse("long long"), TemplateType::Integer);
        assert_eq!(TemplateType::parse("const int64_t&"), TemplateType::Integer);
        assert_eq!(
            TemplateType::parse("ListNode*"),
            TemplateType::Other("ListNode*".to_string())
        );
    }
}
