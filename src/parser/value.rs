use serde_json::{Deserializer, Value};

use crate::error::{Error, Result};

/// Parse the longest leading JSON literal of `s`, returning the value and the
/// trimmed remainder.
///
/// Scraped examples often glue several literals together (`[[1,2]] 3`), so a
/// decode error past the first byte is retried on the prefix ending where the
/// decoder gave up.
pub fn parse_value(s: &str) -> Result<(Value, &str)> {
    let s = s.trim();
    let mut stream = Deserializer::from_str(s).into_iter::<Value>();
    match stream.next() {
        Some(Ok(value)) => {
            let rest = &s[stream.byte_offset()..];
            Ok((value, rest.trim()))
        }
        Some(Err(err)) => parse_truncated(s, err),
        None => match serde_json::from_str::<Value>(s) {
            Ok(value) => Ok((value, "")),
            Err(source) => Err(invalid(s, source)),
        },
    }
}

fn parse_truncated(s: &str, err: serde_json::Error) -> Result<(Value, &str)> {
    let line_start: usize = s
        .split_inclusive('\n')
        .take(err.line().saturating_sub(1))
        .map(str::len)
        .sum();
    let column = err.column();
    let candidates = [
        line_start + column.saturating_sub(1),
        line_start + column,
    ];

    for offset in candidates {
        if offset == 0 || offset >= s.len() || !s.is_char_boundary(offset) {
            continue;
        }
        if let Ok(value) = serde_json::from_str::<Value>(&s[..offset]) {
            return Ok((value, s[offset..].trim()));
        }
    }
    Err(invalid(s, err))
}

fn invalid(s: &str, source: serde_json::Error) -> Error {
    Error::InvalidValue {
        input: s.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_whole_string() {
        let (value, rest) = parse_value("  [[9,1,2],[3,4,5]]  ").unwrap();
        assert_eq!(value, json!([[9, 1, 2], [3, 4, 5]]));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_trailing_literal() {
        let (value, rest) = parse_value("[1,2] 3").unwrap();
        assert_eq!(value, json!([1, 2]));
        assert_eq!(rest, "3");
    }

    #[test]
    fn test_concatenated_arrays() {
        let input = "[\"FindElements\",\"find\",\"find\"]\n[[[-1,null,-1]],[1],[2]]";
        let (functions, rest) = parse_value(input).unwrap();
        assert_eq!(functions, json!(["FindElements", "find", "find"]));
        let (args, rest) = parse_value(rest).unwrap();
        assert_eq!(args, json!([[[-1, null, -1]], [1], [2]]));
        assert_eq!(rest, "");
    }

    #[test]
    fn test_remainder_after_comma() {
        let (value, rest) = parse_value("[[1,2,3],[4,5,6]], k = 1").unwrap();
        assert_eq!(value, json!([[1, 2, 3], [4, 5, 6]]));
        assert_eq!(rest, ", k = 1");
    }

    #[test]
    fn test_scalars() {
        assert_eq!(parse_value("18").unwrap(), (json!(18), ""));
        assert_eq!(parse_value("2.50000").unwrap().0, json!(2.5));
        assert_eq!(parse_value("\"abc\"").unwrap().0, json!("abc"));
        assert_eq!(parse_value("true").unwrap().0, json!(true));
        assert_eq!(parse_value("null").unwrap().0, Value::Null);
    }

    #[test]
    fn test_number_followed_by_text() {
        let (value, rest) = parse_value("3abc").unwrap();
        assert_eq!(value, json!(3));
        assert_eq!(rest, "abc");
    }

    #[test]
    fn test_round_trip() {
        let values = [
            json!({"a": [1, 2.5, null], "b": {"c": "d\"e"}}),
            json!([[true, false], [], "x"]),
            json!(-17),
        ];
        for value in values {
            let text = serde_json::to_string(&value).unwrap();
            let (parsed, rest) = parse_value(&text).unwrap();
            assert_eq!(parsed, value);
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn test_garbage_is_fatal() {
        assert!(matches!(parse_value("abc"), Err(Error::InvalidValue { .. })));
        assert!(matches!(parse_value(""), Err(Error::InvalidValue { .. })));
    }
}
