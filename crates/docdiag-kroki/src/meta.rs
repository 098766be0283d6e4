//! Attribute extraction from code fence meta strings.

use std::sync::LazyLock;

use regex::Regex;

/// Matches `key="value"` pairs; keys are ASCII letters, values are non-empty.
static PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"([a-zA-Z]+)="([^"]+)""#).unwrap());

/// Extract the value of `name="..."` from a meta string.
///
/// Pairs are scanned left to right and the first exact key match wins.
///
/// # Example
///
/// ```
/// use docdiag_kroki::extract_param;
///
/// let meta = r#"imgType="plantuml" imgAlt="Login flow""#;
/// assert_eq!(extract_param("imgAlt", meta), Some("Login flow"));
/// assert_eq!(extract_param("imgTitle", meta), None);
/// ```
pub fn extract_param<'a>(name: &str, meta: &'a str) -> Option<&'a str> {
    PARAM_RE
        .captures_iter(meta)
        .find(|caps| &caps[1] == name)
        .and_then(|caps| caps.get(2))
        .map(|value| value.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single() {
        assert_eq!(extract_param("imgType", r#"imgType="mermaid""#), Some("mermaid"));
    }

    #[test]
    fn test_extract_any_key_order() {
        let meta = r#"imgTitle="T" imgType="plantuml" imgAlt="A""#;
        assert_eq!(extract_param("imgAlt", meta), Some("A"));
        assert_eq!(extract_param("imgTitle", meta), Some("T"));
        assert_eq!(extract_param("imgType", meta), Some("plantuml"));
    }

    #[test]
    fn test_extract_first_match_wins() {
        let meta = r#"imgAlt="A" imgTitle="T" imgAlt="B""#;
        assert_eq!(extract_param("imgAlt", meta), Some("A"));
    }

    #[test]
    fn test_extract_absent() {
        assert_eq!(extract_param("imgAlt", ""), None);
        assert_eq!(extract_param("imgAlt", "title=x"), None);
        assert_eq!(extract_param("imgAlt", r#"imgAltText="x""#), None);
    }

    #[test]
    fn test_extract_value_with_spaces_and_symbols() {
        let meta = r#"imgAlt="Order -> Payment (v2)""#;
        assert_eq!(extract_param("imgAlt", meta), Some("Order -> Payment (v2)"));
    }

    #[test]
    fn test_extract_empty_value_does_not_match() {
        assert_eq!(extract_param("imgAlt", r#"imgAlt="""#), None);
    }

    #[test]
    fn test_extract_key_is_case_sensitive() {
        assert_eq!(extract_param("imgalt", r#"imgAlt="A""#), None);
    }
}
