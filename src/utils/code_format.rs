//! Short code format rules.

use regex::Regex;
use std::sync::LazyLock;

/// Codes are 6 to 8 ASCII letters or digits.
static CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{6,8}$").expect("code pattern is valid"));

/// Returns true if `code` is a well-formed short code.
///
/// # Examples
///
/// ```
/// use tinylink::utils::code_format::is_valid_code;
///
/// assert!(is_valid_code("abc123"));
/// assert!(is_valid_code("ABCdef12"));
/// assert!(!is_valid_code("abc12"));     // too short
/// assert!(!is_valid_code("abcdefghi")); // too long
/// assert!(!is_valid_code("abc-12"));    // not alphanumeric
/// ```
pub fn is_valid_code(code: &str) -> bool {
    CODE_REGEX.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_lengths() {
        assert!(is_valid_code("abcdef"));
        assert!(is_valid_code("abcdef1"));
        assert!(is_valid_code("abcdef12"));
    }

    #[test]
    fn test_invalid_lengths() {
        assert!(!is_valid_code(""));
        assert!(!is_valid_code("abcde"));
        assert!(!is_valid_code("abcdefghi"));
    }

    #[test]
    fn test_mixed_case_and_digits() {
        assert!(is_valid_code("AbC123"));
        assert!(is_valid_code("123456"));
        assert!(is_valid_code("ZZZZZZZZ"));
    }

    #[test]
    fn test_rejects_non_alphanumeric() {
        assert!(!is_valid_code("abc_12"));
        assert!(!is_valid_code("abc 12"));
        assert!(!is_valid_code("abc12/"));
        assert!(!is_valid_code("abc.js"));
        assert!(!is_valid_code("ábcdef"));
        assert!(!is_valid_code("abcdef\n"));
    }
}
