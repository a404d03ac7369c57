//! Target URL validation.

use url::Url;

/// Returns true if `input` parses as an absolute URL.
///
/// Any scheme is accepted. Relative references and free text fail to parse
/// because no base URL is supplied. The URL is checked only; callers store
/// the input as given.
///
/// # Examples
///
/// ```
/// use tinylink::utils::target_url::is_absolute_url;
///
/// assert!(is_absolute_url("https://example.com"));
/// assert!(is_absolute_url("http://localhost:8080/path?q=1"));
/// assert!(!is_absolute_url("not a url"));
/// assert!(!is_absolute_url("/relative/path"));
/// ```
pub fn is_absolute_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}
