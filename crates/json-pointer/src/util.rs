//! Escaping, parsing and formatting of JSON Pointer paths.

use crate::types::Path;
use crate::JsonPointerError;

/// Unescapes a JSON Pointer path component.
///
/// Per RFC 6901, `~1` is replaced with `/` and `~0` is replaced with `~`.
///
/// ```
/// use jsondiff_json_pointer::unescape_component;
///
/// assert_eq!(unescape_component("a~0b"), "a~b");
/// assert_eq!(unescape_component("c~1d"), "c/d");
/// ```
pub fn unescape_component(component: &str) -> String {
    if !component.contains('~') {
        return component.to_string();
    }
    // ~1 first, so "~01" decodes to "~1" and not "/"
    component.replace("~1", "/").replace("~0", "~")
}

/// Escapes a JSON Pointer path component.
///
/// Per RFC 6901, `~` is replaced with `~0` and `/` is replaced with `~1`.
///
/// ```
/// use jsondiff_json_pointer::escape_component;
///
/// assert_eq!(escape_component("a~b"), "a~0b");
/// assert_eq!(escape_component("c/d"), "c~1d");
/// assert_eq!(escape_component("plain"), "plain");
/// ```
pub fn escape_component(component: &str) -> String {
    if !component.contains('/') && !component.contains('~') {
        return component.to_string();
    }
    component.replace('~', "~0").replace('/', "~1")
}

/// Parse a JSON Pointer string into path components.
///
/// The empty string is the root. Otherwise the leading `/` is stripped and
/// each component is unescaped. A pointer without a leading `/` is read as if
/// it had one.
///
/// ```
/// use jsondiff_json_pointer::parse_json_pointer;
///
/// assert_eq!(parse_json_pointer(""), Vec::<String>::new());
/// assert_eq!(parse_json_pointer("/"), vec![""]);
/// assert_eq!(parse_json_pointer("/a~0b/c~1d"), vec!["a~b", "c/d"]);
/// ```
pub fn parse_json_pointer(pointer: &str) -> Path {
    if pointer.is_empty() {
        return Vec::new();
    }
    let body = pointer.strip_prefix('/').unwrap_or(pointer);
    body.split('/').map(unescape_component).collect()
}

/// Format path components into a JSON Pointer string.
///
/// ```
/// use jsondiff_json_pointer::format_json_pointer;
///
/// assert_eq!(format_json_pointer(&[]), "");
/// assert_eq!(format_json_pointer(&["foo".to_string(), "1".to_string()]), "/foo/1");
/// assert_eq!(format_json_pointer(&["a/b".to_string()]), "/a~1b");
/// ```
pub fn format_json_pointer(path: &[String]) -> String {
    let mut out = String::with_capacity(path.len() * 8);
    for component in path {
        out.push('/');
        out.push_str(&escape_component(component));
    }
    out
}

/// Extend `path` by one step, returning a new path.
///
/// ```
/// use jsondiff_json_pointer::child;
///
/// let base = vec!["foo".to_string()];
/// assert_eq!(child(&base, 3), vec!["foo", "3"]);
/// assert_eq!(child(&base, "bar"), vec!["foo", "bar"]);
/// ```
pub fn child(path: &[String], step: impl ToString) -> Path {
    let mut out = Vec::with_capacity(path.len() + 1);
    out.extend_from_slice(path);
    out.push(step.to_string());
    out
}

/// Check if a path points to the root value.
pub fn is_root(path: &[String]) -> bool {
    path.is_empty()
}

/// Check if `child` lies strictly below `parent`.
///
/// ```
/// use jsondiff_json_pointer::is_child;
///
/// let parent = vec!["foo".to_string()];
/// let child = vec!["foo".to_string(), "bar".to_string()];
/// assert!(is_child(&parent, &child));
/// assert!(!is_child(&child, &parent));
/// assert!(!is_child(&parent, &parent));
/// ```
pub fn is_child(parent: &[String], child: &[String]) -> bool {
    parent.len() < child.len() && child[..parent.len()] == *parent
}

/// Get the parent path of a given path.
///
/// # Errors
///
/// Returns [`JsonPointerError::NoParent`] for the root path.
pub fn parent(path: &[String]) -> Result<Path, JsonPointerError> {
    match path.split_last() {
        Some((_, rest)) => Ok(rest.to_vec()),
        None => Err(JsonPointerError::NoParent),
    }
}

/// Check if a string is a valid array index: decimal digits, no leading zero
/// unless it is exactly `"0"`.
///
/// ```
/// use jsondiff_json_pointer::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("-"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    let bytes = index.as_bytes();
    if bytes.is_empty() || (bytes.len() > 1 && bytes[0] == b'0') {
        return false;
    }
    bytes.iter().all(|b| b.is_ascii_digit())
}
