use crate::pattern::{Pattern, Segment};
use regex::escape;

pub const DEFAULT_PARAM_PATTERN: &str = "[^/]+";

/// Anchored expression equivalent to `pattern` on slash-normalized paths.
///
/// Capture group `k` (1-based) holds the `k`-th parameter of the pattern. Optional and
/// wildcard groups may not participate; a missing wildcard group means an empty remainder.
/// Paths are expected in the form produced by [`normalize_path`](crate::path::normalize_path).
pub fn to_regex(pattern: &Pattern) -> String {
    if pattern.segments().is_empty() {
        return "^/$".to_string();
    }

    let mut body = String::new();
    let mut required = false;
    for segment in pattern.segments() {
        match segment {
            Segment::Static(lit) => {
                body.push('/');
                body.push_str(&escape(lit));
                required = true;
            }
            Segment::Dynamic(_) => {
                body.push_str(&format!("/({DEFAULT_PARAM_PATTERN})"));
                required = true;
            }
            Segment::OptionalDynamic(_) => {
                body.push_str(&format!("(?:/({DEFAULT_PARAM_PATTERN}))?"));
            }
            Segment::Wildcard(_) => {
                body.push_str("(?:/(.*))?");
            }
        }
    }

    // every segment may be absent, so the bare root has to match as well
    if required {
        format!("(?s)^{body}$")
    } else {
        format!("(?s)^(?:/|{body})$")
    }
}
