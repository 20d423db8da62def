use memchr::memchr;
use smallvec::SmallVec;

pub const INLINE_SEGMENTS: usize = 8;

pub type Segments<'a> = SmallVec<[&'a str; INLINE_SEGMENTS]>;

/// Splits a path or pattern on `/`, dropping every empty segment.
///
/// Leading, trailing and repeated slashes therefore carry no meaning:
/// `/a/b`, `a/b/` and `//a//b` all yield `["a", "b"]`.
#[inline]
pub fn split_segments(path: &str) -> Segments<'_> {
    let mut out = Segments::new();
    let bytes = path.as_bytes();
    let mut start = 0usize;

    while start < bytes.len() {
        let end = match memchr(b'/', &bytes[start..]) {
            Some(offset) => start + offset,
            None => bytes.len(),
        };
        if end > start {
            out.push(&path[start..end]);
        }
        start = end + 1;
    }

    out
}

/// Rebuilds the normalized form of a path: a single leading slash, no trailing slash.
pub fn join_segments(segments: &[&str]) -> String {
    if segments.is_empty() {
        return "/".to_string();
    }
    let capacity = segments.iter().map(|s| s.len() + 1).sum();
    let mut out = String::with_capacity(capacity);
    for seg in segments {
        out.push('/');
        out.push_str(seg);
    }
    out
}

#[inline]
pub fn normalize_path(path: &str) -> String {
    join_segments(&split_segments(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_leading_and_trailing_slashes() {
        let segments = split_segments("/foo/bar/");
        assert_eq!(segments.as_slice(), &["foo", "bar"]);
    }

    #[test]
    fn collapses_duplicate_slashes() {
        let segments = split_segments("//foo//bar///");
        assert_eq!(segments.as_slice(), &["foo", "bar"]);
        assert_eq!(normalize_path("//foo//bar///"), "/foo/bar");
    }

    #[test]
    fn root_and_empty_paths_have_no_segments() {
        assert!(split_segments("/").is_empty());
        assert!(split_segments("").is_empty());
        assert_eq!(normalize_path(""), "/");
        assert_eq!(normalize_path("///"), "/");
    }

    #[test]
    fn keeps_relative_input_segments() {
        let segments = split_segments("a/b");
        assert_eq!(segments.as_slice(), &["a", "b"]);
        assert_eq!(normalize_path("a/b"), "/a/b");
    }

    #[test]
    fn keeps_unicode_segments_intact() {
        let segments = split_segments("/café/こんにちは");
        assert_eq!(segments.as_slice(), &["café", "こんにちは"]);
    }
}
