use crate::registry::RouteEntry;
use crate::types::RouteParams;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureValue<'p> {
    /// A single segment, or an already contiguous slice of the path.
    Slice(&'p str),
    /// Every path segment from this index on, joined with `/`.
    Rest(usize),
}

/// A value bound at a pattern position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture<'p> {
    pub position: usize,
    pub value: CaptureValue<'p>,
}

pub type CaptureList<'p> = SmallVec<[Capture<'p>; 8]>;

/// Resolves positional captures to the matched route's own parameter names.
pub(crate) fn captures_to_map<H: ?Sized>(
    entry: &RouteEntry<H>,
    segments: &[&str],
    captures: &[Capture<'_>],
) -> RouteParams {
    let mut map = RouteParams::with_capacity(captures.len());
    for capture in captures {
        let Some(name) = entry.param_name(capture.position) else {
            continue;
        };
        let value = match capture.value {
            CaptureValue::Slice(s) => s.to_string(),
            CaptureValue::Rest(from) => segments
                .get(from..)
                .map(|rest| rest.join("/"))
                .unwrap_or_default(),
        };
        map.insert(name.to_string(), value);
    }
    map
}
