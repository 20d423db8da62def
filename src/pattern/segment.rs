use crate::types::ParamSlot;
use std::fmt;

/// Parameter key used for a wildcard declared without a name.
pub const WILDCARD_KEY: &str = "*";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    Static,
    Dynamic,
    OptionalDynamic,
    Wildcard,
}

/// One `/`-delimited component of a compiled pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Static(Box<str>),
    Dynamic(Box<str>),
    OptionalDynamic(Box<str>),
    Wildcard(Box<str>),
}

impl Segment {
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Static(_) => SegmentKind::Static,
            Segment::Dynamic(_) => SegmentKind::Dynamic,
            Segment::OptionalDynamic(_) => SegmentKind::OptionalDynamic,
            Segment::Wildcard(_) => SegmentKind::Wildcard,
        }
    }

    pub fn literal(&self) -> Option<&str> {
        match self {
            Segment::Static(lit) => Some(lit),
            _ => None,
        }
    }

    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Static(_) => None,
            Segment::Dynamic(name) | Segment::OptionalDynamic(name) | Segment::Wildcard(name) => {
                Some(name)
            }
        }
    }

    #[inline]
    pub fn is_optional(&self) -> bool {
        matches!(self, Segment::OptionalDynamic(_))
    }

    #[inline]
    pub fn is_wildcard(&self) -> bool {
        matches!(self, Segment::Wildcard(_))
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Static(lit) => f.write_str(lit),
            Segment::Dynamic(name) => write!(f, ":{name}"),
            Segment::OptionalDynamic(name) => write!(f, ":{name}?"),
            Segment::Wildcard(name) if &**name == WILDCARD_KEY => f.write_str("*"),
            Segment::Wildcard(name) => write!(f, "*{name}"),
        }
    }
}

/// A compiled route pattern. Immutable once built by [`compile`](super::compile).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: Box<str>,
    canonical: Box<str>,
    segments: Vec<Segment>,
}

impl Pattern {
    pub(super) fn new(source: &str, segments: Vec<Segment>) -> Self {
        let canonical = if segments.is_empty() {
            "/".to_string()
        } else {
            segments.iter().map(|s| format!("/{s}")).collect()
        };
        Self {
            source: source.into(),
            canonical: canonical.into_boxed_str(),
            segments,
        }
    }

    /// The string the pattern was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Slash-normalized spelling; equal for patterns that compile to the same segments.
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn param_count(&self) -> usize {
        self.segments.iter().filter(|s| s.param_name().is_some()).count()
    }

    /// Canonical form with parameter names erased. Two patterns with the same shape address
    /// the same route whatever their parameters are called.
    pub fn shape(&self) -> String {
        if self.segments.is_empty() {
            return "/".to_string();
        }
        let mut out = String::with_capacity(self.canonical.len());
        for seg in &self.segments {
            out.push('/');
            match seg {
                Segment::Static(lit) => out.push_str(lit),
                Segment::Dynamic(_) => out.push(':'),
                Segment::OptionalDynamic(_) => out.push_str(":?"),
                Segment::Wildcard(_) => out.push('*'),
            }
        }
        out
    }

    /// Parameter names keyed by the position of their segment.
    pub fn param_slots(&self) -> Vec<ParamSlot> {
        self.segments
            .iter()
            .enumerate()
            .filter_map(|(pos, seg)| seg.param_name().map(|name| (pos, Box::from(name))))
            .collect()
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}
