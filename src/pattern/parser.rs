use hashbrown::HashSet;

use super::segment::{Pattern, Segment, WILDCARD_KEY};
use super::{PatternError, PatternResult};
use crate::path::split_segments;

pub const DEFAULT_MAX_PARAMS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileOptions {
    pub max_params: usize,
    /// Restricts parameter names to identifiers and rejects `:` inside literals.
    pub strict_param_names: bool,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            max_params: DEFAULT_MAX_PARAMS,
            strict_param_names: false,
        }
    }
}

/// Compiles a route pattern with the default options.
pub fn compile(pattern: &str) -> PatternResult<Pattern> {
    compile_with(pattern, CompileOptions::default())
}

pub fn compile_with_limit(pattern: &str, max_params: usize) -> PatternResult<Pattern> {
    compile_with(
        pattern,
        CompileOptions {
            max_params,
            ..CompileOptions::default()
        },
    )
}

/// Compiles `/seg/:name/:opt?/*rest` style patterns into typed segments.
///
/// Any non-empty name is accepted and segments without a leading `:` or `*` are literals,
/// unless `strict_param_names` is set.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(pattern = %pattern, max_params = options.max_params as u64)
)]
pub fn compile_with(pattern: &str, options: CompileOptions) -> PatternResult<Pattern> {
    if pattern.trim().is_empty() {
        return Err(PatternError::Empty);
    }

    let raw = split_segments(pattern);
    let total = raw.len();
    let mut segments = Vec::with_capacity(total);
    let mut seen: HashSet<&str> = HashSet::with_capacity(total);

    for (index, seg) in raw.iter().enumerate() {
        let segment = parse_segment(pattern, seg, options.strict_param_names)?;

        if segment.is_wildcard() && index + 1 != total {
            return Err(PatternError::WildcardMustBeTerminal {
                pattern: pattern.to_string(),
                segment_index: index,
                total_segments: total,
            });
        }

        if let Some(name) = param_name_of(seg)
            && !seen.insert(name)
        {
            return Err(PatternError::DuplicateParamName {
                pattern: pattern.to_string(),
                name: name.to_string(),
            });
        }

        segments.push(segment);
    }

    let compiled = Pattern::new(pattern, segments);
    let count = compiled.param_count();
    if count > options.max_params {
        return Err(PatternError::TooManyParams {
            pattern: pattern.to_string(),
            count,
            limit: options.max_params,
        });
    }

    Ok(compiled)
}

fn parse_segment(pattern: &str, seg: &str, strict: bool) -> PatternResult<Segment> {
    if let Some(rest) = seg.strip_prefix(':') {
        let (name, optional) = match rest.strip_suffix('?') {
            Some(name) => (name, true),
            None => (rest, false),
        };
        if name.is_empty() {
            return Err(PatternError::ParameterNameEmpty {
                pattern: pattern.to_string(),
                segment: seg.to_string(),
            });
        }
        if strict {
            validate_param_name(pattern, name)?;
        }
        let name = Box::from(name);
        return Ok(if optional {
            Segment::OptionalDynamic(name)
        } else {
            Segment::Dynamic(name)
        });
    }

    if let Some(name) = seg.strip_prefix('*') {
        if name.is_empty() {
            return Ok(Segment::Wildcard(Box::from(WILDCARD_KEY)));
        }
        if strict {
            validate_param_name(pattern, name)?;
        }
        return Ok(Segment::Wildcard(Box::from(name)));
    }

    if strict && seg.contains(':') {
        return Err(PatternError::MixedParameterLiteralSyntax {
            pattern: pattern.to_string(),
            segment: seg.to_string(),
        });
    }

    Ok(Segment::Static(Box::from(seg)))
}

fn validate_param_name(pattern: &str, name: &str) -> PatternResult<()> {
    let mut chars = name.chars();
    if let Some(first) = chars.next()
        && !(first.is_ascii_alphabetic() || first == '_')
    {
        return Err(PatternError::ParameterInvalidStart {
            pattern: pattern.to_string(),
            name: name.to_string(),
            found: first,
        });
    }
    for c in chars {
        if !(c.is_ascii_alphanumeric() || c == '_') {
            return Err(PatternError::ParameterInvalidCharacter {
                pattern: pattern.to_string(),
                name: name.to_string(),
                invalid: c,
            });
        }
    }
    Ok(())
}

// Name as written in the raw segment; only called after parse_segment accepted it.
fn param_name_of(seg: &str) -> Option<&str> {
    if let Some(rest) = seg.strip_prefix(':') {
        return Some(rest.strip_suffix('?').unwrap_or(rest));
    }
    seg.strip_prefix('*')
        .map(|name| if name.is_empty() { WILDCARD_KEY } else { name })
}
