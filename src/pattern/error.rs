use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("route pattern is empty")]
    Empty,
    #[error(
        "wildcard segment must be terminal in '{pattern}': index {segment_index} of {total_segments}"
    )]
    WildcardMustBeTerminal {
        pattern: String,
        segment_index: usize,
        total_segments: usize,
    },
    #[error("parameter name in segment '{segment}' of '{pattern}' is empty")]
    ParameterNameEmpty { pattern: String, segment: String },
    #[error(
        "parameter name '{name}' in '{pattern}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    ParameterInvalidStart {
        pattern: String,
        name: String,
        found: char,
    },
    #[error("parameter name '{name}' in '{pattern}' contains invalid character '{invalid}'")]
    ParameterInvalidCharacter {
        pattern: String,
        name: String,
        invalid: char,
    },
    #[error("duplicate parameter name '{name}' in '{pattern}'")]
    DuplicateParamName { pattern: String, name: String },
    #[error("segment '{segment}' of '{pattern}' mixes parameter and literal syntax")]
    MixedParameterLiteralSyntax { pattern: String, segment: String },
    #[error("pattern '{pattern}' declares {count} parameters, limit is {limit}")]
    TooManyParams {
        pattern: String,
        count: usize,
        limit: usize,
    },
}

pub type PatternResult<T> = Result<T, PatternError>;
