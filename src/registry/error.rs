use crate::enums::HttpMethod;
use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(
        "route '{pattern}' names segment {segment_index} '{incoming}' but a sibling route already uses '{existing}'"
    )]
    RouteConflict {
        pattern: String,
        segment_index: usize,
        existing: String,
        incoming: String,
    },
    #[error("duplicate route {method} '{pattern}'")]
    DuplicateRoute { method: HttpMethod, pattern: String },
    #[error("route '{pattern}' has an empty handler chain")]
    EmptyHandlerChain { pattern: String },
    #[error("route '{pattern}' repeats the handler at chain index {index}")]
    DuplicateMiddleware { pattern: String, index: usize },
    #[error("registry is sealed; cannot perform {operation}")]
    Sealed {
        operation: &'static str,
        pattern: Option<String>,
    },
    #[error("route '{pattern}' produced an invalid expression: {error}")]
    InvalidRegex { pattern: String, error: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
