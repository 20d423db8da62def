use crate::enums::MethodParseError;
use crate::registry::RegistryError;
use crate::router::RouterOptionsError;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error("router is sealed; cannot add route '{pattern}'")]
    AddWhileSealed { pattern: String },
    #[error("router is sealed; cannot add {count} routes in bulk")]
    BulkAddWhileSealed { count: usize },
    #[error("router is sealed; cannot register global middleware")]
    MiddlewareWhileSealed,
    #[error("router is not sealed; cannot perform route lookup")]
    FindWhileMutable,
    #[error("router is not sealed; readonly snapshot is unavailable")]
    ReadOnlyUnavailable,
    #[error("global middleware at index {index} is already registered")]
    DuplicateGlobalMiddleware { index: usize },
    #[error("bulk entry {index} rejected: {source}")]
    BulkEntry {
        index: usize,
        #[source]
        source: RegistryError,
    },
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
    #[error(transparent)]
    Method(#[from] MethodParseError),
}

pub type RouterResult<T> = Result<T, RouterError>;
