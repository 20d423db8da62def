mod options;
mod service;

pub use crate::errors::{RouterError, RouterResult};
pub use crate::readonly::RouterReadOnly;
pub use options::{EngineKind, RouterOptions, RouterOptionsBuilder, RouterOptionsError};
pub use service::Router;
