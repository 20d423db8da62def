use hashbrown::HashMap;
use std::sync::Arc;

pub use crate::enums::HttpMethod;

pub type RouteParams = HashMap<String, String>;

/// Shared reference to a handler or middleware. The router only stores and returns these.
pub type HandlerRef<H> = Arc<H>;

/// Position of a segment inside its pattern, paired with the parameter name bound there.
pub type ParamSlot = (usize, Box<str>);
