//! HTTP request routing: register `(method, pattern, handler chain)` triples, seal the router,
//! then resolve `(method, path)` to a handler chain and its path parameters.
//!
//! ```
//! use pathway_router::{HttpMethod, Router};
//! use std::sync::Arc;
//!
//! let router: Router<str> = Router::new(None);
//! router
//!     .add(HttpMethod::Get, "/users/:id", vec![Arc::from("show_user")])
//!     .expect("route should register");
//! let readonly = router.seal();
//!
//! let found = readonly.find(HttpMethod::Get, "/users/42");
//! assert_eq!(found.param("id"), Some("42"));
//! ```

pub mod enums;
pub mod errors;
pub mod matcher;
pub mod path;
pub mod pattern;
pub mod radix;
pub mod readonly;
pub mod regex_engine;
pub mod registry;
pub mod router;
pub mod types;

pub use enums::{HttpMethod, MethodParseError, MethodSet};
pub use errors::{RouterError, RouterResult};
pub use matcher::MatchResult;
pub use pattern::{Pattern, PatternError, Segment, SegmentKind, compile};
pub use readonly::RouterReadOnly;
pub use registry::{RegistryError, RouteRegistry};
pub use router::{EngineKind, Router, RouterOptions, RouterOptionsBuilder, RouterOptionsError};
pub use types::{HandlerRef, RouteParams};
