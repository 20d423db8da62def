use crate::enums::{HttpMethod, MethodParseError};
use crate::matcher::MatchResult;
use crate::registry::{RegistryMetrics, RouteRegistry};
use crate::router::RouterOptions;
use crate::types::HandlerRef;
use std::fmt;

/// Sealed view of a router. Lookups take `&self`, never lock and never allocate beyond the
/// returned [`MatchResult`], so one snapshot can serve any number of threads.
pub struct RouterReadOnly<H: ?Sized> {
    registry: Box<dyn RouteRegistry<H>>,
    global_middleware: Vec<HandlerRef<H>>,
}

impl<H: ?Sized> RouterReadOnly<H> {
    pub(crate) fn new(
        registry: Box<dyn RouteRegistry<H>>,
        global_middleware: Vec<HandlerRef<H>>,
    ) -> Self {
        Self {
            registry,
            global_middleware,
        }
    }

    /// Matches `path` for `method` and returns global middleware, route middleware and the
    /// terminal handler in execution order.
    #[tracing::instrument(level = "trace", skip_all, fields(method = %method, path = %path))]
    pub fn find(&self, method: HttpMethod, path: &str) -> MatchResult<H> {
        let found = self.registry.search(method, path);
        if !found.matched() {
            tracing::event!(tracing::Level::TRACE, "no route matched");
            return found;
        }
        found.prepend_middleware(&self.global_middleware, self.options().allow_duplicate_mw)
    }

    /// Like [`find`](Self::find) with the method given by name, case-insensitively.
    ///
    /// No route can be registered under a name outside [`HttpMethod::ALL`], so such a name
    /// is reported as [`MethodParseError`] rather than as a miss. A known method without a
    /// matching route is still an unmatched result.
    pub fn find_str(&self, method: &str, path: &str) -> Result<MatchResult<H>, MethodParseError> {
        let method: HttpMethod = method.parse()?;
        Ok(self.find(method, path))
    }

    pub fn options(&self) -> &RouterOptions {
        self.registry.options()
    }

    pub fn global_middleware(&self) -> &[HandlerRef<H>] {
        &self.global_middleware
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        self.registry.metrics()
    }

    pub fn len(&self) -> usize {
        self.registry.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.is_empty()
    }
}

impl<H: ?Sized> fmt::Debug for RouterReadOnly<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouterReadOnly")
            .field("routes", &self.registry.len())
            .field("global_middleware", &self.global_middleware.len())
            .field("options", self.registry.options())
            .finish()
    }
}
