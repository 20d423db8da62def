use crate::enums::HttpMethod;
use crate::registry::RouteEntry;
use crate::types::{HandlerRef, RouteParams};
use std::fmt;
use std::sync::Arc;

/// Outcome of one lookup. A miss is a normal value, not an error.
pub struct MatchResult<H: ?Sized> {
    pub method: HttpMethod,
    /// Canonical pattern of the matched route.
    pub pattern: Option<Arc<str>>,
    pub middleware: Vec<HandlerRef<H>>,
    pub handler: Option<HandlerRef<H>>,
    pub params: RouteParams,
}

impl<H: ?Sized> MatchResult<H> {
    pub fn not_found(method: HttpMethod) -> Self {
        Self {
            method,
            pattern: None,
            middleware: Vec::new(),
            handler: None,
            params: RouteParams::new(),
        }
    }

    pub(crate) fn from_entry(
        method: HttpMethod,
        entry: &RouteEntry<H>,
        params: RouteParams,
    ) -> Self {
        Self {
            method,
            pattern: Some(entry.pattern.clone()),
            middleware: entry.chain.middleware().to_vec(),
            handler: Some(entry.chain.handler().clone()),
            params,
        }
    }

    #[inline]
    pub fn matched(&self) -> bool {
        self.handler.is_some()
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Middleware in order, then the terminal handler.
    pub fn chain(&self) -> impl Iterator<Item = &HandlerRef<H>> {
        self.middleware.iter().chain(self.handler.iter())
    }

    /// Puts `global` in front of the route middleware. Unless duplicates are allowed, route
    /// middleware already present in `global` is dropped so it runs once, at its global position.
    pub fn prepend_middleware(
        mut self,
        global: &[HandlerRef<H>],
        allow_duplicate_mw: bool,
    ) -> Self {
        if !self.matched() || global.is_empty() {
            return self;
        }
        let mut composed = Vec::with_capacity(global.len() + self.middleware.len());
        composed.extend(global.iter().cloned());
        for mw in self.middleware.drain(..) {
            if allow_duplicate_mw || !global.iter().any(|g| Arc::ptr_eq(g, &mw)) {
                composed.push(mw);
            }
        }
        self.middleware = composed;
        self
    }
}

fn same_refs<H: ?Sized>(a: &[HandlerRef<H>], b: &[HandlerRef<H>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(x, y)| Arc::ptr_eq(x, y))
}

/// Handlers compare by reference identity.
impl<H: ?Sized> PartialEq for MatchResult<H> {
    fn eq(&self, other: &Self) -> bool {
        self.method == other.method
            && self.pattern == other.pattern
            && self.params == other.params
            && same_refs(&self.middleware, &other.middleware)
            && match (&self.handler, &other.handler) {
                (Some(a), Some(b)) => Arc::ptr_eq(a, b),
                (None, None) => true,
                _ => false,
            }
    }
}

impl<H: ?Sized> Clone for MatchResult<H> {
    fn clone(&self) -> Self {
        Self {
            method: self.method,
            pattern: self.pattern.clone(),
            middleware: self.middleware.clone(),
            handler: self.handler.clone(),
            params: self.params.clone(),
        }
    }
}

impl<H: ?Sized> fmt::Debug for MatchResult<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchResult")
            .field("method", &self.method)
            .field("matched", &self.matched())
            .field("pattern", &self.pattern)
            .field("middleware", &self.middleware.len())
            .field("params", &self.params)
            .finish()
    }
}
