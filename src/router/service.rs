use crate::errors::{RouterError, RouterResult};
use crate::matcher::MatchResult;
use crate::pattern::{Pattern, compile_with};
use crate::readonly::RouterReadOnly;
use crate::registry::{HandlerChain, RegistryError, RouteRegistry, build_registry};
use crate::router::RouterOptions;
use crate::types::{HandlerRef, HttpMethod};
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, OnceLock};

struct RouterState<H: ?Sized> {
    // moved into the snapshot by `seal`, leaving an empty registry behind
    registry: Box<dyn RouteRegistry<H>>,
    global_middleware: Vec<HandlerRef<H>>,
    options: RouterOptions,
    readonly: OnceLock<Arc<RouterReadOnly<H>>>,
}

impl<H> RouterState<H>
where
    H: ?Sized + Send + Sync + 'static,
{
    fn new(options: RouterOptions) -> Self {
        Self {
            registry: build_registry(options.clone()),
            global_middleware: Vec::new(),
            options,
            readonly: OnceLock::new(),
        }
    }
}

impl<H: ?Sized> RouterState<H> {
    fn is_sealed(&self) -> bool {
        self.readonly.get().is_some()
    }

    fn compile_chain(
        &self,
        pattern: &str,
        handlers: Vec<HandlerRef<H>>,
    ) -> Result<(Pattern, HandlerChain<H>), RegistryError> {
        let compiled = compile_with(pattern, self.options.compile_options())?;
        let chain = HandlerChain::new(
            handlers,
            self.options.allow_duplicate_mw,
            compiled.canonical(),
        )?;
        Ok((compiled, chain))
    }
}

/// Mutable router used during startup. Register routes and global middleware, then call
/// [`seal`](Router::seal) to obtain the shared read-only snapshot that serves lookups.
pub struct Router<H: ?Sized> {
    inner: RwLock<RouterState<H>>,
}

impl<H> Router<H>
where
    H: ?Sized + Send + Sync + 'static,
{
    pub fn new(options: Option<RouterOptions>) -> Self {
        let state = RouterState::new(options.unwrap_or_default());
        Self {
            inner: RwLock::new(state),
        }
    }

    /// Like [`new`](Self::new), rejecting options that fail validation.
    pub fn try_new(options: RouterOptions) -> RouterResult<Self> {
        options.validate()?;
        Ok(Self::new(Some(options)))
    }

    /// Registers `handlers` for `method` and `pattern`. The last handler is the terminal one,
    /// the others run before it as route middleware.
    pub fn add(
        &self,
        method: HttpMethod,
        pattern: &str,
        handlers: Vec<HandlerRef<H>>,
    ) -> RouterResult<()> {
        let mut guard = self.inner.write();

        if guard.is_sealed() {
            return Err(RouterError::AddWhileSealed {
                pattern: pattern.to_string(),
            });
        }

        let (compiled, chain) = guard.compile_chain(pattern, handlers)?;
        guard.registry.insert(method, compiled, chain)?;
        Ok(())
    }

    /// Registers a batch of routes, all or nothing. On error the router is left exactly as
    /// before the call and the error names the index of the rejected entry.
    pub fn add_bulk<I>(&self, entries: I) -> RouterResult<usize>
    where
        I: IntoIterator<Item = (HttpMethod, String, Vec<HandlerRef<H>>)>,
    {
        let mut guard = self.inner.write();

        if guard.is_sealed() {
            let count = entries.into_iter().count();
            return Err(RouterError::BulkAddWhileSealed { count });
        }

        let mut prepared = Vec::new();
        for (index, (method, pattern, handlers)) in entries.into_iter().enumerate() {
            let (compiled, chain) = guard
                .compile_chain(&pattern, handlers)
                .map_err(|source| RouterError::BulkEntry { index, source })?;
            prepared.push((method, compiled, chain));
        }

        let count = guard
            .registry
            .insert_batch(prepared)
            .map_err(|(index, source)| RouterError::BulkEntry { index, source })?;
        tracing::debug!(count = count as u64, "bulk routes registered");
        Ok(count)
    }

    /// Appends middleware that runs before the chain of every matched route.
    pub fn use_middleware(&self, middleware: HandlerRef<H>) -> RouterResult<()> {
        let mut guard = self.inner.write();

        if guard.is_sealed() {
            return Err(RouterError::MiddlewareWhileSealed);
        }
        if !guard.options.allow_duplicate_mw
            && guard
                .global_middleware
                .iter()
                .any(|existing| Arc::ptr_eq(existing, &middleware))
        {
            return Err(RouterError::DuplicateGlobalMiddleware {
                index: guard.global_middleware.len(),
            });
        }
        guard.global_middleware.push(middleware);
        Ok(())
    }

    /// Freezes the router. Calling it again returns the snapshot built the first time.
    pub fn seal(&self) -> Arc<RouterReadOnly<H>> {
        let mut guard = self.inner.write();

        if let Some(ro) = guard.readonly.get() {
            return ro.clone();
        }

        let global = std::mem::take(&mut guard.global_middleware);
        let fresh = build_registry(guard.options.clone());
        let mut registry = std::mem::replace(&mut guard.registry, fresh);
        registry.finalize();
        tracing::event!(
            tracing::Level::DEBUG,
            routes = registry.len() as u64,
            global_middleware = global.len() as u64,
            "router sealed"
        );

        let snapshot = Arc::new(RouterReadOnly::new(registry, global));
        let _ = guard.readonly.set(snapshot.clone());
        snapshot
    }

    pub fn find(&self, method: HttpMethod, path: &str) -> RouterResult<MatchResult<H>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(ro) => Ok(ro.find(method, path)),
            None => Err(RouterError::FindWhileMutable),
        }
    }

    pub fn get_readonly(&self) -> RouterResult<Arc<RouterReadOnly<H>>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(ro) => Ok(ro.clone()),
            None => Err(RouterError::ReadOnlyUnavailable),
        }
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().is_sealed()
    }

    pub fn options(&self) -> RouterOptions {
        self.inner.read().options.clone()
    }

    /// Number of registered (method, route) pairs.
    pub fn len(&self) -> usize {
        let guard = self.inner.read();
        match guard.readonly.get() {
            Some(ro) => ro.len(),
            None => guard.registry.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<H: ?Sized> fmt::Debug for Router<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.inner.read();
        f.debug_struct("Router")
            .field("sealed", &guard.is_sealed())
            .field("global_middleware", &guard.global_middleware.len())
            .field("options", &guard.options)
            .finish_non_exhaustive()
    }
}
