use super::{RegistryError, RegistryResult};
use crate::types::{HandlerRef, ParamSlot};
use std::fmt;
use std::sync::Arc;

/// Middleware in execution order followed by the terminal handler.
pub struct HandlerChain<H: ?Sized> {
    middleware: Vec<HandlerRef<H>>,
    handler: HandlerRef<H>,
}

impl<H: ?Sized> HandlerChain<H> {
    /// Splits `handlers` into middleware and terminal handler (the last element).
    pub fn new(
        mut handlers: Vec<HandlerRef<H>>,
        allow_duplicate_mw: bool,
        pattern: &str,
    ) -> RegistryResult<Self> {
        if !allow_duplicate_mw
            && let Some(index) = first_repeated(&handlers)
        {
            return Err(RegistryError::DuplicateMiddleware {
                pattern: pattern.to_string(),
                index,
            });
        }

        let handler = handlers
            .pop()
            .ok_or_else(|| RegistryError::EmptyHandlerChain {
                pattern: pattern.to_string(),
            })?;

        Ok(Self {
            middleware: handlers,
            handler,
        })
    }

    pub fn middleware(&self) -> &[HandlerRef<H>] {
        &self.middleware
    }

    pub fn handler(&self) -> &HandlerRef<H> {
        &self.handler
    }

    pub fn len(&self) -> usize {
        self.middleware.len() + 1
    }
}

impl<H: ?Sized> Clone for HandlerChain<H> {
    fn clone(&self) -> Self {
        Self {
            middleware: self.middleware.clone(),
            handler: self.handler.clone(),
        }
    }
}

impl<H: ?Sized> fmt::Debug for HandlerChain<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerChain")
            .field("middleware", &self.middleware.len())
            .finish_non_exhaustive()
    }
}

/// Index of the first reference that already appeared earlier in `handlers`.
pub(crate) fn first_repeated<H: ?Sized>(handlers: &[HandlerRef<H>]) -> Option<usize> {
    handlers
        .iter()
        .enumerate()
        .skip(1)
        .find(|(i, h)| handlers[..*i].iter().any(|prev| Arc::ptr_eq(prev, h)))
        .map(|(i, _)| i)
}

/// What a registry keeps for one (method, route) pair.
pub struct RouteEntry<H: ?Sized> {
    pub(crate) pattern: Arc<str>,
    pub(crate) params: Box<[ParamSlot]>,
    pub(crate) chain: HandlerChain<H>,
}

impl<H: ?Sized> RouteEntry<H> {
    pub(crate) fn new(pattern: &crate::pattern::Pattern, chain: HandlerChain<H>) -> Self {
        Self {
            pattern: Arc::from(pattern.canonical()),
            params: pattern.param_slots().into_boxed_slice(),
            chain,
        }
    }

    pub(crate) fn param_name(&self, position: usize) -> Option<&str> {
        self.params
            .iter()
            .find(|(pos, _)| *pos == position)
            .map(|(_, name)| &**name)
    }
}

impl<H: ?Sized> Clone for RouteEntry<H> {
    fn clone(&self) -> Self {
        Self {
            pattern: self.pattern.clone(),
            params: self.params.clone(),
            chain: self.chain.clone(),
        }
    }
}

impl<H: ?Sized> fmt::Debug for RouteEntry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteEntry")
            .field("pattern", &self.pattern)
            .field("params", &self.params)
            .field("chain", &self.chain)
            .finish()
    }
}
