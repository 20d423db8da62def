mod chain;
mod error;
mod stats;
mod store;

pub use chain::{HandlerChain, RouteEntry};
pub use error::{RegistryError, RegistryResult};
pub use stats::RegistryMetrics;
pub use store::build_registry;

use crate::enums::HttpMethod;
use crate::matcher::MatchResult;
use crate::pattern::{Pattern, compile_with};
use crate::router::RouterOptions;
use crate::types::HandlerRef;

/// One prepared registration of a batch.
pub type BatchEntry<H> = (HttpMethod, Pattern, HandlerChain<H>);

/// Number of inserted entries, or the index of the first rejected entry with its error.
pub type BatchResult = Result<usize, (usize, RegistryError)>;

/// Contract shared by every matching engine.
///
/// Registration happens through `&mut self` during startup; `search` only needs `&self`
/// and never mutates, so a finished registry can be shared across threads.
pub trait RouteRegistry<H: ?Sized>: Send + Sync {
    fn options(&self) -> &RouterOptions;

    /// Inserts an already compiled pattern. Leaves the registry untouched on error.
    fn insert(
        &mut self,
        method: HttpMethod,
        pattern: Pattern,
        chain: HandlerChain<H>,
    ) -> RegistryResult<()>;

    fn add_route(
        &mut self,
        method: HttpMethod,
        pattern: &str,
        handlers: Vec<HandlerRef<H>>,
    ) -> RegistryResult<()> {
        let compiled = compile_with(pattern, self.options().compile_options())?;
        let chain = HandlerChain::new(
            handlers,
            self.options().allow_duplicate_mw,
            compiled.canonical(),
        )?;
        self.insert(method, compiled, chain)
    }

    /// Inserts every entry or none of them.
    fn insert_batch(&mut self, entries: Vec<BatchEntry<H>>) -> BatchResult;

    fn search(&self, method: HttpMethod, path: &str) -> MatchResult<H>;

    /// Freezes the registry; later insertions fail with [`RegistryError::Sealed`].
    fn finalize(&mut self);

    fn is_sealed(&self) -> bool;

    /// Number of distinct (method, route) entries.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn metrics(&self) -> &RegistryMetrics;
}

/// Applies `entries` to a copy of `registry` and replaces the original only when every entry
/// was accepted, so a rejected batch leaves `registry` untouched.
pub(crate) fn stage_batch<H, R>(
    registry: &mut R,
    entries: Vec<BatchEntry<H>>,
) -> BatchResult
where
    H: ?Sized,
    R: RouteRegistry<H> + Clone,
{
    let mut staged = registry.clone();
    let count = entries.len();
    for (index, (method, pattern, chain)) in entries.into_iter().enumerate() {
        if let Err(err) = staged.insert(method, pattern, chain) {
            tracing::debug!(index = index as u64, error = %err, "batch rejected");
            return Err((index, err));
        }
    }
    *registry = staged;
    Ok(count)
}
