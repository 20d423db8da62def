use super::compression::compress_root_node;
use super::node::RadixTreeNode;
use super::traversal::find_from;
use crate::enums::HttpMethod;
use crate::matcher::{CaptureList, MatchResult, captures_to_map};
use crate::path::split_segments;
use crate::pattern::Pattern;
use crate::registry::{
    BatchEntry, BatchResult, HandlerChain, RegistryError, RegistryMetrics, RegistryResult,
    RouteRegistry, stage_batch,
};
use crate::router::RouterOptions;
use std::fmt;

/// Segment-tree registry: statics first, then dynamic, optional and wildcard slots.
pub struct RadixRegistry<H: ?Sized> {
    pub(crate) root_node: RadixTreeNode<H>,
    pub(crate) options: RouterOptions,
    metrics: RegistryMetrics,
    sealed: bool,
}

impl<H: ?Sized> RadixRegistry<H> {
    pub fn new(options: RouterOptions) -> Self {
        Self {
            root_node: RadixTreeNode::default(),
            options,
            metrics: RegistryMetrics::default(),
            sealed: false,
        }
    }
}

impl<H: ?Sized> Clone for RadixRegistry<H> {
    fn clone(&self) -> Self {
        Self {
            root_node: self.root_node.clone(),
            options: self.options.clone(),
            metrics: self.metrics.clone(),
            sealed: self.sealed,
        }
    }
}

impl<H: ?Sized> fmt::Debug for RadixRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadixRegistry")
            .field("root_node", &self.root_node)
            .field("options", &self.options)
            .field("metrics", &self.metrics)
            .field("sealed", &self.sealed)
            .finish()
    }
}

impl<H: ?Sized + Send + Sync> RouteRegistry<H> for RadixRegistry<H> {
    fn options(&self) -> &RouterOptions {
        &self.options
    }

    fn insert(
        &mut self,
        method: HttpMethod,
        pattern: Pattern,
        chain: HandlerChain<H>,
    ) -> RegistryResult<()> {
        tracing::event!(tracing::Level::TRACE, operation = "insert", method = %method, pattern = %pattern);
        if self.sealed {
            return Err(RegistryError::Sealed {
                operation: "insert",
                pattern: Some(pattern.canonical().to_string()),
            });
        }

        self.check_insert(method, &pattern)?;

        if self.insert_checked(method, &pattern, chain) {
            self.metrics.record_overwrite();
            tracing::debug!(method = %method, pattern = %pattern, "replaced handler chain");
        } else {
            self.metrics.record_insert();
        }
        Ok(())
    }

    fn insert_batch(&mut self, entries: Vec<BatchEntry<H>>) -> BatchResult {
        stage_batch(self, entries)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(method = %method, path = %path))]
    fn search(&self, method: HttpMethod, path: &str) -> MatchResult<H> {
        let segments = split_segments(path);
        let mut captures = CaptureList::new();

        match find_from(&self.root_node, method, &segments, 0, 0, &mut captures) {
            Some(entry) => {
                let params = captures_to_map(entry, &segments, &captures);
                MatchResult::from_entry(method, entry, params)
            }
            None => MatchResult::not_found(method),
        }
    }

    fn finalize(&mut self) {
        if self.sealed {
            return;
        }
        compress_root_node(&mut self.root_node);
        self.sealed = true;
        tracing::event!(
            tracing::Level::DEBUG,
            routes = self.metrics.total_routes_registered as u64,
            "radix registry finalized"
        );
    }

    fn is_sealed(&self) -> bool {
        self.sealed
    }

    fn len(&self) -> usize {
        self.root_node.count_routes()
    }

    fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }
}
