use regex::Regex;
use std::fmt;

use super::translate::to_regex;
use crate::enums::{HTTP_METHOD_COUNT, HttpMethod};
use crate::matcher::MatchResult;
use crate::path::normalize_path;
use crate::pattern::{Pattern, first_slot_conflict};
use crate::registry::{
    BatchEntry, BatchResult, HandlerChain, RegistryError, RegistryMetrics, RegistryResult,
    RouteEntry, RouteRegistry, stage_batch,
};
use crate::router::RouterOptions;
use crate::types::RouteParams;

struct RegexRoute<H: ?Sized> {
    regex: Regex,
    shape: Box<str>,
    // group index of the wildcard parameter, if the pattern ends with one
    wildcard_group: Option<usize>,
    entry: RouteEntry<H>,
}

impl<H: ?Sized> Clone for RegexRoute<H> {
    fn clone(&self) -> Self {
        Self {
            regex: self.regex.clone(),
            shape: self.shape.clone(),
            wildcard_group: self.wildcard_group,
            entry: self.entry.clone(),
        }
    }
}

/// Registry that compiles every pattern to one anchored expression and tries them in
/// registration order. The first registered route wins on overlap.
pub struct RegexRegistry<H: ?Sized> {
    routes: [Vec<RegexRoute<H>>; HTTP_METHOD_COUNT],
    // every distinct pattern shape seen, across methods, for slot-name conflicts
    patterns: Vec<Pattern>,
    options: RouterOptions,
    metrics: RegistryMetrics,
    sealed: bool,
}

impl<H: ?Sized> RegexRegistry<H> {
    pub fn new(options: RouterOptions) -> Self {
        Self {
            routes: std::array::from_fn(|_| Vec::new()),
            patterns: Vec::new(),
            options,
            metrics: RegistryMetrics::default(),
            sealed: false,
        }
    }

    fn check_conflicts(&self, pattern: &Pattern) -> RegistryResult<()> {
        if self.options.allow_param_alias {
            return Ok(());
        }
        for existing in &self.patterns {
            if let Some(conflict) = first_slot_conflict(existing, pattern) {
                return Err(RegistryError::RouteConflict {
                    pattern: pattern.canonical().to_string(),
                    segment_index: conflict.segment_index,
                    existing: conflict.existing.into_string(),
                    incoming: conflict.incoming.into_string(),
                });
            }
        }
        Ok(())
    }

    fn params_from(route: &RegexRoute<H>, captures: &regex::Captures<'_>) -> RouteParams {
        let mut params = RouteParams::with_capacity(route.entry.params.len());
        for (k, (_, name)) in route.entry.params.iter().enumerate() {
            let group = k + 1;
            match captures.get(group) {
                Some(m) => {
                    params.insert(name.to_string(), m.as_str().to_string());
                }
                None if route.wildcard_group == Some(group) => {
                    params.insert(name.to_string(), String::new());
                }
                None => {}
            }
        }
        params
    }
}

impl<H: ?Sized> Clone for RegexRegistry<H> {
    fn clone(&self) -> Self {
        Self {
            routes: self.routes.clone(),
            patterns: self.patterns.clone(),
            options: self.options.clone(),
            metrics: self.metrics.clone(),
            sealed: self.sealed,
        }
    }
}

impl<H: ?Sized> fmt::Debug for RegexRegistry<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let per_method: Vec<usize> = self.routes.iter().map(Vec::len).collect();
        f.debug_struct("RegexRegistry")
            .field("routes", &per_method)
            .field("options", &self.options)
            .field("metrics", &self.metrics)
            .field("sealed", &self.sealed)
            .finish()
    }
}

impl<H: ?Sized + Send + Sync> RouteRegistry<H> for RegexRegistry<H> {
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

        self.check_conflicts(&pattern)?;

        let shape = pattern.shape();
        let overwrite = self.options.overwrite_method;
        let list = &mut self.routes[method.index()];
        if let Some(existing) = list.iter_mut().find(|r| *r.shape == *shape) {
            if !overwrite {
                return Err(RegistryError::DuplicateRoute {
                    method,
                    pattern: pattern.canonical().to_string(),
                });
            }
            // keeps its place in the evaluation order
            existing.entry = RouteEntry::new(&pattern, chain);
            self.metrics.record_overwrite();
            tracing::debug!(method = %method, pattern = %pattern, "replaced handler chain");
            return Ok(());
        }

        let regex = Regex::new(&to_regex(&pattern)).map_err(|err| RegistryError::InvalidRegex {
            pattern: pattern.canonical().to_string(),
            error: err.to_string(),
        })?;
        let wildcard_group = pattern
            .segments()
            .last()
            .filter(|seg| seg.is_wildcard())
            .map(|_| pattern.param_count());

        list.push(RegexRoute {
            regex,
            shape: shape.into_boxed_str(),
            wildcard_group,
            entry: RouteEntry::new(&pattern, chain),
        });
        if !self.patterns.iter().any(|p| p.canonical() == pattern.canonical()) {
            self.patterns.push(pattern);
        }
        self.metrics.record_insert();
        Ok(())
    }

    fn insert_batch(&mut self, entries: Vec<BatchEntry<H>>) -> BatchResult {
        stage_batch(self, entries)
    }

    #[tracing::instrument(level = "trace", skip_all, fields(method = %method, path = %path))]
    fn search(&self, method: HttpMethod, path: &str) -> MatchResult<H> {
        let normalized = normalize_path(path);

        for route in &self.routes[method.index()] {
            if let Some(captures) = route.regex.captures(&normalized) {
                let params = Self::params_from(route, &captures);
                return MatchResult::from_entry(method, &route.entry, params);
            }
        }
        MatchResult::not_found(method)
    }

    fn finalize(&mut self) {
        if self.sealed {
            return;
        }
        self.sealed = true;
        tracing::event!(
            tracing::Level::DEBUG,
            routes = self.metrics.total_routes_registered as u64,
            "regex registry finalized"
        );
    }

    fn is_sealed(&self) -> bool {
        self.sealed
    }

    fn len(&self) -> usize {
        self.routes.iter().map(Vec::len).sum()
    }

    fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }
}
