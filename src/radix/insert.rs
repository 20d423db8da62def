use super::node::{ParamChild, RadixTreeNode};
use super::tree::RadixRegistry;
use crate::enums::{HttpMethod, MethodSet};
use crate::pattern::{Pattern, Segment};
use crate::registry::{HandlerChain, RegistryError, RegistryResult, RouteEntry};

impl<H: ?Sized> RadixRegistry<H> {
    /// Walks the existing tree along `pattern` without creating anything and reports the
    /// error the insertion would hit.
    pub(super) fn check_insert(
        &self,
        method: HttpMethod,
        pattern: &Pattern,
    ) -> RegistryResult<()> {
        let mut current = &self.root_node;

        for (index, segment) in pattern.segments().iter().enumerate() {
            let slot = match segment {
                Segment::Static(lit) => match current.static_children.get(&**lit) {
                    Some(child) => {
                        current = child;
                        continue;
                    }
                    None => return Ok(()),
                },
                Segment::Dynamic(_) => current.dynamic.as_deref(),
                Segment::OptionalDynamic(_) => current.optional.as_deref(),
                Segment::Wildcard(_) => current.wildcard.as_deref(),
            };

            let Some(child) = slot else {
                return Ok(());
            };
            self.check_slot_name(pattern, index, child, segment)?;
            current = &child.node;
        }

        if current.route(method).is_some() && !self.options.overwrite_method {
            return Err(RegistryError::DuplicateRoute {
                method,
                pattern: pattern.canonical().to_string(),
            });
        }
        Ok(())
    }

    fn check_slot_name(
        &self,
        pattern: &Pattern,
        index: usize,
        child: &ParamChild<H>,
        segment: &Segment,
    ) -> RegistryResult<()> {
        let incoming = segment.param_name().unwrap_or_default();
        if self.options.allow_param_alias || &*child.name == incoming {
            return Ok(());
        }
        Err(RegistryError::RouteConflict {
            pattern: pattern.canonical().to_string(),
            segment_index: index,
            existing: child.name.to_string(),
            incoming: incoming.to_string(),
        })
    }

    /// Creates the node chain and stores the entry. Only call after [`check_insert`].
    /// Returns whether an existing entry was replaced.
    pub(super) fn insert_checked(
        &mut self,
        method: HttpMethod,
        pattern: &Pattern,
        chain: HandlerChain<H>,
    ) -> bool {
        let mask = MethodSet::from(method);
        let mut current = &mut self.root_node;
        current.methods |= mask;

        for segment in pattern.segments() {
            current = descend_or_create(current, segment);
            current.methods |= mask;
        }

        current.routes[method.index()]
            .replace(RouteEntry::new(pattern, chain))
            .is_some()
    }
}

fn descend_or_create<'a, H: ?Sized>(
    node: &'a mut RadixTreeNode<H>,
    segment: &Segment,
) -> &'a mut RadixTreeNode<H> {
    match segment {
        Segment::Static(lit) => node.static_children.entry(lit.clone()).or_default(),
        Segment::Dynamic(name) => {
            &mut node
                .dynamic
                .get_or_insert_with(|| Box::new(ParamChild::new(name)))
                .node
        }
        Segment::OptionalDynamic(name) => {
            &mut node
                .optional
                .get_or_insert_with(|| Box::new(ParamChild::new(name)))
                .node
        }
        Segment::Wildcard(name) => {
            &mut node
                .wildcard
                .get_or_insert_with(|| Box::new(ParamChild::new(name)))
                .node
        }
    }
}
