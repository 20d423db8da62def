use hashbrown::HashMap as FastHashMap;
use smallvec::SmallVec;
use std::fmt;

use crate::enums::{HTTP_METHOD_COUNT, HttpMethod, MethodSet};
use crate::registry::RouteEntry;

pub(super) type StaticMap<H> = FastHashMap<Box<str>, RadixTreeNode<H>>;

/// Child reached through a parameter slot, remembering the name it was registered with.
pub struct ParamChild<H: ?Sized> {
    pub(crate) name: Box<str>,
    pub(crate) node: RadixTreeNode<H>,
}

impl<H: ?Sized> ParamChild<H> {
    pub(super) fn new(name: &str) -> Self {
        Self {
            name: Box::from(name),
            node: RadixTreeNode::default(),
        }
    }
}

impl<H: ?Sized> Clone for ParamChild<H> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            node: self.node.clone(),
        }
    }
}

pub struct RadixTreeNode<H: ?Sized> {
    // extra static segments fused into this node by compression
    pub(crate) prefix: SmallVec<[Box<str>; 2]>,
    pub(crate) static_children: StaticMap<H>,
    pub(crate) dynamic: Option<Box<ParamChild<H>>>,
    pub(crate) optional: Option<Box<ParamChild<H>>>,
    pub(crate) wildcard: Option<Box<ParamChild<H>>>,
    pub(crate) routes: [Option<RouteEntry<H>>; HTTP_METHOD_COUNT],
    // methods registered anywhere in this subtree, including this node
    pub(crate) methods: MethodSet,
}

impl<H: ?Sized> Default for RadixTreeNode<H> {
    fn default() -> Self {
        Self {
            prefix: SmallVec::new(),
            static_children: StaticMap::default(),
            dynamic: None,
            optional: None,
            wildcard: None,
            routes: std::array::from_fn(|_| None),
            methods: MethodSet::empty(),
        }
    }
}

impl<H: ?Sized> RadixTreeNode<H> {
    #[inline(always)]
    pub(super) fn route(&self, method: HttpMethod) -> Option<&RouteEntry<H>> {
        self.routes[method.index()].as_ref()
    }

    #[inline(always)]
    pub(super) fn serves(&self, method: HttpMethod) -> bool {
        self.methods.contains(MethodSet::from(method))
    }

    pub(super) fn has_routes(&self) -> bool {
        self.routes.iter().any(Option::is_some)
    }

    pub(super) fn has_param_slots(&self) -> bool {
        self.dynamic.is_some() || self.optional.is_some() || self.wildcard.is_some()
    }

    /// Number of route entries in this subtree.
    pub(super) fn count_routes(&self) -> usize {
        let own = self.routes.iter().filter(|r| r.is_some()).count();
        let statics: usize = self.static_children.values().map(Self::count_routes).sum();
        let params: usize = [&self.dynamic, &self.optional, &self.wildcard]
            .into_iter()
            .flatten()
            .map(|child| child.node.count_routes())
            .sum();
        own + statics + params
    }
}

impl<H: ?Sized> Clone for RadixTreeNode<H> {
    fn clone(&self) -> Self {
        Self {
            prefix: self.prefix.clone(),
            static_children: self.static_children.clone(),
            dynamic: self.dynamic.clone(),
            optional: self.optional.clone(),
            wildcard: self.wildcard.clone(),
            routes: self.routes.clone(),
            methods: self.methods,
        }
    }
}

impl<H: ?Sized> fmt::Debug for RadixTreeNode<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RadixTreeNode")
            .field("prefix", &self.prefix)
            .field("static_children", &self.static_children)
            .field("dynamic", &self.dynamic.as_ref().map(|c| &c.name))
            .field("optional", &self.optional.as_ref().map(|c| &c.name))
            .field("wildcard", &self.wildcard.as_ref().map(|c| &c.name))
            .field("methods", &self.methods)
            .finish()
    }
}
