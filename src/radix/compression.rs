use super::node::RadixTreeNode;

fn can_compress_here<H: ?Sized>(n: &RadixTreeNode<H>) -> bool {
    !n.has_routes() && !n.has_param_slots() && n.static_children.len() == 1
}

/// Replaces a chain of pass-through static nodes starting at `n` with its first
/// non-pass-through descendant, recording the skipped literals in its `prefix`.
fn absorb_chain<H: ?Sized>(n: &mut RadixTreeNode<H>) {
    while can_compress_here(n) {
        let Some((key, mut child)) = n.static_children.drain().next() else {
            return;
        };
        let mut prefix = std::mem::take(&mut n.prefix);
        prefix.push(key);
        prefix.extend(child.prefix.drain(..));
        child.prefix = prefix;
        *n = child;
    }
}

fn compress_node<H: ?Sized>(n: &mut RadixTreeNode<H>) {
    for child in n.static_children.values_mut() {
        absorb_chain(child);
        compress_node(child);
    }
    if let Some(c) = n.dynamic.as_deref_mut() {
        compress_node(&mut c.node);
    }
    if let Some(c) = n.optional.as_deref_mut() {
        compress_node(&mut c.node);
    }
    if let Some(c) = n.wildcard.as_deref_mut() {
        compress_node(&mut c.node);
    }
}

// The root itself is never fused: its children are keyed by the first path segment.
pub(super) fn compress_root_node<H: ?Sized>(root: &mut RadixTreeNode<H>) {
    compress_node(root);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::HttpMethod;
    use crate::radix::RadixRegistry;
    use crate::registry::RouteRegistry;
    use std::sync::Arc;

    fn registry(patterns: &[&str]) -> RadixRegistry<str> {
        let mut registry = RadixRegistry::new(Default::default());
        for pattern in patterns {
            registry
                .add_route(HttpMethod::Get, pattern, vec![Arc::from(*pattern)])
                .expect("route should register");
        }
        registry
    }

    #[test]
    fn fuses_single_child_static_chain() {
        let mut registry = registry(&["/api/v1/users/list"]);
        compress_root_node(&mut registry.root_node);

        let api = registry
            .root_node
            .static_children
            .get("api")
            .expect("api child should remain");
        let prefix: Vec<&str> = api.prefix.iter().map(|s| &**s).collect();
        assert_eq!(prefix, vec!["v1", "users", "list"]);
        assert!(api.route(HttpMethod::Get).is_some());
    }

    #[test]
    fn stops_at_nodes_with_routes_or_branches() {
        let mut registry = registry(&["/a/b", "/a/b/c/d", "/a/b/c/e"]);
        compress_root_node(&mut registry.root_node);

        let a = registry.root_node.static_children.get("a").expect("a");
        let b = &a.prefix;
        assert_eq!(b.len(), 1);
        assert_eq!(&*b[0], "b");
        let c = a.static_children.get("c").expect("c keeps its branches");
        assert!(c.prefix.is_empty());
        assert_eq!(c.static_children.len(), 2);
    }

    #[test]
    fn does_not_fuse_through_parameter_slots() {
        let mut registry = registry(&["/x/y/:id/z/w"]);
        compress_root_node(&mut registry.root_node);

        let x = registry.root_node.static_children.get("x").expect("x");
        assert_eq!(x.prefix.len(), 1);
        let dynamic = x.dynamic.as_deref().expect("dynamic slot kept");
        let z = dynamic.node.static_children.get("z").expect("z");
        assert_eq!(z.prefix.len(), 1);
        assert_eq!(&*z.prefix[0], "w");
    }
}
