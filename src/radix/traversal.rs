use super::node::RadixTreeNode;
use crate::enums::HttpMethod;
use crate::matcher::{Capture, CaptureList, CaptureValue};
use crate::registry::RouteEntry;

/// Depth-first match of `segments[index..]` below `node`.
///
/// Alternatives at every node, in order: static literal, dynamic, optional (consume, then
/// skip), wildcard. A branch that fails deeper hands control to the next alternative.
/// `position` is the pattern position of the next segment; captures record it so names can
/// be resolved against whichever route finally matches.
pub(super) fn find_from<'n, 'p, H: ?Sized>(
    node: &'n RadixTreeNode<H>,
    method: HttpMethod,
    segments: &[&'p str],
    index: usize,
    position: usize,
    captures: &mut CaptureList<'p>,
) -> Option<&'n RouteEntry<H>> {
    if !node.serves(method) {
        return None;
    }

    if index == segments.len() {
        return handle_terminal(node, method, segments, position, captures);
    }

    let segment = segments[index];
    let checkpoint = captures.len();

    if let Some(child) = node.static_children.get(segment)
        && let Some(next_index) = skip_prefix(child, segments, index + 1)
        && let Some(found) = find_from(
            child,
            method,
            segments,
            next_index,
            position + 1 + child.prefix.len(),
            captures,
        )
    {
        return Some(found);
    }
    captures.truncate(checkpoint);

    if let Some(dynamic) = node.dynamic.as_deref() {
        captures.push(Capture {
            position,
            value: CaptureValue::Slice(segment),
        });
        if let Some(found) = find_from(
            &dynamic.node,
            method,
            segments,
            index + 1,
            position + 1,
            captures,
        ) {
            return Some(found);
        }
        captures.truncate(checkpoint);
    }

    if let Some(optional) = node.optional.as_deref() {
        captures.push(Capture {
            position,
            value: CaptureValue::Slice(segment),
        });
        if let Some(found) = find_from(
            &optional.node,
            method,
            segments,
            index + 1,
            position + 1,
            captures,
        ) {
            return Some(found);
        }
        captures.truncate(checkpoint);

        // parameter absent: the same segment is matched against the rest of the pattern
        if let Some(found) = find_from(
            &optional.node,
            method,
            segments,
            index,
            position + 1,
            captures,
        ) {
            return Some(found);
        }
        captures.truncate(checkpoint);
    }

    handle_wildcard(node, method, index, position, captures)
}

fn handle_terminal<'n, 'p, H: ?Sized>(
    node: &'n RadixTreeNode<H>,
    method: HttpMethod,
    segments: &[&'p str],
    position: usize,
    captures: &mut CaptureList<'p>,
) -> Option<&'n RouteEntry<H>> {
    if let Some(entry) = node.route(method) {
        return Some(entry);
    }

    let checkpoint = captures.len();
    if let Some(optional) = node.optional.as_deref()
        && let Some(found) = find_from(
            &optional.node,
            method,
            segments,
            segments.len(),
            position + 1,
            captures,
        )
    {
        return Some(found);
    }
    captures.truncate(checkpoint);

    handle_wildcard(node, method, segments.len(), position, captures)
}

fn handle_wildcard<'n, H: ?Sized>(
    node: &'n RadixTreeNode<H>,
    method: HttpMethod,
    index: usize,
    position: usize,
    captures: &mut CaptureList<'_>,
) -> Option<&'n RouteEntry<H>> {
    let wildcard = node.wildcard.as_deref()?;
    let entry = wildcard.node.route(method)?;
    captures.push(Capture {
        position,
        value: CaptureValue::Rest(index),
    });
    Some(entry)
}

/// Index after the fused prefix of `child`, if the path continues with exactly those segments.
#[inline]
fn skip_prefix<H: ?Sized>(
    child: &RadixTreeNode<H>,
    segments: &[&str],
    index: usize,
) -> Option<usize> {
    let end = index + child.prefix.len();
    let ahead = segments.get(index..end)?;
    ahead
        .iter()
        .zip(child.prefix.iter())
        .all(|(seg, lit)| *seg == &**lit)
        .then_some(end)
}
