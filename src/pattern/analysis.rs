use super::segment::{Pattern, Segment, SegmentKind};

/// Two patterns that share a structural prefix but name the same parameter slot differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotConflict {
    pub segment_index: usize,
    pub kind: SegmentKind,
    pub existing: Box<str>,
    pub incoming: Box<str>,
}

/// Walks both patterns while they occupy the same tree positions and reports the first
/// parameter slot whose names disagree.
///
/// Statics diverge on different literals; segments of different kinds live in different
/// slots and never conflict.
pub fn first_slot_conflict(existing: &Pattern, incoming: &Pattern) -> Option<SlotConflict> {
    for (index, (a, b)) in existing
        .segments()
        .iter()
        .zip(incoming.segments())
        .enumerate()
    {
        match (a, b) {
            (Segment::Static(la), Segment::Static(lb)) => {
                if la != lb {
                    return None;
                }
            }
            (Segment::Dynamic(na), Segment::Dynamic(nb))
            | (Segment::OptionalDynamic(na), Segment::OptionalDynamic(nb))
            | (Segment::Wildcard(na), Segment::Wildcard(nb)) => {
                if na != nb {
                    return Some(SlotConflict {
                        segment_index: index,
                        kind: a.kind(),
                        existing: na.clone(),
                        incoming: nb.clone(),
                    });
                }
            }
            _ => return None,
        }
    }
    None
}
