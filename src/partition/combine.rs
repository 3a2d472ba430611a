//! Cross-axis combination of the two 1-D partitions into final 2-D nodes.

use std::collections::{BTreeSet, HashMap, HashSet};

use qtty::Unit;

use super::node::{Node, NodeSeq};
use crate::geometry::{Rect, Reach};
use crate::SinkName;

/// Combines the x- and y-partition node sets into the final 2-D node set.
///
/// Every (x-node, y-node) pair contributes the intersection of its sink
/// sets; empty intersections are dropped and pairs yielding an already-seen
/// combination collapse into the node created first (node identity is the
/// sink-name set).
///
/// Each surviving node's movable region is the intersection of the source
/// box with the box of every member sink. The fold can come up empty when
/// the run's geometric preconditions do not hold; the node is still emitted
/// with no region (area 0) — degeneracy is the selector's and the caller's
/// concern, not the combiner's.
pub fn combine_axes<U: Unit>(
    x_nodes: &[Node<U>],
    y_nodes: &[Node<U>],
    source: &Rect<U>,
    sinks: &[Reach<U>],
    seq: &mut NodeSeq,
) -> Vec<Node<U>> {
    let rect_by_name: HashMap<&str, &Rect<U>> =
        sinks.iter().map(|s| (s.name(), s.rect())).collect();

    let mut seen: HashSet<BTreeSet<SinkName>> = HashSet::new();
    let mut combined = Vec::new();

    for xn in x_nodes {
        for yn in y_nodes {
            let members: BTreeSet<SinkName> =
                xn.sinks().intersection(yn.sinks()).cloned().collect();
            if members.is_empty() || !seen.insert(members.clone()) {
                continue;
            }

            let region = movable_region(source, &members, &rect_by_name);
            combined.push(Node::with_region(seq.next_id(), members, region));
        }
    }

    combined
}

/// Intersection of the source box with every member sink's box.
fn movable_region<U: Unit>(
    source: &Rect<U>,
    members: &BTreeSet<SinkName>,
    rect_by_name: &HashMap<&str, &Rect<U>>,
) -> Option<Rect<U>> {
    let mut region = *source;
    for name in members {
        let rect = *rect_by_name.get(name.as_str())?;
        region = region.intersection(rect)?;
    }
    Some(region)
}
