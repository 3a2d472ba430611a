//! The per-axis sweep: ordered bound events to constant-membership nodes.

use std::collections::{BTreeSet, HashSet};

use qtty::Unit;

use super::bound::{Bound, BoundKind};
use super::error::PartitionError;
use super::node::{Node, NodeSeq};
use crate::geometry::{Axis, Span};
use crate::index::StabbingIndex;
use crate::SinkName;

/// Output accumulator that collapses revisited sink combinations.
///
/// The sweep cares which combinations of sinks co-occur, not how many
/// disjoint intervals realize them, so a membership set seen twice maps to
/// the node created on first sight.
struct Emitted<U: Unit> {
    nodes: Vec<Node<U>>,
    seen: HashSet<BTreeSet<SinkName>>,
}

impl<U: Unit> Emitted<U> {
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            seen: HashSet::new(),
        }
    }

    fn record(&mut self, sinks: &BTreeSet<SinkName>, seq: &mut NodeSeq) {
        if self.seen.insert(sinks.clone()) {
            self.nodes.push(Node::new(seq.next_id(), sinks.clone()));
        }
    }
}

/// Sweeps one axis, producing the distinct maximal constant-membership
/// sink combinations between the source's edges.
///
/// The machine tracks a single optional "current" membership set:
///
/// - it starts as whatever the index reports at the source's lower edge,
/// - an upper event removes the closing sinks (the set may empty out),
/// - a lower event adds the opening sinks (possibly reopening from empty),
/// - the source's upper edge implicitly closes the final set; the per-axis
///   coordinates are not load-bearing for the cross-axis combine, so no
///   explicit close step is emitted.
///
/// An upper event with no active set means bound extraction fed the sweep
/// inconsistent data; the run aborts rather than producing a partial,
/// misleading partition.
pub fn sweep_axis<U: Unit>(
    index: &StabbingIndex<U>,
    bounds: &[Bound<U>],
    source_span: Span<U>,
    axis: Axis,
    seq: &mut NodeSeq,
) -> Result<Vec<Node<U>>, PartitionError> {
    let mut emitted = Emitted::new();

    let initial: BTreeSet<SinkName> = index
        .stab(source_span.lo())
        .into_iter()
        .map(str::to_owned)
        .collect();

    let mut current: Option<BTreeSet<SinkName>> = if initial.is_empty() {
        None
    } else {
        emitted.record(&initial, seq);
        Some(initial)
    };

    for bound in bounds {
        match bound.kind() {
            BoundKind::Upper => {
                let Some(active) = current.take() else {
                    return Err(PartitionError::StrayUpperBound {
                        axis,
                        coord: bound.coord().value(),
                    });
                };
                let remaining: BTreeSet<SinkName> =
                    active.difference(bound.sinks()).cloned().collect();
                if !remaining.is_empty() {
                    emitted.record(&remaining, seq);
                    current = Some(remaining);
                }
            }
            BoundKind::Lower => {
                let opened = match current.take() {
                    Some(active) => active.union(bound.sinks()).cloned().collect(),
                    None => bound.sinks().clone(),
                };
                emitted.record(&opened, seq);
                current = Some(opened);
            }
        }
    }

    Ok(emitted.nodes)
}
