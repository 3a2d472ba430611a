//! Working copy of a node inside the selection loop.

use std::collections::BTreeSet;

use qtty::Unit;

use crate::partition::Node;
use crate::SinkName;

/// A candidate for selection: a canonical node plus the subset of its sinks
/// not yet covered by earlier picks.
///
/// The remaining set shrinks destructively as the loop progresses; the
/// node itself is the untouched combiner output.
#[derive(Debug, Clone)]
pub struct CoverCandidate<U: Unit> {
    node: Node<U>,
    remaining: BTreeSet<SinkName>,
}

impl<U: Unit> CoverCandidate<U> {
    /// Creates a candidate whose remaining set starts as the node's full
    /// ownership.
    pub fn new(node: Node<U>) -> Self {
        let remaining = node.sinks().clone();
        Self { node, remaining }
    }

    pub const fn node(&self) -> &Node<U> {
        &self.node
    }

    pub fn id(&self) -> u64 {
        self.node.id()
    }

    pub fn area(&self) -> f64 {
        self.node.area()
    }

    /// Number of distinct sinks this candidate would newly cover.
    pub fn remaining_count(&self) -> usize {
        self.remaining.len()
    }

    pub const fn remaining(&self) -> &BTreeSet<SinkName> {
        &self.remaining
    }

    /// True once every sink this node owned is covered elsewhere.
    pub fn is_exhausted(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Strips the given names from the remaining set.
    pub fn strip(&mut self, covered: &BTreeSet<SinkName>) {
        self.remaining.retain(|name| !covered.contains(name));
    }

    /// Consumes the candidate into a finalized selection entry: the node's
    /// id and region with ownership narrowed to what it actually granted.
    pub fn into_grant(self) -> Node<U> {
        Node::with_region(self.node.id(), self.remaining, self.node.region().copied())
    }
}
