//! Partition nodes: a sink combination plus its movable region.

use std::collections::BTreeSet;
use std::fmt::Display;
use std::hash::{Hash, Hasher};

use qtty::Unit;

use crate::geometry::Rect;
use crate::SinkName;

/// A combination of sinks together with the rectangular region where all of
/// them remain simultaneously reachable.
///
/// Identity, equality, and hashing are defined by the sink-name set alone:
/// two nodes owning the same sinks are the same node regardless of id or
/// geometry. The id is a per-run creation counter used purely as a
/// deterministic tie-break in the selector.
///
/// The movable region is `None` for the 1-D nodes produced by the sweep and
/// is written exactly once, by the combiner, when the 2-D node is finalized.
#[derive(Debug, Clone)]
pub struct Node<U: Unit> {
    id: u64,
    sinks: BTreeSet<SinkName>,
    region: Option<Rect<U>>,
}

impl<U: Unit> Node<U> {
    /// Creates a node with no movable region (sweep-stage node).
    pub fn new(id: u64, sinks: BTreeSet<SinkName>) -> Self {
        Self {
            id,
            sinks,
            region: None,
        }
    }

    /// Creates a finalized node with its movable region resolved.
    pub fn with_region(id: u64, sinks: BTreeSet<SinkName>, region: Option<Rect<U>>) -> Self {
        Self { id, sinks, region }
    }

    pub const fn id(&self) -> u64 {
        self.id
    }

    pub const fn sinks(&self) -> &BTreeSet<SinkName> {
        &self.sinks
    }

    pub fn sink_count(&self) -> usize {
        self.sinks.len()
    }

    pub const fn region(&self) -> Option<&Rect<U>> {
        self.region.as_ref()
    }

    /// Area of the movable region, or 0 when the region is undefined.
    pub fn area(&self) -> f64 {
        self.region.as_ref().map_or(0.0, Rect::area)
    }

    pub fn owns(&self, name: &str) -> bool {
        self.sinks.contains(name)
    }
}

impl<U: Unit> PartialEq for Node<U> {
    fn eq(&self, other: &Self) -> bool {
        self.sinks == other.sinks
    }
}

impl<U: Unit> Eq for Node<U> {}

impl<U: Unit> Hash for Node<U> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sinks.hash(state);
    }
}

impl<U: Unit> Display for Node<U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node#{} {{", self.id)?;
        for (i, name) in self.sinks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", name)?;
        }
        write!(f, "}}")?;
        if let Some(region) = &self.region {
            write!(f, " @ {}", region)?;
        }
        Ok(())
    }
}

/// Per-run monotone id source for node creation.
///
/// One sequence is threaded through both sweeps and the combiner, so every
/// node created during a run carries a unique id and the selector's
/// oldest-node tie-break is a total order.
#[derive(Debug, Default)]
pub struct NodeSeq(u64);

impl NodeSeq {
    pub fn new() -> Self {
        Self(0)
    }

    /// Returns the next id, advancing the sequence.
    pub fn next_id(&mut self) -> u64 {
        let id = self.0;
        self.0 += 1;
        id
    }
}
