//! End-to-end merge-point planning pipeline.
//!
//! [`plan_merge_points`] wires the stages together: validate the input,
//! build the per-axis stabbing indexes and bound pools, sweep both axes,
//! combine the partitions, and run the greedy cover. The result is the
//! ordered list of selected merge nodes, each carrying its movable region
//! and the sink names it was selected to cover.

use std::collections::BTreeSet;

use qtty::Unit;
use thiserror::Error;

use crate::cover::{select_cover, CoverError};
use crate::geometry::{Axis, Reach, Rect};
use crate::index::StabbingIndex;
use crate::partition::{collect_bounds, combine_axes, sweep_axis, Node, NodeSeq, PartitionError};
use crate::SinkName;

#[cfg(test)]
mod tests;

/// Errors raised by the planning pipeline.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlanError {
    #[error("sink list is empty")]
    EmptySinkSet,

    #[error("duplicate sink name: {0}")]
    DuplicateSink(SinkName),

    #[error(transparent)]
    Partition(#[from] PartitionError),

    #[error(transparent)]
    Coverage(#[from] CoverError),
}

/// Plans merge points for one source region and a set of sink reaches.
///
/// On success the returned nodes are ordered by selection round; the union
/// of their sink lists is exactly the input sink-name set and no name
/// appears in two grants. The pipeline is deterministic: identical input
/// yields an identical ordered selection.
///
/// # Errors
///
/// - [`PlanError::EmptySinkSet`] / [`PlanError::DuplicateSink`] for invalid
///   input, rejected before any partitioning work
/// - [`PlanError::Partition`] when the sweep detects inconsistent bounds
///   (fatal; the run aborts)
/// - [`PlanError::Coverage`] when some sinks cannot be covered by any node,
///   e.g. a sink that never intersects the source — the error names them
pub fn plan_merge_points<U: Unit>(
    source: &Rect<U>,
    sinks: &[Reach<U>],
) -> Result<Vec<Node<U>>, PlanError> {
    let universe = validate(sinks)?;

    let mut seq = NodeSeq::new();
    let x_nodes = partition_axis(source, sinks, Axis::X, &mut seq)?;
    let y_nodes = partition_axis(source, sinks, Axis::Y, &mut seq)?;

    let nodes = combine_axes(&x_nodes, &y_nodes, source, sinks, &mut seq);
    let selection = select_cover(&nodes, &universe)?;
    Ok(selection)
}

/// Checks the sink list is non-empty with unique names; returns the
/// sink-name universe the selector must cover.
fn validate<U: Unit>(sinks: &[Reach<U>]) -> Result<BTreeSet<SinkName>, PlanError> {
    if sinks.is_empty() {
        return Err(PlanError::EmptySinkSet);
    }
    let mut universe = BTreeSet::new();
    for sink in sinks {
        if !universe.insert(sink.name().to_owned()) {
            return Err(PlanError::DuplicateSink(sink.name().to_owned()));
        }
    }
    Ok(universe)
}

/// Runs one axis through index construction, bound extraction, and the sweep.
fn partition_axis<U: Unit>(
    source: &Rect<U>,
    sinks: &[Reach<U>],
    axis: Axis,
    seq: &mut NodeSeq,
) -> Result<Vec<Node<U>>, PartitionError> {
    let span = source.span(axis);
    let index = StabbingIndex::from_reaches(sinks, axis);
    let bounds = collect_bounds(sinks, span, axis);
    sweep_axis(&index, &bounds, span, axis, seq)
}
