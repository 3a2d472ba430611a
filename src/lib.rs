//! reachplan - merge-point planning over rectilinear pin-reach regions.
//!
//! Given one "source" rectangle (the region where a new connection point may
//! be placed) and a set of named "sink" rectangles (the reachable region of
//! each pin), the library partitions the source into maximal sub-regions of
//! constant sink membership and greedily selects a minimal set of merge
//! nodes covering every sink.
//!
//! The pipeline runs in four stages:
//!
//! 1. Per-axis stabbing indexes and bound pools over the sink intervals
//! 2. A sweep per axis producing maximal constant-membership 1-D nodes
//! 3. A cross-axis combiner intersecting sink sets and resolving each
//!    node's movable region
//! 4. A greedy weighted set cover selecting the final merge nodes

pub mod cover;
pub mod geometry;
pub mod index;
pub mod loader;
pub mod partition;
pub mod plan;

pub use plan::{plan_merge_points, PlanError};

/// Identifier type for sinks. Two sinks with the same name are the same pin.
pub type SinkName = String;
