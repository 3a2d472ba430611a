//! Partition generation: bound extraction, the per-axis sweep, and the
//! cross-axis combiner.
//!
//! The pipeline slices the source rectangle into maximal sub-regions of
//! constant sink membership:
//!
//! 1. [`collect_bounds`] extracts the sink edges strictly interior to the
//!    source span on one axis, merging coincident edges into single events.
//! 2. [`sweep_axis`] walks the ordered events and emits one [`Node`] per
//!    distinct sink combination encountered.
//! 3. [`combine_axes`] intersects the two 1-D partitions pairwise and
//!    resolves each surviving node's movable region.
//!
//! Node identity throughout is the sink-name set; the numeric id exists
//! only as a deterministic tie-break for the selector.

mod bound;
mod combine;
mod error;
mod node;
mod sweep;

pub use bound::{collect_bounds, Bound, BoundKind, CoordKey};
pub use combine::combine_axes;
pub use error::PartitionError;
pub use node::{Node, NodeSeq};
pub use sweep::sweep_axis;
