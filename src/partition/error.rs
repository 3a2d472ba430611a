use thiserror::Error;

use crate::geometry::Axis;

/// Fatal consistency errors raised by the partition sweep.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PartitionError {
    /// An upper bound fired while no node was active. Bound extraction
    /// guarantees every upper edge is preceded by the matching activation
    /// (initial stab or lower bound), so this indicates malformed input.
    #[error("upper bound at {axis} = {coord} fired with no active node")]
    StrayUpperBound { axis: Axis, coord: f64 },
}
