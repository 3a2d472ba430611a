use thiserror::Error;

use crate::SinkName;

/// The reported (non-fatal) failure mode of the selector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoverError {
    /// The candidate pool was exhausted while sinks remained uncovered.
    /// `missing` lists the uncovered sink names, sorted.
    #[error("coverage failure: no candidate node reaches {}", missing.join(", "))]
    Uncovered { missing: Vec<SinkName> },
}
