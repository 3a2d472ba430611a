//! Greedy weighted set cover over the final node set.
//!
//! The selector repeatedly picks the node that still owns the most
//! uncovered sinks, preferring larger movable regions and then older
//! creation ids on ties, until every sink name is covered. Candidates are
//! working copies: the canonical combiner output is never mutated.
//!
//! # Module Structure
//!
//! - [`candidate`] - working copy of a node with its shrinking remaining set
//! - [`ordering`] - the selection priority as a total order
//! - [`engine`] - the selection loop itself
//! - [`error`] - the reported coverage-failure condition

mod candidate;
mod engine;
mod error;
mod ordering;

pub use candidate::CoverCandidate;
pub use engine::select_cover;
pub use error::CoverError;
pub use ordering::compare_candidates;
