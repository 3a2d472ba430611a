//! Candidate comparison for the selection loop.

use std::cmp::Ordering;

use qtty::Unit;

use super::candidate::CoverCandidate;

/// Compares candidates by creation id for deterministic tie-breaking.
pub fn compare_by_id<U: Unit>(a: &CoverCandidate<U>, b: &CoverCandidate<U>) -> Ordering {
    a.id().cmp(&b.id())
}

/// Main comparison function for sorting candidates: best pick first.
///
/// More uncovered sinks first, then larger movable area, then the oldest
/// node. Ids are unique per run, so the order is total and a sorted
/// candidate list has a single well-defined front.
pub fn compare_candidates<U: Unit>(a: &CoverCandidate<U>, b: &CoverCandidate<U>) -> Ordering {
    // More remaining sinks first
    if a.remaining_count() != b.remaining_count() {
        return b.remaining_count().cmp(&a.remaining_count());
    }

    // Larger movable region first
    if a.area() != b.area() {
        return b.area().total_cmp(&a.area());
    }

    // Tie-breaker: oldest node wins
    compare_by_id(a, b)
}
