//! Per-axis point-stabbing index over sink intervals.
//!
//! [`StabbingIndex`] answers "which sinks' spans contain coordinate `c`"
//! for a single axis. It is built once from the full sink set, independent
//! of the source, and never mutated afterwards.
//!
//! # Design
//!
//! Entries are kept sorted by span start together with a running prefix
//! maximum of span ends. A stab binary-searches the start cut with
//! `partition_point`, then walks the prefix backwards and stops as soon as
//! the prefix maximum falls at or below the query point: no earlier entry
//! can still contain it. Worst case O(n), but O(log n + k) for the sparse
//! overlap patterns pin reaches produce.

use qtty::{Quantity, Unit};

use crate::geometry::{Axis, Reach, Span};
use crate::SinkName;

#[derive(Debug, Clone)]
struct Entry<U: Unit> {
    span: Span<U>,
    name: SinkName,
}

/// Immutable stabbing-query structure over `[lo, hi)` sink spans on one axis.
#[derive(Debug, Clone)]
pub struct StabbingIndex<U: Unit> {
    entries: Vec<Entry<U>>,
    /// `prefix_max_hi[i]` = max span end over `entries[0..=i]`.
    prefix_max_hi: Vec<f64>,
}

impl<U: Unit> StabbingIndex<U> {
    /// Builds the index from `(name, span)` pairs.
    pub fn new(spans: impl IntoIterator<Item = (SinkName, Span<U>)>) -> Self {
        let mut entries: Vec<Entry<U>> = spans
            .into_iter()
            .map(|(name, span)| Entry { span, name })
            .collect();
        entries.sort_by(|a, b| {
            a.span
                .lo()
                .value()
                .total_cmp(&b.span.lo().value())
                .then_with(|| a.name.cmp(&b.name))
        });

        let mut prefix_max_hi = Vec::with_capacity(entries.len());
        let mut max_hi = f64::NEG_INFINITY;
        for entry in &entries {
            max_hi = max_hi.max(entry.span.hi().value());
            prefix_max_hi.push(max_hi);
        }

        Self {
            entries,
            prefix_max_hi,
        }
    }

    /// Builds the index from the projections of `sinks` onto `axis`.
    pub fn from_reaches(sinks: &[Reach<U>], axis: Axis) -> Self {
        Self::new(
            sinks
                .iter()
                .map(|s| (s.name().to_owned(), s.rect().span(axis))),
        )
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the names of all sinks whose span contains `position`
    /// (half-open `[lo, hi)` semantics).
    pub fn stab(&self, position: Quantity<U>) -> Vec<&str> {
        let at = position.value();
        let cut = self
            .entries
            .partition_point(|e| e.span.lo().value() <= at);

        let mut hits = Vec::new();
        for i in (0..cut).rev() {
            if self.prefix_max_hi[i] <= at {
                break;
            }
            if self.entries[i].span.hi().value() > at {
                hits.push(self.entries[i].name.as_str());
            }
        }
        hits.reverse();
        hits
    }
}
