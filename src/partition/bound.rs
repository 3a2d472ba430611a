//! Bound extraction: sink edges strictly interior to the source span.

use std::collections::{BTreeMap, BTreeSet};

use qtty::{Quantity, Unit};

use crate::geometry::{Axis, Reach, Span};
use crate::SinkName;

/// A total-order key for `f64` using IEEE-754 total order (`total_cmp`).
/// This lets us use `f64`-backed coordinates as `BTreeMap` keys.
///
/// Coordinates originate from validated rectangles, so NaN never reaches a
/// key; total order still makes the comparator well defined.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordKey(pub(crate) f64);

impl CoordKey {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Eq for CoordKey {}

impl Ord for CoordKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for CoordKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Which edge of a sink produced a bound.
///
/// `Upper` is declared before `Lower` so that the derived order makes a
/// closing event sort ahead of a coincident opening event: the sweep must
/// resolve a region that ends at a coordinate before a new region opens
/// there, or it would emit transiently empty or duplicate nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BoundKind {
    /// A sink's upper edge: the sink stops being reachable past this point.
    Upper,
    /// A sink's lower edge: the sink becomes reachable from this point.
    Lower,
}

/// One sweep event: every sink whose edge of the given kind sits exactly at
/// `coord`. Coincident edges are merged into a single event so that
/// simultaneous bounds are processed together, avoiding order-dependent
/// partition artifacts.
#[derive(Debug, Clone, PartialEq)]
pub struct Bound<U: Unit> {
    coord: Quantity<U>,
    kind: BoundKind,
    sinks: BTreeSet<SinkName>,
}

impl<U: Unit> Bound<U> {
    pub const fn coord(&self) -> Quantity<U> {
        self.coord
    }

    pub const fn kind(&self) -> BoundKind {
        self.kind
    }

    pub const fn sinks(&self) -> &BTreeSet<SinkName> {
        &self.sinks
    }
}

/// Collects the bound events for one axis, ordered for the sweep.
///
/// A sink edge is recorded iff it is strictly interior to `source_span`:
/// edges coincident with the source boundary, or outside it, contribute no
/// new partition boundary because the source already bounds the search.
///
/// A sink whose projected span has zero extent is skipped entirely: a
/// `[c, c)` span is never stabbed, so the sink is unreachable on this axis
/// and its coincident edges would only feed the sweep a close with no
/// matching open. Such sinks surface later as a coverage failure.
///
/// The returned sequence is ascending by coordinate; at equal coordinates
/// upper bounds precede lower bounds (see [`BoundKind`]).
pub fn collect_bounds<U: Unit>(
    sinks: &[Reach<U>],
    source_span: Span<U>,
    axis: Axis,
) -> Vec<Bound<U>> {
    let mut grouped: BTreeMap<(CoordKey, BoundKind), BTreeSet<SinkName>> = BTreeMap::new();

    for sink in sinks {
        let span = sink.rect().span(axis);
        if span.lo().value() == span.hi().value() {
            continue;
        }
        if source_span.strictly_contains(span.lo()) {
            grouped
                .entry((CoordKey(span.lo().value()), BoundKind::Lower))
                .or_default()
                .insert(sink.name().to_owned());
        }
        if source_span.strictly_contains(span.hi()) {
            grouped
                .entry((CoordKey(span.hi().value()), BoundKind::Upper))
                .or_default()
                .insert(sink.name().to_owned());
        }
    }

    grouped
        .into_iter()
        .map(|((coord, kind), sinks)| Bound {
            coord: Quantity::new(coord.value()),
            kind,
            sinks,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use qtty::Meter;

    fn reach(name: &str, lo: f64, hi: f64) -> Reach<Meter> {
        // One-dimensional fixture: the y extent is irrelevant for x bounds.
        Reach::from_f64(name, lo, 0.0, hi, 1.0).unwrap()
    }

    fn collect(sinks: &[Reach<Meter>], lo: f64, hi: f64) -> Vec<Bound<Meter>> {
        collect_bounds(sinks, Span::from_f64(lo, hi), Axis::X)
    }

    #[test]
    fn interior_edges_both_recorded() {
        let bounds = collect(&[reach("a", 2.0, 7.0)], 0.0, 10.0);
        assert_eq!(bounds.len(), 2);
        assert_eq!(bounds[0].coord().value(), 2.0);
        assert_eq!(bounds[0].kind(), BoundKind::Lower);
        assert_eq!(bounds[1].coord().value(), 7.0);
        assert_eq!(bounds[1].kind(), BoundKind::Upper);
    }

    #[test]
    fn edges_on_source_boundary_are_dropped() {
        let bounds = collect(&[reach("a", 0.0, 10.0)], 0.0, 10.0);
        assert!(bounds.is_empty());
    }

    #[test]
    fn edges_outside_source_are_dropped() {
        let bounds = collect(&[reach("a", -5.0, 3.0), reach("b", 8.0, 20.0)], 0.0, 10.0);
        assert_eq!(bounds.len(), 2);
        assert_eq!(bounds[0].coord().value(), 3.0);
        assert_eq!(bounds[0].kind(), BoundKind::Upper);
        assert_eq!(bounds[1].coord().value(), 8.0);
        assert_eq!(bounds[1].kind(), BoundKind::Lower);
    }

    #[test]
    fn zero_extent_sink_contributes_no_bounds() {
        // Its coincident edges would open and close at the same coordinate
        // with nothing in between; the sweep must never see them.
        let bounds = collect(&[reach("a", 5.0, 5.0)], 0.0, 10.0);
        assert!(bounds.is_empty());
    }

    #[test]
    fn coincident_edges_merge_into_one_event() {
        let bounds = collect(&[reach("a", 4.0, 9.0), reach("b", 4.0, 6.0)], 0.0, 10.0);
        let lowers: Vec<_> = bounds
            .iter()
            .filter(|b| b.kind() == BoundKind::Lower)
            .collect();
        assert_eq!(lowers.len(), 1);
        assert_eq!(lowers[0].coord().value(), 4.0);
        assert_eq!(lowers[0].sinks().len(), 2);
        assert!(lowers[0].sinks().contains("a"));
        assert!(lowers[0].sinks().contains("b"));
    }

    #[test]
    fn upper_sorts_before_lower_at_same_coordinate() {
        let bounds = collect(&[reach("a", 1.0, 5.0), reach("b", 5.0, 9.0)], 0.0, 10.0);
        assert_eq!(bounds.len(), 4);
        assert_eq!(bounds[1].coord().value(), 5.0);
        assert_eq!(bounds[1].kind(), BoundKind::Upper);
        assert_eq!(bounds[2].coord().value(), 5.0);
        assert_eq!(bounds[2].kind(), BoundKind::Lower);
    }

    #[test]
    fn ascending_by_coordinate() {
        let bounds = collect(
            &[reach("a", 6.0, 8.0), reach("b", 1.0, 3.0), reach("c", 2.0, 7.0)],
            0.0,
            10.0,
        );
        let coords: Vec<f64> = bounds.iter().map(|b| b.coord().value()).collect();
        let mut sorted = coords.clone();
        sorted.sort_by(f64::total_cmp);
        assert_eq!(coords, sorted);
    }
}
