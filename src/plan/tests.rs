use std::collections::BTreeSet;

use qtty::Meter;

use super::*;
use crate::cover::CoverError;
use crate::geometry::{GeometryError, Reach, Rect};

fn source() -> Rect<Meter> {
    Rect::from_f64(0.0, 0.0, 10.0, 10.0).unwrap()
}

fn reach(name: &str, llx: f64, lly: f64, urx: f64, ury: f64) -> Reach<Meter> {
    Reach::from_f64(name, llx, lly, urx, ury).unwrap()
}

fn names(list: &[&str]) -> BTreeSet<String> {
    list.iter().map(|s| (*s).to_owned()).collect()
}

/// Source (0,0)-(10,10); A(0,0,4,10) and B(3,0,10,10) overlap fully in y
/// and partially in x. The x-partition is {A}, {A,B}, {B}; the y-partition
/// is one full-height {A,B} node; the selector covers everything with the
/// single {A,B} node whose movable region is (3,0)-(4,10).
#[test]
fn worked_two_sink_scenario() {
    let sinks = vec![
        reach("A", 0.0, 0.0, 4.0, 10.0),
        reach("B", 3.0, 0.0, 10.0, 10.0),
    ];
    let selection = plan_merge_points(&source(), &sinks).unwrap();

    assert_eq!(selection.len(), 1);
    assert_eq!(*selection[0].sinks(), names(&["A", "B"]));
    assert_eq!(
        *selection[0].region().unwrap(),
        Rect::from_f64(3.0, 0.0, 4.0, 10.0).unwrap()
    );
}

#[test]
fn disjoint_sinks_need_two_nodes() {
    let sinks = vec![
        reach("A", 0.0, 0.0, 2.0, 10.0),
        reach("B", 7.0, 0.0, 10.0, 10.0),
    ];
    let selection = plan_merge_points(&source(), &sinks).unwrap();

    assert_eq!(selection.len(), 2);
    let granted: BTreeSet<String> = selection
        .iter()
        .flat_map(|n| n.sinks().iter().cloned())
        .collect();
    assert_eq!(granted, names(&["A", "B"]));
}

#[test]
fn grants_partition_the_universe() {
    let sinks = vec![
        reach("A", 0.0, 0.0, 4.0, 6.0),
        reach("B", 3.0, 2.0, 10.0, 10.0),
        reach("C", 1.0, 5.0, 6.0, 9.0),
        reach("D", 8.0, 0.0, 10.0, 3.0),
    ];
    let selection = plan_merge_points(&source(), &sinks).unwrap();

    let mut granted = BTreeSet::new();
    for node in &selection {
        for name in node.sinks() {
            assert!(granted.insert(name.clone()), "{name} granted twice");
        }
    }
    assert_eq!(granted, names(&["A", "B", "C", "D"]));
}

#[test]
fn pipeline_is_deterministic() {
    let sinks = vec![
        reach("A", 0.0, 0.0, 4.0, 6.0),
        reach("B", 3.0, 2.0, 10.0, 10.0),
        reach("C", 1.0, 5.0, 6.0, 9.0),
        reach("D", 8.0, 0.0, 10.0, 3.0),
        reach("E", 2.0, 2.0, 9.0, 4.0),
    ];
    let first = plan_merge_points(&source(), &sinks).unwrap();
    let second = plan_merge_points(&source(), &sinks).unwrap();

    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(&second) {
        assert_eq!(a.id(), b.id());
        assert_eq!(a.sinks(), b.sinks());
        assert_eq!(a.region(), b.region());
    }
}

/// Swapping x and y for every rectangle of a run must yield the same
/// selection (same sink sets, same order) with transposed regions.
#[test]
fn axis_transposition_is_isomorphic() {
    let sinks = vec![
        reach("A", 0.0, 1.0, 4.0, 6.0),
        reach("B", 3.0, 2.0, 10.0, 9.0),
        reach("C", 1.0, 5.0, 6.0, 10.0),
    ];
    let transposed: Vec<_> = sinks.iter().map(Reach::transposed).collect();

    let straight = plan_merge_points(&source(), &sinks).unwrap();
    let swapped = plan_merge_points(&source().transposed(), &transposed).unwrap();

    assert_eq!(straight.len(), swapped.len());
    for (a, b) in straight.iter().zip(&swapped) {
        assert_eq!(a.sinks(), b.sinks());
        assert_eq!(
            a.region().copied(),
            b.region().map(|r| r.transposed())
        );
    }
}

#[test]
fn unreachable_sink_surfaces_as_coverage_failure() {
    // Z lies entirely outside the source on the x axis: no interior bound,
    // no initial crossing, so it never enters any node.
    let sinks = vec![
        reach("A", 0.0, 0.0, 4.0, 10.0),
        reach("Z", 12.0, 0.0, 15.0, 10.0),
    ];
    let err = plan_merge_points(&source(), &sinks).unwrap_err();
    assert_eq!(
        err,
        PlanError::Coverage(CoverError::Uncovered {
            missing: vec!["Z".to_owned()]
        })
    );
}

#[test]
fn zero_extent_sink_surfaces_as_coverage_failure() {
    // Z has no x extent: its span can never be stabbed, so it belongs to
    // no node. The run must still complete and name Z, not abort on Z's
    // coincident edges.
    let sinks = vec![
        reach("A", 0.0, 0.0, 4.0, 10.0),
        reach("Z", 5.0, 0.0, 5.0, 10.0),
    ];
    let err = plan_merge_points(&source(), &sinks).unwrap_err();
    assert_eq!(
        err,
        PlanError::Coverage(CoverError::Uncovered {
            missing: vec!["Z".to_owned()]
        })
    );
}

#[test]
fn no_sink_overlapping_source_reports_whole_universe() {
    let sinks = vec![
        reach("Y", 20.0, 0.0, 25.0, 10.0),
        reach("Z", 12.0, 0.0, 15.0, 10.0),
    ];
    let err = plan_merge_points(&source(), &sinks).unwrap_err();
    assert_eq!(
        err,
        PlanError::Coverage(CoverError::Uncovered {
            missing: vec!["Y".to_owned(), "Z".to_owned()]
        })
    );
}

#[test]
fn empty_sink_set_is_rejected() {
    let sinks: Vec<Reach<Meter>> = Vec::new();
    assert_eq!(
        plan_merge_points(&source(), &sinks).unwrap_err(),
        PlanError::EmptySinkSet
    );
}

#[test]
fn duplicate_sink_names_are_rejected() {
    let sinks = vec![
        reach("A", 0.0, 0.0, 4.0, 10.0),
        reach("A", 5.0, 0.0, 9.0, 10.0),
    ];
    assert_eq!(
        plan_merge_points(&source(), &sinks).unwrap_err(),
        PlanError::DuplicateSink("A".to_owned())
    );
}

#[test]
fn inverted_rectangle_is_rejected_at_construction() {
    let err = Reach::<Meter>::from_f64("bad", 9.0, 0.0, 1.0, 10.0).unwrap_err();
    assert!(matches!(err, GeometryError::InvertedReach { .. }));
}

/// A sink coincident with the whole source contributes no interior bounds
/// but is active at the sweep origin on both axes.
#[test]
fn full_source_sink_is_covered() {
    let sinks = vec![
        reach("FULL", 0.0, 0.0, 10.0, 10.0),
        reach("A", 2.0, 2.0, 5.0, 5.0),
    ];
    let selection = plan_merge_points(&source(), &sinks).unwrap();

    assert_eq!(selection.len(), 1);
    assert_eq!(*selection[0].sinks(), names(&["A", "FULL"]));
    assert_eq!(
        *selection[0].region().unwrap(),
        Rect::from_f64(2.0, 2.0, 5.0, 5.0).unwrap()
    );
}

/// Three sinks in a chain: the greedy cover picks the pairwise overlaps.
#[test]
fn chain_of_three_uses_overlap_nodes() {
    let sinks = vec![
        reach("A", 0.0, 0.0, 4.0, 10.0),
        reach("B", 3.0, 0.0, 7.0, 10.0),
        reach("C", 6.0, 0.0, 10.0, 10.0),
    ];
    let selection = plan_merge_points(&source(), &sinks).unwrap();

    // Two nodes suffice: one pair overlap plus the leftover sink.
    assert_eq!(selection.len(), 2);
    let granted: BTreeSet<String> = selection
        .iter()
        .flat_map(|n| n.sinks().iter().cloned())
        .collect();
    assert_eq!(granted, names(&["A", "B", "C"]));
    assert_eq!(selection[0].sink_count(), 2);
    assert_eq!(selection[1].sink_count(), 1);
}
