//! The greedy selection loop.

use std::collections::BTreeSet;

use qtty::Unit;

use super::candidate::CoverCandidate;
use super::error::CoverError;
use super::ordering::compare_candidates;
use crate::partition::Node;
use crate::SinkName;

/// Greedily selects nodes until every name in `universe` is covered.
///
/// Each round sorts the working pool, takes the front candidate, and strips
/// its remaining sinks from the universe and from every survivor; the
/// winner is discarded from future rounds. Selected entries carry the
/// ownership the node actually granted at pick time, so the grants of a
/// successful selection partition the universe.
///
/// If the pool runs dry (every surviving candidate exhausted) while names
/// remain uncovered, the uncovered names are reported as a
/// [`CoverError::Uncovered`] instead of a partial result.
pub fn select_cover<U: Unit>(
    nodes: &[Node<U>],
    universe: &BTreeSet<SinkName>,
) -> Result<Vec<Node<U>>, CoverError> {
    let mut pool: Vec<CoverCandidate<U>> =
        nodes.iter().cloned().map(CoverCandidate::new).collect();
    let mut uncovered = universe.clone();
    let mut selection = Vec::new();

    while !uncovered.is_empty() {
        pool.sort_by(compare_candidates);

        if pool.first().map_or(true, |best| best.is_exhausted()) {
            return Err(CoverError::Uncovered {
                missing: uncovered.into_iter().collect(),
            });
        }
        let winner = pool.remove(0);

        let granted = winner.remaining().clone();
        uncovered.retain(|name| !granted.contains(name));
        for candidate in &mut pool {
            candidate.strip(&granted);
        }
        selection.push(winner.into_grant());
    }

    Ok(selection)
}
