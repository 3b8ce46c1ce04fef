//! Greedy best-first search.

use crate::algorithm::cache::SeenSet;
use crate::algorithm::ranked::RankedQueue;
use crate::algorithm::{unit_cost, Candidate, SearchAlgorithm};
use crate::errors::Result;
use crate::problem::Problem;

/// Greedy best-first search, ordered by the heuristic alone.
///
/// Expands whichever frontier state the heuristic scores lowest,
/// ignoring the cost already paid to reach it. Fast when the
/// heuristic is informative, but carries no optimality guarantee.
pub fn greedy<P, H>(problem: &P, heuristic: H) -> Result<Vec<P::Action>>
where
    P: Problem,
    H: Fn(&P::State) -> usize,
{
    let queue = RankedQueue::new(move |c: &Candidate<P>| heuristic(&c.state));
    SearchAlgorithm::new(problem, queue, SeenSet::default(), unit_cost).run()
}
