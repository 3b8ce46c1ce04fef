//! A* search.

use crate::algorithm::cache::BestCost;
use crate::algorithm::ranked::RankedQueue;
use crate::algorithm::{unit_cost, Candidate, SearchAlgorithm};
use crate::errors::Result;
use crate::problem::Problem;

/// A* search with the default cost of 1 per action.
pub fn astar<P, H>(problem: &P, heuristic: H) -> Result<Vec<P::Action>>
where
    P: Problem,
    H: Fn(&P::State) -> usize,
{
    astar_with(problem, heuristic, unit_cost)
}

/// A* search with caller-supplied heuristic and step cost.
///
/// Expands the frontier candidate with the lowest accumulated cost
/// plus heuristic estimate. When the heuristic never overestimates
/// the true remaining cost and step costs are non-negative, the
/// returned path has optimal total cost.
pub fn astar_with<P, H, F>(problem: &P, heuristic: H, cost_fn: F) -> Result<Vec<P::Action>>
where
    P: Problem,
    H: Fn(&P::State) -> usize,
    F: Fn(&P::State, &P::Action) -> usize,
{
    let queue = RankedQueue::new(move |c: &Candidate<P>| c.cost + heuristic(&c.state));
    SearchAlgorithm::new(problem, queue, BestCost::default(), cost_fn).run()
}
