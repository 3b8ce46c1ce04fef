//! Uniform-cost search (Dijkstra's algorithm over the problem graph).

use crate::algorithm::cache::BestCost;
use crate::algorithm::ranked::RankedQueue;
use crate::algorithm::{unit_cost, Candidate, SearchAlgorithm};
use crate::errors::Result;
use crate::problem::Problem;

/// Uniform-cost search with the default cost of 1 per action.
pub fn ucs<P>(problem: &P) -> Result<Vec<P::Action>>
where
    P: Problem,
{
    ucs_with(problem, unit_cost)
}

/// Uniform-cost search with a caller-supplied step cost.
///
/// Always expands the cheapest frontier candidate next, remembering
/// the best known cost per state. With non-negative step costs the
/// returned path has optimal total cost.
pub fn ucs_with<P, F>(problem: &P, cost_fn: F) -> Result<Vec<P::Action>>
where
    P: Problem,
    F: Fn(&P::State, &P::Action) -> usize,
{
    let queue = RankedQueue::new(|c: &Candidate<P>| c.cost);
    SearchAlgorithm::new(problem, queue, BestCost::default(), cost_fn).run()
}

#[cfg(test)]
mod tests {
    use super::{ucs, ucs_with};
    use crate::algorithm::tests::{replay, EvenSteps, NumberLine};
    use crate::errors::SearchError;

    #[test]
    fn ucs_unit_cost_matches_fewest_actions() {
        let problem = NumberLine {
            target: 9,
            modulus: 100,
        };
        let path = ucs(&problem).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(replay(&problem, &path), 9);
    }

    #[test]
    fn ucs_minimizes_total_cost() {
        let problem = NumberLine {
            target: 9,
            modulus: 100,
        };
        // A double step costs more than two single steps, so the
        // cheapest path is no longer the shortest one.
        let path = ucs_with(&problem, |_, action| if *action == 2 { 3 } else { 1 }).unwrap();
        assert_eq!(path, vec![1; 9]);
    }

    #[test]
    fn ucs_reports_exhausted_frontier() {
        let problem = EvenSteps {
            target: 3,
            modulus: 8,
        };
        assert_eq!(ucs(&problem), Err(SearchError::NoSolutionFound));
    }
}
