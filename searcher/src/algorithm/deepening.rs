//! Iterative-deepening search.

use crate::errors::{Result, SearchError};
use crate::problem::Problem;

/// Iterative-deepening search: depth-limited depth-first passes with
/// the limit raised from 0 to `max_depth` inclusive.
///
/// Each pass restarts from the start state with no visited record, so
/// memory use stays proportional to the depth. Because the limit
/// grows one action at a time, the first pass that produces a
/// solution produces one of minimal length. Returns
/// [SearchError::NoSolutionFound] when no goal lies within
/// `max_depth` actions of the start state.
pub fn ids<P>(problem: &P, max_depth: usize) -> Result<Vec<P::Action>>
where
    P: Problem,
{
    for depth in 0..=max_depth {
        if let Some(path) = depth_limited(problem, &problem.start(), Vec::new(), depth) {
            return Ok(path);
        }
    }

    Err(SearchError::NoSolutionFound)
}

fn depth_limited<P>(
    problem: &P,
    state: &P::State,
    path: Vec<P::Action>,
    depth: usize,
) -> Option<Vec<P::Action>>
where
    P: Problem,
{
    if problem.is_goal(state) {
        return Some(path);
    }
    if depth == 0 {
        return None;
    }

    for action in problem.actions(state) {
        if let Ok(next) = problem.apply(state, &action) {
            let mut extended = path.clone();
            extended.push(action);
            if let Some(found) = depth_limited(problem, &next, extended, depth - 1) {
                return Some(found);
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::ids;
    use crate::algorithm::tests::{replay, NumberLine};
    use crate::errors::SearchError;

    #[test]
    fn ids_finds_a_minimal_path() {
        let problem = NumberLine {
            target: 9,
            modulus: 100,
        };
        let path = ids(&problem, 10).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(replay(&problem, &path), 9);
    }

    #[test]
    fn ids_respects_the_depth_budget() {
        let problem = NumberLine {
            target: 9,
            modulus: 100,
        };
        // Three steps of at most 2 cannot reach 9.
        assert_eq!(ids(&problem, 3), Err(SearchError::NoSolutionFound));
    }

    #[test]
    fn ids_start_is_goal() {
        let problem = NumberLine {
            target: 0,
            modulus: 10,
        };
        assert_eq!(ids(&problem, 0).unwrap(), Vec::<usize>::new());
    }
}
