//! Provides the building blocks for search algorithms

use crate::errors::{Result, SearchError};
use crate::problem::Problem;

pub mod astar;
pub mod basic;
mod cache;
pub mod deepening;
pub mod greedy;
mod ranked;
pub mod uniform;

use self::cache::Visited;

/// Trait used to implement frontiers of search candidates
/// which should be checked for completion.
pub trait SearchQueue {
    type Candidate;

    fn pop(&mut self) -> Option<Self::Candidate>;

    fn push(&mut self, item: Self::Candidate);

    fn len(&self) -> usize;
}

/// A frontier entry: a reached state, the actions which reached it,
/// and their accumulated cost.
#[derive(Debug, Clone)]
pub(crate) struct Candidate<P>
where
    P: Problem,
{
    pub(crate) state: P::State,
    pub(crate) path: Vec<P::Action>,
    pub(crate) cost: usize,
}

impl<P> Candidate<P>
where
    P: Problem,
{
    fn origin(problem: &P) -> Self {
        Candidate {
            state: problem.start(),
            path: Vec::new(),
            cost: 0,
        }
    }

    fn step(&self, state: P::State, action: P::Action, step_cost: usize) -> Self {
        let mut path = self.path.clone();
        path.push(action);
        Candidate {
            state,
            path,
            cost: self.cost + step_cost,
        }
    }
}

/// Implementation of search, using generic components.
///
/// Uses a generic frontier (Q) and a generic visited policy (V) to
/// provide a single foundation for the queue-driven search
/// algorithms. Iterative deepening is recursive and lives in
/// [deepening] instead.
pub(crate) struct SearchAlgorithm<'p, P, Q, V, F>
where
    P: Problem,
    Q: SearchQueue<Candidate = Candidate<P>>,
    V: Visited<P>,
    F: Fn(&P::State, &P::Action) -> usize,
{
    problem: &'p P,
    queue: Q,
    visited: V,
    cost_fn: F,
}

impl<'p, P, Q, V, F> SearchAlgorithm<'p, P, Q, V, F>
where
    P: Problem,
    Q: SearchQueue<Candidate = Candidate<P>>,
    V: Visited<P>,
    F: Fn(&P::State, &P::Action) -> usize,
{
    pub(crate) fn new(problem: &'p P, mut queue: Q, visited: V, cost_fn: F) -> Self {
        queue.push(Candidate::origin(problem));
        SearchAlgorithm {
            problem,
            queue,
            visited,
            cost_fn,
        }
    }

    /// Run the search to completion.
    ///
    /// Returns the path of the first goal candidate popped from the
    /// frontier, or [SearchError::NoSolutionFound] once the frontier
    /// empties.
    pub(crate) fn run(mut self) -> Result<Vec<P::Action>> {
        while let Some(candidate) = self.queue.pop() {
            if self.problem.is_goal(&candidate.state) {
                return Ok(candidate.path);
            }

            if !self.visited.admit(&candidate.state, candidate.cost) {
                continue;
            }

            for action in self.problem.actions(&candidate.state) {
                // A rejected apply marks a dead branch, not a failure:
                // problems may enumerate optimistically and leave
                // legality to apply.
                if let Ok(state) = self.problem.apply(&candidate.state, &action) {
                    let step_cost = (self.cost_fn)(&candidate.state, &action);
                    self.queue.push(candidate.step(state, action, step_cost));
                }
            }
        }

        Err(SearchError::NoSolutionFound)
    }
}

pub(crate) fn unit_cost<S, A>(_state: &S, _action: &A) -> usize {
    1
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::errors::IllegalMoveError;
    use crate::problem::Problem;

    /// Steps of +1 and +2 on a number line which wraps at `modulus`,
    /// so the state space is finite but cyclic.
    #[derive(Debug, Clone)]
    pub(crate) struct NumberLine {
        pub(crate) target: usize,
        pub(crate) modulus: usize,
    }

    impl Problem for NumberLine {
        type State = usize;
        type Action = usize;

        fn start(&self) -> usize {
            0
        }

        fn actions(&self, _state: &usize) -> Vec<usize> {
            vec![1, 2]
        }

        fn apply(
            &self,
            state: &usize,
            action: &usize,
        ) -> std::result::Result<usize, IllegalMoveError> {
            Ok((state + action) % self.modulus)
        }

        fn is_goal(&self, state: &usize) -> bool {
            *state == self.target
        }
    }

    /// Enumerates both step sizes optimistically and lets apply
    /// reject the odd one, exercising the dead-branch path of the
    /// engine. Only even states are reachable.
    #[derive(Debug, Clone)]
    pub(crate) struct EvenSteps {
        pub(crate) target: usize,
        pub(crate) modulus: usize,
    }

    impl Problem for EvenSteps {
        type State = usize;
        type Action = usize;

        fn start(&self) -> usize {
            0
        }

        fn actions(&self, _state: &usize) -> Vec<usize> {
            vec![1, 2]
        }

        fn apply(
            &self,
            state: &usize,
            action: &usize,
        ) -> std::result::Result<usize, IllegalMoveError> {
            if action % 2 == 1 {
                return Err(IllegalMoveError("odd step"));
            }
            Ok((state + action) % self.modulus)
        }

        fn is_goal(&self, state: &usize) -> bool {
            *state == self.target
        }
    }

    /// Apply `path` from the start state, panicking on any illegal
    /// action, and return the state it lands on.
    pub(crate) fn replay<P>(problem: &P, path: &[P::Action]) -> P::State
    where
        P: Problem,
    {
        let mut state = problem.start();
        for action in path {
            state = problem.apply(&state, action).unwrap();
        }
        state
    }
}
