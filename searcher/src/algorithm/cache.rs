//! Visited-state records used to prune already explored states.

use std::collections::{HashMap, HashSet};

use crate::problem::Problem;

/// Defines the behavior required of a visited-state record.
pub(crate) trait Visited<P>
where
    P: Problem,
{
    /// Whether the state should be expanded now, recording it in the
    /// process.
    fn admit(&mut self, state: &P::State, cost: usize) -> bool;
}

/// Admits each state exactly once, regardless of cost.
#[derive(Debug)]
pub(crate) struct SeenSet<P>
where
    P: Problem,
{
    seen: HashSet<P::State>,
}

impl<P> Default for SeenSet<P>
where
    P: Problem,
{
    fn default() -> Self {
        SeenSet {
            seen: HashSet::new(),
        }
    }
}

impl<P> Visited<P> for SeenSet<P>
where
    P: Problem,
{
    fn admit(&mut self, state: &P::State, _cost: usize) -> bool {
        self.seen.insert(state.clone())
    }
}

/// Remembers the best cost at which each state was expanded, and
/// admits a state again only when reached by a strictly cheaper path.
#[derive(Debug)]
pub(crate) struct BestCost<P>
where
    P: Problem,
{
    best: HashMap<P::State, usize>,
}

impl<P> Default for BestCost<P>
where
    P: Problem,
{
    fn default() -> Self {
        BestCost {
            best: HashMap::new(),
        }
    }
}

impl<P> Visited<P> for BestCost<P>
where
    P: Problem,
{
    fn admit(&mut self, state: &P::State, cost: usize) -> bool {
        // States not yet recorded start at usize::MAX, so the first
        // path to a state is always admitted.
        let best = self.best.entry(state.clone()).or_insert(usize::MAX);
        if *best > cost {
            *best = cost;
            true
        } else {
            false
        }
    }
}
