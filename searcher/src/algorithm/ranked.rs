//! Priority frontier shared by the cost- and heuristic-ordered
//! searches.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::{Candidate, SearchQueue};
use crate::problem::Problem;

/// Heap entry which orders by priority, breaking ties by insertion
/// order so that search results are reproducible.
#[derive(Debug)]
struct Ranked<P>
where
    P: Problem,
{
    priority: usize,
    seq: usize,
    candidate: Candidate<P>,
}

impl<P> PartialEq for Ranked<P>
where
    P: Problem,
{
    fn eq(&self, other: &Self) -> bool {
        self.priority == other.priority && self.seq == other.seq
    }
}

impl<P> Eq for Ranked<P> where P: Problem {}

impl<P> Ord for Ranked<P>
where
    P: Problem,
{
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
            .reverse()
    }
}

impl<P> PartialOrd for Ranked<P>
where
    P: Problem,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A frontier which always yields the candidate with the lowest
/// priority, as computed by the ranking function at push time.
pub(crate) struct RankedQueue<P, R>
where
    P: Problem,
    R: Fn(&Candidate<P>) -> usize,
{
    queue: BinaryHeap<Ranked<P>>,
    rank: R,
    pushed: usize,
}

impl<P, R> RankedQueue<P, R>
where
    P: Problem,
    R: Fn(&Candidate<P>) -> usize,
{
    pub(crate) fn new(rank: R) -> Self {
        RankedQueue {
            queue: BinaryHeap::new(),
            rank,
            pushed: 0,
        }
    }
}

impl<P, R> SearchQueue for RankedQueue<P, R>
where
    P: Problem,
    R: Fn(&Candidate<P>) -> usize,
{
    type Candidate = Candidate<P>;

    fn pop(&mut self) -> Option<Self::Candidate> {
        self.queue.pop().map(|r| r.candidate)
    }

    fn push(&mut self, item: Self::Candidate) {
        let priority = (self.rank)(&item);
        let seq = self.pushed;
        self.pushed += 1;
        self.queue.push(Ranked {
            priority,
            seq,
            candidate: item,
        });
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}
