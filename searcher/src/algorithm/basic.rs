pub use bfs::bfs;
pub use dfs::dfs;

mod bfs {
    use std::collections::VecDeque;

    use crate::algorithm::cache::SeenSet;
    use crate::algorithm::{unit_cost, Candidate, SearchAlgorithm, SearchQueue};
    use crate::errors::Result;
    use crate::problem::Problem;

    #[derive(Debug)]
    pub(crate) struct BreadthQueue<P>
    where
        P: Problem,
    {
        queue: VecDeque<Candidate<P>>,
    }

    impl<P> Default for BreadthQueue<P>
    where
        P: Problem,
    {
        fn default() -> Self {
            BreadthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    impl<P> SearchQueue for BreadthQueue<P>
    where
        P: Problem,
    {
        type Candidate = Candidate<P>;

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Candidate) {
            self.queue.push_back(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    /// Breadth-first search, expanding states in order of distance in
    /// actions from the start state.
    ///
    /// The first solution found is the shortest in action count.
    pub fn bfs<P>(problem: &P) -> Result<Vec<P::Action>>
    where
        P: Problem,
    {
        SearchAlgorithm::new(
            problem,
            BreadthQueue::default(),
            SeenSet::default(),
            unit_cost,
        )
        .run()
    }
}

mod dfs {
    use std::collections::VecDeque;

    use crate::algorithm::cache::SeenSet;
    use crate::algorithm::{unit_cost, Candidate, SearchAlgorithm, SearchQueue};
    use crate::errors::Result;
    use crate::problem::Problem;

    #[derive(Debug)]
    pub(crate) struct DepthQueue<P>
    where
        P: Problem,
    {
        queue: VecDeque<Candidate<P>>,
    }

    impl<P> Default for DepthQueue<P>
    where
        P: Problem,
    {
        fn default() -> Self {
            DepthQueue {
                queue: VecDeque::new(),
            }
        }
    }

    impl<P> SearchQueue for DepthQueue<P>
    where
        P: Problem,
    {
        type Candidate = Candidate<P>;

        fn pop(&mut self) -> Option<Self::Candidate> {
            self.queue.pop_front()
        }

        fn push(&mut self, item: Self::Candidate) {
            self.queue.push_front(item);
        }

        fn len(&self) -> usize {
            self.queue.len()
        }
    }

    /// Depth-first search, following the most recently discovered
    /// state first.
    ///
    /// The visited record keeps the search from revisiting states, so
    /// it terminates on finite state spaces even in the presence of
    /// cycles. No optimality guarantee.
    pub fn dfs<P>(problem: &P) -> Result<Vec<P::Action>>
    where
        P: Problem,
    {
        SearchAlgorithm::new(
            problem,
            DepthQueue::default(),
            SeenSet::default(),
            unit_cost,
        )
        .run()
    }
}
