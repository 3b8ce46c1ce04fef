use searcher::{IllegalMoveError, Problem};

use crate::state::{HanoiState, Move};

/// The Tower of Hanoi puzzle with a configurable number of disks.
///
/// Disks are numbered 1..=N by size. The game starts with every disk
/// on peg 0, largest at the bottom, and is solved when every disk is
/// on peg 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HanoiGame {
    disks: u32,
}

impl HanoiGame {
    pub fn new(disks: u32) -> Self {
        HanoiGame { disks }
    }

    /// Explore the reachable state space depth-first from the start
    /// state, returning up to `limit` distinct states.
    ///
    /// States are deduplicated on their canonical display form. This
    /// is an inspection aid, not a solver: the full space holds 3^N
    /// states, so keep `limit` modest for large N.
    pub fn generate_state_space(&self, limit: usize) -> Vec<HanoiState> {
        use std::collections::HashSet;

        let mut visited = HashSet::new();
        let mut frontier = vec![self.start()];
        let mut states = Vec::new();

        while states.len() < limit {
            let state = match frontier.pop() {
                Some(state) => state,
                None => break,
            };
            if !visited.insert(state.to_string()) {
                continue;
            }
            for action in self.actions(&state) {
                if let Ok(next) = self.apply(&state, &action) {
                    frontier.push(next);
                }
            }
            states.push(state);
        }

        states
    }
}

impl Problem for HanoiGame {
    type State = HanoiState;
    type Action = Move;

    fn start(&self) -> HanoiState {
        let first = (1..=self.disks).rev().collect();
        HanoiState::new([first, Vec::new(), Vec::new()], self.disks)
    }

    // Sources in ascending order, destinations ascending within each
    // source. Destination legality is pre-filtered with the same rule
    // apply enforces, so every enumerated move applies cleanly.
    fn actions(&self, state: &HanoiState) -> Vec<Move> {
        let mut moves = Vec::new();
        for src in 0..3 {
            let disk = match state.peg(src).last() {
                Some(disk) => *disk,
                None => continue,
            };
            for dst in 0..3 {
                if src == dst {
                    continue;
                }
                let fits = match state.peg(dst).last() {
                    Some(top) => *top > disk,
                    None => true,
                };
                if fits {
                    moves.push(Move::new(src, dst));
                }
            }
        }
        moves
    }

    fn apply(
        &self,
        state: &HanoiState,
        action: &Move,
    ) -> Result<HanoiState, IllegalMoveError> {
        let disk = match state.peg(action.src).last() {
            Some(disk) => *disk,
            None => return Err(IllegalMoveError("source empty")),
        };
        if let Some(top) = state.peg(action.dst).last() {
            if *top < disk {
                return Err(IllegalMoveError("size violation"));
            }
        }

        let mut pegs = state.pegs.clone();
        pegs[action.src].pop();
        pegs[action.dst].push(disk);
        Ok(HanoiState::new(pegs, state.disks))
    }

    fn is_goal(&self, state: &HanoiState) -> bool {
        state.peg(2).len() == self.disks as usize
    }
}
