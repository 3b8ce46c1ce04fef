//! The Tower of Hanoi puzzle, modeled as a [searcher::Problem].
//!
//! Three pegs, N disks of distinct sizes, all stacked on peg 0 at the
//! start; a move takes the top disk of one peg and places it on
//! another, never on a smaller disk; the puzzle is solved when every
//! disk sits on peg 2. Any of the search functions in [searcher] will
//! solve it:
//!
//! ```
//! use hanoi::HanoiGame;
//!
//! let game = HanoiGame::new(3);
//! let solution = searcher::bfs(&game).unwrap();
//! assert_eq!(solution.len(), 7);
//! ```

mod game;
mod state;

pub use game::HanoiGame;
pub use state::{HanoiState, Move};
