//! Generalized search algorithms over an abstract problem interface.
//!
//! Implement the [Problem] trait for a type describing a search
//! problem (start state, action enumeration, transition function,
//! goal test) and hand it to one of the search functions. Each
//! returns the sequence of actions leading from the start state to a
//! goal state, or [SearchError::NoSolutionFound] once the frontier is
//! exhausted.

pub mod algorithm;
mod errors;
mod problem;

pub use errors::IllegalMoveError;
pub use errors::Result as SearchResult;
pub use errors::SearchError;
pub use problem::Problem;

pub use algorithm::astar::{astar, astar_with};
pub use algorithm::basic::{bfs, dfs};
pub use algorithm::deepening::ids;
pub use algorithm::greedy::greedy;
pub use algorithm::uniform::{ucs, ucs_with};
