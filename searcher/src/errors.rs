use thiserror::Error;

/// Error produced when a search fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("No solution found")]
    NoSolutionFound,
}

/// Error produced by [crate::Problem::apply] when an action is not
/// legal in the given state. Carries the problem's reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Illegal move: {0}")]
pub struct IllegalMoveError(pub &'static str);

/// Result when a search method might fail.
pub type Result<T> = std::result::Result<T, SearchError>;
