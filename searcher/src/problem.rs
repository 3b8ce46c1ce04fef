use std::fmt::Debug;
use std::hash::Hash;

use crate::errors::IllegalMoveError;

/// Provides an interface for conducting searches.
///
/// A problem is a start state, a way to enumerate the actions legal
/// in a state, a transition function, and a goal test. The search
/// algorithms never inspect the concrete state or action types; they
/// rely only on equality and hashing of states and on these four
/// operations.
pub trait Problem {
    /// An immutable configuration of the problem. Two states with the
    /// same contents must compare and hash equal, since visited
    /// records are keyed on state values.
    type State: Debug + Clone + Eq + Hash;

    /// An immutable description of a transition between states.
    type Action: Debug + Clone;

    /// The unique initial state.
    fn start(&self) -> Self::State;

    /// All actions available in `state`, in a fixed order.
    ///
    /// The declaration order is the tie-break order for the
    /// depth-first searches: the first action is explored deepest.
    /// Problems may pre-filter here with the same legality rule
    /// [Problem::apply] enforces, or enumerate optimistically and let
    /// `apply` reject; the search algorithms accept either.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// The successor of `state` under `action`, as a new, independent
    /// value. Fails when the action is not legal in `state`; this is
    /// the single place legality is enforced.
    fn apply(
        &self,
        state: &Self::State,
        action: &Self::Action,
    ) -> std::result::Result<Self::State, IllegalMoveError>;

    /// Whether `state` satisfies the goal. Pure predicate.
    fn is_goal(&self, state: &Self::State) -> bool;
}
