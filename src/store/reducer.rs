//! Reducer contract for [`Store`](super::Store).

use std::fmt::Debug;

/// Verdict of a reducer for one action.
#[derive(Debug, Clone, PartialEq)]
pub enum Transition<S> {
    /// The action produced a new state. Observers are notified.
    Changed(S),
    /// The action leaves state as it is. The snapshot handle stays identical
    /// and no observer runs.
    Unchanged,
}

/// Pure state transition function for a store.
///
/// The action set is a closed type, so every action a store can receive is
/// known to the reducer at compile time. Returning [`Transition::Unchanged`]
/// is always a deliberate decision of the reducer, never a fallback for an
/// unrecognized message.
pub trait Reducer {
    /// State held by the store.
    type State;
    /// Mutation requests the store accepts.
    type Action: Debug;

    /// Produces the state the store starts with.
    fn initial_state(&self) -> Self::State;

    /// Computes the transition for `action` applied to `state`.
    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Transition<Self::State>;
}
