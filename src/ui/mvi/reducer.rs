use super::intent::Intent;
use super::state::UiState;

/// The only place state transitions happen: `(State, Intent) -> State`.
///
/// Implementations are pure; they never perform I/O.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
