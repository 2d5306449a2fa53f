use crate::ui::mint::intent::MintIntent;
use crate::ui::mint::state::{ConnectionState, MintState, MintStatus};
use crate::ui::mvi::Reducer;

pub struct MintReducer;

impl Reducer for MintReducer {
    type State = MintState;
    type Intent = MintIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            MintIntent::ReportError { message } => MintState {
                error: Some(message),
                ..state
            },
            MintIntent::Connected { address } => MintState {
                connection: ConnectionState::Connected { address },
                ..state
            },
            MintIntent::StatsLoaded { stats } => MintState {
                stats: Some(stats),
                stats_stale: false,
                ..state
            },
            MintIntent::MintStarted { edition } => {
                if state.mint.is_pending() {
                    // Single flight: the running attempt keeps the slot
                    return state;
                }
                MintState {
                    mint: MintStatus::Pending {
                        edition,
                        tx_hash: None,
                    },
                    ..state
                }
            }
            MintIntent::MintSubmitted { tx_hash } => match state.mint {
                MintStatus::Pending { edition, .. } => MintState {
                    mint: MintStatus::Pending {
                        edition,
                        tx_hash: Some(tx_hash),
                    },
                    ..state
                },
                _ => state,
            },
            MintIntent::MintConfirmed { tx_hash } => match state.mint {
                MintStatus::Pending { edition, .. } => MintState {
                    mint: MintStatus::Done { edition, tx_hash },
                    stats_stale: state.stats.is_some(),
                    ..state
                },
                _ => state,
            },
            MintIntent::MintFailed { reason } => match state.mint {
                MintStatus::Pending { edition, .. } => MintState {
                    mint: MintStatus::Failed { edition, reason },
                    ..state
                },
                _ => state,
            },
        }
    }
}
