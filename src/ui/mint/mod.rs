mod intent;
mod reducer;
mod state;

pub use intent::MintIntent;
pub use reducer::MintReducer;
pub use state::{ConnectionState, MintState, MintStatus};
