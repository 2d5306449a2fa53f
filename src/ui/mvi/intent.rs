/// Marker trait for intents: user actions and the outcomes of async effects.
pub trait Intent: Send + 'static {}
