/// Marker trait for intents: user gestures or lifecycle signals that a
/// reducer folds into state.
pub trait Intent: Send + 'static {}
