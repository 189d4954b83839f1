/// Marker trait for reducer-owned state.
///
/// `Default` is the empty state a reducer starts from and returns to on reset.
/// `PartialEq` lets callers detect no-op transitions.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
