/// Marker trait for state objects.
///
/// A state holds everything the view projection needs, is replaced wholesale
/// on every transition and can be compared to detect changes.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
