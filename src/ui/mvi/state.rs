/// Marker for screen state.
///
/// Each state is owned by exactly one screen visit; `Default` is the state a
/// freshly entered screen starts from.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
