//! Base trait for UI state.

/// Marker trait for UI state objects.
///
/// `Default` is the state at startup; `Clone + PartialEq` let tests and the
/// app compare before/after snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
