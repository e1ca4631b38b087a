//! Base trait for intents.

/// Marker trait for intent objects.
///
/// An intent is either something the user did (typed a character, picked a
/// result) or something that finished in the background (a search answer).
pub trait Intent: Send + 'static {}
