//! Base trait for intents in the state layer.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Service calls starting or finishing (login, submission)
/// - Session changes (logout, restore)
/// - Data loads
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
