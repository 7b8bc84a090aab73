//! Error types for event resolution

use crate::EventId;
use thiserror::Error;

/// Errors surfaced by the event model.
#[derive(Debug, Error)]
pub enum EventModelError {
    /// No event is registered under the given id
    #[error("event not found: {0}")]
    EventNotFound(EventId),
}

/// Result type for event model operations
pub type EventModelResult<T> = std::result::Result<T, EventModelError>;
