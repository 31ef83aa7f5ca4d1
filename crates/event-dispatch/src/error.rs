use thiserror::Error;

/// Errors raised by an event handler while handling an event.
#[derive(Debug, Error)]
pub enum HandlerError {
    /// The event payload did not have the shape the handler expects.
    #[error("Unexpected event payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Writing the handler's output failed.
    #[error("Handler output error: {0}")]
    Output(#[from] std::io::Error),

    /// The handler rejected the event.
    #[error("Handler failed: {reason}")]
    Failed { reason: String },
}

impl HandlerError {
    /// Creates a [`HandlerError::Failed`] with the given reason.
    pub fn failed(reason: impl Into<String>) -> Self {
        Self::Failed {
            reason: reason.into(),
        }
    }
}

/// Errors that can occur when registering handlers or dispatching events.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The event type name cannot be used as a registry key.
    #[error("Invalid event kind: {event_type:?}")]
    InvalidEventKind { event_type: String },

    /// The handler instance is not registered for the event type.
    #[error("Handler {handler} is not registered for {event_type}")]
    HandlerNotRegistered {
        event_type: String,
        handler: &'static str,
    },

    /// A handler failed; delivery to the remaining handlers was aborted.
    #[error("Handler {handler} failed on {event_type}: {source}")]
    Handler {
        event_type: String,
        handler: &'static str,
        #[source]
        source: HandlerError,
    },
}

/// Result type for dispatcher operations.
pub type Result<T> = std::result::Result<T, DispatchError>;
