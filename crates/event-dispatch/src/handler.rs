//! Event handler trait.

use crate::error::HandlerError;
use crate::event::Event;

/// A unit of behavior invoked synchronously when a matching event is dispatched.
///
/// Handlers are registered with an [`EventDispatcher`](crate::EventDispatcher)
/// under an event type name and receive every event of that type. A handler
/// knows the payload shape of the events it is registered for.
pub trait EventHandler: Send + Sync {
    /// Returns the name of this handler, used in logs and errors.
    fn name(&self) -> &'static str;

    /// Handles a single event.
    fn handle(&self, event: &Event) -> Result<(), HandlerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Rejecting;

    impl EventHandler for Rejecting {
        fn name(&self) -> &'static str {
            "Rejecting"
        }

        fn handle(&self, event: &Event) -> Result<(), HandlerError> {
            Err(HandlerError::failed(format!("rejected {}", event.event_type())))
        }
    }

    #[test]
    fn handlers_are_usable_as_trait_objects() {
        let handler: Box<dyn EventHandler> = Box::new(Rejecting);
        let event = Event::new("Anything", serde_json::json!({}));

        let err = handler.handle(&event).unwrap_err();
        assert_eq!(handler.name(), "Rejecting");
        assert_eq!(err.to_string(), "Handler failed: rejected Anything");
    }
}
