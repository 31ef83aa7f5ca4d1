//! Event dispatcher mapping event types to ordered handler lists.

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::{DispatchError, Result};
use crate::event::Event;
use crate::handler::EventHandler;

/// Process-local registry delivering events to their handlers.
///
/// Handlers are kept per event type in registration order. Delivery is
/// synchronous: [`notify`](Self::notify) returns once every handler has run,
/// or as soon as one of them fails.
///
/// Registration needs `&mut self`, so sharing one dispatcher between threads
/// requires wrapping it in a lock.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: HashMap<String, Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    /// Creates an empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler for an event type.
    ///
    /// Handlers are not deduplicated: registering the same handler twice
    /// makes it run twice per event.
    pub fn register(
        &mut self,
        event_type: impl Into<String>,
        handler: Arc<dyn EventHandler>,
    ) -> Result<()> {
        let event_type = event_type.into();
        if event_type.trim().is_empty() {
            return Err(DispatchError::InvalidEventKind { event_type });
        }

        tracing::debug!(%event_type, handler = handler.name(), "registering event handler");
        self.handlers.entry(event_type).or_default().push(handler);
        Ok(())
    }

    /// Removes one registration of `handler` for an event type.
    ///
    /// Handlers are matched by identity (the same `Arc` allocation), not by
    /// value. Only the first matching registration is removed.
    pub fn unregister<H>(&mut self, event_type: &str, handler: &Arc<H>) -> Result<()>
    where
        H: EventHandler + ?Sized,
    {
        let not_registered = || DispatchError::HandlerNotRegistered {
            event_type: event_type.to_string(),
            handler: handler.name(),
        };

        let registered = self.handlers.get_mut(event_type).ok_or_else(not_registered)?;
        let target = Arc::as_ptr(handler).cast::<()>();
        let position = registered
            .iter()
            .position(|h| Arc::as_ptr(h).cast::<()>() == target)
            .ok_or_else(not_registered)?;

        registered.remove(position);
        if registered.is_empty() {
            self.handlers.remove(event_type);
        }

        tracing::debug!(%event_type, handler = handler.name(), "unregistered event handler");
        Ok(())
    }

    /// Removes every registration for every event type.
    pub fn unregister_all(&mut self) {
        self.handlers.clear();
    }

    /// Delivers an event to the handlers registered for its type.
    ///
    /// Handlers run in registration order on the calling thread. An event
    /// type without handlers is not an error. The first failing handler stops
    /// delivery and its error is returned.
    #[tracing::instrument(skip(self, event), fields(event_type = %event.event_type()))]
    pub fn notify(&self, event: &Event) -> Result<()> {
        let Some(handlers) = self.handlers.get(event.event_type()) else {
            tracing::trace!("no handlers registered");
            return Ok(());
        };

        metrics::counter!("events_dispatched_total").increment(1);

        for handler in handlers {
            metrics::counter!("event_handler_invocations_total").increment(1);
            if let Err(source) = handler.handle(event) {
                metrics::counter!("event_handler_failures_total").increment(1);
                tracing::warn!(handler = handler.name(), error = %source, "event handler failed");
                return Err(DispatchError::Handler {
                    event_type: event.event_type().to_string(),
                    handler: handler.name(),
                    source,
                });
            }
        }

        Ok(())
    }

    /// Returns the handlers registered for an event type, in registration order.
    pub fn handlers(&self, event_type: &str) -> &[Arc<dyn EventHandler>] {
        self.handlers
            .get(event_type)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns the number of registrations for an event type.
    pub fn handler_count(&self, event_type: &str) -> usize {
        self.handlers(event_type).len()
    }

    /// Returns true if no handler is registered for any event type.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (event_type, handlers) in &self.handlers {
            let names: Vec<_> = handlers.iter().map(|h| h.name()).collect();
            map.entry(event_type, &names);
        }
        map.finish()
    }
}
