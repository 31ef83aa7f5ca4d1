//! Console-logging handler for product events.

use std::sync::Arc;

use event_dispatch::{ConsoleSink, Event, EventDispatcher, EventHandler, HandlerError};

use super::ProductCreated;
use crate::money::Money;

/// Writes one line announcing a new product.
#[derive(Debug, Clone)]
pub struct ProductCreatedLogHandler {
    sink: ConsoleSink,
}

impl ProductCreatedLogHandler {
    pub fn new(sink: ConsoleSink) -> Self {
        Self { sink }
    }
}

impl EventHandler for ProductCreatedLogHandler {
    fn name(&self) -> &'static str {
        "ProductCreatedLogHandler"
    }

    fn handle(&self, event: &Event) -> Result<(), HandlerError> {
        let created: ProductCreated = event.payload_as()?;
        self.sink.write_line(&format!(
            "Product created: {}, {} at {}",
            created.id,
            created.name,
            Money::from_cents(created.price_cents)
        ))
    }
}

/// Registers the console-logging product handler.
pub fn register_product_handlers(
    dispatcher: &mut EventDispatcher,
    sink: &ConsoleSink,
) -> event_dispatch::Result<()> {
    dispatcher.register(
        ProductCreated::EVENT_TYPE,
        Arc::new(ProductCreatedLogHandler::new(sink.clone())),
    )
}
