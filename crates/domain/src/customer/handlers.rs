//! Console-logging handlers for customer events.

use std::sync::Arc;

use event_dispatch::{ConsoleSink, Event, EventDispatcher, EventHandler, HandlerError};

use super::{CustomerAddressChanged, CustomerCreated};

/// First handler announcing a created customer.
#[derive(Debug, Clone)]
pub struct FirstCreatedLogHandler {
    sink: ConsoleSink,
}

impl FirstCreatedLogHandler {
    pub fn new(sink: ConsoleSink) -> Self {
        Self { sink }
    }
}

impl EventHandler for FirstCreatedLogHandler {
    fn name(&self) -> &'static str {
        "FirstCreatedLogHandler"
    }

    fn handle(&self, _event: &Event) -> Result<(), HandlerError> {
        self.sink
            .write_line("This is the first console log of the event: CustomerCreated")
    }
}

/// Second handler announcing a created customer.
#[derive(Debug, Clone)]
pub struct SecondCreatedLogHandler {
    sink: ConsoleSink,
}

impl SecondCreatedLogHandler {
    pub fn new(sink: ConsoleSink) -> Self {
        Self { sink }
    }
}

impl EventHandler for SecondCreatedLogHandler {
    fn name(&self) -> &'static str {
        "SecondCreatedLogHandler"
    }

    fn handle(&self, _event: &Event) -> Result<(), HandlerError> {
        self.sink
            .write_line("This is the second console log of the event: CustomerCreated")
    }
}

/// Writes one line describing a customer's new address.
#[derive(Debug, Clone)]
pub struct AddressChangedLogHandler {
    sink: ConsoleSink,
}

impl AddressChangedLogHandler {
    pub fn new(sink: ConsoleSink) -> Self {
        Self { sink }
    }

    /// Formats the line written for an address change.
    pub fn format(change: &CustomerAddressChanged) -> String {
        format!(
            "Customer address: {}, {} changed to: {} {} {} {}",
            change.id, change.name, change.street, change.number, change.zip, change.city
        )
    }
}

impl EventHandler for AddressChangedLogHandler {
    fn name(&self) -> &'static str {
        "AddressChangedLogHandler"
    }

    fn handle(&self, event: &Event) -> Result<(), HandlerError> {
        let change: CustomerAddressChanged = event.payload_as()?;
        self.sink.write_line(&Self::format(&change))
    }
}

/// Registers the console-logging customer handlers, all writing to `sink`.
pub fn register_customer_handlers(
    dispatcher: &mut EventDispatcher,
    sink: &ConsoleSink,
) -> event_dispatch::Result<()> {
    dispatcher.register(
        CustomerCreated::EVENT_TYPE,
        Arc::new(FirstCreatedLogHandler::new(sink.clone())),
    )?;
    dispatcher.register(
        CustomerCreated::EVENT_TYPE,
        Arc::new(SecondCreatedLogHandler::new(sink.clone())),
    )?;
    dispatcher.register(
        CustomerAddressChanged::EVENT_TYPE,
        Arc::new(AddressChangedLogHandler::new(sink.clone())),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn address_handler_formats_all_fields() {
        let (sink, output) = ConsoleSink::capture();
        let handler = AddressChangedLogHandler::new(sink);
        let event = Event::new(
            CustomerAddressChanged::EVENT_TYPE,
            serde_json::json!({
                "id": "1",
                "name": "John",
                "street": "Elm",
                "number": 42,
                "zip": "00000",
                "city": "Town"
            }),
        );

        handler.handle(&event).unwrap();

        assert_eq!(
            output.lines(),
            vec!["Customer address: 1, John changed to: Elm 42 00000 Town"]
        );
    }

    #[test]
    fn address_handler_rejects_partial_payload() {
        let (sink, output) = ConsoleSink::capture();
        let handler = AddressChangedLogHandler::new(sink);
        let event = Event::new(
            CustomerAddressChanged::EVENT_TYPE,
            serde_json::json!({ "id": "1", "name": "John" }),
        );

        assert!(matches!(
            handler.handle(&event),
            Err(HandlerError::Payload(_))
        ));
        assert!(output.contents().is_empty());
    }

    #[test]
    fn created_handlers_ignore_payload_shape() {
        let (sink, output) = ConsoleSink::capture();
        let event = Event::new(CustomerCreated::EVENT_TYPE, serde_json::json!({}));

        FirstCreatedLogHandler::new(sink.clone())
            .handle(&event)
            .unwrap();
        SecondCreatedLogHandler::new(sink).handle(&event).unwrap();

        assert_eq!(output.lines().len(), 2);
    }

    #[test]
    fn registration_wires_three_handlers() {
        let mut dispatcher = EventDispatcher::new();
        register_customer_handlers(&mut dispatcher, &ConsoleSink::capture().0).unwrap();

        assert_eq!(dispatcher.handler_count(CustomerCreated::EVENT_TYPE), 2);
        assert_eq!(dispatcher.handler_count(CustomerAddressChanged::EVENT_TYPE), 1);
    }
}
