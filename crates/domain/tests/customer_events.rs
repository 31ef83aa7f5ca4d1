//! Integration tests for events raised by domain operations.

use std::sync::Arc;

use domain::{
    Address, AddressChangedLogHandler, Customer, CustomerAddressChanged, CustomerCreated, Money,
    OrderItem, OrderService, Product, ProductCreated, register_customer_handlers,
    register_product_handlers,
};
use event_dispatch::{ConsoleSink, EventDispatcher, EventHandler};

#[test]
fn customer_lifecycle_writes_one_line_per_handler() {
    let (sink, output) = ConsoleSink::capture();
    let mut dispatcher = EventDispatcher::new();
    register_customer_handlers(&mut dispatcher, &sink).unwrap();

    let mut customer = Customer::create("1", "John", &dispatcher).unwrap();
    customer
        .change_address(
            Address::new("Elm", 42, "00000", "Town").unwrap(),
            &dispatcher,
        )
        .unwrap();
    customer.activate().unwrap();

    assert!(customer.is_active());
    assert_eq!(
        output.lines(),
        vec![
            "This is the first console log of the event: CustomerCreated",
            "This is the second console log of the event: CustomerCreated",
            "Customer address: 1, John changed to: Elm 42 00000 Town",
        ]
    );
}

#[test]
fn handlers_only_see_their_own_event_type() {
    let (sink, output) = ConsoleSink::capture();
    let mut dispatcher = EventDispatcher::new();
    dispatcher
        .register(
            CustomerAddressChanged::EVENT_TYPE,
            Arc::new(AddressChangedLogHandler::new(sink)),
        )
        .unwrap();

    Customer::create("1", "John", &dispatcher).unwrap();

    assert!(output.lines().is_empty());
}

#[test]
fn unregistered_handler_stops_receiving_events() {
    let (sink, output) = ConsoleSink::capture();
    let handler: Arc<dyn EventHandler> = Arc::new(AddressChangedLogHandler::new(sink));
    let mut dispatcher = EventDispatcher::new();
    dispatcher
        .register(CustomerAddressChanged::EVENT_TYPE, Arc::clone(&handler))
        .unwrap();

    let mut customer = Customer::new("1", "John").unwrap();
    customer
        .change_address(Address::new("Elm", 1, "Z", "C").unwrap(), &dispatcher)
        .unwrap();

    dispatcher
        .unregister(CustomerAddressChanged::EVENT_TYPE, &handler)
        .unwrap();
    customer
        .change_address(Address::new("Oak", 2, "Z", "C").unwrap(), &dispatcher)
        .unwrap();

    assert_eq!(output.lines().len(), 1);
    assert_eq!(customer.address().map(Address::street), Some("Oak"));
}

#[test]
fn one_dispatcher_serves_several_entities() {
    let (sink, output) = ConsoleSink::capture();
    let mut dispatcher = EventDispatcher::new();
    register_customer_handlers(&mut dispatcher, &sink).unwrap();
    register_product_handlers(&mut dispatcher, &sink).unwrap();

    let mut customer = Customer::create("c1", "Jane", &dispatcher).unwrap();
    let product = Product::create("p1", "Widget", Money::from_dollars(30), &dispatcher).unwrap();
    let item = OrderItem::new("i1", product.name(), product.price(), product.id().clone(), 2);
    let order = OrderService::place_order(&mut customer, vec![item]).unwrap();

    assert_eq!(order.total(), Money::from_dollars(60));
    assert_eq!(customer.reward_points(), 30);
    assert_eq!(dispatcher.handler_count(CustomerCreated::EVENT_TYPE), 2);
    assert_eq!(dispatcher.handler_count(ProductCreated::EVENT_TYPE), 1);
    assert_eq!(output.lines().len(), 3);
    assert_eq!(output.lines()[2], "Product created: p1, Widget at $30.00");
}
