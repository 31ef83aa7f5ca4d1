//! Domain layer for the storefront.
//!
//! This crate provides the entities and the events they produce:
//! - [`Customer`] with its [`Address`] value object and customer events
//! - [`Product`] and the product-created event
//! - [`Order`] and [`OrderItem`], with [`OrderService`] for checkout
//! - Console-logging handlers for every event
//!
//! Event-producing operations take an [`EventDispatcher`](event_dispatch::EventDispatcher)
//! from the caller.

pub mod checkout;
pub mod customer;
pub mod entity;
pub mod error;
pub mod money;
pub mod product;

pub use checkout::{Order, OrderError, OrderItem, OrderService};
pub use customer::{
    Address, AddressChangedLogHandler, AddressError, Customer, CustomerAddressChanged,
    CustomerCreated, CustomerError, FirstCreatedLogHandler, SecondCreatedLogHandler,
    register_customer_handlers,
};
pub use entity::Entity;
pub use error::DomainError;
pub use money::Money;
pub use product::{
    Product, ProductCreated, ProductCreatedLogHandler, ProductError, register_product_handlers,
};
