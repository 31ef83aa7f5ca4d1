//! Customer entity, address value object, and customer events.

mod address;
mod entity;
mod events;
mod handlers;

pub use address::{Address, AddressError};
pub use entity::Customer;
pub use events::{CustomerAddressChanged, CustomerCreated};
pub use handlers::{
    AddressChangedLogHandler, FirstCreatedLogHandler, SecondCreatedLogHandler,
    register_customer_handlers,
};

use event_dispatch::DispatchError;
use thiserror::Error;

/// Errors that can occur during customer operations.
#[derive(Debug, Error)]
pub enum CustomerError {
    /// Customer ID is required.
    #[error("Id is required")]
    IdRequired,

    /// Customer name is required.
    #[error("Name is required")]
    NameRequired,

    /// A customer cannot be activated without an address.
    #[error("Address is mandatory to activate a customer")]
    AddressRequired,

    /// Building the event payload failed.
    #[error("Event payload error: {0}")]
    Payload(#[from] serde_json::Error),

    /// Delivering a customer event failed.
    #[error("Event dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),
}
