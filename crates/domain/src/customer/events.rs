//! Customer domain events.

use common::CustomerId;
use event_dispatch::DomainEvent;
use serde::{Deserialize, Serialize};

use super::{Address, Customer};

/// A customer was created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreated {
    pub id: CustomerId,
    pub name: String,
}

impl CustomerCreated {
    pub const EVENT_TYPE: &'static str = "CustomerCreatedEvent";
}

impl DomainEvent for CustomerCreated {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }
}

/// A customer's address was changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerAddressChanged {
    pub id: CustomerId,
    pub name: String,
    pub street: String,
    pub number: u32,
    pub zip: String,
    pub city: String,
}

impl CustomerAddressChanged {
    pub const EVENT_TYPE: &'static str = "CustomerAddressChangedEvent";

    pub(crate) fn new(customer: &Customer, address: &Address) -> Self {
        Self {
            id: customer.id().clone(),
            name: customer.name().to_string(),
            street: address.street().to_string(),
            number: address.number(),
            zip: address.zip().to_string(),
            city: address.city().to_string(),
        }
    }
}

impl DomainEvent for CustomerAddressChanged {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }
}
