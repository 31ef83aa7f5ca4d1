//! Product domain events.

use common::ProductId;
use event_dispatch::DomainEvent;
use serde::{Deserialize, Serialize};

/// A product was added to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCreated {
    pub id: ProductId,
    pub name: String,
    pub price_cents: i64,
}

impl ProductCreated {
    pub const EVENT_TYPE: &'static str = "ProductCreatedEvent";
}

impl DomainEvent for ProductCreated {
    fn event_type(&self) -> &'static str {
        Self::EVENT_TYPE
    }
}
