//! Customer entity.

use common::CustomerId;
use event_dispatch::{Event, EventDispatcher};
use serde::Serialize;

use crate::entity::Entity;

use super::{Address, CustomerAddressChanged, CustomerCreated, CustomerError};

/// A customer of the store.
///
/// Operations that produce events take the dispatcher as a parameter; the
/// entity never owns or creates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    id: CustomerId,
    name: String,
    address: Option<Address>,
    active: bool,
    reward_points: u64,
}

impl Customer {
    /// Builds a validated customer without announcing it.
    ///
    /// Used when rebuilding customers that already exist, e.g. from storage.
    pub fn new(id: impl Into<CustomerId>, name: impl Into<String>) -> Result<Self, CustomerError> {
        let customer = Self {
            id: id.into(),
            name: name.into(),
            address: None,
            active: false,
            reward_points: 0,
        };
        customer.validate()?;
        Ok(customer)
    }

    /// Creates a new customer and notifies `CustomerCreatedEvent`.
    #[tracing::instrument(skip(id, name, dispatcher))]
    pub fn create(
        id: impl Into<CustomerId>,
        name: impl Into<String>,
        dispatcher: &EventDispatcher,
    ) -> Result<Self, CustomerError> {
        let customer = Self::new(id, name)?;

        let event = Event::from_domain(&CustomerCreated {
            id: customer.id.clone(),
            name: customer.name.clone(),
        })?;
        dispatcher.notify(&event)?;

        tracing::debug!(customer_id = %customer.id, "customer created");
        Ok(customer)
    }

    /// Checks the customer's invariants.
    pub fn validate(&self) -> Result<(), CustomerError> {
        if self.id.is_blank() {
            return Err(CustomerError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        Ok(())
    }

    /// Renames the customer. The name is left unchanged if invalid.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), CustomerError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(CustomerError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    /// Moves the customer to a new address and notifies
    /// `CustomerAddressChangedEvent`.
    ///
    /// The address is updated before handlers run, so it stays changed even
    /// if a handler fails.
    pub fn change_address(
        &mut self,
        address: Address,
        dispatcher: &EventDispatcher,
    ) -> Result<(), CustomerError> {
        let event = Event::from_domain(&CustomerAddressChanged::new(self, &address))?;
        self.address = Some(address);
        dispatcher.notify(&event)?;
        Ok(())
    }

    /// Sets the address without notifying anyone.
    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    /// Activates the customer. Requires an address.
    pub fn activate(&mut self) -> Result<(), CustomerError> {
        if self.address.is_none() {
            return Err(CustomerError::AddressRequired);
        }
        self.active = true;
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Credits reward points, capping at `u64::MAX`.
    pub fn add_reward_points(&mut self, points: u64) {
        self.reward_points = self.reward_points.saturating_add(points);
    }

    pub fn id(&self) -> &CustomerId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn reward_points(&self) -> u64 {
        self.reward_points
    }
}

impl Entity for Customer {
    type Id = CustomerId;
    const NAME: &'static str = "Customer";

    fn id(&self) -> &CustomerId {
        &self.id
    }
}
