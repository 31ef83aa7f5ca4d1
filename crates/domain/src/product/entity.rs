//! Product entity.

use common::ProductId;
use event_dispatch::{Event, EventDispatcher};
use serde::Serialize;

use crate::entity::Entity;
use crate::money::Money;

use super::{ProductCreated, ProductError};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
}

impl Product {
    /// Builds a validated product without announcing it.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
    ) -> Result<Self, ProductError> {
        let product = Self {
            id: id.into(),
            name: name.into(),
            price,
        };
        product.validate()?;
        Ok(product)
    }

    /// Creates a new product and notifies `ProductCreatedEvent`.
    pub fn create(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        dispatcher: &EventDispatcher,
    ) -> Result<Self, ProductError> {
        let product = Self::new(id, name, price)?;
        let event = Event::from_domain(&ProductCreated {
            id: product.id.clone(),
            name: product.name.clone(),
            price_cents: product.price.cents(),
        })?;
        dispatcher.notify(&event)?;
        Ok(product)
    }

    pub fn validate(&self) -> Result<(), ProductError> {
        if self.id.is_blank() {
            return Err(ProductError::IdRequired);
        }
        if self.name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        if !self.price.is_positive() {
            return Err(ProductError::InvalidPrice {
                cents: self.price.cents(),
            });
        }
        Ok(())
    }

    /// Renames the product. The name is left unchanged if invalid.
    pub fn change_name(&mut self, name: impl Into<String>) -> Result<(), ProductError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ProductError::NameRequired);
        }
        self.name = name;
        Ok(())
    }

    /// Reprices the product. The price is left unchanged if not positive.
    pub fn change_price(&mut self, price: Money) -> Result<(), ProductError> {
        if !price.is_positive() {
            return Err(ProductError::InvalidPrice {
                cents: price.cents(),
            });
        }
        self.price = price;
        Ok(())
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }
}

impl Entity for Product {
    type Id = ProductId;
    const NAME: &'static str = "Product";

    fn id(&self) -> &ProductId {
        &self.id
    }
}
