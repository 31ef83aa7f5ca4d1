//! Order line item.

use common::{OrderItemId, ProductId};
use serde::Serialize;

use crate::money::Money;

use super::OrderError;

/// A line of an order: a product at a unit price, times a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItem {
    id: OrderItemId,
    name: String,
    price: Money,
    product_id: ProductId,
    quantity: u32,
}

impl OrderItem {
    /// Creates a new order item.
    ///
    /// Quantity is checked when the item is placed in an order.
    pub fn new(
        id: impl Into<OrderItemId>,
        name: impl Into<String>,
        price: Money,
        product_id: impl Into<ProductId>,
        quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            product_id: product_id.into(),
            quantity,
        }
    }

    pub fn id(&self) -> &OrderItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the unit price.
    pub fn price(&self) -> Money {
        self.price
    }

    pub fn product_id(&self) -> &ProductId {
        &self.product_id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Price times quantity, rejected when it does not fit in `Money`.
    pub fn total(&self) -> Result<Money, OrderError> {
        self.price
            .checked_mul(self.quantity)
            .ok_or(OrderError::TotalOutOfRange)
    }
}
