//! Order entity.

use common::{CustomerId, OrderId};
use serde::Serialize;

use crate::entity::Entity;
use crate::money::Money;

use super::{OrderError, OrderItem};

/// An order placed by a customer.
///
/// Items keep the order in which they were added. The total is computed
/// once per change, so an order that exists always has a representable total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    id: OrderId,
    customer_id: CustomerId,
    items: Vec<OrderItem>,
    total: Money,
}

impl Order {
    /// Creates a validated order.
    pub fn new(
        id: impl Into<OrderId>,
        customer_id: impl Into<CustomerId>,
        items: Vec<OrderItem>,
    ) -> Result<Self, OrderError> {
        let mut order = Self {
            id: id.into(),
            customer_id: customer_id.into(),
            items,
            total: Money::ZERO,
        };
        order.validate()?;
        order.total = sum_items(&order.items)?;
        Ok(order)
    }

    pub fn validate(&self) -> Result<(), OrderError> {
        if self.id.is_blank() {
            return Err(OrderError::IdRequired);
        }
        if self.customer_id.is_blank() {
            return Err(OrderError::CustomerIdRequired);
        }
        if self.items.is_empty() {
            return Err(OrderError::ItemsRequired);
        }
        if let Some(item) = self.items.iter().find(|item| item.quantity() == 0) {
            return Err(OrderError::InvalidQuantity {
                item_id: item.id().to_string(),
            });
        }
        sum_items(&self.items)?;
        Ok(())
    }

    /// Adds an item. The order is left unchanged if the item is invalid.
    pub fn add_item(&mut self, item: OrderItem) -> Result<(), OrderError> {
        if item.quantity() == 0 {
            return Err(OrderError::InvalidQuantity {
                item_id: item.id().to_string(),
            });
        }
        let total = self
            .total
            .checked_add(item.total()?)
            .ok_or(OrderError::TotalOutOfRange)?;
        self.items.push(item);
        self.total = total;
        Ok(())
    }

    pub fn id(&self) -> &OrderId {
        &self.id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    /// Returns the sum of all item totals.
    pub fn total(&self) -> Money {
        self.total
    }
}

fn sum_items(items: &[OrderItem]) -> Result<Money, OrderError> {
    let totals = items
        .iter()
        .map(OrderItem::total)
        .collect::<Result<Vec<_>, _>>()?;
    Money::checked_sum(totals).ok_or(OrderError::TotalOutOfRange)
}

impl Entity for Order {
    type Id = OrderId;
    const NAME: &'static str = "Order";

    fn id(&self) -> &OrderId {
        &self.id
    }
}
