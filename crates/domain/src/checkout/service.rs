//! Checkout services spanning customers and orders.

use common::OrderId;

use crate::customer::Customer;
use crate::money::Money;

use super::{Order, OrderError, OrderItem};

/// Stateless checkout operations.
pub struct OrderService;

impl OrderService {
    /// Places an order for a customer and credits their reward points.
    ///
    /// The customer earns one point per two whole dollars spent.
    #[tracing::instrument(skip(customer, items), fields(customer_id = %customer.id()))]
    pub fn place_order(customer: &mut Customer, items: Vec<OrderItem>) -> Result<Order, OrderError> {
        if items.is_empty() {
            return Err(OrderError::ItemsRequired);
        }

        let order = Order::new(OrderId::generate(), customer.id().clone(), items)?;
        let points = u64::try_from(order.total().dollars() / 2).unwrap_or(0);
        customer.add_reward_points(points);

        tracing::info!(order_id = %order.id(), total = %order.total(), points, "order placed");
        Ok(order)
    }

    /// Returns the combined total of a set of orders.
    pub fn total(orders: &[Order]) -> Result<Money, OrderError> {
        Money::checked_sum(orders.iter().map(Order::total)).ok_or(OrderError::TotalOutOfRange)
    }
}
