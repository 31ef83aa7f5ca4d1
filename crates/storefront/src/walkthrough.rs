//! A complete storefront session: customers, products, and an order,
//! with every event reaching its console handlers.

use common::OrderItemId;
use domain::{
    Address, Customer, Money, Order, OrderItem, OrderService, Product,
    register_customer_handlers, register_product_handlers,
};
use event_dispatch::{ConsoleSink, EventDispatcher};
use persistence::Repository;

use crate::error::Result;

/// What a finished walkthrough left behind.
#[derive(Debug, Clone)]
pub struct Summary {
    pub customer: Customer,
    pub order: Order,
    pub products: Vec<Product>,
    pub orders_total: Money,
}

/// Builds a dispatcher with every console handler writing to `sink`.
pub fn build_dispatcher(sink: &ConsoleSink) -> Result<EventDispatcher> {
    let mut dispatcher = EventDispatcher::new();
    register_customer_handlers(&mut dispatcher, sink)?;
    register_product_handlers(&mut dispatcher, sink)?;
    tracing::debug!(?dispatcher, "handlers registered");
    Ok(dispatcher)
}

/// Runs one session against the given repositories.
///
/// Creates and relocates a customer, lists two products, places an order,
/// then reads the order back from storage.
#[tracing::instrument(skip_all)]
pub async fn run<C, P, O>(
    customers: &C,
    products: &P,
    orders: &O,
    sink: &ConsoleSink,
) -> Result<Summary>
where
    C: Repository<Customer>,
    P: Repository<Product>,
    O: Repository<Order>,
{
    let dispatcher = build_dispatcher(sink)?;

    let mut customer = Customer::create("c1", "John", &dispatcher)?;
    customer.change_address(Address::new("Street 1", 123, "13330-250", "Sao Paulo")?, &dispatcher)?;
    customer.activate()?;
    customers.create(&customer).await?;

    let catalog = vec![
        Product::create("p1", "Product 1", Money::from_dollars(10), &dispatcher)?,
        Product::create("p2", "Product 2", Money::from_dollars(25), &dispatcher)?,
    ];
    for product in &catalog {
        products.create(product).await?;
    }

    let items = catalog
        .iter()
        .zip([2, 1])
        .map(|(product, quantity)| {
            OrderItem::new(
                OrderItemId::generate(),
                product.name(),
                product.price(),
                product.id().clone(),
                quantity,
            )
        })
        .collect();
    let order = OrderService::place_order(&mut customer, items)?;
    orders.create(&order).await?;
    customers.update(&customer).await?;

    let stored = orders.find(order.id()).await?;
    let orders_total = OrderService::total(&orders.find_all().await?)?;
    let customer = customers.find(customer.id()).await?;

    tracing::info!(
        customer_id = %customer.id(),
        order_id = %stored.id(),
        reward_points = customer.reward_points(),
        %orders_total,
        "walkthrough finished"
    );

    Ok(Summary {
        customer,
        order: stored,
        products: products.find_all().await?,
        orders_total,
    })
}
