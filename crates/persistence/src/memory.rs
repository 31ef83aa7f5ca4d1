use std::sync::Arc;

use async_trait::async_trait;
use domain::Entity;
use tokio::sync::RwLock;

use crate::{RepositoryError, Result, repository::Repository};

/// In-memory repository implementation for testing.
///
/// Entities are kept in insertion order and cloned in and out, so callers
/// never share state with the store.
#[derive(Clone)]
pub struct InMemoryRepository<E> {
    entities: Arc<RwLock<Vec<E>>>,
}

impl<E: Entity> InMemoryRepository<E> {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            entities: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Returns the number of stored entities.
    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }

    /// Returns true if nothing is stored.
    pub async fn is_empty(&self) -> bool {
        self.entities.read().await.is_empty()
    }

    /// Removes every stored entity.
    pub async fn clear(&self) {
        self.entities.write().await.clear();
    }
}

impl<E: Entity> Default for InMemoryRepository<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity + 'static> Repository<E> for InMemoryRepository<E> {
    #[tracing::instrument(skip_all, fields(entity = E::NAME, id = %entity.id()))]
    async fn create(&self, entity: &E) -> Result<()> {
        let mut entities = self.entities.write().await;
        if entities.iter().any(|e| e.id() == entity.id()) {
            return Err(RepositoryError::already_exists(E::NAME, entity.id()));
        }
        entities.push(entity.clone());
        metrics::counter!("repository_operations_total", "operation" => "create").increment(1);
        Ok(())
    }

    #[tracing::instrument(skip_all, fields(entity = E::NAME, id = %entity.id()))]
    async fn update(&self, entity: &E) -> Result<()> {
        let mut entities = self.entities.write().await;
        let stored = entities
            .iter_mut()
            .find(|e| e.id() == entity.id())
            .ok_or_else(|| RepositoryError::not_found(E::NAME, entity.id()))?;
        *stored = entity.clone();
        metrics::counter!("repository_operations_total", "operation" => "update").increment(1);
        Ok(())
    }

    async fn find(&self, id: &E::Id) -> Result<E> {
        let entities = self.entities.read().await;
        entities
            .iter()
            .find(|e| e.id() == id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(E::NAME, id))
    }

    async fn find_all(&self) -> Result<Vec<E>> {
        Ok(self.entities.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::{CustomerId, OrderId, ProductId};
    use domain::{Address, Customer, Money, Order, OrderItem, Product};

    fn customer(id: &str, name: &str) -> Customer {
        let mut customer = Customer::new(id, name).unwrap();
        customer.set_address(Address::new("Street 1", 1, "Zipcode 1", "City 1").unwrap());
        customer
    }

    #[tokio::test]
    async fn create_and_find_customer() {
        let repo: InMemoryRepository<Customer> = InMemoryRepository::new();
        let customer = customer("123", "Customer 1");

        repo.create(&customer).await.unwrap();

        let found = repo.find(&CustomerId::new("123")).await.unwrap();
        assert_eq!(found, customer);
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn create_rejects_duplicate_ids() {
        let repo: InMemoryRepository<Customer> = InMemoryRepository::new();
        repo.create(&customer("123", "Customer 1")).await.unwrap();

        let err = repo.create(&customer("123", "Other")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::AlreadyExists { entity: "Customer", .. }));
    }

    #[tokio::test]
    async fn update_replaces_stored_state() {
        let repo: InMemoryRepository<Customer> = InMemoryRepository::new();
        let mut customer = customer("123", "Customer 1");
        repo.create(&customer).await.unwrap();

        customer.change_name("Customer 2").unwrap();
        customer.activate().unwrap();
        customer.add_reward_points(5);
        repo.update(&customer).await.unwrap();

        let found = repo.find(customer.id()).await.unwrap();
        assert_eq!(found.name(), "Customer 2");
        assert!(found.is_active());
        assert_eq!(found.reward_points(), 5);
    }

    #[tokio::test]
    async fn update_of_unknown_entity_fails() {
        let repo: InMemoryRepository<Product> = InMemoryRepository::new();
        let product = Product::new("p1", "Product 1", Money::from_dollars(10)).unwrap();

        let err = repo.update(&product).await.unwrap_err();
        assert_eq!(err.to_string(), "Product not found");
    }

    #[tokio::test]
    async fn find_missing_order_fails() {
        let repo: InMemoryRepository<Order> = InMemoryRepository::new();
        let err = repo.find(&OrderId::new("XPTO")).await.unwrap_err();
        assert_eq!(err.to_string(), "Order not found");
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let repo: InMemoryRepository<Product> = InMemoryRepository::new();
        let p1 = Product::new("p1", "Product 1", Money::from_dollars(10)).unwrap();
        let p2 = Product::new("p2", "Product 2", Money::from_dollars(20)).unwrap();
        repo.create(&p1).await.unwrap();
        repo.create(&p2).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all, vec![p1, p2]);
        assert!(repo.find(&ProductId::new("p3")).await.is_err());
    }

    #[tokio::test]
    async fn order_update_replaces_items() {
        let repo: InMemoryRepository<Order> = InMemoryRepository::new();
        let item1 = OrderItem::new("i1", "Product 1", Money::from_dollars(10), "p1", 3);
        let mut order = Order::new("OR1", "C1", vec![item1]).unwrap();
        repo.create(&order).await.unwrap();

        order
            .add_item(OrderItem::new("i2", "Product 2", Money::from_dollars(4), "p2", 8))
            .unwrap();
        order
            .add_item(OrderItem::new("i3", "Product 3", Money::from_dollars(8), "p3", 7))
            .unwrap();
        repo.update(&order).await.unwrap();

        let found = repo.find(order.id()).await.unwrap();
        assert_eq!(found.items().len(), 3);
        assert_eq!(found.total(), order.total());
    }

    #[tokio::test]
    async fn clear_empties_the_store() {
        let repo: InMemoryRepository<Customer> = InMemoryRepository::new();
        repo.create(&customer("1", "A")).await.unwrap();
        repo.clear().await;
        assert!(repo.is_empty().await);
    }
}
