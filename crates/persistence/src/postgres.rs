use std::collections::HashMap;

use async_trait::async_trait;
use common::{CustomerId, OrderId, ProductId};
use domain::{Address, Customer, DomainError, Entity, Money, Order, OrderItem, Product};
use sqlx::{PgPool, Postgres, Row, Transaction, postgres::PgRow};

use crate::{RepositoryError, Result, repository::Repository};

/// PostgreSQL-backed repository for customers, products, and orders.
#[derive(Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

impl PostgresRepository {
    /// Creates a new PostgreSQL repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("../../migrations").run(&self.pool).await?;
        Ok(())
    }

    fn row_to_customer(row: &PgRow) -> Result<Customer> {
        let mut customer = Customer::new(
            row.try_get::<String, _>("id")?,
            row.try_get::<String, _>("name")?,
        )
        .map_err(DomainError::from)?;

        let street: Option<String> = row.try_get("street")?;
        let number: Option<i64> = row.try_get("number")?;
        let zip: Option<String> = row.try_get("zip")?;
        let city: Option<String> = row.try_get("city")?;
        if let (Some(street), Some(number), Some(zip), Some(city)) = (street, number, zip, city) {
            let number = to_u32(number, "customers.number")?;
            let address = Address::new(street, number, zip, city).map_err(DomainError::from)?;
            customer.set_address(address);
        }

        if row.try_get::<bool, _>("active")? {
            customer.activate().map_err(DomainError::from)?;
        }

        let points: i64 = row.try_get("reward_points")?;
        customer.add_reward_points(u64::try_from(points).map_err(|_| {
            RepositoryError::OutOfRange {
                column: "customers.reward_points",
            }
        })?);

        Ok(customer)
    }

    fn row_to_product(row: &PgRow) -> Result<Product> {
        let product = Product::new(
            row.try_get::<String, _>("id")?,
            row.try_get::<String, _>("name")?,
            Money::from_cents(row.try_get("price")?),
        )
        .map_err(DomainError::from)?;
        Ok(product)
    }

    fn row_to_item(row: &PgRow) -> Result<OrderItem> {
        Ok(OrderItem::new(
            row.try_get::<String, _>("id")?,
            row.try_get::<String, _>("name")?,
            Money::from_cents(row.try_get("price")?),
            row.try_get::<String, _>("product_id")?,
            to_u32(row.try_get("quantity")?, "order_items.quantity")?,
        ))
    }

    fn row_to_order(row: &PgRow, items: Vec<OrderItem>) -> Result<Order> {
        let order = Order::new(
            row.try_get::<String, _>("id")?,
            row.try_get::<String, _>("customer_id")?,
            items,
        )
        .map_err(DomainError::from)?;
        Ok(order)
    }

    async fn insert_items(tx: &mut Transaction<'_, Postgres>, order: &Order) -> Result<()> {
        for (position, item) in order.items().iter().enumerate() {
            let position = i64::try_from(position).map_err(|_| RepositoryError::OutOfRange {
                column: "order_items.position",
            })?;

            sqlx::query(
                r#"
                INSERT INTO order_items (id, order_id, product_id, name, price, quantity, position)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                "#,
            )
            .bind(item.id().as_str())
            .bind(order.id().as_str())
            .bind(item.product_id().as_str())
            .bind(item.name())
            .bind(item.price().cents())
            .bind(i64::from(item.quantity()))
            .bind(position)
            .execute(&mut **tx)
            .await
            .map_err(insert_error("Order item", item.id()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl Repository<Customer> for PostgresRepository {
    #[tracing::instrument(skip(self, customer), fields(customer_id = %customer.id()))]
    async fn create(&self, customer: &Customer) -> Result<()> {
        let address = customer.address();

        sqlx::query(
            r#"
            INSERT INTO customers (id, name, street, number, zip, city, active, reward_points)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(customer.id().as_str())
        .bind(customer.name())
        .bind(address.map(Address::street))
        .bind(address.map(|a| i64::from(a.number())))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(customer.is_active())
        .bind(to_i64(customer.reward_points(), "customers.reward_points")?)
        .execute(&self.pool)
        .await
        .map_err(insert_error(Customer::NAME, customer.id()))?;

        metrics::counter!("repository_operations_total", "operation" => "create").increment(1);
        Ok(())
    }

    #[tracing::instrument(skip(self, customer), fields(customer_id = %customer.id()))]
    async fn update(&self, customer: &Customer) -> Result<()> {
        let address = customer.address();

        let result = sqlx::query(
            r#"
            UPDATE customers
            SET name = $2, street = $3, number = $4, zip = $5, city = $6,
                active = $7, reward_points = $8
            WHERE id = $1
            "#,
        )
        .bind(customer.id().as_str())
        .bind(customer.name())
        .bind(address.map(Address::street))
        .bind(address.map(|a| i64::from(a.number())))
        .bind(address.map(Address::zip))
        .bind(address.map(Address::city))
        .bind(customer.is_active())
        .bind(to_i64(customer.reward_points(), "customers.reward_points")?)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(Customer::NAME, customer.id()));
        }

        metrics::counter!("repository_operations_total", "operation" => "update").increment(1);
        Ok(())
    }

    async fn find(&self, id: &CustomerId) -> Result<Customer> {
        let row = sqlx::query(
            r#"
            SELECT id, name, street, number, zip, city, active, reward_points
            FROM customers
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| RepositoryError::not_found(Customer::NAME, id))?;

        Self::row_to_customer(&row)
    }

    async fn find_all(&self) -> Result<Vec<Customer>> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, street, number, zip, city, active, reward_points
            FROM customers
            ORDER BY seq ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_customer).collect()
    }
}

#[async_trait]
impl Repository<Product> for PostgresRepository {
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn create(&self, product: &Product) -> Result<()> {
        sqlx::query("INSERT INTO products (id, name, price) VALUES ($1, $2, $3)")
            .bind(product.id().as_str())
            .bind(product.name())
            .bind(product.price().cents())
            .execute(&self.pool)
            .await
            .map_err(insert_error(Product::NAME, product.id()))?;

        metrics::counter!("repository_operations_total", "operation" => "create").increment(1);
        Ok(())
    }

    #[tracing::instrument(skip(self, product), fields(product_id = %product.id()))]
    async fn update(&self, product: &Product) -> Result<()> {
        let result = sqlx::query("UPDATE products SET name = $2, price = $3 WHERE id = $1")
            .bind(product.id().as_str())
            .bind(product.name())
            .bind(product.price().cents())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(Product::NAME, product.id()));
        }

        metrics::counter!("repository_operations_total", "operation" => "update").increment(1);
        Ok(())
    }

    async fn find(&self, id: &ProductId) -> Result<Product> {
        let row = sqlx::query("SELECT id, name, price FROM products WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found(Product::NAME, id))?;

        Self::row_to_product(&row)
    }

    async fn find_all(&self) -> Result<Vec<Product>> {
        let rows = sqlx::query("SELECT id, name, price FROM products ORDER BY seq ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::row_to_product).collect()
    }
}

#[async_trait]
impl Repository<Order> for PostgresRepository {
    /// Inserts the order and its items atomically.
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id()))]
    async fn create(&self, order: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO orders (id, customer_id, total) VALUES ($1, $2, $3)")
            .bind(order.id().as_str())
            .bind(order.customer_id().as_str())
            .bind(order.total().cents())
            .execute(&mut *tx)
            .await
            .map_err(insert_error(Order::NAME, order.id()))?;

        Self::insert_items(&mut tx, order).await?;

        tx.commit().await?;
        metrics::counter!("repository_operations_total", "operation" => "create").increment(1);
        Ok(())
    }

    /// Replaces the order's items and total in one transaction.
    #[tracing::instrument(skip(self, order), fields(order_id = %order.id()))]
    async fn update(&self, order: &Order) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("UPDATE orders SET total = $2 WHERE id = $1")
            .bind(order.id().as_str())
            .bind(order.total().cents())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(Order::NAME, order.id()));
        }

        sqlx::query("DELETE FROM order_items WHERE order_id = $1")
            .bind(order.id().as_str())
            .execute(&mut *tx)
            .await?;

        Self::insert_items(&mut tx, order).await?;

        tx.commit().await?;
        metrics::counter!("repository_operations_total", "operation" => "update").increment(1);
        Ok(())
    }

    async fn find(&self, id: &OrderId) -> Result<Order> {
        let row = sqlx::query("SELECT id, customer_id FROM orders WHERE id = $1")
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| RepositoryError::not_found(Order::NAME, id))?;

        let item_rows = sqlx::query(
            r#"
            SELECT id, product_id, name, price, quantity
            FROM order_items
            WHERE order_id = $1
            ORDER BY position ASC
            "#,
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await?;

        let items = item_rows
            .iter()
            .map(Self::row_to_item)
            .collect::<Result<Vec<_>>>()?;

        Self::row_to_order(&row, items)
    }

    async fn find_all(&self) -> Result<Vec<Order>> {
        let order_rows = sqlx::query("SELECT id, customer_id FROM orders ORDER BY seq ASC")
            .fetch_all(&self.pool)
            .await?;

        let item_rows = sqlx::query(
            r#"
            SELECT order_id, id, product_id, name, price, quantity
            FROM order_items
            ORDER BY order_id, position ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        let mut items_by_order: HashMap<String, Vec<OrderItem>> = HashMap::new();
        for row in &item_rows {
            let order_id: String = row.try_get("order_id")?;
            items_by_order
                .entry(order_id)
                .or_default()
                .push(Self::row_to_item(row)?);
        }

        let mut orders = Vec::with_capacity(order_rows.len());
        for row in &order_rows {
            let id: String = row.try_get("id")?;
            let items = items_by_order.remove(&id).unwrap_or_default();
            orders.push(Self::row_to_order(row, items)?);
        }
        Ok(orders)
    }
}

/// Maps unique-key violations on insert to `AlreadyExists`.
fn insert_error(
    entity: &'static str,
    id: &impl ToString,
) -> impl FnOnce(sqlx::Error) -> RepositoryError {
    let id = id.to_string();
    move |e| {
        if let sqlx::Error::Database(ref db_err) = e
            && db_err.is_unique_violation()
        {
            return RepositoryError::AlreadyExists { entity, id };
        }
        RepositoryError::Database(e)
    }
}

fn to_i64(value: u64, column: &'static str) -> Result<i64> {
    i64::try_from(value).map_err(|_| RepositoryError::OutOfRange { column })
}

fn to_u32(value: i64, column: &'static str) -> Result<u32> {
    u32::try_from(value).map_err(|_| RepositoryError::OutOfRange { column })
}
