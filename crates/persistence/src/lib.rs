//! Persistence for storefront entities.
//!
//! - [`Repository`] trait with `create`, `update`, `find`, `find_all`
//! - [`InMemoryRepository`] for tests and database-less runs
//! - [`PostgresRepository`] storing customers, products, and orders

pub mod error;
pub mod memory;
pub mod postgres;
pub mod repository;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryRepository;
pub use postgres::PostgresRepository;
pub use repository::Repository;
