//! Domain error types.

use thiserror::Error;

use crate::checkout::OrderError;
use crate::customer::{AddressError, CustomerError};
use crate::product::ProductError;

/// Errors that can occur during domain operations.
#[derive(Debug, Error)]
pub enum DomainError {
    /// An error occurred in the customer entity.
    #[error("Customer error: {0}")]
    Customer(#[from] CustomerError),

    /// An address failed validation.
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// An error occurred in the product entity.
    #[error("Product error: {0}")]
    Product(#[from] ProductError),

    /// An error occurred in the order entity.
    #[error("Order error: {0}")]
    Order(#[from] OrderError),
}
