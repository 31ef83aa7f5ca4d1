//! Product entity and product events.

mod entity;
mod events;
mod handlers;

pub use entity::Product;
pub use events::ProductCreated;
pub use handlers::{ProductCreatedLogHandler, register_product_handlers};

use event_dispatch::DispatchError;
use thiserror::Error;

/// Errors that can occur during product operations.
#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Id is required")]
    IdRequired,

    #[error("Name is required")]
    NameRequired,

    #[error("Price must be greater than zero")]
    InvalidPrice { cents: i64 },

    #[error("Event payload error: {0}")]
    Payload(#[from] serde_json::Error),

    #[error("Event dispatch failed: {0}")]
    Dispatch(#[from] DispatchError),
}
