//! In-process domain event dispatch.
//!
//! This crate provides the notification mechanism the domain uses:
//! - [`Event`] records carrying a timestamp and an opaque JSON payload
//! - [`DomainEvent`] for typed payload records
//! - [`EventHandler`] trait for synchronous handlers
//! - [`EventDispatcher`] registry delivering events in registration order
//! - [`ConsoleSink`] as the output of console-logging handlers

pub mod dispatcher;
pub mod error;
pub mod event;
pub mod handler;
pub mod sink;

pub use dispatcher::EventDispatcher;
pub use error::{DispatchError, HandlerError, Result};
pub use event::{DomainEvent, Event};
pub use handler::EventHandler;
pub use sink::{CapturedOutput, ConsoleSink};
