//! Storefront runner.
//!
//! Wires the domain entities to their console event handlers and to a
//! repository backend chosen from [`Config`].

pub mod config;
pub mod error;
pub mod walkthrough;

pub use config::{Config, LogFormat};
pub use error::{AppError, Result};
pub use walkthrough::{Summary, build_dispatcher, run};
