//! Book service: a thin HTTP front-end for the datastore service.
//!
//! Every route under `/api/v1/book` checks for an `Authorization` header,
//! reshapes the request into one call against the datastore's `read`,
//! `write`, or `delete` endpoint, and relays the datastore's JSON response
//! to the caller. The service holds no state of its own.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`datastore`]: Datastore HTTP client and wire types
//! - [`api`]: HTTP routes and handlers
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod datastore;
pub mod error;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServiceError};
