//! Datastore service client and wire types.
//!
//! The datastore owns book records and real authorization enforcement;
//! this module only shapes requests against its `read`, `write`, and
//! `delete` endpoints.

pub mod client;
pub mod types;

pub use client::DatastoreClient;
pub use types::{BookWritePayload, CreateBookRequest, OBJTYPE_BOOK};
