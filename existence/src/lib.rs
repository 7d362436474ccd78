//! Existence check for user records keyed by email.
//!
//! A single invocation decodes a `{ "email": "..." }` payload, connects to the
//! user table, runs one query against its email index and encodes the outcome
//! as a status code plus an `exists` flag. The Lambda binaries in this
//! workspace only differ in how they unwrap the payload and shape the reply.

mod config;
mod error;
mod handler;
mod probe;
mod request;
mod response;
mod store;

pub use config::Config;
pub use error::{ConfigError, DecodeError, StoreError};
pub use handler::ExistenceCheck;
pub use probe::{probe, Lookup};
pub use request::Request;
pub use response::{Outcome, Response};
pub use store::{AwsConnector, Connector, DynamoIndex, EmailIndex};
