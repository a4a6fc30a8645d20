//! Write-once JSON Schema registry for validating message documents.
//!
//! Schemas are registered once under a unique name and never replaced.
//! Validation looks a schema up by name and runs the `jsonschema` engine
//! against a [`DataContainer`](wirecheck_data::DataContainer), reporting
//! every structural error in one numbered message.
//!
//! The registry is safe to share between threads; validation runs without
//! holding the registry lock.

pub mod builder;
pub mod config;
pub mod error;
pub mod registry;
pub mod schema;
mod strict;
pub mod validator;

pub use builder::{SchemaBuilder, TypeConstraint};
pub use config::RegistryConfig;
pub use error::{Result, SchemaError};
pub use registry::SchemaRegistry;
pub use schema::{ContentType, Schema};
pub use validator::format_errors;
