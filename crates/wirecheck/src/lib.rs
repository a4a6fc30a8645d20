//! Typed JSON message documents and write-once schema validation.
//!
//! # Crate Structure
//!
//! - [`data`]: Path-addressable JSON documents with typed accessors
//! - [`schema`]: Named JSON Schema registry and validator (behind `schema` feature)
//!
//! ```
//! use wirecheck::data::DataContainer;
//! use wirecheck::schema::{ContentType, SchemaBuilder, SchemaRegistry, TypeConstraint};
//!
//! let registry = SchemaRegistry::new();
//! let mut envelope = SchemaBuilder::new("envelope", ContentType::Json);
//! envelope.add_constraint("id", TypeConstraint::String, true)?;
//! registry.register(envelope.build()?)?;
//!
//! let mut message = DataContainer::new();
//! message.set("id", "7f3c");
//! registry.validate(&message, "envelope")?;
//! # Ok::<(), wirecheck::schema::SchemaError>(())
//! ```

/// Re-export data container types.
pub mod data {
    pub use wirecheck_data::*;
}

/// Re-export schema types (requires `schema` feature).
#[cfg(feature = "schema")]
pub mod schema {
    pub use wirecheck_schema::*;
}
