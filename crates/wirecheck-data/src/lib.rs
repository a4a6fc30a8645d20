//! Typed, path-addressable access to JSON message documents.
//!
//! A [`DataContainer`] wraps one JSON value and lets callers read and write
//! nested entries by key path with a static value type:
//!
//! ```
//! use wirecheck_data::DataContainer;
//!
//! let mut data = DataContainer::new();
//! data.set(["envelope", "id"], "a1b2");
//! data.set(["envelope", "expires"], 30);
//!
//! assert_eq!(data.get::<String>(["envelope", "id"]), "a1b2");
//! assert_eq!(data.get::<i64>(["envelope", "expires"]), 30);
//! // Reads never fail: a miss yields the type's null value.
//! assert_eq!(data.get::<i64>(["envelope", "missing"]), 0);
//! ```

pub mod container;
pub mod convert;
pub mod error;
pub mod path;
pub mod types;

pub use container::DataContainer;
pub use convert::{FromData, IntoData};
pub use error::{DataError, Result};
pub use path::{IntoPath, ROOT};
pub use types::DataType;
