use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

use crate::convert::{FromData, IntoData};
use crate::error::{DataError, Result};
use crate::path::{display_path, IntoPath};
use crate::types::DataType;

/// A JSON document with typed, path-based accessors.
///
/// Reads ([`get`](Self::get), [`includes`](Self::includes),
/// [`keys`](Self::keys)) never fail: a missing entry yields the requested
/// type's null value. [`type_of`](Self::type_of) is the one strict read and
/// reports a missing key as an error.
///
/// Writes go through [`set`](Self::set), which creates intermediate objects
/// along the path. Note that `set` replaces any non-object node it has to
/// walk through with an empty object, discarding what was stored there:
///
/// ```
/// use wirecheck_data::DataContainer;
///
/// let mut data = DataContainer::parse(r#"{"a": 1}"#).unwrap();
/// data.set(["a", "b"], true);
/// assert_eq!(data.to_json_string(), r#"{"a":{"b":true}}"#);
/// ```
///
/// Equality is structural. Cloning copies the whole tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DataContainer {
    root: Value,
}

impl DataContainer {
    /// Create a container holding an empty object.
    pub fn new() -> Self {
        Self {
            root: Value::Object(Map::new()),
        }
    }

    /// Parse a container from JSON text.
    ///
    /// The text may encode any JSON value, not only an object.
    pub fn parse(text: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(text)?;
        Ok(Self { root })
    }

    /// Read the value at `path` as `T`.
    ///
    /// Returns `T`'s null value when any key along the path is absent, when
    /// a traversed node is not an object, or when the stored value cannot be
    /// converted to `T`.
    pub fn get<T: FromData>(&self, path: impl IntoPath) -> T {
        self.lookup(&path.path_keys())
            .and_then(T::from_data)
            .unwrap_or_else(T::null_value)
    }

    /// Read the value at `path` as `T`, falling back to `default` on a miss.
    pub fn get_or<T: FromData>(&self, path: impl IntoPath, default: T) -> T {
        self.lookup(&path.path_keys())
            .and_then(T::from_data)
            .unwrap_or(default)
    }

    /// Store `value` at `path`.
    ///
    /// Missing intermediate objects are created. An intermediate node (or a
    /// root) that is not an object is overwritten with an empty object before
    /// descending. The empty path replaces the root.
    pub fn set<T: IntoData>(&mut self, path: impl IntoPath, value: T) {
        let keys = path.path_keys();
        let value = value.into_data();

        let Some((last, parents)) = keys.split_last() else {
            self.root = value;
            return;
        };

        let mut node = &mut self.root;
        for key in parents {
            node = as_object_mut(node, key)
                .entry(*key)
                .or_insert_with(|| Value::Object(Map::new()));
        }
        as_object_mut(node, last).insert((*last).to_string(), value);
    }

    /// Whether every key of `path` resolves to an existing entry.
    pub fn includes(&self, path: impl IntoPath) -> bool {
        self.lookup(&path.path_keys()).is_some()
    }

    /// The kind of value stored at `path`.
    ///
    /// Fails with [`DataError::MissingKey`] when any segment of the path does
    /// not exist. A stored `null` is reported as [`DataType::Null`].
    pub fn type_of(&self, path: impl IntoPath) -> Result<DataType> {
        let keys = path.path_keys();
        self.lookup(&keys)
            .map(DataType::of)
            .ok_or_else(|| DataError::MissingKey(display_path(&keys)))
    }

    /// Top-level keys in document order. Empty for non-object roots.
    pub fn keys(&self) -> Vec<String> {
        match &self.root {
            Value::Object(map) => map.keys().cloned().collect(),
            _ => Vec::new(),
        }
    }

    /// Whether the root is an empty object, an empty array or null.
    pub fn is_empty(&self) -> bool {
        match &self.root {
            Value::Object(map) => map.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Null => true,
            _ => false,
        }
    }

    /// Number of entries in the root object or array; 0 for scalars.
    pub fn size(&self) -> usize {
        match &self.root {
            Value::Object(map) => map.len(),
            Value::Array(items) => items.len(),
            _ => 0,
        }
    }

    /// Borrow the underlying JSON value.
    pub fn as_value(&self) -> &Value {
        &self.root
    }

    /// Take the underlying JSON value.
    pub fn into_value(self) -> Value {
        self.root
    }

    /// Compact JSON text.
    pub fn to_json_string(&self) -> String {
        self.root.to_string()
    }

    /// Indented JSON text.
    pub fn to_pretty_string(&self) -> String {
        // Serializing a Value cannot fail: map keys are always strings.
        serde_json::to_string_pretty(&self.root).unwrap_or_else(|_| self.root.to_string())
    }

    fn lookup(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().try_fold(&self.root, |node, key| match node {
            Value::Object(map) => map.get(*key),
            _ => None,
        })
    }
}

/// Borrow `node` as an object, replacing it with an empty one first if it
/// holds anything else.
fn as_object_mut<'a>(node: &'a mut Value, key: &str) -> &'a mut Map<String, Value> {
    if !node.is_object() {
        debug!(key, replaced = %DataType::of(node), "replacing non-object node on set");
        *node = Value::Object(Map::new());
    }
    match node {
        Value::Object(map) => map,
        _ => unreachable!("node was just replaced with an object"),
    }
}

impl Default for DataContainer {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Value> for DataContainer {
    fn from(root: Value) -> Self {
        Self { root }
    }
}

impl From<DataContainer> for Value {
    fn from(data: DataContainer) -> Self {
        data.root
    }
}

impl FromStr for DataContainer {
    type Err = DataError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DataContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)
    }
}

/// Any present value converts, `null` included, so reading the empty path
/// always yields an exact copy.
impl FromData for DataContainer {
    fn from_data(value: &Value) -> Option<Self> {
        Some(Self::from(value.clone()))
    }

    fn null_value() -> Self {
        Self::new()
    }
}

impl IntoData for DataContainer {
    fn into_data(self) -> Value {
        self.root
    }
}

impl IntoData for &DataContainer {
    fn into_data(self) -> Value {
        self.root.clone()
    }
}
