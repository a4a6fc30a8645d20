use std::fmt;

use serde_json::Value;

/// Discriminant of a value stored in a [`DataContainer`](crate::DataContainer).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Object,
    Array,
    String,
    /// A number stored without a fractional part, signed or unsigned.
    Int,
    /// A number stored with a floating-point representation, `1.0` included.
    Double,
    Bool,
    /// An explicitly stored `null`, which is present rather than missing.
    Null,
}

impl DataType {
    /// Classify a JSON value.
    ///
    /// Numbers stored as integers (signed or unsigned) are `Int`; numbers
    /// carrying a fractional representation are `Double`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Object(_) => Self::Object,
            Value::Array(_) => Self::Array,
            Value::String(_) => Self::String,
            Value::Number(number) if number.is_f64() => Self::Double,
            Value::Number(_) => Self::Int,
            Value::Bool(_) => Self::Bool,
            Value::Null => Self::Null,
        }
    }

    /// Lowercase name used in `Display` and CLI output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Object => "object",
            Self::Array => "array",
            Self::String => "string",
            Self::Int => "int",
            Self::Double => "double",
            Self::Bool => "bool",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
