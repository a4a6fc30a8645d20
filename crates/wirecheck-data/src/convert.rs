//! Conversion policy between JSON values and Rust types.
//!
//! Every type readable through [`DataContainer::get`](crate::DataContainer::get)
//! declares how it is extracted from a JSON value and what its null value is.
//! A miss (absent key, `null`, or a value of another kind) always resolves to
//! the null value:
//!
//! | type | converts from | null value |
//! |---|---|---|
//! | `bool` | JSON booleans | `false` |
//! | `i32`, `i64`, `u32`, `u64` | JSON integers in range | `0` |
//! | `f64` | any JSON number | `0.0` |
//! | `String` | JSON strings | `""` |
//! | `Vec<T>` | arrays whose every element converts | `[]` |
//! | `DataContainer` | any non-null value | empty object |
//! | `serde_json::Value` | anything | `Value::Null` |

use serde_json::Value;

/// A type that can be read out of a JSON value.
pub trait FromData: Sized {
    /// Extract `Self`, or `None` when the value is of another kind.
    fn from_data(value: &Value) -> Option<Self>;

    /// The value returned when a read misses.
    fn null_value() -> Self;
}

/// A type that can be stored into a JSON document.
pub trait IntoData {
    fn into_data(self) -> Value;
}

impl FromData for bool {
    fn from_data(value: &Value) -> Option<Self> {
        value.as_bool()
    }

    fn null_value() -> Self {
        false
    }
}

macro_rules! signed_from_data {
    ($($ty:ty),*) => {$(
        impl FromData for $ty {
            fn from_data(value: &Value) -> Option<Self> {
                value.as_i64().and_then(|n| <$ty>::try_from(n).ok())
            }

            fn null_value() -> Self {
                0
            }
        }
    )*};
}

macro_rules! unsigned_from_data {
    ($($ty:ty),*) => {$(
        impl FromData for $ty {
            fn from_data(value: &Value) -> Option<Self> {
                value.as_u64().and_then(|n| <$ty>::try_from(n).ok())
            }

            fn null_value() -> Self {
                0
            }
        }
    )*};
}

signed_from_data!(i32, i64);
unsigned_from_data!(u32, u64);

impl FromData for f64 {
    fn from_data(value: &Value) -> Option<Self> {
        value.as_f64()
    }

    fn null_value() -> Self {
        0.0
    }
}

impl FromData for String {
    fn from_data(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }

    fn null_value() -> Self {
        String::new()
    }
}

impl<T: FromData> FromData for Vec<T> {
    fn from_data(value: &Value) -> Option<Self> {
        value.as_array()?.iter().map(T::from_data).collect()
    }

    fn null_value() -> Self {
        Vec::new()
    }
}

impl FromData for Value {
    fn from_data(value: &Value) -> Option<Self> {
        Some(value.clone())
    }

    fn null_value() -> Self {
        Value::Null
    }
}

macro_rules! into_data_via_from {
    ($($ty:ty),*) => {$(
        impl IntoData for $ty {
            fn into_data(self) -> Value {
                Value::from(self)
            }
        }
    )*};
}

// Non-finite floats have no JSON form and are stored as null.
into_data_via_from!(bool, i32, i64, u32, u64, f64, String, &str);

impl<T: IntoData> IntoData for Vec<T> {
    fn into_data(self) -> Value {
        Value::Array(self.into_iter().map(IntoData::into_data).collect())
    }
}

impl IntoData for Value {
    fn into_data(self) -> Value {
        self
    }
}
