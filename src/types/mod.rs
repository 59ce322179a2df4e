mod insert_value;

use std::fmt;

pub use insert_value::*;

/// Represents a dynamically typed, nullable constant.
/// These are the only constant kinds an insert row accepts as literals, anything else has to be
/// lowered through an [`OperationNodeSource`](crate::operation_node::OperationNodeSource).
///
/// Equality is structural: floats compare by their bit pattern, so `NaN` equals `NaN` and
/// `0.0` differs from `-0.0`.
#[derive(Clone, Debug)]
pub enum ScalarValue {
    /// represents an untyped `NULL`
    Null,
    /// true or false value
    Boolean(Option<bool>),
    /// 64bit float
    Float64(Option<f64>),
    /// signed 8bit int
    Int8(Option<i8>),
    /// signed 16bit int
    Int16(Option<i16>),
    /// signed 32bit int
    Int32(Option<i32>),
    /// signed 64bit int
    Int64(Option<i64>),
    /// utf-8 encoded string.
    String(Option<String>),
}

impl ScalarValue {
    pub fn is_null(&self) -> bool {
        matches!(
            self,
            ScalarValue::Null
                | ScalarValue::Boolean(None)
                | ScalarValue::Float64(None)
                | ScalarValue::Int8(None)
                | ScalarValue::Int16(None)
                | ScalarValue::Int32(None)
                | ScalarValue::Int64(None)
                | ScalarValue::String(None)
        )
    }
}

impl PartialEq for ScalarValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (ScalarValue::Null, ScalarValue::Null) => true,
            (ScalarValue::Boolean(l), ScalarValue::Boolean(r)) => l == r,
            (ScalarValue::Float64(l), ScalarValue::Float64(r)) => {
                l.map(f64::to_bits) == r.map(f64::to_bits)
            }
            (ScalarValue::Int8(l), ScalarValue::Int8(r)) => l == r,
            (ScalarValue::Int16(l), ScalarValue::Int16(r)) => l == r,
            (ScalarValue::Int32(l), ScalarValue::Int32(r)) => l == r,
            (ScalarValue::Int64(l), ScalarValue::Int64(r)) => l == r,
            (ScalarValue::String(l), ScalarValue::String(r)) => l == r,
            _ => false,
        }
    }
}

macro_rules! impl_scalar {
    ($ty:ty, $scalar:tt) => {
        impl From<$ty> for ScalarValue {
            fn from(value: $ty) -> Self {
                ScalarValue::$scalar(Some(value))
            }
        }

        impl From<Option<$ty>> for ScalarValue {
            fn from(value: Option<$ty>) -> Self {
                ScalarValue::$scalar(value)
            }
        }
    };
}

impl_scalar!(f64, Float64);
impl_scalar!(i8, Int8);
impl_scalar!(i16, Int16);
impl_scalar!(i32, Int32);
impl_scalar!(i64, Int64);
impl_scalar!(bool, Boolean);
impl_scalar!(String, String);

impl From<&str> for ScalarValue {
    fn from(value: &str) -> Self {
        ScalarValue::String(Some(value.to_string()))
    }
}

macro_rules! format_option {
    ($F:expr, $EXPR:expr) => {{
        match $EXPR {
            Some(e) => write!($F, "{}", e),
            None => write!($F, "null"),
        }
    }};
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScalarValue::Null => write!(f, "null"),
            ScalarValue::Boolean(v) => format_option!(f, v),
            ScalarValue::Float64(v) => format_option!(f, v),
            ScalarValue::Int8(v) => format_option!(f, v),
            ScalarValue::Int16(v) => format_option!(f, v),
            ScalarValue::Int32(v) => format_option!(f, v),
            ScalarValue::Int64(v) => format_option!(f, v),
            ScalarValue::String(v) => format_option!(f, v.as_ref().map(|s| format!("{:?}", s))),
        }
    }
}
