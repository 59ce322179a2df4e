use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use super::ScalarValue;
use crate::operation_node::{OperationNode, OperationNodeSource};
use crate::raw_builder::RawBuilder;

/// One insert row: column name to value, iterated in insertion order.
pub type Row = IndexMap<String, InsertValue>;

/// A value placed in an insert row by the caller.
#[derive(Clone, Debug)]
pub enum InsertValue {
    /// A constant, inserted as a literal.
    Scalar(ScalarValue),
    /// A value that lowers itself into an operation node, e.g. a nested query or a raw fragment.
    Source(Arc<dyn OperationNodeSource>),
    /// Binary data. Not a supported insert constant.
    Bytes(Vec<u8>),
    /// A nested list. Not a supported insert value.
    List(Vec<InsertValue>),
    /// A nested object. Not a supported insert value.
    Object(Row),
}

impl InsertValue {
    pub fn null() -> Self {
        InsertValue::Scalar(ScalarValue::Null)
    }

    pub fn source<S: OperationNodeSource + 'static>(source: S) -> Self {
        InsertValue::Source(Arc::new(source))
    }

    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            InsertValue::Scalar(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_scalar(&self) -> bool {
        self.as_scalar().is_some()
    }

    /// JSON rendering used in error diagnostics. Non-finite floats become `null` and sources
    /// are named by the kind of node they lower to, e.g. `"<Raw>"`.
    pub fn to_json(&self) -> Value {
        match self {
            InsertValue::Scalar(value) => scalar_to_json(value),
            InsertValue::Source(source) => {
                let node = source.to_operation_node();
                Value::String(format!("<{}>", AsRef::<str>::as_ref(&node)))
            }
            InsertValue::Bytes(bytes) => {
                Value::Array(bytes.iter().map(|byte| Value::from(*byte)).collect())
            }
            InsertValue::List(values) => {
                Value::Array(values.iter().map(InsertValue::to_json).collect())
            }
            InsertValue::Object(row) => Value::Object(
                row.iter()
                    .map(|(column, value)| (column.clone(), value.to_json()))
                    .collect::<Map<_, _>>(),
            ),
        }
    }
}

fn scalar_to_json(value: &ScalarValue) -> Value {
    match value {
        ScalarValue::Null => Value::Null,
        ScalarValue::Boolean(v) => v.map_or(Value::Null, Value::from),
        ScalarValue::Float64(v) => v
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number),
        ScalarValue::Int8(v) => v.map_or(Value::Null, Value::from),
        ScalarValue::Int16(v) => v.map_or(Value::Null, Value::from),
        ScalarValue::Int32(v) => v.map_or(Value::Null, Value::from),
        ScalarValue::Int64(v) => v.map_or(Value::Null, Value::from),
        ScalarValue::String(v) => v.clone().map_or(Value::Null, Value::from),
    }
}

macro_rules! impl_insert_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for InsertValue {
                fn from(value: $ty) -> Self {
                    InsertValue::Scalar(value.into())
                }
            }
        )*
    };
}

impl_insert_scalar!(
    ScalarValue,
    bool,
    f64,
    i8,
    i16,
    i32,
    i64,
    String,
    &str,
    Option<bool>,
    Option<f64>,
    Option<i8>,
    Option<i16>,
    Option<i32>,
    Option<i64>,
    Option<String>,
);

impl From<RawBuilder> for InsertValue {
    fn from(value: RawBuilder) -> Self {
        InsertValue::source(value)
    }
}

impl From<OperationNode> for InsertValue {
    fn from(value: OperationNode) -> Self {
        InsertValue::source(value)
    }
}

impl From<Vec<u8>> for InsertValue {
    fn from(value: Vec<u8>) -> Self {
        InsertValue::Bytes(value)
    }
}

impl From<Row> for InsertValue {
    fn from(value: Row) -> Self {
        InsertValue::Object(value)
    }
}

impl fmt::Display for InsertValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_json())
    }
}

/// Builds a [`Row`] keeping the columns in the order they are written.
///
/// ```
/// use sqlrs_builder::row;
///
/// let row = row! { "id" => 1, "name" => "Bill" };
/// assert_eq!(row.keys().collect::<Vec<_>>(), vec!["id", "name"]);
/// ```
#[macro_export]
macro_rules! row {
    () => {
        $crate::types::Row::new()
    };
    ($($column:expr => $value:expr),+ $(,)?) => {{
        let mut row = $crate::types::Row::new();
        $(
            row.insert(
                ::std::string::ToString::to_string(&$column),
                $crate::types::InsertValue::from($value),
            );
        )+
        row
    }};
}
