use super::InsertError;
use crate::operation_node::{
    InsertValuesNode, ListNodeItem, PrimitiveValueListNode, ValueListNode, ValueNode,
};
use crate::types::{InsertValue, Row};

/// Builds the value list of one row, aligned to `columns`. Columns missing from the row are
/// filled with null.
///
/// A row made of constants only becomes a [`PrimitiveValueListNode`]. A single sub expression
/// turns the whole row into a [`ValueListNode`] where every slot is classified on its own.
pub fn parse_row_values(row: &Row, columns: &[String]) -> Result<InsertValuesNode, InsertError> {
    let null = InsertValue::null();
    let row_values = columns
        .iter()
        .map(|column| row.get(column).unwrap_or(&null))
        .collect::<Vec<_>>();

    let primitives = row_values
        .iter()
        .map(|value| value.as_scalar().cloned())
        .collect::<Option<Vec<_>>>();
    if let Some(primitives) = primitives {
        return Ok(InsertValuesNode::PrimitiveValueList(
            PrimitiveValueListNode::new(primitives),
        ));
    }

    let values = row_values
        .into_iter()
        .map(parse_insert_value)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(InsertValuesNode::ValueList(ValueListNode::new(values)))
}

/// Classifies one insert value as a literal or a sub expression.
/// Binary data, nested lists and nested objects are rejected.
pub fn parse_insert_value(value: &InsertValue) -> Result<ListNodeItem, InsertError> {
    match value {
        InsertValue::Scalar(scalar) => Ok(ListNodeItem::Value(ValueNode::new(scalar.clone()))),
        InsertValue::Source(source) => Ok(ListNodeItem::Expression(source.to_operation_node())),
        InsertValue::Bytes(_) | InsertValue::List(_) | InsertValue::Object(_) => {
            Err(InsertError::UnsupportedValue(value.to_string()))
        }
    }
}
