use std::fmt::{Result, Write};

use itertools::Itertools;

use crate::operation_node::{InsertNode, InsertValuesNode, ListNodeItem, OperationNode};
use crate::types::ScalarValue;

pub struct TreeRender;

impl TreeRender {
    fn primitive_values_to_string(values: &[ScalarValue]) -> String {
        format!("PrimitiveValueList: [{}]", values.iter().join(", "))
    }

    fn insert_node_to_string(insert: &InsertNode) -> String {
        format!("Insert: {}", insert.into)
    }

    fn operation_node_to_string(node: &OperationNode) -> String {
        match node {
            OperationNode::Table(table) => format!("Table: {}", table),
            OperationNode::Column(column) => format!("Column: {}", column.column),
            OperationNode::Value(value) => format!("Value: {}", value.value),
            OperationNode::PrimitiveValueList(list) => {
                Self::primitive_values_to_string(&list.values)
            }
            OperationNode::ValueList(_) => "ValueList".to_string(),
            OperationNode::Raw(raw) => {
                let parameters = raw.parameters.iter().map(|p| &p.value).join(", ");
                format!("Raw: {} [{}]", raw.sql, parameters)
            }
            OperationNode::Insert(insert) => Self::insert_node_to_string(insert),
        }
    }

    fn list_node_items_tree_internal(
        items: &[ListNodeItem],
        level: usize,
        explain_result: &mut dyn Write,
    ) -> Result {
        for item in items.iter() {
            match item {
                ListNodeItem::Value(value) => writeln!(
                    explain_result,
                    "{}Value: {}",
                    " ".repeat(level * 2),
                    value.value
                )?,
                ListNodeItem::Expression(node) => {
                    Self::operation_node_tree_internal(node, level, explain_result)?
                }
            }
        }
        Ok(())
    }

    fn insert_values_tree_internal(
        values: &InsertValuesNode,
        level: usize,
        explain_result: &mut dyn Write,
    ) -> Result {
        let indent = " ".repeat(level * 2);
        match values {
            InsertValuesNode::PrimitiveValueList(list) => writeln!(
                explain_result,
                "{}{}",
                indent,
                Self::primitive_values_to_string(&list.values)
            ),
            InsertValuesNode::ValueList(list) => {
                writeln!(explain_result, "{}ValueList", indent)?;
                Self::list_node_items_tree_internal(&list.values, level + 1, explain_result)
            }
        }
    }

    fn insert_node_children_tree_internal(
        insert: &InsertNode,
        level: usize,
        explain_result: &mut dyn Write,
    ) -> Result {
        let columns = insert.columns.iter().map(|c| &c.column).join(", ");
        writeln!(
            explain_result,
            "{}Columns: [{}]",
            " ".repeat(level * 2),
            columns
        )?;
        for values in insert.values.iter() {
            Self::insert_values_tree_internal(values, level, explain_result)?;
        }
        Ok(())
    }

    fn operation_node_tree_internal(
        node: &OperationNode,
        level: usize,
        explain_result: &mut dyn Write,
    ) -> Result {
        writeln!(
            explain_result,
            "{}{}",
            " ".repeat(level * 2),
            Self::operation_node_to_string(node)
        )?;
        match node {
            OperationNode::ValueList(list) => {
                Self::list_node_items_tree_internal(&list.values, level + 1, explain_result)
            }
            OperationNode::Insert(insert) => {
                Self::insert_node_children_tree_internal(insert, level + 1, explain_result)
            }
            _ => Ok(()),
        }
    }

    pub fn operation_node_tree(node: &OperationNode) -> String {
        let mut result = String::new();
        Self::operation_node_tree_internal(node, 0, &mut result).unwrap();
        result.trim_end().to_string()
    }

    pub fn insert_node_tree(node: &InsertNode) -> String {
        let mut result = String::new();
        writeln!(result, "{}", Self::insert_node_to_string(node)).unwrap();
        Self::insert_node_children_tree_internal(node, 1, &mut result).unwrap();
        result.trim_end().to_string()
    }
}

#[cfg(test)]
mod tree_render_test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::operation_node::{
        ColumnNode, OperationNodeSource, PrimitiveValueListNode, TableNode, ValueListNode,
        ValueNode,
    };
    use crate::parser::{parse_insert_args, InsertError};
    use crate::raw_builder::{raw, RawBuilder};
    use crate::row;

    #[test]
    fn test_insert_node_tree() -> std::result::Result<(), InsertError> {
        let into = TableNode::new(Some("public".to_string()), "person".to_string(), None);
        let rows = vec![
            row! { "a" => 1, "b" => "x" },
            row! { "a" => raw("now()") },
        ];
        let node = parse_insert_args(into, rows)?;
        let expected = r#"Insert: public.person
  Columns: [a, b]
  PrimitiveValueList: [1, "x"]
  ValueList
    Raw: now() []
    Value: null"#;
        assert_eq!(TreeRender::insert_node_tree(&node), expected);
        assert_eq!(
            TreeRender::operation_node_tree(&node.to_operation_node()),
            expected
        );
        Ok(())
    }

    #[test]
    fn test_leaf_nodes() {
        let column = OperationNode::Column(ColumnNode::new("id".to_string()));
        assert_eq!(TreeRender::operation_node_tree(&column), "Column: id");

        let lower = RawBuilder::new("lower(?)".to_string(), vec![ScalarValue::from("Bill")]);
        assert_eq!(
            TreeRender::operation_node_tree(&lower.to_operation_node()),
            r#"Raw: lower(?) ["Bill"]"#
        );
    }

    #[test]
    fn test_nested_value_list() {
        let node = OperationNode::ValueList(ValueListNode::new(vec![
            ListNodeItem::Value(ValueNode::new(ScalarValue::from(1))),
            ListNodeItem::Expression(OperationNode::PrimitiveValueList(
                PrimitiveValueListNode::new(vec![ScalarValue::Null, ScalarValue::from("x")]),
            )),
        ]));
        let expected = r#"ValueList
  Value: 1
  PrimitiveValueList: [null, "x"]"#;
        assert_eq!(TreeRender::operation_node_tree(&node), expected);
    }
}
