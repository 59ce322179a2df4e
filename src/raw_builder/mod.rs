use derive_new::new;

use crate::operation_node::{OperationNode, OperationNodeSource, RawNode, ValueNode};
use crate::types::ScalarValue;

/// Wraps a raw SQL fragment so it can be used wherever a value is expected.
/// `parameters` are bound to the placeholders of `sql` by the compiler.
#[derive(new, Debug, Clone, PartialEq)]
pub struct RawBuilder {
    sql: String,
    parameters: Vec<ScalarValue>,
}

/// A raw SQL fragment without parameters.
pub fn raw(sql: impl Into<String>) -> RawBuilder {
    RawBuilder::new(sql.into(), vec![])
}

impl RawBuilder {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn parameters(&self) -> &[ScalarValue] {
        &self.parameters
    }
}

impl OperationNodeSource for RawBuilder {
    fn to_operation_node(&self) -> OperationNode {
        OperationNode::Raw(RawNode::new(
            self.sql.clone(),
            self.parameters.iter().cloned().map(ValueNode::new).collect(),
        ))
    }
}

#[cfg(test)]
mod raw_builder_test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_raw_without_parameters() {
        let node = raw("now()").to_operation_node();
        assert_eq!(node, OperationNode::Raw(RawNode::new("now()".to_string(), vec![])));
    }

    #[test]
    fn test_raw_parameters_become_value_nodes() {
        let builder = RawBuilder::new(
            "concat(?, ' ', ?)".to_string(),
            vec![ScalarValue::from("Jennifer"), ScalarValue::from("Aniston")],
        );
        assert_eq!(builder.sql(), "concat(?, ' ', ?)");
        assert_eq!(builder.parameters().len(), 2);
        match builder.to_operation_node() {
            OperationNode::Raw(node) => assert_eq!(
                node.parameters,
                vec![
                    ValueNode::new(ScalarValue::from("Jennifer")),
                    ValueNode::new(ScalarValue::from("Aniston")),
                ]
            ),
            other => panic!("unexpected node {:?}", other),
        }
    }
}
