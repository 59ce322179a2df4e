use derive_new::new;

use super::{
    ColumnNode, OperationNode, OperationNodeSource, PrimitiveValueListNode, TableNode,
    ValueListNode,
};

/// The values of a single insert row, aligned to the column list of its [`InsertNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum InsertValuesNode {
    PrimitiveValueList(PrimitiveValueListNode),
    ValueList(ValueListNode),
}

impl InsertValuesNode {
    pub fn len(&self) -> usize {
        match self {
            InsertValuesNode::PrimitiveValueList(list) => list.values.len(),
            InsertValuesNode::ValueList(list) => list.values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(new, Debug, Clone, PartialEq)]
pub struct InsertNode {
    pub into: TableNode,
    pub columns: Vec<ColumnNode>,
    /// One entry per input row, in input order
    pub values: Vec<InsertValuesNode>,
}

impl InsertNode {
    /// Assembles the node from already aligned parts, nothing is validated here.
    pub fn create(into: TableNode, columns: Vec<String>, values: Vec<InsertValuesNode>) -> Self {
        Self::new(
            into,
            columns.into_iter().map(ColumnNode::new).collect(),
            values,
        )
    }
}

impl OperationNodeSource for InsertNode {
    fn to_operation_node(&self) -> OperationNode {
        OperationNode::Insert(Box::new(self.clone()))
    }
}

impl From<InsertNode> for OperationNode {
    fn from(node: InsertNode) -> Self {
        OperationNode::Insert(Box::new(node))
    }
}
