use derive_new::new;

use super::{OperationNode, ValueNode};

/// One slot of a [`ValueListNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum ListNodeItem {
    /// A constant wrapped as a literal
    Value(ValueNode),
    /// A nested node lowered from an operation node source
    Expression(OperationNode),
}

/// General value list, used when at least one slot of a row is a sub expression.
#[derive(new, Debug, Clone, PartialEq)]
pub struct ValueListNode {
    pub values: Vec<ListNodeItem>,
}
