mod column_node;
mod insert_node;
mod operation_node_source;
mod primitive_value_list_node;
mod raw_node;
mod table_node;
mod value_list_node;
mod value_node;

pub use column_node::*;
pub use insert_node::*;
pub use operation_node_source::*;
pub use primitive_value_list_node::*;
pub use raw_node::*;
use strum_macros::AsRefStr;
pub use table_node::*;
pub use value_list_node::*;
pub use value_node::*;

/// Structural, dialect agnostic representation of a SQL fragment. A compiler walks the tree to
/// produce SQL text and its bound parameters.
#[derive(Debug, Clone, PartialEq, AsRefStr)]
pub enum OperationNode {
    Table(TableNode),
    Column(ColumnNode),
    Value(ValueNode),
    PrimitiveValueList(PrimitiveValueListNode),
    ValueList(ValueListNode),
    Raw(RawNode),
    Insert(Box<InsertNode>),
}

/// A pre-built node lowers to itself.
impl OperationNodeSource for OperationNode {
    fn to_operation_node(&self) -> OperationNode {
        self.clone()
    }
}
