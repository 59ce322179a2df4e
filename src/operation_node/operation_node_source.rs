use std::fmt::Debug;

use super::OperationNode;

/// Implemented by values that know how to lower themselves into an [`OperationNode`], such as
/// nested query builders and raw SQL fragments. Insert rows embed them as sub expressions.
pub trait OperationNodeSource: Debug + Send + Sync {
    fn to_operation_node(&self) -> OperationNode;
}
