use derive_new::new;

use crate::types::ScalarValue;

/// Compact value list of a row made of constants only. The values are kept raw instead of being
/// wrapped into [`ValueNode`](super::ValueNode)s so compilers can bind them in one go.
#[derive(new, Debug, Clone, PartialEq)]
pub struct PrimitiveValueListNode {
    pub values: Vec<ScalarValue>,
}
