use derive_new::new;

use crate::types::ScalarValue;

/// A literal, rendered by the compiler as a bound parameter or an inline constant.
#[derive(new, Debug, Clone, PartialEq)]
pub struct ValueNode {
    pub value: ScalarValue,
}
