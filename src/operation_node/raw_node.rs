use derive_new::new;

use super::ValueNode;

/// A raw SQL fragment together with the parameters bound to its placeholders.
#[derive(new, Debug, Clone, PartialEq)]
pub struct RawNode {
    pub sql: String,
    pub parameters: Vec<ValueNode>,
}
