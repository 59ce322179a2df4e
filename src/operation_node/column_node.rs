use derive_new::new;

#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct ColumnNode {
    pub column: String,
}
