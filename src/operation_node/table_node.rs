use std::fmt;

use derive_new::new;

/// The target of a statement, passed through to the compiler unchanged.
#[derive(new, Debug, Clone, PartialEq, Eq)]
pub struct TableNode {
    pub schema: Option<String>,
    pub table: String,
    pub alias: Option<String>,
}

impl TableNode {
    pub fn table(table: impl Into<String>) -> Self {
        Self::new(None, table.into(), None)
    }
}

impl fmt::Display for TableNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(schema) = &self.schema {
            write!(f, "{}.", schema)?;
        }
        write!(f, "{}", self.table)?;
        if let Some(alias) = &self.alias {
            write!(f, " as {}", alias)?;
        }
        Ok(())
    }
}
