use log::debug;

use super::{parse_insert_columns, parse_row_values, InsertError, LOGGING_TARGET};
use crate::operation_node::{InsertNode, TableNode};
use crate::types::Row;
use crate::util::tree_render::TreeRender;

/// The rows handed to an insert: a single row or many.
#[derive(Debug, Clone)]
pub enum InsertArgs {
    Row(Row),
    Rows(Vec<Row>),
}

impl InsertArgs {
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            InsertArgs::Row(row) => vec![row],
            InsertArgs::Rows(rows) => rows,
        }
    }
}

impl From<Row> for InsertArgs {
    fn from(row: Row) -> Self {
        InsertArgs::Row(row)
    }
}

impl From<Vec<Row>> for InsertArgs {
    fn from(rows: Vec<Row>) -> Self {
        InsertArgs::Rows(rows)
    }
}

/// Normalizes insert rows into an [`InsertNode`] targeting `into`.
///
/// The column list is the union of the columns of all rows, in first seen order, and every row
/// gets a value list aligned to it. Fails on the first value that is neither a constant nor an
/// operation node source, no node is produced in that case.
pub fn parse_insert_args(
    into: TableNode,
    args: impl Into<InsertArgs>,
) -> Result<InsertNode, InsertError> {
    let rows = args.into().into_rows();
    let columns = parse_insert_columns(&rows);
    debug!(
        target: LOGGING_TARGET,
        "Insert into {}: {} rows, columns: {:?}",
        into,
        rows.len(),
        columns
    );

    let values = rows
        .iter()
        .map(|row| parse_row_values(row, &columns))
        .collect::<Result<Vec<_>, _>>()?;

    let node = InsertNode::create(into, columns, values);
    debug!(
        target: LOGGING_TARGET,
        "Insert node:\n{}",
        TreeRender::insert_node_tree(&node)
    );
    Ok(node)
}
