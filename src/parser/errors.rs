use sqlparser::parser::ParserError;

#[derive(thiserror::Error, Debug)]
pub enum InsertError {
    #[error("unsupported value for insert object {0}")]
    UnsupportedValue(String),
}

#[derive(thiserror::Error, Debug)]
pub enum TableRefError {
    #[error("parse error: {0}")]
    ParserError(
        #[from]
        #[source]
        ParserError,
    ),
    #[error("invalid table name: {0}")]
    InvalidTableName(String),
    #[error("unsupported table reference: {0}")]
    UnsupportedTableFactor(String),
}
