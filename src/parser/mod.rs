mod errors;
mod insert_args;
mod insert_columns;
mod insert_values;
mod table_ref;

pub use errors::*;
pub use insert_args::*;
pub use insert_columns::*;
pub use insert_values::*;

static LOGGING_TARGET: &str = "sqlrs_builder::insert";
