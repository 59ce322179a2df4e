pub mod operation_node;
pub mod parser;
pub mod raw_builder;
pub mod types;
pub mod util;

pub use self::operation_node::{InsertNode, OperationNode, OperationNodeSource, TableNode};
pub use self::parser::{parse_insert_args, InsertArgs, InsertError, TableRefError};
pub use self::raw_builder::{raw, RawBuilder};
pub use self::types::{InsertValue, Row, ScalarValue};
