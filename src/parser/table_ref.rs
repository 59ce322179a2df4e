use sqlparser::ast::{ObjectName, TableFactor};
use sqlparser::dialect::PostgreSqlDialect;
use sqlparser::parser::{Parser, ParserError};
use sqlparser::tokenizer::{Token, Tokenizer};

use super::TableRefError;
use crate::operation_node::TableNode;

impl TableNode {
    /// Parses a table reference such as `person`, `public.person` or `public.person as p`.
    pub fn parse(table_ref: &str) -> Result<TableNode, TableRefError> {
        let dialect = PostgreSqlDialect {};
        let tokens = Tokenizer::new(&dialect, table_ref)
            .tokenize()
            .map_err(|e| ParserError::TokenizerError(e.to_string()))?;
        let mut parser = Parser::new(tokens, &dialect);
        let table_factor = parser.parse_table_factor()?;
        parser.expect_token(&Token::EOF)?;

        match table_factor {
            TableFactor::Table { name, alias, .. } => {
                let (schema, table) = object_name_to_schema_table(&name)?;
                Ok(TableNode::new(
                    schema,
                    table,
                    alias.map(|alias| alias.name.value),
                ))
            }
            other => Err(TableRefError::UnsupportedTableFactor(other.to_string())),
        }
    }
}

/// Resolve object_name, possibly multi-part, i.e. schema.table
fn object_name_to_schema_table(
    object_name: &ObjectName,
) -> Result<(Option<String>, String), TableRefError> {
    match object_name.0.as_slice() {
        [table] => Ok((None, table.value.clone())),
        [schema, table] => Ok((Some(schema.value.clone()), table.value.clone())),
        _ => Err(TableRefError::InvalidTableName(object_name.to_string())),
    }
}

#[cfg(test)]
mod table_ref_test {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("person", None, "person", None)]
    #[test_case("public.person", Some("public"), "person", None)]
    #[test_case("public.person as p", Some("public"), "person", Some("p"))]
    #[test_case("person p", None, "person", Some("p"))]
    #[test_case("\"Person Table\"", None, "Person Table", None)]
    fn test_parse_table_ref(
        table_ref: &str,
        schema: Option<&str>,
        table: &str,
        alias: Option<&str>,
    ) {
        let node = TableNode::parse(table_ref).unwrap();
        assert_eq!(
            node,
            TableNode::new(
                schema.map(String::from),
                table.to_string(),
                alias.map(String::from)
            )
        );
    }

    #[test]
    fn test_too_many_name_parts() {
        let result = TableNode::parse("db.public.person");
        assert!(matches!(result, Err(TableRefError::InvalidTableName(name)) if name == "db.public.person"));
    }

    #[test]
    fn test_trailing_tokens() {
        let result = TableNode::parse("person as p where");
        assert!(matches!(result, Err(TableRefError::ParserError(_))));
    }

    #[test]
    fn test_unterminated_quoted_name() {
        let result = TableNode::parse("\"person");
        assert!(matches!(
            result,
            Err(TableRefError::ParserError(ParserError::TokenizerError(_)))
        ));
    }

    #[test]
    fn test_sub_query_is_not_a_table() {
        let result = TableNode::parse("(select 1) as t");
        assert!(matches!(
            result,
            Err(TableRefError::UnsupportedTableFactor(_))
        ));
    }
}
