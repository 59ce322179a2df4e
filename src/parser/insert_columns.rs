use itertools::Itertools;

use crate::types::Row;

/// Computes the ordered union of the columns of all `rows`. A column is placed where it is first
/// seen, scanning rows in input order and each row's columns in insertion order.
pub fn parse_insert_columns(rows: &[Row]) -> Vec<String> {
    rows.iter()
        .flat_map(|row| row.keys())
        .unique()
        .cloned()
        .collect()
}

#[cfg(test)]
mod insert_columns_test {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::row;

    #[test]
    fn test_single_row_columns() {
        let rows = vec![row! { "a" => 1, "b" => "x" }];
        assert_eq!(parse_insert_columns(&rows), vec!["a", "b"]);
    }

    #[test]
    fn test_union_of_disjoint_rows() {
        let rows = vec![row! { "a" => 1 }, row! { "b" => 2 }];
        assert_eq!(parse_insert_columns(&rows), vec!["a", "b"]);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let rows = vec![
            row! { "id" => 1, "name" => "Bill" },
            row! { "age" => 30, "id" => 2 },
            row! { "name" => "John", "email" => "j@x.io", "age" => 40 },
        ];
        assert_eq!(
            parse_insert_columns(&rows),
            vec!["id", "name", "age", "email"]
        );
    }

    #[test]
    fn test_columns_are_not_sorted() {
        let rows = vec![row! { "z" => 1, "b" => 2 }, row! { "a" => 3 }];
        assert_eq!(parse_insert_columns(&rows), vec!["z", "b", "a"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_insert_columns(&[]).is_empty());
        assert!(parse_insert_columns(&[row! {}]).is_empty());
    }
}
