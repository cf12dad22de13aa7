//! SELECT stage

use super::{stage, Limit, Sort, Terminal, Where};
use crate::Statement;

/// `SELECT <fields> FROM <table>`
///
/// Accepts a `WHERE` clause, sorting segments and a `LIMIT`, or can be
/// rendered as is. A `Select` is also usable as a sub-select in `VALUES`
/// and `IN` lists.
#[derive(Debug)]
pub struct Select {
    statement: Statement,
}

impl Select {
    pub(crate) fn new(statement: Statement) -> Self {
        Self { statement }
    }
}

stage!(Select);

impl Terminal for Select {}
impl Where for Select {}
impl Sort for Select {}
impl Limit for Select {}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_simple_select() {
        let sql = select("table_1", "field_1").build().unwrap();
        assert_eq!(sql, "SELECT 'field_1' FROM 'table_1';");
    }

    #[test]
    fn test_select_without_terminator() {
        let sql = select("table_1", "field_1").build_with(false).unwrap();
        assert_eq!(sql, "SELECT 'field_1' FROM 'table_1'");
    }

    #[test]
    fn test_terminator_toggling() {
        let with = select("table_1", "field_1").build_with(true).unwrap();
        let without = select("table_1", "field_1").build_with(false).unwrap();
        assert_eq!(with, without + ";");
    }

    #[test]
    fn test_display_matches_build() {
        let query = select("table_1", Single::all()).where_(("field_1", Relation::Eq, 1));
        let shown = query.to_string();
        assert_eq!(shown, "SELECT * FROM 'table_1' WHERE 'field_1' = '1';");
        assert_eq!(shown, query.build().unwrap());

        let query = select("table_1", "field_1").limit(5).unwrap();
        assert_eq!(format!("{}", query), query.build().unwrap());
    }

    #[test]
    fn test_select_all_fields() {
        let sql = select("table_1", Single::all()).build().unwrap();
        assert_eq!(sql, "SELECT * FROM 'table_1';");
    }

    #[test]
    fn test_select_many_fields_and_aggregates() {
        let sql = select("table_1", Multiple::of("field_1", ["field_2"]))
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT 'field_1', 'field_2' FROM 'table_1';");

        let sql = select("table_1", Aggregate::of(AggregateType::Count, Single::all()))
            .build()
            .unwrap();
        assert_eq!(sql, "SELECT COUNT(*) FROM 'table_1';");

        let distinct = Aggregate::of_many(AggregateType::Distinct, "field_1", ["field_2"]).unwrap();
        let sql = select("table_1", distinct).build().unwrap();
        assert_eq!(sql, "SELECT DISTINCT('field_1', 'field_2') FROM 'table_1';");

        let sql = select("table_1", Single::distinct("field_1")).build().unwrap();
        assert_eq!(sql, "SELECT DISTINCT 'field_1' FROM 'table_1';");
    }

    #[test]
    fn test_select_with_where() {
        let sql = select("table_1", Single::all())
            .where_(("field_1", Relation::Eq, "value_1"))
            .or(("field_2", Relation::Like, "value%"))
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT * FROM 'table_1' WHERE 'field_1' = 'value_1' OR 'field_2' LIKE 'value%';"
        );
    }

    #[test]
    fn test_select_where_in_sub_select() {
        let sql = select("table_1", "field_1")
            .where_(("field_1", select("table_2", "field_2")))
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "SELECT 'field_1' FROM 'table_1' WHERE 'field_1' IN (SELECT 'field_2' FROM 'table_2');"
        );
    }
}
