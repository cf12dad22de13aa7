//! DELETE stage

use super::{stage, Terminal, Where};
use crate::Statement;

/// `DELETE FROM <table>`, optionally followed by a `WHERE` clause
#[derive(Debug)]
pub struct Delete {
    statement: Statement,
}

impl Delete {
    pub(crate) fn new(statement: Statement) -> Self {
        Self { statement }
    }
}

stage!(Delete);

impl Terminal for Delete {}
impl Where for Delete {}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_delete_everything() {
        let sql = delete("table_1").build().unwrap();
        assert_eq!(sql, "DELETE FROM 'table_1';");
    }

    #[test]
    fn test_delete_with_condition() {
        let sql = delete("table_1")
            .where_(("field_1", Relation::Eq, "field_2"))
            .build()
            .unwrap();
        assert_eq!(sql, "DELETE FROM 'table_1' WHERE 'field_1' = 'field_2';");
    }

    #[test]
    fn test_delete_with_additive_conditions() {
        let sql = delete("table_1")
            .where_(("field_1", "=", "field_2"))
            .and(("field_1", ">", "field_2"))
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "DELETE FROM 'table_1' WHERE 'field_1' = 'field_2' AND 'field_1' > 'field_2';"
        );
    }

    #[test]
    fn test_delete_with_alternative_conditions() {
        let sql = delete("table_1")
            .where_(("field_1", Relation::Neq, "field_2"))
            .or(("field_1", Relation::Lte, "field_2"))
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "DELETE FROM 'table_1' WHERE 'field_1' != 'field_2' OR 'field_1' <= 'field_2';"
        );
    }

    #[test]
    fn test_delete_with_membership() {
        let sql = delete("table_1")
            .where_(("field_1", Multiple::of(1, [2, 3])))
            .and(("field_2", select("table_2", "field_2")))
            .build()
            .unwrap();
        assert_eq!(
            sql,
            "DELETE FROM 'table_1' WHERE 'field_1' IN ('1', '2', '3') AND 'field_2' IN (SELECT 'field_2' FROM 'table_2');"
        );
    }
}
