//! INSERT stage

use super::{stage, Complete, IntoList};
use crate::Statement;

/// `INSERT INTO <table> VALUES`, waiting for its values
#[derive(Debug)]
pub struct Insert {
    statement: Statement,
}

impl Insert {
    pub(crate) fn new(statement: Statement) -> Self {
        Self { statement }
    }

    /// Append the enclosed values, transitioning to [`Complete`]
    ///
    /// Accepts field lists as well as a [`Select`](super::Select), which is
    /// embedded without its terminator.
    ///
    /// # Examples
    /// ```
    /// use sqlstep_core::prelude::*;
    ///
    /// let sql = insert("table_1").values(Multiple::of("value_1", ["value_2"])).build()?;
    /// assert_eq!(sql, "INSERT INTO 'table_1' VALUES ('value_1', 'value_2');");
    ///
    /// let sql = insert("table_1").values(select("table_2", "field_2")).build()?;
    /// assert_eq!(sql, "INSERT INTO 'table_1' VALUES (SELECT 'field_2' FROM 'table_2');");
    /// # Ok::<(), sqlstep_core::Error>(())
    /// ```
    pub fn values<V>(mut self, values: V) -> Complete
    where
        V: IntoList,
    {
        self.statement.push_enclosed(&values.into_list());
        Complete::new(self.statement)
    }
}

stage!(Insert);
