//! UPDATE stages

use super::{stage, Terminal, Where};
use crate::field::Single;
use crate::keyword::{Keys, Relation};
use crate::Statement;

const ASSIGNMENT_SEPARATOR: &str = ",";

/// `UPDATE <table>`, waiting for its first assignment
#[derive(Debug)]
pub struct Update {
    statement: Statement,
}

/// An `UPDATE` with at least one assignment
#[derive(Debug)]
pub struct Assigned {
    statement: Statement,
}

impl Update {
    pub(crate) fn new(statement: Statement) -> Self {
        Self { statement }
    }

    /// Add the `SET` clause, transitioning to [`Assigned`]
    ///
    /// # Examples
    /// ```
    /// use sqlstep_core::prelude::*;
    ///
    /// let sql = update("table_1")
    ///     .set("field_1", "value_1")
    ///     .and("field_2", "value_2")
    ///     .build()?;
    /// assert_eq!(sql, "UPDATE 'table_1' SET 'field_1' = 'value_1' , 'field_2' = 'value_2';");
    /// # Ok::<(), sqlstep_core::Error>(())
    /// ```
    pub fn set(mut self, field: impl Into<Single>, value: impl Into<Single>) -> Assigned {
        self.statement.push_keyword(Keys::Set);
        assign(&mut self.statement, field.into(), value.into());
        Assigned {
            statement: self.statement,
        }
    }
}

impl Assigned {
    /// Add another assignment
    pub fn and(mut self, field: impl Into<Single>, value: impl Into<Single>) -> Self {
        self.statement.push(ASSIGNMENT_SEPARATOR);
        assign(&mut self.statement, field.into(), value.into());
        self
    }
}

fn assign(statement: &mut Statement, field: Single, value: Single) {
    statement
        .push_field(&field)
        .push_keyword(Relation::Eq)
        .push_field(&value);
}

stage!(Update, Assigned);

impl Terminal for Assigned {}
impl Where for Assigned {}
