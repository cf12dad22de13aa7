//! Stage following a `WHERE` clause

use super::{stage, IntoCondition, Limit, Sort, Terminal};
use crate::keyword::Condition;
use crate::Statement;

/// A statement with a `WHERE` clause, accepting further conditions
#[derive(Debug)]
pub struct Filtered {
    statement: Statement,
}

impl Filtered {
    pub(crate) fn new(statement: Statement) -> Self {
        Self { statement }
    }

    /// Add a condition joined with `AND`
    pub fn and<C>(self, condition: C) -> Self
    where
        C: IntoCondition,
    {
        self.connect(Condition::And, condition)
    }

    /// Add a condition joined with `OR`
    pub fn or<C>(self, condition: C) -> Self
    where
        C: IntoCondition,
    {
        self.connect(Condition::Or, condition)
    }

    /// Add a condition joined with the given connector
    pub fn connect<C>(mut self, connector: Condition, condition: C) -> Self
    where
        C: IntoCondition,
    {
        self.statement.push_keyword(connector);
        condition.into_condition().write(&mut self.statement);
        self
    }
}

stage!(Filtered);

impl Terminal for Filtered {}
impl Sort for Filtered {}
impl Limit for Filtered {}
