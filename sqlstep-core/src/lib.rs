//! sqlstep core - a staged SQL statement builder
//!
//! Statements are assembled token by token through a fluent API. Each call
//! returns a stage type exposing only the clauses that may legally follow,
//! so out of order statements are rejected at compile time.
//!
//! ```
//! use sqlstep_core::prelude::*;
//!
//! let sql = select("table_1", "field_1").build()?;
//! assert_eq!(sql, "SELECT 'field_1' FROM 'table_1';");
//!
//! let sql = update("table_1")
//!     .set("field_1", 10)
//!     .where_(("field_2", Relation::Lt, 5))
//!     .build()?;
//! assert_eq!(sql, "UPDATE 'table_1' SET 'field_1' = '10' WHERE 'field_2' < '5';");
//! # Ok::<(), sqlstep_core::Error>(())
//! ```

pub mod error;
pub mod field;
pub mod format;
pub mod keyword;
pub mod statement;
pub mod steps;
pub mod validate;
pub mod value;

// Re-export main types
pub use error::{Error, Result};
pub use field::{Aggregate, AggregateList, Field, Multiple, Single, SortKey};
pub use keyword::{AggregateType, Condition, IntoRelation, Keys, Keyword, Order, Relation, SortType};
pub use statement::Statement;
pub use steps::{
    Assigned, Complete, Delete, Filtered, Insert, IntoCondition, IntoList, Limit, Predicate,
    Select, Sort, Sorted, Terminal, Update, Where,
};
pub use validate::{validate_all, SqlValidator};
#[cfg(feature = "sqlite")]
pub use validate::SqliteValidator;
pub use value::Value;

/// Everything needed to build statements, including the stage traits
pub mod prelude {
    pub use crate::{
        delete, insert, select, update, Aggregate, AggregateList, AggregateType, Condition,
        Error, Field, Keys, Limit, Multiple, Order, Relation, Result, Single, Sort, SortKey,
        SortType, Terminal, Value, Where,
    };
}

/// Create an `INSERT INTO <table> VALUES` statement
pub fn insert(table: impl Into<Single>) -> Insert {
    let table: Single = table.into();
    let mut statement = Statement::new(Keys::Insert);
    statement
        .push_keyword(Keys::Into)
        .push_field(&table)
        .push_keyword(Keys::Values);
    Insert::new(statement)
}

/// Create a `SELECT <fields> FROM <table>` statement
pub fn select(table: impl Into<Single>, fields: impl Field) -> Select {
    let table: Single = table.into();
    let mut statement = Statement::new(Keys::Select);
    statement
        .push_field(&fields)
        .push_keyword(Keys::From)
        .push_field(&table);
    Select::new(statement)
}

/// Create an `UPDATE <table>` statement
pub fn update(table: impl Into<Single>) -> Update {
    let table: Single = table.into();
    let mut statement = Statement::new(Keys::Update);
    statement.push_field(&table);
    Update::new(statement)
}

/// Create a `DELETE FROM <table>` statement
pub fn delete(table: impl Into<Single>) -> Delete {
    let table: Single = table.into();
    let mut statement = Statement::new(Keys::Delete);
    statement
        .push_keyword(Keys::From)
        .push_field(&table);
    Delete::new(statement)
}
