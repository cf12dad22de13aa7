//! Staged statement building
//!
//! Each stage owns the statement being built and exposes only the calls
//! that are legal at its point in the grammar. Every call consumes the stage
//! and returns the next one, so out of order clauses do not compile:
//!
//! ```compile_fail
//! use sqlstep_core::prelude::*;
//!
//! // SET cannot follow SET
//! let _ = update("table_1").set("field_1", 1).set("field_2", 2);
//! ```
//!
//! ```compile_fail
//! use sqlstep_core::prelude::*;
//!
//! // DELETE has no LIMIT before a WHERE clause
//! let _ = delete("table_1").limit(10);
//! ```
//!
//! A built statement is gone:
//!
//! ```compile_fail
//! use sqlstep_core::prelude::*;
//!
//! let query = select("table_1", "field_1");
//! let _ = query.build();
//! let _ = query.build();
//! ```

pub mod complete;
pub mod delete;
pub mod filter;
pub mod insert;
pub mod select;
pub mod sort;
pub mod update;

pub use complete::Complete;
pub use delete::Delete;
pub use filter::Filtered;
pub use insert::Insert;
pub use select::Select;
pub use sort::Sorted;
pub use update::{Assigned, Update};

use crate::field::{Aggregate, AggregateList, Field, Multiple, Single, SortKey};
use crate::keyword::{IntoRelation, Keys, Relation, SortType};
use crate::{format, Error, Result, Statement};

pub(crate) mod sealed {
    use crate::Statement;

    /// Access to the statement owned by a stage
    pub trait Stage: Sized {
        fn into_statement(self) -> Statement;
    }
}

macro_rules! stage {
    ($($name:ident),+ $(,)?) => {
        $(
            impl $crate::steps::sealed::Stage for $name {
                fn into_statement(self) -> $crate::Statement {
                    self.statement
                }
            }

            impl ::std::fmt::Display for $name {
                fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                    ::std::fmt::Display::fmt(&self.statement, f)
                }
            }
        )+
    };
}
pub(crate) use stage;

/// Stages that can be rendered
pub trait Terminal: sealed::Stage {
    /// Render the statement terminated by `;`
    fn build(self) -> Result<String> {
        self.build_with(true)
    }

    /// Render the statement, with or without the `;` terminator
    fn build_with(self, terminator: bool) -> Result<String> {
        self.into_statement().render(terminator)
    }
}

/// Stages accepting a first `WHERE` condition
pub trait Where: Terminal {
    /// Add the `WHERE` clause
    ///
    /// # Examples
    /// ```
    /// use sqlstep_core::prelude::*;
    ///
    /// let sql = delete("table_1")
    ///     .where_(("field_1", "=", "field_2"))
    ///     .and(("field_1", Relation::Gt, "field_2"))
    ///     .build()?;
    /// assert_eq!(
    ///     sql,
    ///     "DELETE FROM 'table_1' WHERE 'field_1' = 'field_2' AND 'field_1' > 'field_2';"
    /// );
    /// # Ok::<(), sqlstep_core::Error>(())
    /// ```
    fn where_<C>(self, condition: C) -> Filtered
    where
        C: IntoCondition,
    {
        let mut statement = self.into_statement();
        statement.push_keyword(Keys::Where);
        condition.into_condition().write(&mut statement);
        Filtered::new(statement)
    }
}

/// Stages accepting `GROUP BY` / `ORDER BY` segments
pub trait Sort: Terminal {
    /// Append a sorting segment; segments may be chained
    ///
    /// # Examples
    /// ```
    /// use sqlstep_core::prelude::*;
    ///
    /// let sql = select("table_1", "field_1")
    ///     .sort(SortType::GroupBy, "field_1", [])
    ///     .sort(SortType::OrderBy, SortKey::desc("field_1"), [SortKey::of("field_2")])
    ///     .build()?;
    /// assert_eq!(
    ///     sql,
    ///     "SELECT 'field_1' FROM 'table_1' GROUP BY 'field_1' ASC ORDER BY 'field_1' DESC, 'field_2' ASC;"
    /// );
    /// # Ok::<(), sqlstep_core::Error>(())
    /// ```
    fn sort<K, I>(self, sort_type: SortType, first: K, rest: I) -> Sorted
    where
        K: Into<SortKey>,
        I: IntoIterator<Item = K>,
    {
        let keys = std::iter::once(first)
            .chain(rest)
            .map(|key| Into::<SortKey>::into(key).token())
            .collect::<Vec<_>>();

        let mut statement = self.into_statement();
        statement.push_keyword(sort_type).push(format::join(keys));
        Sorted::new(statement)
    }
}

/// Stages accepting a `LIMIT` clause
pub trait Limit: Terminal {
    /// Limit to `offset` rows, skipping none
    fn limit(self, offset: i64) -> Result<Complete> {
        self.limit_range(0, offset)
    }

    /// Skip `skip` rows, up to `offset`
    ///
    /// Fails when `skip` is negative or greater than `offset`.
    fn limit_range(self, skip: i64, offset: i64) -> Result<Complete> {
        if skip < 0 || skip > offset {
            return Err(Error::invalid_argument(format!(
                "LIMIT bounds must satisfy 0 <= skip <= offset, got skip {} and offset {}",
                skip, offset
            )));
        }

        let mut statement = self.into_statement();
        statement
            .push_keyword(Keys::Limit)
            .push(skip.to_string())
            .push(",")
            .push(offset.to_string());
        Ok(Complete::new(statement))
    }
}

/// Types that render as a parenthesized list: field lists and sub-selects
pub trait IntoList {
    /// The list text, without the enclosing parentheses
    fn into_list(self) -> String;
}

macro_rules! field_list {
    ($($ty:ty),+) => {
        $(
            impl IntoList for $ty {
                fn into_list(self) -> String {
                    self.token()
                }
            }
        )+
    };
}

field_list!(Single, Multiple, Aggregate, AggregateList, &str, String);

impl IntoList for Select {
    fn into_list(self) -> String {
        sealed::Stage::into_statement(self).into_fragment()
    }
}

#[derive(Debug)]
enum Shape {
    Compare {
        left: Single,
        relation: Relation,
        right: Single,
    },
    Member {
        field: Single,
        list: String,
    },
}

/// A condition ready to be written after `WHERE`, `AND` or `OR`
#[derive(Debug)]
pub struct Predicate(Shape);

impl Predicate {
    /// `left relation right`
    pub fn compare(
        left: impl Into<Single>,
        relation: impl IntoRelation,
        right: impl Into<Single>,
    ) -> Self {
        Predicate(Shape::Compare {
            left: left.into(),
            relation: relation.into_relation(),
            right: right.into(),
        })
    }

    /// `field IN (list)`
    pub fn member(field: impl Into<Single>, list: impl IntoList) -> Self {
        Predicate(Shape::Member {
            field: field.into(),
            list: list.into_list(),
        })
    }

    pub(crate) fn write(self, statement: &mut Statement) {
        match self.0 {
            Shape::Compare {
                left,
                relation,
                right,
            } => {
                statement
                    .push_field(&left)
                    .push_keyword(relation)
                    .push_field(&right);
            }
            Shape::Member { field, list } => {
                statement
                    .push_field(&field)
                    .push_keyword(Keys::In)
                    .push_enclosed(&list);
            }
        }
    }
}

/// Trait for conditions that can be used in WHERE clauses
pub trait IntoCondition {
    fn into_condition(self) -> Predicate;
}

impl IntoCondition for Predicate {
    fn into_condition(self) -> Predicate {
        self
    }
}

// Field to field relation: where_(("field_1", Relation::Eq, "field_2")) or where_(("field_1", "=", "field_2"))
impl<L, R, B> IntoCondition for (L, R, B)
where
    L: Into<Single>,
    R: IntoRelation,
    B: Into<Single>,
{
    fn into_condition(self) -> Predicate {
        Predicate::compare(self.0, self.1, self.2)
    }
}

// Membership: where_(("field_1", Multiple::of(1, [2]))) or where_(("field_1", select(..)))
impl<L, M> IntoCondition for (L, M)
where
    L: Into<Single>,
    M: IntoList,
{
    fn into_condition(self) -> Predicate {
        Predicate::member(self.0, self.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::Keys;

    fn render(condition: impl IntoCondition) -> String {
        let mut statement = Statement::new(Keys::Where);
        condition.into_condition().write(&mut statement);
        statement.render(false).unwrap()
    }

    #[test]
    fn test_relation_condition() {
        assert_eq!(
            render(("field_1", Relation::Lte, "value_1")),
            "WHERE 'field_1' <= 'value_1'"
        );
        assert_eq!(render(("age", ">", 18)), "WHERE 'age' > '18'");
    }

    #[test]
    fn test_membership_conditions() {
        assert_eq!(
            render(("field_1", Multiple::of("a", ["b"]))),
            "WHERE 'field_1' IN ('a', 'b')"
        );
        assert_eq!(
            render(("field_1", Single::of("value_1"))),
            "WHERE 'field_1' IN ('value_1')"
        );
        assert_eq!(render(("field_1", "value_1")), "WHERE 'field_1' IN ('value_1')");
    }

    #[test]
    fn test_sub_select_condition() {
        let sub = crate::select("table_2", "field_2");
        assert_eq!(
            render(("field_1", sub)),
            "WHERE 'field_1' IN (SELECT 'field_2' FROM 'table_2')"
        );
    }

    #[test]
    fn test_explicit_predicate() {
        assert_eq!(
            render(Predicate::compare("a", Relation::Like, "b%")),
            "WHERE 'a' LIKE 'b%'"
        );
    }
}
