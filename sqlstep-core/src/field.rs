//! Field containers producing formatted tokens
//!
//! A [`Single`] renders exactly one token and a [`Multiple`] renders one or
//! more comma separated tokens. An [`Aggregate`] applies an SQL function to
//! one field, an [`AggregateList`] to several. Rendering is lazy: tokens are
//! produced when a statement appends the field.

use std::fmt::{self, Display};

use chrono::{NaiveDate, NaiveDateTime};

use crate::keyword::{AggregateType, Order};
use crate::{format, Error, Result, Value};

/// Anything that can produce a token for a statement
pub trait Field {
    /// Render the token
    fn token(&self) -> String;
}

impl<F: Field + ?Sized> Field for &F {
    fn token(&self) -> String {
        (**self).token()
    }
}

/// Plain text is formatted as a quoted literal
impl Field for str {
    fn token(&self) -> String {
        format::quote(self)
    }
}

impl Field for String {
    fn token(&self) -> String {
        format::quote(self)
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Operand {
    Literal(Value),
    Bare(&'static str),
    Aggregate(Box<Aggregate>),
}

/// A field producing exactly one token
#[derive(Debug, Clone, PartialEq)]
pub struct Single {
    operand: Operand,
    distinct: bool,
}

impl Single {
    /// Create a quoted literal field
    ///
    /// # Examples
    /// ```
    /// use sqlstep_core::{Field, Single};
    ///
    /// assert_eq!(Single::of("field_1").token(), "'field_1'");
    /// assert_eq!(Single::of(1).token(), "'1'");
    /// ```
    pub fn of(value: impl Into<Value>) -> Self {
        Self {
            operand: Operand::Literal(value.into()),
            distinct: false,
        }
    }

    /// Create a quoted literal field prefixed with `DISTINCT`
    pub fn distinct(value: impl Into<Value>) -> Self {
        Self {
            operand: Operand::Literal(value.into()),
            distinct: true,
        }
    }

    /// Create a field from an optional value, failing on `None`
    pub fn required<T>(value: Option<T>, what: &str) -> Result<Self>
    where
        T: Into<Value>,
    {
        Value::required(value, what).map(Self::of)
    }

    /// The bare `*` wildcard
    pub fn all() -> Self {
        Self {
            operand: Operand::Bare("*"),
            distinct: false,
        }
    }

    /// The bare `?` placeholder
    pub fn variable() -> Self {
        Self {
            operand: Operand::Bare("?"),
            distinct: false,
        }
    }
}

impl Field for Single {
    fn token(&self) -> String {
        let base = match &self.operand {
            Operand::Literal(value) => value.to_literal(),
            Operand::Bare(token) => token.to_string(),
            Operand::Aggregate(aggregate) => aggregate.token(),
        };
        format::distinct(self.distinct, base)
    }
}

macro_rules! single_from {
    ($($(#[$meta:meta])* $ty:ty),+ $(,)?) => {
        $(
            $(#[$meta])*
            impl From<$ty> for Single {
                fn from(val: $ty) -> Self {
                    Single::of(val)
                }
            }
        )+
    };
}

single_from!(
    bool,
    i32,
    i64,
    u32,
    f64,
    String,
    &str,
    &String,
    NaiveDate,
    NaiveDateTime,
    Value,
    #[cfg(feature = "uuid-support")]
    uuid::Uuid,
    #[cfg(feature = "decimal-support")]
    rust_decimal::Decimal,
);

impl From<Aggregate> for Single {
    fn from(aggregate: Aggregate) -> Self {
        Self {
            operand: Operand::Aggregate(Box::new(aggregate)),
            distinct: false,
        }
    }
}

/// A field producing one or more comma separated tokens
#[derive(Debug, Clone, PartialEq)]
pub struct Multiple {
    values: Vec<Value>,
    distinct: bool,
}

impl Multiple {
    /// Create a list from a first value and any number of following ones
    ///
    /// # Examples
    /// ```
    /// use sqlstep_core::{Field, Multiple};
    ///
    /// assert_eq!(Multiple::of(1, [2, 3]).token(), "'1', '2', '3'");
    /// assert_eq!(Multiple::of("value_1", []).token(), "'value_1'");
    /// ```
    pub fn of<T, I>(first: T, rest: I) -> Self
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        Self::collect(false, first, rest)
    }

    /// Same as [`Multiple::of`], prefixed with `DISTINCT`
    pub fn distinct<T, I>(first: T, rest: I) -> Self
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        Self::collect(true, first, rest)
    }

    fn collect<T, I>(distinct: bool, first: T, rest: I) -> Self
    where
        T: Into<Value>,
        I: IntoIterator<Item = T>,
    {
        let mut values = vec![first.into()];
        values.extend(rest.into_iter().map(Into::into));
        Self { values, distinct }
    }

    /// Number of tokens in the list; never zero
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }
}

impl Field for Multiple {
    fn token(&self) -> String {
        let joined = format::join(self.values.iter().map(Value::to_literal));
        format::distinct(self.distinct, joined)
    }
}

/// An SQL function applied to a single field
///
/// Aggregates nest by function application, so wrapping an aggregate in
/// another keeps the call order in the rendered text. An aggregate renders
/// one token and converts into a [`Single`].
#[derive(Debug, Clone, PartialEq)]
pub struct Aggregate {
    kind: AggregateType,
    distinct: bool,
    argument: Single,
}

impl Aggregate {
    /// Apply `kind` to a single argument
    ///
    /// # Examples
    /// ```
    /// use sqlstep_core::{Aggregate, AggregateType, Field};
    ///
    /// let nested = Aggregate::of(AggregateType::Max, Aggregate::of(AggregateType::Count, "f"));
    /// assert_eq!(nested.token(), "MAX(COUNT('f'))");
    /// ```
    pub fn of(kind: AggregateType, argument: impl Into<Single>) -> Self {
        Self {
            kind,
            distinct: false,
            argument: argument.into(),
        }
    }

    /// Apply `kind` to several arguments
    ///
    /// The result is a comma separated list, so it can be selected or
    /// listed but never used where a single token is expected:
    ///
    /// ```compile_fail
    /// use sqlstep_core::prelude::*;
    ///
    /// let list = Aggregate::of_many(AggregateType::Distinct, "a", ["b"]).unwrap();
    /// let _ = update("t").set(list, "v");
    /// ```
    ///
    /// Fails when more than one argument is given to a function that only
    /// takes one.
    pub fn of_many<F, I>(kind: AggregateType, first: F, rest: I) -> Result<AggregateList>
    where
        F: Into<Single>,
        I: IntoIterator<Item = F>,
    {
        let mut arguments = vec![first.into()];
        arguments.extend(rest.into_iter().map(Into::into));

        if arguments.len() > 1 && !kind.supports_multiple() {
            return Err(Error::invalid_argument(format!(
                "{} takes a single argument, got {}",
                kind,
                arguments.len()
            )));
        }

        Ok(AggregateList {
            kind,
            distinct: false,
            arguments,
        })
    }

    /// Prefix the argument with `DISTINCT`
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn kind(&self) -> AggregateType {
        self.kind
    }
}

impl Field for Aggregate {
    fn token(&self) -> String {
        format::call(
            self.kind.as_str(),
            &format::distinct(self.distinct, self.argument.token()),
        )
    }
}

/// An SQL function applied to a comma separated list of fields
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateList {
    kind: AggregateType,
    distinct: bool,
    arguments: Vec<Single>,
}

impl AggregateList {
    /// Prefix the argument list with `DISTINCT`
    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    pub fn kind(&self) -> AggregateType {
        self.kind
    }

    /// Number of arguments; never zero
    pub fn len(&self) -> usize {
        self.arguments.len()
    }
}

impl Field for AggregateList {
    fn token(&self) -> String {
        let arguments = format::join(self.arguments.iter().map(Single::token));
        format::call(
            self.kind.as_str(),
            &format::distinct(self.distinct, arguments),
        )
    }
}

/// A field followed by its sort direction
#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    field: Single,
    order: Order,
}

impl SortKey {
    pub fn new(field: impl Into<Single>, order: Order) -> Self {
        Self {
            field: field.into(),
            order,
        }
    }

    /// Sort ascending, the default direction
    pub fn of(field: impl Into<Single>) -> Self {
        Self::new(field, Order::default())
    }

    pub fn asc(field: impl Into<Single>) -> Self {
        Self::new(field, Order::Asc)
    }

    pub fn desc(field: impl Into<Single>) -> Self {
        Self::new(field, Order::Desc)
    }
}

impl Field for SortKey {
    fn token(&self) -> String {
        format!("{} {}", self.field.token(), self.order)
    }
}

impl From<&str> for SortKey {
    fn from(field: &str) -> Self {
        SortKey::of(field)
    }
}

impl From<Single> for SortKey {
    fn from(field: Single) -> Self {
        SortKey::of(field)
    }
}

impl From<Aggregate> for SortKey {
    fn from(aggregate: Aggregate) -> Self {
        SortKey::of(aggregate)
    }
}

macro_rules! display_token {
    ($($ty:ty),+) => {
        $(
            impl Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.token())
                }
            }
        )+
    };
}

display_token!(Single, Multiple, Aggregate, AggregateList, SortKey);
