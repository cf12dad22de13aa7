//! Value types accepted as SQL literals

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::{format, Error, Result};

/// A semantic value that renders as one quoted SQL literal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Boolean value
    Bool(bool),
    /// 32-bit integer
    I32(i32),
    /// 64-bit integer
    I64(i64),
    /// 64-bit float
    F64(f64),
    /// Text value
    Text(String),
    /// Calendar date
    Date(NaiveDate),
    /// Date and time of day, without time zone
    DateTime(NaiveDateTime),
    /// UUID value
    #[cfg(feature = "uuid-support")]
    Uuid(uuid::Uuid),
    /// Arbitrary precision decimal
    #[cfg(feature = "decimal-support")]
    Decimal(rust_decimal::Decimal),
}

impl Value {
    /// Require a present value, failing fast on `None`
    ///
    /// # Examples
    /// ```
    /// use sqlstep_core::Value;
    ///
    /// assert!(Value::required(Some(3), "age").is_ok());
    /// assert!(Value::required(None::<i32>, "age").is_err());
    /// ```
    pub fn required<T>(value: Option<T>, what: &str) -> Result<Value>
    where
        T: Into<Value>,
    {
        value
            .map(Into::into)
            .ok_or_else(|| Error::missing_value(format!("{} is required", what)))
    }

    /// Canonical text of the value, before quoting
    pub fn canonical(&self) -> String {
        match self {
            Value::Bool(b) => b.to_string(),
            Value::I32(n) => n.to_string(),
            Value::I64(n) => n.to_string(),
            Value::F64(n) => n.to_string(),
            Value::Text(s) => s.clone(),
            Value::Date(d) => format::date(d),
            Value::DateTime(dt) => format::date_time(dt),
            #[cfg(feature = "uuid-support")]
            Value::Uuid(u) => u.hyphenated().to_string(),
            #[cfg(feature = "decimal-support")]
            Value::Decimal(d) => d.to_string(),
        }
    }

    /// Quoted literal token for this value
    pub fn to_literal(&self) -> String {
        format::quote(&self.canonical())
    }
}

impl From<bool> for Value {
    fn from(val: bool) -> Self {
        Value::Bool(val)
    }
}

impl From<i32> for Value {
    fn from(val: i32) -> Self {
        Value::I32(val)
    }
}

impl From<i64> for Value {
    fn from(val: i64) -> Self {
        Value::I64(val)
    }
}

impl From<u32> for Value {
    fn from(val: u32) -> Self {
        Value::I64(i64::from(val))
    }
}

impl From<f64> for Value {
    fn from(val: f64) -> Self {
        Value::F64(val)
    }
}

impl From<String> for Value {
    fn from(val: String) -> Self {
        Value::Text(val)
    }
}

impl From<&str> for Value {
    fn from(val: &str) -> Self {
        Value::Text(val.to_string())
    }
}

impl From<&String> for Value {
    fn from(val: &String) -> Self {
        Value::Text(val.clone())
    }
}

impl From<NaiveDate> for Value {
    fn from(val: NaiveDate) -> Self {
        Value::Date(val)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(val: NaiveDateTime) -> Self {
        Value::DateTime(val)
    }
}

#[cfg(feature = "uuid-support")]
impl From<uuid::Uuid> for Value {
    fn from(val: uuid::Uuid) -> Self {
        Value::Uuid(val)
    }
}

#[cfg(feature = "decimal-support")]
impl From<rust_decimal::Decimal> for Value {
    fn from(val: rust_decimal::Decimal) -> Self {
        Value::Decimal(val)
    }
}
