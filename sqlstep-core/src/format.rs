//! Token formatting
//!
//! Pure string transformations turning canonical values into SQL tokens.
//! Literals are wrapped in single quotes after any double quotes have been
//! stripped from the raw text, and embedded single quotes are doubled.

use std::borrow::Borrow;

use chrono::{NaiveDate, NaiveDateTime};

/// Quote character wrapping every literal
pub const QUOTE: char = '\'';

/// Separator between the items of a field list
pub const LIST_SEPARATOR: &str = ", ";

const DISTINCT_PREFIX: &str = "DISTINCT ";
const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Quote raw text as an SQL literal
///
/// # Examples
/// ```
/// use sqlstep_core::format::quote;
///
/// assert_eq!(quote("field_1"), "'field_1'");
/// assert_eq!(quote("\"1\""), "'1'");
/// assert_eq!(quote("it's"), "'it''s'");
/// ```
pub fn quote(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 2);
    out.push(QUOTE);
    for c in raw.chars().filter(|c| *c != '"') {
        if c == QUOTE {
            out.push(QUOTE);
        }
        out.push(c);
    }
    out.push(QUOTE);
    out
}

/// Prefix `token` with `DISTINCT` when requested
pub fn distinct(is_distinct: bool, token: String) -> String {
    if is_distinct {
        format!("{}{}", DISTINCT_PREFIX, token)
    } else {
        token
    }
}

/// Wrap `token` in parentheses
pub fn enclose(token: &str) -> String {
    format!("({})", token)
}

/// Apply a function name to an already formatted argument list
pub fn call(function: &str, arguments: &str) -> String {
    format!("{}({})", function, arguments)
}

/// Join already formatted tokens into a comma separated list
pub fn join<I, S>(tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: Borrow<str>,
{
    tokens.into_iter().collect::<Vec<_>>().join(LIST_SEPARATOR)
}

/// Canonical text of a date
pub fn date(value: &NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

/// Canonical text of a date-time, on a 24-hour clock
pub fn date_time(value: &NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}
