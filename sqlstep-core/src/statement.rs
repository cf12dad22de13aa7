//! Statement accumulator
//!
//! An ordered, append-only list of rendered tokens. A statement renders at
//! most once; afterwards every append or render fails.

use std::fmt::{self, Display};

use tracing::{debug, trace};

use crate::field::Field;
use crate::keyword::Keyword;
use crate::{format, Error, Result};

const SEPARATOR: &str = " ";
const TERMINATOR: &str = ";";

/// Accumulated tokens of one statement
///
/// Two statements are never compared structurally; each one is a single-use
/// builder session.
#[derive(Debug)]
pub struct Statement {
    tokens: Vec<String>,
    closed: bool,
}

impl Statement {
    /// Start a statement with its opening keyword
    pub fn new(seed: impl Keyword) -> Self {
        Self {
            tokens: vec![seed.key_word().to_string()],
            closed: false,
        }
    }

    /// Append one token
    ///
    /// # Examples
    /// ```
    /// use sqlstep_core::{Keys, Statement};
    ///
    /// let mut statement = Statement::new(Keys::Select);
    /// statement.append("*")?.append_keyword(Keys::From)?.append("'t'")?;
    /// assert_eq!(statement.render(true)?, "SELECT * FROM 't';");
    /// assert!(statement.render(true).is_err());
    /// # Ok::<(), sqlstep_core::Error>(())
    /// ```
    pub fn append(&mut self, token: impl Into<String>) -> Result<&mut Self> {
        self.ensure_open()?;
        self.push(token);
        Ok(self)
    }

    /// Append the canonical text of a keyword
    pub fn append_keyword(&mut self, keyword: impl Keyword) -> Result<&mut Self> {
        self.append(keyword.key_word())
    }

    /// Append the token rendered by a field
    pub fn append_field(&mut self, field: &impl Field) -> Result<&mut Self> {
        self.append(field.token())
    }

    /// Append a token wrapped in parentheses
    pub fn append_enclosed(&mut self, token: impl AsRef<str>) -> Result<&mut Self> {
        self.append(format::enclose(token.as_ref()))
    }

    /// Join every token with a space, optionally terminated by `;`
    ///
    /// Succeeds once; the statement is closed afterwards.
    pub fn render(&mut self, terminator: bool) -> Result<String> {
        self.ensure_open()?;
        self.closed = true;

        let sql = self.text(terminator);
        trace!(tokens = self.tokens.len(), terminator, "statement rendered");
        Ok(sql)
    }

    /// Render with the `;` terminator
    pub fn build(&mut self) -> Result<String> {
        self.render(true)
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    fn text(&self, terminator: bool) -> String {
        let mut sql = self.tokens.join(SEPARATOR);
        if terminator {
            sql.push_str(TERMINATOR);
        }
        sql
    }

    fn ensure_open(&self) -> Result<()> {
        if self.closed {
            debug!(tokens = self.tokens.len(), "refused to touch a closed statement");
            return Err(Error::illegal_state("statement was already built"));
        }
        Ok(())
    }

    // Stages own their statement and never hold a closed one, so the
    // transitions below skip the closed check.

    pub(crate) fn push(&mut self, token: impl Into<String>) -> &mut Self {
        debug_assert!(!self.closed);
        self.tokens.push(token.into());
        self
    }

    pub(crate) fn push_keyword(&mut self, keyword: impl Keyword) -> &mut Self {
        self.push(keyword.key_word())
    }

    pub(crate) fn push_field(&mut self, field: &impl Field) -> &mut Self {
        self.push(field.token())
    }

    pub(crate) fn push_enclosed(&mut self, token: &str) -> &mut Self {
        self.push(format::enclose(token))
    }

    /// Non-terminal text of an embedded statement
    pub(crate) fn into_fragment(self) -> String {
        debug_assert!(!self.closed);
        self.tokens.join(SEPARATOR)
    }
}

/// Shows the text [`Statement::build`] returns, without closing the statement
impl Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text(true))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Multiple, Single};
    use crate::keyword::Keys;

    fn select_all() -> Statement {
        let mut statement = Statement::new(Keys::Select);
        statement
            .push_field(&Single::all())
            .push_keyword(Keys::From)
            .push_field(&Single::of("table_1"));
        statement
    }

    #[test]
    fn test_render_joins_with_spaces() {
        let mut statement = select_all();
        assert_eq!(statement.render(false).unwrap(), "SELECT * FROM 'table_1'");
    }

    #[test]
    fn test_terminator_toggling() {
        let with = select_all().render(true).unwrap();
        let without = select_all().render(false).unwrap();
        assert_eq!(with, format!("{};", without));
    }

    #[test]
    fn test_render_only_once() {
        let mut statement = select_all();
        statement.build().unwrap();
        assert!(statement.is_closed());

        let err = statement.build().unwrap_err();
        assert!(matches!(err, Error::IllegalState { .. }));
        assert!(matches!(statement.render(false), Err(Error::IllegalState { .. })));
    }

    #[test]
    fn test_append_after_close_fails() {
        let mut statement = select_all();
        statement.render(false).unwrap();

        assert!(matches!(statement.append("x"), Err(Error::IllegalState { .. })));
        assert!(matches!(
            statement.append_keyword(Keys::Limit),
            Err(Error::IllegalState { .. })
        ));
        assert_eq!(statement.tokens().len(), 4);
    }

    #[test]
    fn test_append_enclosed() {
        let mut statement = Statement::new(Keys::Insert);
        statement
            .append_keyword(Keys::Into)
            .unwrap()
            .append_field(&Single::of("table_1"))
            .unwrap()
            .append_keyword(Keys::Values)
            .unwrap()
            .append_enclosed(Multiple::of("a", ["b"]).token())
            .unwrap();

        assert_eq!(
            statement.build().unwrap(),
            "INSERT INTO 'table_1' VALUES ('a', 'b');"
        );
    }

    #[test]
    fn test_display_matches_build() {
        let mut statement = select_all();
        let shown = statement.to_string();
        assert!(!statement.is_closed());
        assert_eq!(shown, statement.build().unwrap());

        // Still readable once closed, while a second render fails
        assert_eq!(statement.to_string(), shown);
        assert!(statement.build().is_err());
    }

    #[test]
    fn test_tokens_keep_append_order() {
        let statement = select_all();
        assert_eq!(statement.tokens(), &["SELECT", "*", "FROM", "'table_1'"]);
    }

    #[test]
    fn test_fragment_has_no_terminator() {
        assert_eq!(select_all().into_fragment(), "SELECT * FROM 'table_1'");
    }
}
