//! Validation of rendered statements by external SQL engines
//!
//! Statement building never calls an engine itself. Rendered text can be
//! handed to an [`SqlValidator`] to check that an engine accepts its syntax.

use std::future::Future;

use futures::future::join_all;

use crate::{Error, Result};

/// An SQL engine able to check rendered statements
pub trait SqlValidator: Send + Sync {
    /// Name of the engine, used in errors and logs
    fn engine(&self) -> &str;

    /// Check that the engine accepts `sql`
    fn validate(&self, sql: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Run `sql` through every validator concurrently and collect the failures
pub async fn validate_all<V>(validators: &[V], sql: &str) -> Vec<Error>
where
    V: SqlValidator,
{
    let checks = validators
        .iter()
        .map(|validator| async move { validator.validate(sql).await.err() });

    join_all(checks).await.into_iter().flatten().collect()
}

#[cfg(feature = "sqlite")]
pub use self::sqlite::SqliteValidator;

#[cfg(feature = "sqlite")]
mod sqlite {
    use sqlx::sqlite::SqliteConnection;
    use sqlx::Connection;
    use tracing::{info, warn};

    use super::SqlValidator;
    use crate::{Error, Result};

    const MEMORY_URL: &str = "sqlite::memory:";

    /// Validates statements against an SQLite database
    ///
    /// The schema is created and the statement executed inside a
    /// transaction that is always rolled back.
    #[derive(Debug, Clone)]
    pub struct SqliteValidator {
        url: String,
        schema: Vec<String>,
    }

    impl SqliteValidator {
        /// Create a validator preparing `schema` before each check
        pub fn new<I, S>(schema: I) -> Self
        where
            I: IntoIterator<Item = S>,
            S: Into<String>,
        {
            Self {
                url: MEMORY_URL.to_string(),
                schema: schema.into_iter().map(Into::into).collect(),
            }
        }

        /// Connect to `url` instead of a private in-memory database
        pub fn with_url(mut self, url: impl Into<String>) -> Self {
            self.url = url.into();
            self
        }
    }

    impl SqlValidator for SqliteValidator {
        fn engine(&self) -> &str {
            "SQLite"
        }

        async fn validate(&self, sql: &str) -> Result<()> {
            let mut conn = SqliteConnection::connect(&self.url).await?;
            let mut tx = conn.begin().await?;

            for statement in &self.schema {
                sqlx::query(statement).execute(&mut *tx).await?;
            }
            let outcome = sqlx::query(sql).execute(&mut *tx).await;
            tx.rollback().await?;

            match outcome {
                Ok(_) => {
                    info!(engine = self.engine(), sql, "statement accepted");
                    Ok(())
                }
                Err(sqlx::Error::Database(err)) => {
                    warn!(engine = self.engine(), sql, error = %err, "statement rejected");
                    Err(Error::validation(self.engine(), err.message()))
                }
                Err(err) => Err(err.into()),
            }
        }
    }
}
