// ABOUTME: Abstraction over where setting values are read from
// ABOUTME: Implemented for sqlx PostgreSQL connections

use async_trait::async_trait;
use sqlx::PgConnection;
use tracing::debug;

use crate::error::QueryError;

/// Something that can run a single-value query.
///
/// Only read-only statements (`SELECT <expr>;`, `SHOW <name>;`) are issued
/// through this trait.
#[async_trait]
pub trait SettingsSource: Send {
    /// Run `query` and return the first column of the first row, if any.
    /// A SQL `NULL` is returned as `None`.
    async fn fetch_scalar(&mut self, query: &str) -> Result<Option<String>, QueryError>;
}

#[async_trait]
impl SettingsSource for PgConnection {
    async fn fetch_scalar(&mut self, query: &str) -> Result<Option<String>, QueryError> {
        debug!(query, "Fetching setting over connection");
        let value: Option<Option<String>> = sqlx::query_scalar(query)
            .fetch_optional(&mut *self)
            .await?;
        Ok(value.flatten())
    }
}
