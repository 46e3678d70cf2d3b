use async_trait::async_trait;

use crate::{EngineError, RowSet};

/// One live database. Dropping it discards all schema and data.
#[async_trait(?Send)]
pub trait SqlBackend: Send + Sync {
    /// Runs a single statement and captures its columns and rows.
    async fn query(&self, sql: &str) -> Result<RowSet, EngineError>;

    /// Runs SQL without capturing any output.
    async fn execute_batch(&self, sql: &str) -> Result<(), EngineError>;
}

/// Produces fresh, empty backends. `open` returns once the backend is ready
/// to accept statements.
#[async_trait(?Send)]
pub trait BackendFactory: Send + Sync {
    async fn open(&self) -> Result<Box<dyn SqlBackend>, EngineError>;
}
