use std::time::Instant;

use tracing::debug;

use crate::statement::split_statements;
use crate::{EngineError, QueryResult, Session};

impl Session {
    /// Runs one statement against the live instance, creating it if needed.
    ///
    /// Statement failures are captured in the returned `QueryResult`; the
    /// only error returned is an engine that cannot start.
    pub async fn execute(&mut self, sql: &str) -> Result<QueryResult, EngineError> {
        let instance = self.init().await?;
        let started = Instant::now();
        let outcome = instance.backend().query(sql).await;
        let execution_time_ms = started.elapsed().as_secs_f64() * 1000.0;

        let result = match outcome {
            Ok(row_set) => QueryResult::succeeded(row_set, execution_time_ms),
            Err(err) => QueryResult::failed(err.description, execution_time_ms),
        };
        debug!(
            success = result.success,
            rows = result.row_count,
            execution_time_ms,
            "executed statement"
        );
        Ok(result)
    }

    /// Splits `raw` and runs every statement in order, one result each.
    /// Input without statements yields an empty vector.
    pub async fn execute_multiple(&mut self, raw: &str) -> Result<Vec<QueryResult>, EngineError> {
        let statements = split_statements(raw);
        let mut results = Vec::with_capacity(statements.len());
        for statement in &statements {
            results.push(self.execute(&statement.terminated()).await?);
        }
        Ok(results)
    }
}
