use tracing::{debug, warn};

use crate::errors::fixture_error;
use crate::statement::split_statements;
use crate::{EngineError, Session};

/// Outcome of loading schema and seed data into the live instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FixtureOutcome {
    Loaded {
        statements: usize,
    },
    /// Statements before `failed_statement` stay applied.
    Failed {
        failed_statement: usize,
        error: String,
    },
}

impl FixtureOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FixtureOutcome::Loaded { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FixtureOutcome::Loaded { .. } => None,
            FixtureOutcome::Failed { error, .. } => Some(error),
        }
    }

    pub fn into_result(self) -> Result<usize, EngineError> {
        match self {
            FixtureOutcome::Loaded { statements } => Ok(statements),
            FixtureOutcome::Failed {
                failed_statement,
                error,
            } => Err(fixture_error(failed_statement, &error)),
        }
    }
}

impl Session {
    /// Runs setup SQL statement by statement, stopping at the first failure.
    ///
    /// Nothing is rolled back; reset the session before loading again.
    pub async fn load_fixture(&mut self, setup_sql: &str) -> Result<FixtureOutcome, EngineError> {
        let instance = self.init().await?;
        let statements = split_statements(setup_sql);
        for (idx, statement) in statements.iter().enumerate() {
            if let Err(err) = instance.backend().execute_batch(&statement.terminated()).await {
                warn!(
                    generation = instance.generation(),
                    statement = idx + 1,
                    error = %err.description,
                    "fixture statement failed"
                );
                return Ok(FixtureOutcome::Failed {
                    failed_statement: idx,
                    error: err.description,
                });
            }
        }
        debug!(
            generation = instance.generation(),
            statements = statements.len(),
            "fixture loaded"
        );
        Ok(FixtureOutcome::Loaded {
            statements: statements.len(),
        })
    }
}
