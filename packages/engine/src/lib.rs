mod backend;
mod backends;
mod error;
mod errors;
mod evaluate;
mod fixture;
mod format;
mod practice;
mod runner;
mod session;
mod statement;
mod types;

pub use backend::{BackendFactory, SqlBackend};
pub use backends::{SqliteBackend, SqliteConfig, SqliteFactory};
pub use error::EngineError;
pub use errors::ErrorCode;
pub use evaluate::{compare_results, MAX_DIFFERENCES};
pub use fixture::FixtureOutcome;
pub use format::{format_result, EMPTY_RESULT_MESSAGE};
pub use practice::Question;
pub use session::{Instance, Session, SessionConfig};
pub use statement::{first_statement, split_statements, Statement, STATEMENT_DELIMITER};
pub use types::{EvaluationResult, QueryResult, Row, RowSet, Value};
