use async_trait::async_trait;
use rusqlite::types::ValueRef;
use rusqlite::{Connection, Row as SqliteRow};
use std::sync::Mutex;

use crate::errors::{engine_startup_error, statement_error};
use crate::statement::split_statements;
use crate::{BackendFactory, EngineError, Row, RowSet, SqlBackend, Value};

const EMPTY_STATEMENT: &str = "empty statement: no SQL to execute";

#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// Enforce foreign key constraints (`PRAGMA foreign_keys`).
    pub foreign_keys: bool,
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self { foreign_keys: true }
    }
}

/// Opens a new in-memory SQLite database per call.
#[derive(Debug, Clone, Default)]
pub struct SqliteFactory {
    config: SqliteConfig,
}

impl SqliteFactory {
    pub fn new(config: SqliteConfig) -> Self {
        Self { config }
    }
}

#[async_trait(?Send)]
impl BackendFactory for SqliteFactory {
    async fn open(&self) -> Result<Box<dyn SqlBackend>, EngineError> {
        let backend = SqliteBackend::in_memory(&self.config)?;
        Ok(Box::new(backend))
    }
}

pub struct SqliteBackend {
    conn: Mutex<Connection>,
}

impl SqliteBackend {
    pub fn in_memory(config: &SqliteConfig) -> Result<Self, EngineError> {
        let conn = Connection::open_in_memory()
            .map_err(|err| engine_startup_error(&err.to_string()))?;
        conn.pragma_update(None, "foreign_keys", config.foreign_keys)
            .map_err(|err| engine_startup_error(&err.to_string()))?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))
            .map_err(|err| engine_startup_error(&format!("readiness probe failed: {err}")))?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }
}

#[async_trait(?Send)]
impl SqlBackend for SqliteBackend {
    async fn query(&self, sql: &str) -> Result<RowSet, EngineError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| statement_error("sqlite mutex poisoned"))?;

        // SQLite prepares blank or comment-only text into a no-op statement
        // whose step reports "not an error".
        if split_statements(sql).is_empty() {
            return Err(statement_error(EMPTY_STATEMENT));
        }

        let mut stmt = conn
            .prepare(sql)
            .map_err(|err| statement_error(&err.to_string()))?;
        let columns = stmt
            .column_names()
            .into_iter()
            .map(|name| name.to_string())
            .collect::<Vec<_>>();
        let kinds = stmt
            .columns()
            .iter()
            .map(|column| ColumnKind::from_decl_type(column.decl_type()))
            .collect::<Vec<_>>();

        let mut rows = stmt
            .query([])
            .map_err(|err| statement_error(&err.to_string()))?;
        let mut result_rows = Vec::new();
        while let Some(row) = rows
            .next()
            .map_err(|err| statement_error(&err.to_string()))?
        {
            result_rows.push(map_row(row, &kinds)?);
        }
        Ok(RowSet {
            columns,
            rows: result_rows,
        })
    }

    async fn execute_batch(&self, sql: &str) -> Result<(), EngineError> {
        let conn = self
            .conn
            .lock()
            .map_err(|_| statement_error("sqlite mutex poisoned"))?;
        conn.execute_batch(sql)
            .map_err(|err| statement_error(&err.to_string()))
    }
}

/// How a column's declared type shapes the values read from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColumnKind {
    Plain,
    Boolean,
    Timestamp,
}

impl ColumnKind {
    fn from_decl_type(decl_type: Option<&str>) -> Self {
        let Some(decl_type) = decl_type else {
            return Self::Plain;
        };
        let upper = decl_type.to_ascii_uppercase();
        if upper.starts_with("BOOL") {
            Self::Boolean
        } else if upper.contains("DATE") || upper.contains("TIME") {
            Self::Timestamp
        } else {
            Self::Plain
        }
    }
}

fn map_row(row: &SqliteRow<'_>, kinds: &[ColumnKind]) -> Result<Row, EngineError> {
    let mut values = Vec::with_capacity(kinds.len());
    for (idx, kind) in kinds.iter().enumerate() {
        let value = row
            .get_ref(idx)
            .map_err(|err| statement_error(&err.to_string()))?;
        values.push(map_value(value, *kind));
    }
    Ok(Row(values))
}

fn map_value(value: ValueRef<'_>, kind: ColumnKind) -> Value {
    match (value, kind) {
        (ValueRef::Null, _) => Value::Null,
        (ValueRef::Integer(value), ColumnKind::Boolean) if value == 0 || value == 1 => {
            Value::Boolean(value == 1)
        }
        (ValueRef::Integer(value), _) => Value::Integer(value),
        (ValueRef::Real(value), _) => Value::Real(value),
        (ValueRef::Text(value), ColumnKind::Timestamp) => {
            Value::Timestamp(String::from_utf8_lossy(value).to_string())
        }
        (ValueRef::Text(value), _) => Value::Text(String::from_utf8_lossy(value).to_string()),
        (ValueRef::Blob(value), _) => Value::Blob(value.to_vec()),
    }
}

#[cfg(test)]
mod tests {
    use super::{map_value, ColumnKind};
    use crate::Value;
    use rusqlite::types::ValueRef;

    #[test]
    fn declared_types_select_column_kind() {
        assert_eq!(ColumnKind::from_decl_type(None), ColumnKind::Plain);
        assert_eq!(ColumnKind::from_decl_type(Some("INT")), ColumnKind::Plain);
        assert_eq!(ColumnKind::from_decl_type(Some("boolean")), ColumnKind::Boolean);
        assert_eq!(ColumnKind::from_decl_type(Some("DATETIME")), ColumnKind::Timestamp);
        assert_eq!(ColumnKind::from_decl_type(Some("timestamp")), ColumnKind::Timestamp);
        assert_eq!(ColumnKind::from_decl_type(Some("DATE")), ColumnKind::Timestamp);
    }

    #[test]
    fn boolean_columns_only_convert_zero_and_one() {
        assert_eq!(
            map_value(ValueRef::Integer(1), ColumnKind::Boolean),
            Value::Boolean(true)
        );
        assert_eq!(
            map_value(ValueRef::Integer(7), ColumnKind::Boolean),
            Value::Integer(7)
        );
        assert_eq!(map_value(ValueRef::Null, ColumnKind::Boolean), Value::Null);
    }

    #[test]
    fn timestamp_columns_keep_text() {
        assert_eq!(
            map_value(ValueRef::Text(b"2024-05-01 10:00:00"), ColumnKind::Timestamp),
            Value::Timestamp("2024-05-01 10:00:00".to_string())
        );
        assert_eq!(
            map_value(ValueRef::Integer(1714557600), ColumnKind::Timestamp),
            Value::Integer(1714557600)
        );
    }
}
