#![allow(dead_code)]

use async_trait::async_trait;
use sqlpractice_engine::{BackendFactory, EngineError, Session, SessionConfig, SqlBackend};

/// Factory standing in for an engine that cannot start.
pub struct BrokenFactory;

#[async_trait(?Send)]
impl BackendFactory for BrokenFactory {
    async fn open(&self) -> Result<Box<dyn SqlBackend>, EngineError> {
        Err(EngineError::new(
            "SQLPRACTICE_ERROR_ENGINE_STARTUP",
            "Database engine failed to start",
            "wasm module missing",
        ))
    }
}

pub fn broken_session() -> Session {
    Session::new(SessionConfig {
        factory: Box::new(BrokenFactory),
    })
}

/// A freshly reset session with `fixture` loaded.
pub async fn seeded_session(fixture: &str) -> Session {
    let mut session = Session::in_memory();
    session.reset().await.expect("reset should succeed");
    let outcome = session
        .load_fixture(fixture)
        .await
        .expect("fixture load should run");
    assert!(outcome.is_success(), "fixture failed: {:?}", outcome.error());
    session
}

pub async fn table_count(session: &mut Session) -> i64 {
    let result = session
        .execute("SELECT COUNT(*) AS n FROM sqlite_master WHERE type = 'table'")
        .await
        .expect("engine should be up");
    match result.value(0, "n") {
        Some(sqlpractice_engine::Value::Integer(n)) => *n,
        other => panic!("unexpected count value: {other:?}"),
    }
}
