use sqlpractice_engine::{Session, SessionConfig, SqliteConfig, SqliteFactory};

#[derive(Debug, Clone)]
pub struct AppContext {
    pub foreign_keys: bool,
}

impl AppContext {
    pub fn session(&self) -> Session {
        Session::new(SessionConfig {
            factory: Box::new(SqliteFactory::new(SqliteConfig {
                foreign_keys: self.foreign_keys,
            })),
        })
    }
}
