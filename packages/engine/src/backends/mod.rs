mod sqlite;

pub use sqlite::{SqliteBackend, SqliteConfig, SqliteFactory};
