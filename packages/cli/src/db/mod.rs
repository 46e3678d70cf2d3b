use crate::error::CliError;
use sqlpractice_engine::{Question, Session};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Resolves the SQL argument, reading stdin for `-`.
pub fn resolve_sql(sql: &str) -> Result<String, CliError> {
    if sql == "-" {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .map_err(|source| CliError::io("failed to read SQL from stdin", source))?;
        if input.trim().is_empty() {
            return Err(CliError::InvalidArgs("stdin SQL input is empty"));
        }
        return Ok(input);
    }

    Ok(sql.to_string())
}

pub fn read_question(path: &Path) -> Result<Question, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| {
        CliError::io(format!("failed to read question {}", path.display()), source)
    })?;
    serde_json::from_str(&raw).map_err(|err| {
        CliError::msg(format!("invalid question file {}: {err}", path.display()))
    })
}

/// Resets the session and loads the fixture file, if one was given.
pub fn prepare_session(session: &mut Session, fixture: Option<&Path>) -> Result<(), CliError> {
    pollster::block_on(session.reset())
        .map_err(|err| CliError::engine("failed to start database", err))?;

    let Some(path) = fixture else {
        return Ok(());
    };
    let setup_sql = fs::read_to_string(path).map_err(|source| {
        CliError::io(format!("failed to read fixture {}", path.display()), source)
    })?;
    pollster::block_on(session.load_fixture(&setup_sql))
        .map_err(|err| CliError::engine("failed to start database", err))?
        .into_result()
        .map_err(|err| CliError::engine(&format!("fixture {}", path.display()), err))?;
    Ok(())
}
