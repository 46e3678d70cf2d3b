use crate::EngineError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    EngineStartup,
    Statement,
    Fixture,
    EmptyInput,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EngineStartup => "SQLPRACTICE_ERROR_ENGINE_STARTUP",
            Self::Statement => "SQLPRACTICE_ERROR_STATEMENT",
            Self::Fixture => "SQLPRACTICE_ERROR_FIXTURE",
            Self::EmptyInput => "SQLPRACTICE_ERROR_EMPTY_INPUT",
        }
    }

    pub const fn all() -> &'static [Self] {
        &[
            Self::EngineStartup,
            Self::Statement,
            Self::Fixture,
            Self::EmptyInput,
        ]
    }
}

impl EngineError {
    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code.as_str()
    }
}

fn build_error(code: ErrorCode, title: &str, description: &str) -> EngineError {
    EngineError::new(code.as_str(), title, description)
}

pub(crate) fn engine_startup_error(description: &str) -> EngineError {
    build_error(
        ErrorCode::EngineStartup,
        "Database engine failed to start",
        description,
    )
}

/// Raw engine failure for one statement. The description is the engine's
/// own message and is what ends up in `QueryResult::error`.
pub(crate) fn statement_error(description: &str) -> EngineError {
    build_error(ErrorCode::Statement, "Statement failed", description)
}

pub(crate) fn fixture_error(statement_index: usize, description: &str) -> EngineError {
    build_error(
        ErrorCode::Fixture,
        "Fixture setup failed",
        &format!("statement {}: {description}", statement_index + 1),
    )
}

pub(crate) fn empty_input_error(what: &str) -> EngineError {
    build_error(
        ErrorCode::EmptyInput,
        "Nothing to run",
        &format!("{what} contains no executable statement"),
    )
}

#[cfg(test)]
mod tests {
    use super::{
        empty_input_error, engine_startup_error, fixture_error, statement_error, ErrorCode,
    };
    use std::collections::HashSet;

    #[test]
    fn error_code_strings_are_unique() {
        let mut seen = HashSet::new();
        for code in ErrorCode::all() {
            let inserted = seen.insert(code.as_str());
            assert!(inserted, "duplicate error code string: {}", code.as_str());
        }
    }

    #[test]
    fn constructors_include_code() {
        assert!(engine_startup_error("boom").is(ErrorCode::EngineStartup));
        assert!(statement_error("no such table: t").is(ErrorCode::Statement));
        assert!(fixture_error(0, "syntax error").is(ErrorCode::Fixture));
        assert!(empty_input_error("candidate query").is(ErrorCode::EmptyInput));
    }

    #[test]
    fn fixture_error_reports_one_based_statement_index() {
        let err = fixture_error(2, "no such table: t");
        assert_eq!(err.description, "statement 3: no such table: t");
        assert_eq!(err.to_string(), "Fixture setup failed: statement 3: no such table: t");
    }
}
