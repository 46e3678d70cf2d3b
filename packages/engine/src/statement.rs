pub const STATEMENT_DELIMITER: char = ';';
const COMMENT_MARKER: &str = "--";

/// A trimmed, non-empty SQL fragment that is not purely a comment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Statement(String);

impl Statement {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The statement text with the delimiter re-appended, as sent to the engine.
    pub fn terminated(&self) -> String {
        format!("{}{}", self.0, STATEMENT_DELIMITER)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Splits a SQL blob into statements on every `;`.
///
/// Splitting is purely lexical: a `;` inside a string literal or a comment
/// still ends the statement.
pub fn split_statements(raw: &str) -> Vec<Statement> {
    raw.split(STATEMENT_DELIMITER)
        .map(str::trim)
        .filter(|piece| !piece.is_empty() && !is_comment_only(piece))
        .map(|piece| Statement(piece.to_string()))
        .collect()
}

/// The first executable statement of a blob, if any.
pub fn first_statement(raw: &str) -> Option<Statement> {
    split_statements(raw).into_iter().next()
}

fn is_comment_only(piece: &str) -> bool {
    piece
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .all(|line| line.starts_with(COMMENT_MARKER))
}
