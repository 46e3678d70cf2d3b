use tracing::debug;

use crate::{EngineError, EvaluationResult, QueryResult, Session};

/// Upper bound on row-level differences reported per verdict.
pub const MAX_DIFFERENCES: usize = 3;

impl Session {
    /// Runs the candidate and then the reference against the current state and
    /// judges the candidate's output.
    ///
    /// The fixture must already be loaded. Both inputs are single statements.
    pub async fn evaluate(
        &mut self,
        candidate_sql: &str,
        reference_sql: &str,
    ) -> Result<EvaluationResult, EngineError> {
        let candidate = self.execute(candidate_sql).await?;
        if !candidate.success {
            return Ok(EvaluationResult {
                passed: false,
                message: format!(
                    "candidate query error: {}",
                    candidate.error.unwrap_or_default()
                ),
                user_row_count: 0,
                expected_row_count: 0,
                differences: None,
            });
        }

        let reference = self.execute(reference_sql).await?;
        if !reference.success {
            return Ok(EvaluationResult {
                passed: false,
                message: format!(
                    "reference solution error: {}",
                    reference.error.unwrap_or_default()
                ),
                user_row_count: candidate.row_count,
                expected_row_count: 0,
                differences: None,
            });
        }

        let verdict = compare_results(&candidate, &reference);
        debug!(
            passed = verdict.passed,
            user_rows = verdict.user_row_count,
            expected_rows = verdict.expected_row_count,
            "evaluated candidate"
        );
        Ok(verdict)
    }
}

/// Compares two successful results. Row order and column order matter;
/// column names do not.
pub fn compare_results(candidate: &QueryResult, reference: &QueryResult) -> EvaluationResult {
    let user_row_count = candidate.row_count;
    let expected_row_count = reference.row_count;
    let verdict = |passed: bool, message: String, differences: Option<Vec<String>>| {
        EvaluationResult {
            passed,
            message,
            user_row_count,
            expected_row_count,
            differences,
        }
    };

    if user_row_count != expected_row_count {
        return verdict(
            false,
            format!(
                "row count mismatch: got {user_row_count} rows, expected {expected_row_count} rows"
            ),
            None,
        );
    }

    if candidate.columns.len() != reference.columns.len() {
        return verdict(
            false,
            format!(
                "column count mismatch: got {} columns, expected {} columns",
                candidate.columns.len(),
                reference.columns.len()
            ),
            None,
        );
    }

    let all_match = candidate.rows.len() == reference.rows.len()
        && candidate
            .rows
            .iter()
            .zip(reference.rows.iter())
            .all(|(got, expected)| got.matches(expected));
    if all_match {
        return verdict(true, format!("all {user_row_count} rows match"), None);
    }

    let mut differences = Vec::new();
    for (idx, (got, expected)) in candidate.rows.iter().zip(reference.rows.iter()).enumerate() {
        if differences.len() >= MAX_DIFFERENCES {
            break;
        }
        if !got.matches(expected) {
            differences.push(format!(
                "Row {}: Got {}, Expected {}",
                idx + 1,
                got.render(&candidate.columns),
                expected.render(&reference.columns)
            ));
        }
    }

    verdict(
        false,
        "data mismatch: query results differ from the expected output".to_string(),
        Some(differences),
    )
}
