use serde::{Deserialize, Serialize};

use crate::errors::empty_input_error;
use crate::statement::first_statement;
use crate::{EngineError, EvaluationResult, QueryResult, Session};

/// The parts of a practice question the engine needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: String,
    /// Schema and seed data, run before every attempt.
    pub sample_data: String,
    /// Reference solution the learner's answer is judged against.
    pub system_solution: String,
}

impl Session {
    /// Resets the instance, loads the question's data and runs every
    /// statement of `raw`.
    pub async fn run_question(
        &mut self,
        question: &Question,
        raw: &str,
    ) -> Result<Vec<QueryResult>, EngineError> {
        self.prepare_question(question).await?;
        self.execute_multiple(raw).await
    }

    /// Resets the instance, loads the question's data and judges the first
    /// statement of `raw` against the reference solution.
    pub async fn check_answer(
        &mut self,
        question: &Question,
        raw: &str,
    ) -> Result<EvaluationResult, EngineError> {
        let candidate = first_statement(raw).ok_or_else(|| empty_input_error("candidate query"))?;
        let reference = first_statement(&question.system_solution)
            .ok_or_else(|| empty_input_error("reference solution"))?;

        self.prepare_question(question).await?;
        self.evaluate(&candidate.terminated(), &reference.terminated())
            .await
    }

    async fn prepare_question(&mut self, question: &Question) -> Result<(), EngineError> {
        self.reset().await?;
        self.load_fixture(&question.sample_data)
            .await?
            .into_result()?;
        Ok(())
    }
}
