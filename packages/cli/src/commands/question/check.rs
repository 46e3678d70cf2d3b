use crate::app::AppContext;
use crate::cli::question::QuestionArgs;
use crate::db;
use crate::error::CliError;
use crate::output;
use std::process::ExitCode;

pub fn run(context: &AppContext, args: QuestionArgs) -> Result<ExitCode, CliError> {
    let sql = db::resolve_sql(&args.sql)?;
    let question = db::read_question(&args.question)?;
    let mut session = context.session();

    let verdict = pollster::block_on(session.check_answer(&question, &sql))
        .map_err(|err| CliError::engine(&format!("question {}", question.id), err))?;
    output::print_evaluation(&verdict, args.format);

    if verdict.passed {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
