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

    let results = pollster::block_on(session.run_question(&question, &sql))
        .map_err(|err| CliError::engine(&format!("question {}", question.id), err))?;
    output::print_query_results(&results, args.format);

    Ok(output::exit_code_for_results(&results))
}
