use crate::app::AppContext;
use crate::cli::sql::SqlExecuteArgs;
use crate::db;
use crate::error::CliError;
use crate::output;
use std::process::ExitCode;

pub fn run(context: &AppContext, args: SqlExecuteArgs) -> Result<ExitCode, CliError> {
    let sql = db::resolve_sql(&args.sql)?;
    let mut session = context.session();
    db::prepare_session(&mut session, args.fixture.as_deref())?;

    let results = pollster::block_on(session.execute_multiple(&sql))
        .map_err(|err| CliError::engine("sql execution failed", err))?;
    output::print_query_results(&results, args.format);

    Ok(output::exit_code_for_results(&results))
}
