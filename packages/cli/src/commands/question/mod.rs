mod check;
mod run;

use crate::app::AppContext;
use crate::cli::question::{QuestionCommand, QuestionSubcommand};
use crate::error::CliError;
use std::process::ExitCode;

pub fn run(context: &AppContext, command: QuestionCommand) -> Result<ExitCode, CliError> {
    match command.command {
        QuestionSubcommand::Run(args) => run::run(context, args),
        QuestionSubcommand::Check(args) => check::run(context, args),
    }
}
