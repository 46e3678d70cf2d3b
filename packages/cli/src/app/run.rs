use super::context::AppContext;
use super::logging;
use crate::cli::root::{Cli, Command};
use crate::commands;
use crate::error::CliError;
use clap::Parser;
use std::process::ExitCode;

pub fn run() -> Result<ExitCode, CliError> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let context = AppContext {
        foreign_keys: !cli.no_foreign_keys,
    };

    match cli.command {
        Command::Sql(sql_command) => commands::sql::run(&context, sql_command),
        Command::Question(question_command) => {
            commands::question::run(&context, question_command)
        }
    }
}
