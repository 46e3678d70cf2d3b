pub mod app;
pub mod cli;
pub mod commands;
pub mod db;
pub mod error;
pub mod output;

use std::process::ExitCode;

pub fn run() -> Result<ExitCode, error::CliError> {
    app::run()
}
