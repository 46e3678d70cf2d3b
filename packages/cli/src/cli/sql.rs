use super::OutputFormat;
use clap::{Args, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct SqlCommand {
    #[command(subcommand)]
    pub command: SqlSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum SqlSubcommand {
    /// Execute SQL text. Use '-' to read SQL from stdin.
    Execute(SqlExecuteArgs),
}

#[derive(Debug, Args)]
pub struct SqlExecuteArgs {
    /// Setup SQL file loaded before the query runs.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub fixture: Option<PathBuf>,

    /// Output format for query results.
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// SQL text to execute. Use '-' to read from stdin.
    pub sql: String,
}
