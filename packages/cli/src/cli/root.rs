use super::question::QuestionCommand;
use super::sql::SqlCommand;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "sqlpractice")]
#[command(about = "Run and check SQL practice answers against an in-memory database")]
pub struct Cli {
    /// Log engine activity to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Do not enforce foreign key constraints.
    #[arg(long, global = true)]
    pub no_foreign_keys: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Execute raw SQL against a fresh database.
    Sql(SqlCommand),
    /// Run or check SQL against a practice question.
    Question(QuestionCommand),
}
