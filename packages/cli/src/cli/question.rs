use super::OutputFormat;
use clap::{Args, Subcommand, ValueHint};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct QuestionCommand {
    #[command(subcommand)]
    pub command: QuestionSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum QuestionSubcommand {
    /// Run SQL against the question's sample data.
    Run(QuestionArgs),
    /// Judge an answer against the question's reference solution.
    Check(QuestionArgs),
}

#[derive(Debug, Args)]
pub struct QuestionArgs {
    /// Question file (JSON with id, sampleData and systemSolution).
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub question: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// SQL text. Use '-' to read from stdin.
    pub sql: String,
}
