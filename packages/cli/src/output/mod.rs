use crate::cli::OutputFormat;
use sqlpractice_engine::{format_result, EvaluationResult, QueryResult};
use std::process::ExitCode;

pub const NOTHING_TO_RUN: &str = "Nothing to run: input contains no SQL statements.";

pub fn print_query_results(results: &[QueryResult], format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", render_query_results(results)),
        OutputFormat::Json => println!("{}", to_pretty_json(results)),
    }
}

pub fn print_evaluation(result: &EvaluationResult, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", render_evaluation(result)),
        OutputFormat::Json => println!("{}", to_pretty_json(result)),
    }
}

pub fn render_query_results(results: &[QueryResult]) -> String {
    if results.is_empty() {
        return NOTHING_TO_RUN.to_string();
    }
    results
        .iter()
        .map(format_result)
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn render_evaluation(result: &EvaluationResult) -> String {
    let status = if result.passed { "PASS" } else { "FAIL" };
    let mut lines = vec![
        format!("{status}: {}", result.message),
        format!(
            "rows: got {}, expected {}",
            result.user_row_count, result.expected_row_count
        ),
    ];
    for difference in result.differences.iter().flatten() {
        lines.push(format!("  {difference}"));
    }
    lines.join("\n")
}

/// Failure if any statement failed.
pub fn exit_code_for_results(results: &[QueryResult]) -> ExitCode {
    if results.iter().all(|result| result.success) {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn to_pretty_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
}
