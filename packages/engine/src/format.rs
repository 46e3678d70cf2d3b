use comfy_table::{Cell, ColumnConstraint, ContentArrangement, Table, Width};

use crate::QueryResult;

const MIN_COLUMN_WIDTH: u16 = 4;
/// `+`-cornered ASCII borders, a rule under the header, no rules between rows.
const ASCII_BORDERED: &str = "||--+-++|    ++++++";
pub const EMPTY_RESULT_MESSAGE: &str = "Query executed successfully. 0 rows returned.";

/// Renders a result as a bordered, fixed-width text table.
pub fn format_result(result: &QueryResult) -> String {
    if !result.success {
        return format!("Error: {}", result.error.as_deref().unwrap_or_default());
    }
    if result.rows.is_empty() {
        return EMPTY_RESULT_MESSAGE.to_string();
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_BORDERED)
        .set_content_arrangement(ContentArrangement::Disabled)
        .set_header(result.columns.iter().map(Cell::new).collect::<Vec<_>>());

    for row in &result.rows {
        let cells = (0..result.columns.len())
            .map(|idx| {
                Cell::new(
                    row.values()
                        .get(idx)
                        .map(|value| value.display_text())
                        .unwrap_or_default(),
                )
            })
            .collect::<Vec<_>>();
        table.add_row(cells);
    }

    // Bounds include the one-space padding on each side.
    for column in table.column_iter_mut() {
        column.set_constraint(ColumnConstraint::LowerBoundary(Width::Fixed(
            MIN_COLUMN_WIDTH + 2,
        )));
    }

    format!(
        "{table}\n\n{} row(s) returned in {:.2}ms",
        result.row_count, result.execution_time_ms
    )
}
