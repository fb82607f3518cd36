//! Comma-delimited text parser.
//!
//! Best-effort: no escaped quotes, no configurable delimiter and no
//! header detection (row 0 is always the header). Quote characters only
//! toggle whether a comma splits the cell and are never kept.

use crate::models::Grid;

/// Splits raw text into a [`Grid`].
///
/// - Lines are split on `\n`; blank and whitespace-only lines are dropped.
/// - A `"` toggles quoted mode; a `,` outside quoted mode ends the cell.
/// - Every cell is trimmed. The last cell is flushed at end of line even
///   when a quote was left open.
///
/// Empty input yields an empty grid.
pub fn parse_delimited(content: &str) -> Grid {
    let rows: Vec<Vec<String>> = content
        .split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(parse_line)
        .collect();

    tracing::trace!("Parsed {} non-blank lines", rows.len());
    Grid::new(rows)
}

fn parse_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                cells.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    cells.push(current.trim().to_string());
    cells
}
