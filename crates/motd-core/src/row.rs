//! Side-by-side compositing of widget output columns.

use crate::ansi::visible_width;

/// Default column gap when a row configures none.
pub const DEFAULT_GAP: usize = 4;

/// Merge rendered columns into one multi-line block.
///
/// Each column keeps its input position left to right. Shorter columns are
/// padded with empty cells at the bottom so every column spans the row
/// height. For every column but the last, a cell is right-padded so that
/// `visible_width(cell) + padding == column_width + gap`, where
/// `column_width` is the widest visible line in that column; padding is
/// floored at one space so columns never collide even when a cell measures
/// wider than its column. The last column is appended unpadded.
///
/// Returns an empty string for an empty column list.
pub fn composite(columns: &[Vec<String>], gap: usize) -> String {
    if columns.is_empty() {
        return String::new();
    }

    let widths: Vec<usize> = columns
        .iter()
        .map(|col| col.iter().map(|l| visible_width(l)).max().unwrap_or(0))
        .collect();
    let height = columns.iter().map(Vec::len).max().unwrap_or(0);

    let mut lines = Vec::with_capacity(height);
    for idx in 0..height {
        let mut line = String::new();
        for (c, col) in columns.iter().enumerate() {
            let cell = col.get(idx).map(String::as_str).unwrap_or("");
            line.push_str(cell);
            if c + 1 < columns.len() {
                let padding = (widths[c] + gap).saturating_sub(visible_width(cell)).max(1);
                line.push_str(&" ".repeat(padding));
            }
        }
        lines.push(line);
    }

    lines.join("\n")
}
