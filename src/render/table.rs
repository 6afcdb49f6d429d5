//! Bordered ASCII rendering for table grids.

use crate::buffer::TextBuffer;
use crate::model::TableGrid;

/// Append `grid` to `buffer` as a bordered ASCII table.
///
/// Every row is preceded by a border line and the table is closed by one
/// more. Cells past the column count are dropped; short rows simply end
/// early. An empty grid renders nothing.
pub fn render_ascii_table(grid: &TableGrid, buffer: &mut TextBuffer) {
    let widths = grid.column_widths();
    if widths.is_empty() {
        return;
    }

    for row in &grid.rows {
        push_border(buffer, &widths);

        buffer.push('|');
        for (col, cell) in row.placed_cells(widths.len()) {
            buffer.push(' ');
            buffer.push_str(&cell.content);
            buffer.push_repeated(' ', widths[col].saturating_sub(cell.width()));
            buffer.push_str(" |");
        }
        buffer.push('\n');
    }

    push_border(buffer, &widths);
}

/// Render `grid` into a new string.
pub fn to_ascii_table(grid: &TableGrid) -> String {
    let mut buffer = TextBuffer::new();
    render_ascii_table(grid, &mut buffer);
    buffer.into_string()
}

fn push_border(buffer: &mut TextBuffer, widths: &[usize]) {
    buffer.push('+');
    for width in widths {
        buffer.push_repeated('-', width + 2);
        buffer.push('+');
    }
    buffer.push('\n');
}
