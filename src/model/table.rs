//! Table grid types.

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Largest span accepted for a cell, as in the HTML table model.
pub const MAX_SPAN: usize = 1000;

/// A table collected from markup, ready for grid rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableGrid {
    /// Rows in document order
    pub rows: Vec<TableRow>,
}

impl TableGrid {
    /// Create a new empty grid.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from rows of cell text (all spans 1).
    pub fn from_rows<R, S>(rows: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rows: rows.into_iter().map(TableRow::from_strings).collect(),
        }
    }

    /// Drop every row collected so far.
    pub fn clear(&mut self) {
        self.rows.clear();
    }

    /// Add a row to the grid.
    pub fn add_row(&mut self, row: TableRow) {
        self.rows.push(row);
    }

    /// The row cells are currently appended to.
    pub fn last_row_mut(&mut self) -> Option<&mut TableRow> {
        self.rows.last_mut()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns: the largest cell count of any row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Check if the grid is empty.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Compute one display width per column.
    ///
    /// A cell counts only toward the column it starts in, even when it
    /// spans several.
    pub fn column_widths(&self) -> Vec<usize> {
        let columns = self.column_count();
        let mut widths = vec![0; columns];
        for row in &self.rows {
            for (col, cell) in row.placed_cells(columns) {
                widths[col] = widths[col].max(cell.width());
            }
        }
        widths
    }

    /// Check if any cell spans more than one row or column.
    pub fn has_merged_cells(&self) -> bool {
        self.rows
            .iter()
            .flat_map(|r| &r.cells)
            .any(TableCell::is_merged)
    }
}

/// A table row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in the row
    pub cells: Vec<TableCell>,
}

impl TableRow {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a row from text values.
    pub fn from_strings<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
        Self {
            cells: values.into_iter().map(TableCell::text).collect(),
        }
    }

    /// Append a cell.
    pub fn push(&mut self, cell: TableCell) {
        self.cells.push(cell);
    }

    /// Pair each cell with its starting column.
    ///
    /// The column counter advances by each cell's colspan; iteration stops
    /// at the first cell starting at or past `columns`.
    pub fn placed_cells(&self, columns: usize) -> impl Iterator<Item = (usize, &TableCell)> {
        self.cells
            .iter()
            .scan(0usize, |col, cell| {
                let start = *col;
                *col = col.saturating_add(cell.colspan);
                Some((start, cell))
            })
            .take_while(move |(start, _)| *start < columns)
    }
}

/// A table cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    /// Flattened cell text
    pub content: String,

    /// Number of columns this cell spans
    pub colspan: usize,

    /// Number of rows this cell spans (collected, not used for layout)
    pub rowspan: usize,
}

impl TableCell {
    /// Create a new cell with text content.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            colspan: 1,
            rowspan: 1,
        }
    }

    /// Set colspan and return self. Clamped to `1..=MAX_SPAN`.
    pub fn colspan(mut self, span: usize) -> Self {
        self.colspan = span.clamp(1, MAX_SPAN);
        self
    }

    /// Set rowspan and return self. Clamped to `1..=MAX_SPAN`.
    pub fn rowspan(mut self, span: usize) -> Self {
        self.rowspan = span.clamp(1, MAX_SPAN);
        self
    }

    /// Display width of the content in terminal columns.
    pub fn width(&self) -> usize {
        self.content.width()
    }

    /// Check if this cell spans multiple rows or columns.
    pub fn is_merged(&self) -> bool {
        self.rowspan > 1 || self.colspan > 1
    }
}
