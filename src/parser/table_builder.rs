//! Collect `<table>` subtrees into [`TableGrid`]s.
//!
//! The walk is deliberately flat: a nested `table` start resets the grid
//! and its rows are appended to the same row list as the outer table's.

use crate::buffer::{is_markup_space, TextBuffer};
use crate::model::{Element, Node, TableCell, TableGrid, TableRow, MAX_SPAN};

use super::DEFAULT_MAX_DEPTH;

/// Builds table grids from element subtrees.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    max_depth: usize,
}

impl GridBuilder {
    /// Create a builder with the default depth bound.
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum depth visited below the table element.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Build a grid from a `table` element.
    ///
    /// Cells found before any row are dropped.
    pub fn build(&self, table: &Element) -> TableGrid {
        let mut grid = TableGrid::new();
        self.visit_element(table, 0, &mut grid);
        grid
    }

    /// Flatten a cell subtree to a single line of text.
    ///
    /// Every non-blank text run is trimmed and followed by one space.
    pub fn cell_text(&self, cell: &Element) -> String {
        let mut buffer = TextBuffer::new();
        self.append_cell_text(cell, 0, &mut buffer);
        buffer.into_string()
    }

    fn append_cell_text(&self, element: &Element, depth: usize, buffer: &mut TextBuffer) {
        if depth > self.max_depth {
            return;
        }
        for child in &element.children {
            match child {
                Node::Text(text) => {
                    let text = text.trim_matches(is_markup_space);
                    if !text.is_empty() {
                        buffer.push_str(text);
                        buffer.push(' ');
                    }
                }
                Node::Element(el) => self.append_cell_text(el, depth + 1, buffer),
                Node::Other(_) => {}
            }
        }
    }

    fn visit(&self, node: &Node, depth: usize, grid: &mut TableGrid) {
        match node {
            Node::Element(el) => self.visit_element(el, depth, grid),
            Node::Other(children) => self.visit_children(children, depth, grid),
            Node::Text(_) => {}
        }
    }

    fn visit_element(&self, el: &Element, depth: usize, grid: &mut TableGrid) {
        match el.tag.as_str() {
            "table" => grid.clear(),
            "tr" => grid.add_row(TableRow::new()),
            "td" | "th" => {
                let cell = TableCell::text(self.cell_text(el))
                    .colspan(parse_span(el.attr("colspan")))
                    .rowspan(parse_span(el.attr("rowspan")));
                match grid.last_row_mut() {
                    Some(row) => row.push(cell),
                    None => log::trace!("dropping <{}> outside of any row", el.tag),
                }
            }
            _ => {}
        }
        self.visit_children(&el.children, depth, grid);
    }

    fn visit_children(&self, children: &[Node], depth: usize, grid: &mut TableGrid) {
        if depth >= self.max_depth {
            return;
        }
        for child in children {
            self.visit(child, depth + 1, grid);
        }
    }
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a grid from a `table` element with default settings.
pub fn build_grid(table: &Element) -> TableGrid {
    GridBuilder::new().build(table)
}

/// Flatten a cell subtree with default settings.
pub fn extract_cell_text(cell: &Element) -> String {
    GridBuilder::new().cell_text(cell)
}

/// Parse a `colspan`/`rowspan` value.
///
/// Reads an optional sign and the leading digits, ignoring anything after
/// them. Missing, non-numeric, zero and negative values give 1; values
/// above [`MAX_SPAN`] are capped.
pub fn parse_span(value: Option<&str>) -> usize {
    let Some(value) = value else {
        return 1;
    };
    let value = value.trim_start_matches(is_markup_space);
    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if negative || end == 0 {
        return 1;
    }
    match digits[..end].parse::<usize>() {
        Ok(n) => n.clamp(1, MAX_SPAN),
        Err(_) => MAX_SPAN,
    }
}
