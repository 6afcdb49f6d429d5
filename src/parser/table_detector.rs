//! Layout-versus-data classification for `<table>` elements.
//!
//! Many documents, mail in particular, use tables only to position content.
//! Those are flattened to prose; real data tables are drawn as grids.

use serde::{Deserialize, Serialize};

use crate::model::Element;

/// What a table is used for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableKind {
    /// Visual arrangement only; rendered as wrapped prose
    Layout,
    /// Tabular data; rendered as an ASCII grid
    Data,
}

/// Table detector configuration.
#[derive(Debug, Clone)]
pub struct TableDetectorConfig {
    /// Minimum number of rows for a data table
    pub min_rows: usize,
    /// Minimum number of cells in the widest row for a data table
    pub min_columns: usize,
}

impl Default for TableDetectorConfig {
    fn default() -> Self {
        Self {
            min_rows: 2,
            min_columns: 2,
        }
    }
}

/// Classifies tables from their attributes and direct row structure.
#[derive(Debug, Clone, Default)]
pub struct TableDetector {
    config: TableDetectorConfig,
}

impl TableDetector {
    /// Create a detector with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with custom thresholds.
    pub fn with_config(config: TableDetectorConfig) -> Self {
        Self { config }
    }

    /// Classify a `table` element.
    ///
    /// A table is layout when `role="presentation"` (any case), when
    /// `border="0"`, or when its direct structure is too small to hold
    /// data. Nested tables are never counted.
    pub fn classify(&self, table: &Element) -> TableKind {
        if table
            .attr("role")
            .is_some_and(|role| role.eq_ignore_ascii_case("presentation"))
        {
            log::debug!("layout table: role=presentation");
            return TableKind::Layout;
        }
        if table.attr("border") == Some("0") {
            log::debug!("layout table: border=0");
            return TableKind::Layout;
        }

        let rows = direct_rows(table);
        let columns = rows.iter().map(|tr| direct_cell_count(tr)).max().unwrap_or(0);
        if rows.len() < self.config.min_rows || columns < self.config.min_columns {
            log::debug!("layout table: {} rows, {} columns", rows.len(), columns);
            return TableKind::Layout;
        }

        TableKind::Data
    }
}

/// Classify a table with default thresholds.
pub fn classify_table(table: &Element) -> TableKind {
    TableDetector::new().classify(table)
}

/// Rows belonging to this table and not to a nested one.
///
/// Row groups are looked through, since the HTML tree builder wraps bare
/// rows in a `tbody`.
fn direct_rows(table: &Element) -> Vec<&Element> {
    let mut rows = Vec::new();
    for child in table.child_elements() {
        match child.tag.as_str() {
            "tr" => rows.push(child),
            "thead" | "tbody" | "tfoot" => {
                rows.extend(child.child_elements().filter(|e| e.is("tr")));
            }
            _ => {}
        }
    }
    rows
}

fn direct_cell_count(row: &Element) -> usize {
    row.child_elements()
        .filter(|e| e.is("td") || e.is("th"))
        .count()
}
