//! HTML parsing and table analysis.

mod html_parser;
mod options;
mod table_builder;
mod table_detector;

pub use html_parser::HtmlParser;
pub use options::{ErrorMode, ParseOptions, DEFAULT_MAX_DEPTH};
pub use table_builder::{build_grid, extract_cell_text, parse_span, GridBuilder};
pub use table_detector::{classify_table, TableDetector, TableDetectorConfig, TableKind};
