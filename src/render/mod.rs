//! Rendering module for converting document trees to plain text.

mod cleanup;
mod options;
mod result;
mod table;
mod text;
mod wrap;

pub use cleanup::{
    collapse_blank_lines, limit_newlines, CleanupOptions, CleanupPipeline, CleanupPreset,
};
pub use options::{RenderOptions, DEFAULT_WRAP_WIDTH};
pub use result::{ExtractionStats, RenderResult};
pub use table::{render_ascii_table, to_ascii_table};
pub use text::{to_text, to_text_with_stats, TextRenderer};
pub use wrap::{wrap, wrap_into};
