//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered text
    pub content: String,

    /// Extraction statistics
    pub stats: ExtractionStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: ExtractionStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }

    /// Serialize the result as JSON.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Tables drawn as ASCII grids
    pub data_table_count: u32,

    /// Tables flattened to wrapped prose
    pub layout_table_count: u32,

    /// Images replaced by placeholders
    pub image_count: u32,

    /// Non-blank text nodes emitted
    pub text_node_count: u32,

    /// Script, style and metadata elements skipped
    pub suppressed_count: u32,

    /// Nodes skipped because they were nested too deeply
    pub truncated_count: u32,

    /// Lines in the final text
    pub line_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl ExtractionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment data table count.
    pub fn add_data_table(&mut self) {
        self.data_table_count += 1;
    }

    /// Increment layout table count.
    pub fn add_layout_table(&mut self) {
        self.layout_table_count += 1;
    }

    /// Increment image count.
    pub fn add_image(&mut self) {
        self.image_count += 1;
    }

    /// Increment text node count.
    pub fn add_text_node(&mut self) {
        self.text_node_count += 1;
    }

    /// Increment suppressed element count.
    pub fn add_suppressed(&mut self) {
        self.suppressed_count += 1;
    }

    /// Increment truncated node count.
    pub fn add_truncated(&mut self) {
        self.truncated_count += 1;
    }

    /// Total number of tables seen.
    pub fn table_count(&self) -> u32 {
        self.data_table_count + self.layout_table_count
    }

    /// Add line, word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.line_count += text.lines().count() as u32;
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &ExtractionStats) {
        self.data_table_count += other.data_table_count;
        self.layout_table_count += other.layout_table_count;
        self.image_count += other.image_count;
        self.text_node_count += other.text_node_count;
        self.suppressed_count += other.suppressed_count;
        self.truncated_count += other.truncated_count;
        self.line_count += other.line_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}
