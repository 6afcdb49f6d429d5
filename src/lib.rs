//! # textify
//!
//! HTML to plain text conversion for Rust.
//!
//! This library turns HTML markup (typically the HTML part of an e-mail)
//! into readable plain text. Data tables are drawn as bordered ASCII grids,
//! layout tables are flattened into wrapped prose, images become
//! placeholders and scripts, styles and metadata are dropped.
//!
//! ## Quick Start
//!
//! ```
//! let html = b"<html><body><p>Hello</p><p>World</p></body></html>";
//! let text = textify::html_to_text(html).unwrap();
//! assert_eq!(text, "\nHello \nWorld ");
//! ```
//!
//! ## Features
//!
//! - **Table handling**: layout tables become prose, data tables become grids
//! - **Spans**: `colspan` aware column sizing
//! - **Robust input**: HTML5 error recovery and a nesting depth guard
//! - **Cleanup pipeline**: optional normalization for downstream indexing
//! - **Parallel processing**: Uses Rayon for batches of documents

pub mod buffer;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export commonly used types
pub use buffer::TextBuffer;
pub use detect::{check_input, is_convertible, MIN_INPUT_LEN};
pub use error::{Error, Result};
pub use model::{Element, Node, TableCell, TableGrid, TableRow};
pub use parser::{ErrorMode, HtmlParser, ParseOptions, TableKind};
pub use render::{
    CleanupOptions, CleanupPreset, ExtractionStats, RenderOptions, RenderResult,
    DEFAULT_WRAP_WIDTH,
};

use rayon::prelude::*;
use std::io::Read;
use std::path::Path;

/// Convert HTML bytes to plain text.
///
/// Returns `None` when the input is shorter than 10 bytes, cannot be
/// parsed, has no root element or yields no text. The cause is logged at
/// debug level.
///
/// # Example
///
/// ```
/// let text = textify::html_to_text(b"<p>Hello there</p>").unwrap();
/// assert!(text.contains("Hello there"));
///
/// assert!(textify::html_to_text(b"<br>").is_none());
/// ```
pub fn html_to_text(data: &[u8]) -> Option<String> {
    html_to_text_with_width(data, None)
}

/// Convert HTML bytes to plain text, wrapping layout tables at `width`.
///
/// A width of `None` or `Some(0)` uses the default of 72 columns.
pub fn html_to_text_with_width(data: &[u8], width: Option<usize>) -> Option<String> {
    let options = RenderOptions::new().with_width_hint(width);
    match convert_bytes_with_options(data, &ParseOptions::default(), &options) {
        Ok(result) => Some(result.content),
        Err(e) => {
            log::debug!("conversion failed: {}", e);
            None
        }
    }
}

/// Convert HTML bytes to plain text.
///
/// # Example
///
/// ```
/// use textify::{convert_bytes, Error};
///
/// let text = convert_bytes(b"<p>Some text</p>").unwrap();
/// assert!(text.contains("Some text"));
///
/// let err = convert_bytes(b"<span> </span>").unwrap_err();
/// assert!(matches!(err, Error::NoTextExtracted));
/// ```
pub fn convert_bytes(data: &[u8]) -> Result<String> {
    convert_bytes_with_options(data, &ParseOptions::default(), &RenderOptions::default())
        .map(|result| result.content)
}

/// Convert HTML bytes with custom options, returning statistics as well.
pub fn convert_bytes_with_options(
    data: &[u8],
    parse_options: &ParseOptions,
    render_options: &RenderOptions,
) -> Result<RenderResult> {
    let document = HtmlParser::with_options(parse_options.clone()).parse_bytes(data)?;
    render::to_text_with_stats(&document, render_options)
}

/// Convert an HTML file to plain text.
///
/// # Example
///
/// ```no_run
/// let text = textify::convert_file("message.html").unwrap();
/// println!("{}", text);
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let document = HtmlParser::new().parse_file(path)?;
    render::to_text(&document, &RenderOptions::default())
}

/// Convert everything a reader yields.
///
/// # Example
///
/// ```no_run
/// use std::io;
///
/// let text = textify::convert_reader(io::stdin().lock()).unwrap();
/// println!("{}", text);
/// ```
pub fn convert_reader<R: Read>(reader: R) -> Result<String> {
    let document = HtmlParser::new().parse_reader(reader)?;
    render::to_text(&document, &RenderOptions::default())
}

/// Convert many independent documents in parallel.
///
/// The output has one entry per input, in input order, with `None` for
/// inputs that fail to convert.
pub fn convert_batch(inputs: &[&[u8]], options: &RenderOptions) -> Vec<Option<String>> {
    let parse_options = ParseOptions::default();
    inputs
        .par_iter()
        .map(|data| match convert_bytes_with_options(data, &parse_options, options) {
            Ok(result) => Some(result.content),
            Err(e) => {
                log::debug!("batch item failed: {}", e);
                None
            }
        })
        .collect()
}

/// Builder for parsing and converting HTML documents.
///
/// # Example
///
/// ```
/// use textify::{CleanupPreset, Textify};
///
/// let text = Textify::new()
///     .with_width(40)
///     .with_cleanup(CleanupPreset::Standard)
///     .parse_bytes(b"<html><body><h1>Title</h1><p>Body</p></body></html>")?
///     .to_text()?;
/// assert_eq!(text, "\nTitle\nBody");
/// # Ok::<(), textify::Error>(())
/// ```
pub struct Textify {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Textify {
    /// Create a new Textify builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Replace invalid UTF-8 instead of failing.
    pub fn lenient(mut self) -> Self {
        self.parse_options = self.parse_options.lenient();
        self
    }

    /// Fail on invalid UTF-8.
    pub fn strict(mut self) -> Self {
        self.parse_options = self.parse_options.strict();
        self
    }

    /// Set the wrap width for layout tables.
    pub fn with_width(mut self, width: usize) -> Self {
        self.render_options = self.render_options.with_wrap_width(width);
        self
    }

    /// Limit how deeply nested markup is followed.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.parse_options = self.parse_options.with_max_depth(depth);
        self.render_options = self.render_options.with_max_depth(depth);
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup(mut self, preset: CleanupPreset) -> Self {
        self.render_options = self.render_options.with_cleanup_preset(preset);
        self
    }

    /// Draw data tables without repeating their text afterwards.
    pub fn without_table_echo(mut self) -> Self {
        self.render_options = self.render_options.with_table_echo(false);
        self
    }

    /// Parse an HTML file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<TextifyResult> {
        let document = HtmlParser::with_options(self.parse_options).parse_file(path)?;
        Ok(TextifyResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse HTML from bytes.
    pub fn parse_bytes(self, data: &[u8]) -> Result<TextifyResult> {
        let document = HtmlParser::with_options(self.parse_options).parse_bytes(data)?;
        Ok(TextifyResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Textify {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing an HTML document.
pub struct TextifyResult {
    /// The parsed document
    pub document: Node,
    /// Render options to use
    render_options: RenderOptions,
}

impl TextifyResult {
    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document, &self.render_options)
    }

    /// Convert to plain text with statistics.
    pub fn to_text_with_stats(&self) -> Result<RenderResult> {
        render::to_text_with_stats(&self.document, &self.render_options)
    }

    /// Get the document.
    pub fn document(&self) -> &Node {
        &self.document
    }
}
