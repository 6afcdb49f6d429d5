//! Plain text rendering for HTML document trees.

use crate::buffer::{is_markup_space, TextBuffer};
use crate::error::{Error, Result};
use crate::model::{Element, Node};
use crate::parser::{GridBuilder, TableDetector, TableKind};

use super::{render_ascii_table, wrap_into, CleanupPipeline, ExtractionStats, RenderOptions, RenderResult};

/// Convert a document tree to plain text.
pub fn to_text(root: &Node, options: &RenderOptions) -> Result<String> {
    to_text_with_stats(root, options).map(|result| result.content)
}

/// Convert a document tree to plain text with statistics.
pub fn to_text_with_stats(root: &Node, options: &RenderOptions) -> Result<RenderResult> {
    TextRenderer::new(options.clone()).render(root)
}

/// Elements that start a new line.
const BLOCK_TAGS: &[&str] = &[
    "br", "p", "div", "h1", "h2", "h3", "h4", "h5", "h6", "li", "tr",
];

/// Elements whose content is never shown.
const SUPPRESSED_TAGS: &[&str] = &["script", "style", "meta", "link", "title"];

/// Recursive tree-to-text walker.
pub struct TextRenderer {
    options: RenderOptions,
    detector: TableDetector,
    grid_builder: GridBuilder,
    stats: ExtractionStats,
}

impl TextRenderer {
    /// Create a new text renderer.
    pub fn new(options: RenderOptions) -> Self {
        let detector = TableDetector::with_config(options.table_detector.clone());
        let grid_builder = GridBuilder::new().with_max_depth(options.max_depth);
        Self {
            options,
            detector,
            grid_builder,
            stats: ExtractionStats::new(),
        }
    }

    /// Render a whole document.
    ///
    /// Walks the root element, collapses blank lines and fails when nothing
    /// but an empty string is left.
    pub fn render(mut self, root: &Node) -> Result<RenderResult> {
        let element = root.root_element().ok_or(Error::EmptyDocument)?;

        let mut buffer = TextBuffer::new();
        self.walk_element(element, 0, &mut buffer);
        log::debug!("walker produced {} bytes", buffer.len());

        let content = CleanupPipeline::new(self.options.cleanup.clone()).process(buffer.as_str());
        if content.is_empty() {
            return Err(Error::NoTextExtracted);
        }

        self.stats.count_text(&content);
        Ok(RenderResult::new(content, self.stats))
    }

    /// Walk a single node into `buffer`, without cleanup.
    pub fn render_node(&mut self, node: &Node, buffer: &mut TextBuffer) {
        self.walk(node, 0, buffer);
    }

    /// Statistics gathered so far.
    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    fn walk(&mut self, node: &Node, depth: usize, out: &mut TextBuffer) {
        match node {
            Node::Text(text) => {
                let text = text.trim_start_matches(is_markup_space);
                if !text.is_empty() {
                    out.push_str(text);
                    out.push(' ');
                    self.stats.add_text_node();
                }
            }
            Node::Element(el) => self.walk_element(el, depth, out),
            Node::Other(children) => self.walk_children(children, depth, out),
        }
    }

    fn walk_element(&mut self, el: &Element, depth: usize, out: &mut TextBuffer) {
        match el.tag.as_str() {
            "table" => {
                if self.render_table(el, depth, out) {
                    return;
                }
            }
            "img" => {
                self.stats.add_image();
                match el.attr("alt").filter(|alt| !alt.is_empty()) {
                    Some(alt) => {
                        out.push_str("[Image: ");
                        out.push_str(alt);
                        out.push(']');
                    }
                    None => out.push_str("[Image]"),
                }
                return;
            }
            tag if BLOCK_TAGS.contains(&tag) => out.push('\n'),
            tag if SUPPRESSED_TAGS.contains(&tag) => {
                self.stats.add_suppressed();
                return;
            }
            _ => {}
        }
        self.walk_children(&el.children, depth, out);
    }

    /// Render a table. Returns true when its children are fully handled.
    fn render_table(&mut self, table: &Element, depth: usize, out: &mut TextBuffer) -> bool {
        match self.detector.classify(table) {
            TableKind::Layout => {
                self.stats.add_layout_table();
                let mut flat = TextBuffer::new();
                self.walk_children(&table.children, depth, &mut flat);
                wrap_into(out, flat.as_str(), self.options.effective_wrap_width());
                true
            }
            TableKind::Data => {
                self.stats.add_data_table();
                let grid = self.grid_builder.build(table);
                render_ascii_table(&grid, out);
                !self.options.echo_table_text
            }
        }
    }

    fn walk_children(&mut self, children: &[Node], depth: usize, out: &mut TextBuffer) {
        if children.is_empty() {
            return;
        }
        if depth >= self.options.max_depth {
            self.stats.add_truncated();
            log::warn!("skipping content nested deeper than {} levels", self.options.max_depth);
            return;
        }
        for child in children {
            self.walk(child, depth + 1, out);
        }
    }
}
