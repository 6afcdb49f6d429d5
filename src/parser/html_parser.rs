//! HTML parser front-end.
//!
//! Markup is parsed by html5ever (through `scraper`), which always recovers
//! from malformed input and never fetches external resources. The root
//! element of the resulting arena tree is copied into the crate's own
//! [`Node`] type, dropping anything nested deeper than
//! [`ParseOptions::max_depth`].
//!
//! Scripting is treated as disabled, so `noscript` content is parsed as
//! markup rather than as a single raw text node.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{ElementRef, Html, HtmlTreeSink, Node as DomNode};

use crate::detect::{check_input, decode_input};
use crate::error::Result;
use crate::model::{Element, Node};

use super::ParseOptions;

/// HTML parser producing [`Node`] trees.
#[derive(Debug, Clone, Default)]
pub struct HtmlParser {
    options: ParseOptions,
}

impl HtmlParser {
    /// Create a parser with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with custom options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Get the parser options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parse a file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Node> {
        let file = File::open(path)?;
        self.parse_reader(BufReader::new(file))
    }

    /// Parse everything a reader yields.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<Node> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        self.parse_bytes(&data)
    }

    /// Parse markup bytes.
    ///
    /// Fails with `InvalidInput` for empty or too-short buffers and with
    /// `Parse` when strict decoding rejects the bytes.
    pub fn parse_bytes(&self, data: &[u8]) -> Result<Node> {
        check_input(data)?;
        let source = decode_input(data, self.options.error_mode)?;
        Ok(self.parse_str(&source))
    }

    /// Parse already decoded markup. Never fails.
    pub fn parse_str(&self, source: &str) -> Node {
        let html = parse_document(source);
        if !html.errors.is_empty() {
            log::debug!("recovered from {} markup errors", html.errors.len());
        }

        let mut truncated = 0usize;
        let root = convert_element(html.root_element(), 1, self.options.max_depth, &mut truncated);
        if truncated > 0 {
            log::warn!(
                "dropped {} subtrees nested deeper than {} levels",
                truncated,
                self.options.max_depth
            );
        }
        Node::Other(vec![Node::Element(root)])
    }
}

fn parse_document(source: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    driver::parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(source)
}

fn convert_element(
    el: ElementRef<'_>,
    depth: usize,
    max_depth: usize,
    truncated: &mut usize,
) -> Element {
    let value = el.value();
    let mut element = Element::new(value.name());
    for (name, attr) in value.attrs() {
        element = element.with_attr(name, attr);
    }

    if !el.has_children() {
        return element;
    }
    if depth >= max_depth {
        *truncated += 1;
        return element;
    }

    element.children = el
        .children()
        .map(|child| match child.value() {
            DomNode::Text(text) => Node::text(&**text),
            DomNode::Element(_) => match ElementRef::wrap(child) {
                Some(child) => {
                    Node::Element(convert_element(child, depth + 1, max_depth, truncated))
                }
                None => Node::Other(Vec::new()),
            },
            // Comments and processing instructions carry no text.
            _ => Node::Other(Vec::new()),
        })
        .collect();
    element
}
