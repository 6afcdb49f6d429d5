//! Rendering options and configuration.

use super::{CleanupOptions, CleanupPreset};
use crate::parser::{TableDetectorConfig, DEFAULT_MAX_DEPTH};

/// Wrap width used when the caller supplies none.
pub const DEFAULT_WRAP_WIDTH: usize = 72;

/// Options for rendering a document tree as text.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Column width for layout-table prose (None or 0 = default)
    pub wrap_width: Option<usize>,

    /// Deepest node level the walker descends to
    pub max_depth: usize,

    /// Walk a data table's children again after drawing its grid
    pub echo_table_text: bool,

    /// Layout/data classification thresholds
    pub table_detector: TableDetectorConfig,

    /// Text cleanup options
    pub cleanup: CleanupOptions,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the wrap width.
    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = Some(width);
        self
    }

    /// Set the wrap width from an optional caller preference.
    pub fn with_width_hint(mut self, width: Option<usize>) -> Self {
        self.wrap_width = width;
        self
    }

    /// Width actually used for wrapping.
    pub fn effective_wrap_width(&self) -> usize {
        match self.wrap_width {
            Some(width) if width > 0 => width,
            _ => DEFAULT_WRAP_WIDTH,
        }
    }

    /// Set the maximum walk depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Enable or disable the second pass over data table content.
    pub fn with_table_echo(mut self, echo: bool) -> Self {
        self.echo_table_text = echo;
        self
    }

    /// Set table classification thresholds.
    pub fn with_table_detector(mut self, config: TableDetectorConfig) -> Self {
        self.table_detector = config;
        self
    }

    /// Set cleanup options.
    pub fn with_cleanup(mut self, cleanup: CleanupOptions) -> Self {
        self.cleanup = cleanup;
        self
    }

    /// Set cleanup preset.
    pub fn with_cleanup_preset(mut self, preset: CleanupPreset) -> Self {
        self.cleanup = CleanupOptions::from_preset(preset);
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            wrap_width: None,
            max_depth: DEFAULT_MAX_DEPTH,
            echo_table_text: true,
            table_detector: TableDetectorConfig::default(),
            cleanup: CleanupOptions::default(),
        }
    }
}
