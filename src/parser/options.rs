//! Parsing options and configuration.

/// Default bound on tree depth, shared by the parser and the renderer.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Options for parsing HTML documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Deepest node level kept in the tree; anything below is dropped
    pub max_depth: usize,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (replace undecodable bytes).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Enable strict mode (reject undecodable bytes).
    pub fn strict(mut self) -> Self {
        self.error_mode = ErrorMode::Strict;
        self
    }

    /// Set the maximum tree depth.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            error_mode: ErrorMode::Lenient,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Error handling mode during decoding.
///
/// Markup errors are always recovered from; the mode only decides what
/// happens to input that is not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on invalid UTF-8
    Strict,
    /// Replace invalid UTF-8 with U+FFFD and continue
    #[default]
    Lenient,
}
