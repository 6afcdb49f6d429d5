//! Append-only text accumulator shared by every rendering stage.

use std::fmt;

/// Growable output buffer.
///
/// Text only ever gets appended; the finished content is taken out once
/// with [`TextBuffer::into_string`] or copied with [`TextBuffer::snapshot`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
}

impl TextBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty buffer with room for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            text: String::with_capacity(capacity),
        }
    }

    /// Append a string.
    pub fn push_str(&mut self, s: &str) {
        self.text.push_str(s);
    }

    /// Append a single character.
    pub fn push(&mut self, ch: char) {
        self.text.push(ch);
    }

    /// Append `ch` `count` times.
    pub fn push_repeated(&mut self, ch: char, count: usize) {
        self.text.extend(std::iter::repeat(ch).take(count));
    }

    /// Borrow the current content.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Copy the current content out.
    pub fn snapshot(&self) -> String {
        self.text.clone()
    }

    /// Consume the buffer and return its content.
    pub fn into_string(self) -> String {
        self.text
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if nothing has been appended yet.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the last line has not been terminated.
    pub fn ends_mid_line(&self) -> bool {
        !self.text.is_empty() && !self.text.ends_with('\n')
    }
}

/// Whitespace that is stripped from text runs.
///
/// ASCII only: space, tab, line feed, vertical tab, form feed and carriage
/// return. Non-breaking spaces are content.
pub fn is_markup_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r')
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
