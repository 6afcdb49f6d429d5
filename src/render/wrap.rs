//! Greedy character-column wrapping.

use crate::buffer::TextBuffer;

/// Wrap `text` at `width` columns and append it to `buffer`.
///
/// Breaks are inserted before the first non-space character past the
/// limit, with no look-ahead for word boundaries. Embedded newlines pass
/// through and restart the column count. A width of 0 is treated as 1.
pub fn wrap_into(buffer: &mut TextBuffer, text: &str, width: usize) {
    let width = width.max(1);
    let mut col = 0usize;
    for ch in text.chars() {
        if ch == '\n' {
            buffer.push('\n');
            col = 0;
            continue;
        }
        if col >= width && ch != ' ' {
            buffer.push('\n');
            col = 0;
        }
        buffer.push(ch);
        col += 1;
    }
    if col > 0 {
        buffer.push('\n');
    }
}

/// Wrap `text` at `width` columns into a new string.
pub fn wrap(text: &str, width: usize) -> String {
    let mut buffer = TextBuffer::with_capacity(text.len() + text.len() / width.max(1) + 1);
    wrap_into(&mut buffer, text, width);
    buffer.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hard_break_without_spaces() {
        assert_eq!(wrap("abcdefghij", 4), "abcd\nefgh\nij\n");
    }

    #[test]
    fn test_spaces_never_start_a_line() {
        // The space at column 4 stays on the first line.
        assert_eq!(wrap("abcd efgh", 4), "abcd \nefgh\n");
    }

    #[test]
    fn test_embedded_newline_resets_column() {
        assert_eq!(wrap("ab\ncdef", 3), "ab\ncde\nf\n");
    }

    #[test]
    fn test_no_trailing_newline_duplication() {
        assert_eq!(wrap("abc\n", 10), "abc\n");
        assert_eq!(wrap("", 10), "");
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(wrap("ab", 0), "a\nb\n");
    }

    #[test]
    fn test_appends_to_existing_content() {
        let mut buffer = TextBuffer::new();
        buffer.push_str("head\n");
        wrap_into(&mut buffer, "tail", 72);
        assert_eq!(buffer.as_str(), "head\ntail\n");
    }
}
