//! Input validation and decoding.

use std::borrow::Cow;

use crate::error::{Error, Result};
use crate::parser::ErrorMode;

/// Inputs shorter than this cannot hold a meaningful document.
pub const MIN_INPUT_LEN: usize = 10;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reject empty or implausibly short input.
///
/// # Returns
/// * `Ok(())` if the buffer is long enough to be worth parsing
/// * `Err(Error::InvalidInput)` otherwise
pub fn check_input(data: &[u8]) -> Result<()> {
    if data.is_empty() {
        return Err(Error::InvalidInput("input is empty".into()));
    }
    if data.len() < MIN_INPUT_LEN {
        return Err(Error::InvalidInput(format!(
            "input is {} bytes, at least {} required",
            data.len(),
            MIN_INPUT_LEN
        )));
    }
    Ok(())
}

/// Decode markup bytes to text.
///
/// A leading UTF-8 byte order mark is dropped. In lenient mode invalid
/// sequences become U+FFFD; in strict mode they are a parse error.
pub fn decode_input(data: &[u8], mode: ErrorMode) -> Result<Cow<'_, str>> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    match mode {
        ErrorMode::Lenient => Ok(String::from_utf8_lossy(data)),
        ErrorMode::Strict => std::str::from_utf8(data).map(Cow::Borrowed).map_err(|e| {
            Error::Parse(format!("invalid UTF-8 at byte {}", e.valid_up_to()))
        }),
    }
}

/// Check if bytes are long enough to be converted.
pub fn is_convertible(data: &[u8]) -> bool {
    check_input(data).is_ok()
}
