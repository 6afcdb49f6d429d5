//! C-ABI FFI bindings for cross-language integration.
//!
//! This module provides a C-compatible API for using textify from other
//! languages such as C, C#, and Python.

use std::ffi::{c_char, CStr, CString};
use std::path::Path;
use std::ptr;
use std::slice;

use crate::render::RenderOptions;
use crate::{convert_bytes_with_options, html_to_text_with_width, HtmlParser, ParseOptions};

/// Result structure returned by FFI functions.
#[repr(C)]
pub struct TextifyOutput {
    /// Whether the operation succeeded.
    pub success: bool,
    /// The result data (null if failed). Must be freed with `textify_free_output`.
    pub data: *mut c_char,
    /// Error message (null if succeeded). Must be freed with `textify_free_output`.
    pub error: *mut c_char,
}

impl TextifyOutput {
    fn success(data: String) -> Self {
        match CString::new(data) {
            Ok(data) => Self {
                success: true,
                data: data.into_raw(),
                error: ptr::null_mut(),
            },
            Err(_) => Self::error("Output contains a NUL byte".to_string()),
        }
    }

    fn error(message: String) -> Self {
        Self {
            success: false,
            data: ptr::null_mut(),
            error: CString::new(message).unwrap_or_default().into_raw(),
        }
    }
}

/// Options for HTML conversion via FFI.
#[repr(C)]
pub struct TextifyOptions {
    /// Wrap width for layout tables (0 or negative = 72).
    pub width: i32,
    /// Replace invalid UTF-8 instead of failing.
    pub lenient: bool,
    /// Repeat data table text after the drawn grid.
    pub echo_table_text: bool,
}

impl Default for TextifyOptions {
    fn default() -> Self {
        Self {
            width: 0,
            lenient: true,
            echo_table_text: true,
        }
    }
}

fn width_hint(width: i32) -> Option<usize> {
    usize::try_from(width).ok().filter(|w| *w > 0)
}

/// Convert an HTML buffer to plain text.
///
/// Returns null when the input is null, shorter than 10 bytes, yields no
/// text, or the text cannot be represented as a C string.
///
/// # Safety
///
/// `data` must be null or point to `len` readable bytes.
/// A non-null result must be freed with `textify_free_string`.
#[no_mangle]
pub unsafe extern "C" fn textify_html_to_text(
    data: *const u8,
    len: usize,
    width: i32,
) -> *mut c_char {
    if data.is_null() || len == 0 {
        return ptr::null_mut();
    }

    let bytes = slice::from_raw_parts(data, len);
    html_to_text_with_width(bytes, width_hint(width))
        .and_then(|text| CString::new(text).ok())
        .map_or(ptr::null_mut(), CString::into_raw)
}

/// Convert an HTML buffer to plain text with options.
///
/// Unlike `textify_html_to_text`, failures carry an error message.
///
/// # Safety
///
/// `data` must be null or point to `len` readable bytes.
/// The returned output must be freed with `textify_free_output`.
#[no_mangle]
pub unsafe extern "C" fn textify_convert(
    data: *const u8,
    len: usize,
    options: TextifyOptions,
) -> TextifyOutput {
    if data.is_null() {
        return TextifyOutput::error("Data cannot be null".to_string());
    }

    let bytes = slice::from_raw_parts(data, len);
    let parse_opts = if options.lenient {
        ParseOptions::new().lenient()
    } else {
        ParseOptions::new().strict()
    };
    let render_opts = RenderOptions::new()
        .with_width_hint(width_hint(options.width))
        .with_table_echo(options.echo_table_text);

    match convert_bytes_with_options(bytes, &parse_opts, &render_opts) {
        Ok(result) => TextifyOutput::success(result.content),
        Err(e) => TextifyOutput::error(e.to_string()),
    }
}

/// Convert an HTML file to plain text.
///
/// # Safety
///
/// The `path` must be a valid null-terminated UTF-8 string.
/// The returned output must be freed with `textify_free_output`.
#[no_mangle]
pub unsafe extern "C" fn textify_convert_file(path: *const c_char) -> TextifyOutput {
    if path.is_null() {
        return TextifyOutput::error("Path cannot be null".to_string());
    }

    let path_str = match CStr::from_ptr(path).to_str() {
        Ok(s) => s,
        Err(_) => return TextifyOutput::error("Invalid UTF-8 path".to_string()),
    };

    match convert_file_internal(Path::new(path_str)) {
        Ok(text) => TextifyOutput::success(text),
        Err(e) => TextifyOutput::error(e.to_string()),
    }
}

fn convert_file_internal(path: &Path) -> crate::Result<String> {
    let doc = HtmlParser::with_options(ParseOptions::new().lenient()).parse_file(path)?;
    crate::render::to_text(&doc, &RenderOptions::default())
}

/// Free an output returned by any textify function.
///
/// # Safety
///
/// The `output` must have been returned by a textify function.
/// This function should only be called once per output.
#[no_mangle]
pub unsafe extern "C" fn textify_free_output(output: TextifyOutput) {
    if !output.data.is_null() {
        drop(CString::from_raw(output.data));
    }
    if !output.error.is_null() {
        drop(CString::from_raw(output.error));
    }
}

/// Free a string allocated by textify.
///
/// # Safety
///
/// The `ptr` must have been allocated by textify.
/// This function should only be called once per pointer.
#[no_mangle]
pub unsafe extern "C" fn textify_free_string(ptr: *mut c_char) {
    if !ptr.is_null() {
        drop(CString::from_raw(ptr));
    }
}

/// Get the version of the textify library.
///
/// The returned string is statically allocated and must not be freed.
#[no_mangle]
pub extern "C" fn textify_version() -> *const c_char {
    static VERSION: &[u8] = concat!(env!("CARGO_PKG_VERSION"), "\0").as_bytes();
    VERSION.as_ptr() as *const c_char
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        let version = textify_version();
        assert!(!version.is_null());
        let version = unsafe { CStr::from_ptr(version) };
        assert_eq!(version.to_str().unwrap(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_html_to_text() {
        let html = b"<p>from C</p><p>again</p>";
        unsafe {
            let text = textify_html_to_text(html.as_ptr(), html.len(), 0);
            assert!(!text.is_null());
            assert_eq!(CStr::from_ptr(text).to_str().unwrap(), "\nfrom C \nagain ");
            textify_free_string(text);
        }
    }

    #[test]
    fn test_html_to_text_failures() {
        unsafe {
            assert!(textify_html_to_text(ptr::null(), 20, 72).is_null());

            let short = b"<p>x</p>";
            assert!(textify_html_to_text(short.as_ptr(), short.len(), 72).is_null());

            let blank = b"<span>     </span>";
            assert!(textify_html_to_text(blank.as_ptr(), blank.len(), -5).is_null());
        }
    }

    #[test]
    fn test_convert_reports_errors() {
        let short = b"<p>x</p>";
        unsafe {
            let output = textify_convert(short.as_ptr(), short.len(), TextifyOptions::default());
            assert!(!output.success);
            assert!(output.data.is_null());
            assert!(!output.error.is_null());
            textify_free_output(output);

            let output = textify_convert(ptr::null(), 0, TextifyOptions::default());
            assert!(!output.success);
            textify_free_output(output);
        }
    }

    #[test]
    fn test_convert_success() {
        let html = b"<div>converted</div>";
        unsafe {
            let output = textify_convert(html.as_ptr(), html.len(), TextifyOptions::default());
            assert!(output.success);
            assert_eq!(CStr::from_ptr(output.data).to_str().unwrap(), "\nconverted ");
            textify_free_output(output);
        }
    }

    #[test]
    fn test_width_hint() {
        assert_eq!(width_hint(0), None);
        assert_eq!(width_hint(-1), None);
        assert_eq!(width_hint(40), Some(40));
    }

    #[test]
    fn test_null_path() {
        unsafe {
            let output = textify_convert_file(ptr::null());
            assert!(!output.success);
            assert!(!output.error.is_null());
            textify_free_output(output);
        }
    }
}
