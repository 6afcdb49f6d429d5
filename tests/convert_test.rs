//! End-to-end tests for HTML to text conversion.

use textify::{
    convert_bytes, convert_file, html_to_text, html_to_text_with_width, CleanupPreset, Error,
    Textify,
};

// ==================== Failure Contract ====================

#[test]
fn test_short_input_is_absent() {
    assert!(html_to_text(b"").is_none());
    assert!(html_to_text(b"<i>ab</i>").is_none());
    assert!(html_to_text(b"123456789").is_none());
}

#[test]
fn test_whitespace_only_is_absent() {
    assert!(html_to_text(b"            ").is_none());
    assert!(html_to_text(b"<html><body> \n \t </body></html>").is_none());
    assert!(html_to_text(b"<script>var x = 1;</script>").is_none());
}

#[test]
fn test_block_only_output_is_not_absent() {
    // Line breaks alone still count as text.
    assert_eq!(html_to_text(b"<p></p><br><br>").as_deref(), Some("\n\n"));
}

// ==================== Walker ====================

#[test]
fn test_script_and_style_are_dropped() {
    let text = html_to_text(b"<script>x</script><p>hi</p>").unwrap();
    assert!(text.contains("hi"));
    assert!(!text.contains('x'));

    let html = b"<html><head><title>Subject</title><style>p { color: red }</style>\
                 <meta charset=\"utf-8\"><link rel=\"stylesheet\" href=\"a.css\"></head>\
                 <body>body text</body></html>";
    assert_eq!(html_to_text(html).unwrap(), "body text ");
}

#[test]
fn test_images() {
    let text = html_to_text(br#"<img alt="cat"/>"#).unwrap();
    assert!(text.contains("[Image: cat]"));

    let text = html_to_text(br#"<div><img src="a.png"/></div>"#).unwrap();
    assert!(text.contains("[Image]"));
}

#[test]
fn test_noscript_content_is_rendered_as_markup() {
    let html = br#"<p>Hello</p><noscript><img src="pixel.gif" alt="track"></noscript>"#;
    let text = html_to_text(html).unwrap();
    assert_eq!(text, "\nHello [Image: track]");
    assert!(!text.contains("<img"));
}

#[test]
fn test_nbsp_is_not_stripped() {
    let text = html_to_text("<html><body>\u{a0}</body></html>".as_bytes());
    assert_eq!(text.as_deref(), Some("\u{a0} "));

    let text = html_to_text(b"<p>&nbsp;&nbsp;</p>").unwrap();
    assert_eq!(text, "\n\u{a0}\u{a0} ");
}

#[test]
fn test_text_runs_keep_trailing_whitespace() {
    let text = html_to_text(b"<p>Hello <b>World</b></p>").unwrap();
    assert_eq!(text, "\nHello  World ");
}

#[test]
fn test_headings_and_lists() {
    let html = b"<h1>Title</h1><ul><li>one</li><li>two</li></ul><h6>End</h6>";
    assert_eq!(html_to_text(html).unwrap(), "\nTitle \none \ntwo \nEnd ");
}

#[test]
fn test_entities_are_decoded() {
    let text = html_to_text(b"<p>Fish &amp; chips &lt;3</p>").unwrap();
    assert_eq!(text, "\nFish & chips <3 ");
}

#[test]
fn test_comments_are_ignored() {
    let text = html_to_text(b"<!-- hidden note --><p>shown</p>").unwrap();
    assert_eq!(text, "\nshown ");
}

#[test]
fn test_byte_order_mark() {
    let text = html_to_text(b"\xEF\xBB\xBF<p>bom text</p>").unwrap();
    assert_eq!(text, "\nbom text ");
}

#[test]
fn test_malformed_markup_is_recovered() {
    let text = html_to_text(b"<div><p>unclosed <b>bold<div>next").unwrap();
    assert!(text.contains("unclosed"));
    assert!(text.contains("bold"));
    assert!(text.contains("next"));
}

// ==================== Blank Lines ====================

#[test]
fn test_blank_lines_are_collapsed() {
    let text = html_to_text(b"<p></p><p></p><p></p><p>x</p>").unwrap();
    assert_eq!(text, "\n\nx ");
}

#[test]
fn test_output_never_has_three_newlines() {
    let html = b"<div><br><br><br><br><p><br></p><h1></h1>text<br><br><br></div>";
    let text = html_to_text(html).unwrap();
    assert!(!text.contains("\n\n\n"));
}

// ==================== Tables ====================

#[test]
fn test_presentation_table_is_prose() {
    let html = br#"<table role="PRESENTATION"><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table>"#;
    let text = html_to_text(html).unwrap();
    assert!(!text.contains('+'));
    assert!(!text.contains('|'));
    assert_eq!(text, "\na b \nc d \n");
}

#[test]
fn test_borderless_table_is_prose() {
    let html = br#"<table border="0"><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table>"#;
    assert!(!html_to_text(html).unwrap().contains('+'));
}

#[test]
fn test_single_row_table_is_prose() {
    let html = b"<table><tr><td>left</td><td>right</td></tr></table>";
    assert_eq!(html_to_text(html).unwrap(), "\nleft right \n");
}

#[test]
fn test_single_column_table_is_prose() {
    let html = b"<table><tr><td>one</td></tr><tr><td>two</td></tr></table>";
    assert!(!html_to_text(html).unwrap().contains('|'));
}

#[test]
fn test_data_table_grid() {
    let html = b"<table><tr><td>a</td><td>bb</td></tr><tr><td>ccc</td><td>d</td></tr></table>";
    let text = html_to_text(html).unwrap();
    let expected_grid = "\
+------+-----+
| a    | bb  |
+------+-----+
| ccc  | d   |
+------+-----+
";
    assert!(text.starts_with(expected_grid));
    // Cell text is walked a second time after the grid.
    assert_eq!(&text[expected_grid.len()..], "\na bb \nccc d ");
}

#[test]
fn test_nbsp_cell_keeps_its_width() {
    let html = b"<table><tr><td>&nbsp;</td><td>x</td></tr><tr><td>a</td><td>b</td></tr></table>";
    let text = html_to_text(html).unwrap();
    assert!(text.starts_with("+----+----+\n| \u{a0}  | x  |\n"));
}

#[test]
fn test_layout_table_with_caption_keeps_rows() {
    let html = b"<table role=\"presentation\">\n  <caption>Note</caption>\
        <tr><td>first</td></tr><tr><td>second</td></tr></table>";
    assert_eq!(html_to_text(html).unwrap(), "Note \nfirst \nsecond \n");
}

#[test]
fn test_data_table_without_echo() {
    let html = b"<table><tr><th>k</th><th>v</th></tr><tr><td>x</td><td>1</td></tr></table>";
    let text = Textify::new()
        .without_table_echo()
        .parse_bytes(html)
        .unwrap()
        .to_text()
        .unwrap();
    assert_eq!(
        text,
        "+----+----+\n| k  | v  |\n+----+----+\n| x  | 1  |\n+----+----+\n"
    );
}

#[test]
fn test_layout_table_is_wrapped() {
    let html = br#"<table border="0"><tr><td>the quick brown fox jumps</td></tr></table>"#;
    let text = html_to_text_with_width(html, Some(10)).unwrap();
    for line in text.lines() {
        // A line may run one column over when a space lands on the limit.
        assert!(line.chars().count() <= 11, "line too long: {:?}", line);
    }
    assert_eq!(text.split_whitespace().collect::<Vec<_>>().join(" "), "the quick brown fox jumps");
}

#[test]
fn test_nested_table_resets_outer_grid() {
    let html = b"<table>\
        <tr><td>outer</td><td><table>\
            <tr><td>in1</td><td>in2</td></tr>\
            <tr><td>in3</td><td>in4</td></tr>\
        </table></td></tr>\
        <tr><td>a</td><td>b</td></tr>\
        </table>";
    let text = Textify::new()
        .without_table_echo()
        .parse_bytes(html)
        .unwrap()
        .to_text()
        .unwrap();

    let first_grid: Vec<&str> = text.lines().take(7).collect();
    assert_eq!(
        first_grid,
        vec![
            "+------+------+",
            "| in1  | in2  |",
            "+------+------+",
            "| in3  | in4  |",
            "+------+------+",
            "| a    | b    |",
            "+------+------+",
        ]
    );
    assert!(!first_grid.iter().any(|line| line.contains("outer")));
}

#[test]
fn test_colspan_cell_counts_at_start_column() {
    let html = br#"<table><tr><td colspan="2">wide heading</td></tr><tr><td>a</td><td>b</td></tr></table>"#;
    let text = html_to_text(html).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], format!("+{}+{}+", "-".repeat(15), "-".repeat(4)));
    assert_eq!(lines[1], "| wide heading  |");
    assert_eq!(lines[3], format!("| {:13} | {:2} |", "a ", "b "));
}

// ==================== Options ====================

#[test]
fn test_cleanup_presets() {
    let html = b"<p>one  </p>\n\n<p>two</p>";

    let minimal = Textify::new().parse_bytes(html).unwrap().to_text().unwrap();
    assert!(minimal.contains("one   "));

    let standard = Textify::new()
        .with_cleanup(CleanupPreset::Standard)
        .parse_bytes(html)
        .unwrap()
        .to_text()
        .unwrap();
    assert!(!standard.contains(" \n"));
    assert!(!standard.ends_with(' '));
}

#[test]
fn test_depth_guard_on_deep_nesting() {
    let mut html = String::from("<p>surface</p>");
    for _ in 0..2000 {
        html.push_str("<div>");
    }
    html.push_str("deep");

    let text = html_to_text(html.as_bytes()).unwrap();
    assert!(text.contains("surface"));
    assert!(!text.contains("deep"));
    assert!(!text.contains("\n\n\n"));
}

#[test]
fn test_strict_mode_rejects_bad_utf8() {
    let html = b"<p>bad \xFF\xFE bytes</p>";
    let result = Textify::new().strict().parse_bytes(html);
    assert!(matches!(result, Err(Error::Parse(_))));

    let text = convert_bytes(html).unwrap();
    assert!(text.contains('\u{FFFD}'));
}

#[test]
fn test_convert_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mail.html");
    std::fs::write(&path, "<html><body><p>From disk</p></body></html>").unwrap();

    assert_eq!(convert_file(&path).unwrap(), "\nFrom disk ");
    assert!(matches!(
        convert_file(dir.path().join("missing.html")),
        Err(Error::Io(_))
    ));
}
