//! Integration tests for table classification, grid building and rendering.

use textify::model::{Element, Node, TableGrid};
use textify::parser::{build_grid, classify_table, parse_span, HtmlParser, TableKind};
use textify::render::to_ascii_table;

fn find_table(node: &Node) -> Option<&Element> {
    if let Some(el) = node.as_element() {
        if el.is("table") {
            return Some(el);
        }
    }
    node.children().iter().find_map(find_table)
}

fn parse_table(html: &str) -> Element {
    let doc = HtmlParser::new().parse_str(html);
    find_table(&doc).cloned().expect("markup contains a table")
}

#[test]
fn test_classify_parsed_tables() {
    let data = parse_table("<table><tr><td>1</td><td>2</td></tr><tr><td>3</td><td>4</td></tr></table>");
    assert_eq!(classify_table(&data), TableKind::Data);

    let layout = parse_table("<table><tr><td>only</td><td>row</td></tr></table>");
    assert_eq!(classify_table(&layout), TableKind::Layout);

    let sectioned = parse_table(
        "<table><thead><tr><th>h1</th><th>h2</th></tr></thead>\
         <tbody><tr><td>a</td><td>b</td></tr></tbody></table>",
    );
    assert_eq!(classify_table(&sectioned), TableKind::Data);
}

#[test]
fn test_nested_rows_do_not_count() {
    // Two rows exist, but only inside the nested table.
    let table = parse_table(
        "<table><tr><td><table><tr><td>a</td><td>b</td></tr><tr><td>c</td><td>d</td></tr></table></td></tr></table>",
    );
    assert_eq!(classify_table(&table), TableKind::Layout);
}

#[test]
fn test_grid_from_parsed_markup() {
    let table = parse_table(
        "<table><tr><th>Name</th><th>Qty</th></tr>\
         <tr><td>  apples  </td><td><b>3</b> kg</td></tr></table>",
    );
    let grid = build_grid(&table);

    assert_eq!(grid.row_count(), 2);
    assert_eq!(grid.column_count(), 2);
    assert_eq!(grid.rows[1].cells[0].content, "apples ");
    assert_eq!(grid.rows[1].cells[1].content, "3 kg ");
    assert_eq!(grid.column_widths(), vec![7, 5]);
}

#[test]
fn test_cells_before_rows_are_dropped() {
    let mut table = Element::new("table").with_child(Element::new("td").with_text("stray"));
    table.push_child(Element::new("tr").with_child(Element::new("td").with_text("kept")));

    let grid = build_grid(&table);
    assert_eq!(grid.row_count(), 1);
    assert_eq!(grid.rows[0].cells.len(), 1);
    assert_eq!(grid.rows[0].cells[0].content, "kept ");
}

#[test]
fn test_span_attributes() {
    let table = parse_table(
        r#"<table><tr><td colspan="3x" rowspan="-2">a</td><td colspan="99999">b</td></tr></table>"#,
    );
    let grid = build_grid(&table);
    let cells = &grid.rows[0].cells;

    assert_eq!(cells[0].colspan, 3);
    assert_eq!(cells[0].rowspan, 1);
    assert_eq!(cells[1].colspan, 1000);
    assert!(grid.has_merged_cells());

    assert_eq!(parse_span(Some("  4")), 4);
    assert_eq!(parse_span(Some("abc")), 1);
    assert_eq!(parse_span(Some("0")), 1);
    assert_eq!(parse_span(None), 1);
}

#[test]
fn test_render_parsed_grid() {
    let table = parse_table("<table><tr><td>x</td><td>yy</td></tr><tr><td>zzz</td></tr></table>");
    let text = to_ascii_table(&build_grid(&table));

    let expected = "\
+------+-----+
| x    | yy  |
+------+-----+
| zzz  |
+------+-----+
";
    assert_eq!(text, expected);
}

#[test]
fn test_wide_characters_are_measured_by_display_width() {
    let grid = TableGrid::from_rows([vec!["日本", "a"], vec!["x", "b"]]);
    assert_eq!(grid.column_widths(), vec![4, 1]);

    let text = to_ascii_table(&grid);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[1], "| 日本 | a |");
    assert_eq!(lines[3], "| x    | b |");
}

#[test]
fn test_grid_serializes() {
    let grid = TableGrid::from_rows([vec!["a", "b"]]);
    let json = serde_json::to_string(&grid).unwrap();
    assert!(json.contains("\"content\":\"a\""));
    assert!(json.contains("\"colspan\":1"));
}
