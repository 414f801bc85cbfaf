use expect_test::expect;
use spansel::{selection_at_positions, LineIndex, MatcherConfig};
use tower_lsp::lsp_types::{Position, SelectionRange};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Format a selection result into a deterministic, human-readable string.
///
/// A real selection becomes `<start_line>:<start_col>-<end_line>:<end_col>`;
/// an empty range at the cursor (the "leave the selection alone" signal)
/// becomes `no selection change`.
fn format_selection(selection: &SelectionRange, cursor: Position) -> String {
    let range = selection.range;
    if range.start == range.end && range.start == cursor {
        return "no selection change".to_string();
    }
    format!(
        "{}:{}-{}:{}",
        range.start.line, range.start.character, range.end.line, range.end.character,
    )
}

/// Run one query through the public API with default configuration.
fn select_at(source: &str, line: u32, character: u32) -> String {
    let cursor = Position::new(line, character);
    let line_index = LineIndex::new(source.to_string());
    let selections = selection_at_positions(&line_index, MatcherConfig::default(), &[cursor]);
    format_selection(&selections[0], cursor)
}

// ---------------------------------------------------------------------------
// Tests — bracket selection
// ---------------------------------------------------------------------------

#[test]
fn bracket_interior_excludes_delimiters() {
    let actual = select_at("fn main() { let x = (1 + 2); }", 0, 23);
    let expected = expect![[r#"0:21-0:26"#]];
    expected.assert_eq(&actual);
}

#[test]
fn nested_brackets_select_the_innermost() {
    let actual = select_at("{ [ ( x ) ] }", 0, 6);
    let expected = expect![[r#"0:5-0:8"#]];
    expected.assert_eq(&actual);
}

#[test]
fn nested_brackets_middle_ring() {
    let actual = select_at("{ [ ( x ) ] }", 0, 9);
    let expected = expect![[r#"0:3-0:10"#]];
    expected.assert_eq(&actual);
}

#[test]
fn unbalanced_bracket_changes_nothing() {
    let actual = select_at("(a", 0, 2);
    let expected = expect![[r#"no selection change"#]];
    expected.assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Tests — tag selection
// ---------------------------------------------------------------------------

#[test]
fn nested_tags_select_the_innermost() {
    let actual = select_at("<a><b>text</b></a>", 0, 8);
    let expected = expect![[r#"0:6-0:10"#]];
    expected.assert_eq(&actual);
}

#[test]
fn same_name_tags_track_depth() {
    let actual = select_at("<div><div>x</div></div>", 0, 10);
    let expected = expect![[r#"0:10-0:11"#]];
    expected.assert_eq(&actual);
}

#[test]
fn same_name_tags_outer_interior_at_the_boundary() {
    let actual = select_at("<div><div>x</div></div>", 0, 5);
    let expected = expect![[r#"0:5-0:17"#]];
    expected.assert_eq(&actual);
}

#[test]
fn tag_selection_across_lines() {
    let actual = select_at("<html>\n  <body>text</body>\n</html>", 1, 11);
    let expected = expect![[r#"1:8-1:12"#]];
    expected.assert_eq(&actual);
}

#[test]
fn enclosing_tag_interior_spans_lines() {
    // Cursor on the indentation of line 1: only <html> encloses it.
    let actual = select_at("<html>\n  <body>text</body>\n</html>", 1, 1);
    let expected = expect![[r#"0:6-2:0"#]];
    expected.assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Tests — combined ranking
// ---------------------------------------------------------------------------

#[test]
fn bracket_inside_tag_wins() {
    let actual = select_at("<ul>\n  <li>[a, b]</li>\n</ul>", 1, 9);
    let expected = expect![[r#"1:7-1:11"#]];
    expected.assert_eq(&actual);
}

#[test]
fn tag_wins_outside_the_bracket_pair() {
    let actual = select_at("<ul>\n  <li>[a, b]</li>\n</ul>", 1, 6);
    let expected = expect![[r#"1:6-1:12"#]];
    expected.assert_eq(&actual);
}

// ---------------------------------------------------------------------------
// Tests — engine behavior
// ---------------------------------------------------------------------------

#[test]
fn plain_text_changes_nothing() {
    let actual = select_at("plain text, no structure here", 0, 10);
    let expected = expect![[r#"no selection change"#]];
    expected.assert_eq(&actual);
}

#[test]
fn repeated_queries_are_identical() {
    let source = "<div>{ (a) }</div>";
    let first = select_at(source, 0, 8);
    let second = select_at(source, 0, 8);
    assert_eq!(first, second);

    let expected = expect![[r#"0:8-0:9"#]];
    expected.assert_eq(&first);
}

#[test]
fn positions_in_one_request_are_independent() {
    let source = "(a) <b>x</b>";
    let line_index = LineIndex::new(source.to_string());
    let cursors = [
        Position::new(0, 1),
        Position::new(0, 3),
        Position::new(0, 7),
    ];
    let selections = selection_at_positions(&line_index, MatcherConfig::default(), &cursors);

    let actual: Vec<String> = selections
        .iter()
        .zip(cursors)
        .map(|(s, c)| format_selection(s, c))
        .collect();
    let expected = expect![[r#"
        [
            "0:1-0:2",
            "no selection change",
            "0:7-0:8",
        ]
    "#]];
    expected.assert_debug_eq(&actual);
}
