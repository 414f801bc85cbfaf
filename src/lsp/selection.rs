//! Selection ranges for enclosing structural units.

use tower_lsp::lsp_types::{Position, Range, SelectionRange};

use crate::document::LineIndex;
use crate::matcher::enclosing_span;
use crate::settings::MatcherConfig;

/// Compute a selection range for each cursor position.
///
/// Positions are independent: each one is converted to a byte offset, run
/// through the matching engine, and mapped back to an LSP range. Results are
/// returned in input order. When no structural unit encloses a position (or
/// the position is out of bounds), its result is an empty range at the cursor
/// itself, which tells the client to leave the selection unchanged.
pub fn selection_at_positions(
    line_index: &LineIndex,
    config: MatcherConfig,
    positions: &[Position],
) -> Vec<SelectionRange> {
    positions
        .iter()
        .map(|&position| SelectionRange {
            range: selection_at(line_index, config, position),
            parent: None,
        })
        .collect()
}

fn selection_at(line_index: &LineIndex, config: MatcherConfig, position: Position) -> Range {
    line_index
        .offset_at(position)
        .and_then(|offset| enclosing_span(line_index.source(), offset, config))
        .map(|span| line_index.range_of(&span))
        .unwrap_or_else(|| Range::new(position, position))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index(source: &str) -> LineIndex {
        LineIndex::new(source.to_string())
    }

    #[test]
    fn bracket_selection_on_one_line() {
        let idx = index("let x = (1 + 2);");
        let ranges =
            selection_at_positions(&idx, MatcherConfig::default(), &[Position::new(0, 11)]);
        assert_eq!(
            ranges[0].range,
            Range::new(Position::new(0, 9), Position::new(0, 14))
        );
    }

    #[test]
    fn tag_selection_spans_lines() {
        let idx = index("<ul>\n  <li>x</li>\n</ul>");
        let ranges = selection_at_positions(&idx, MatcherConfig::default(), &[Position::new(1, 6)]);
        // Interior of <li>...</li> on line 1.
        assert_eq!(
            ranges[0].range,
            Range::new(Position::new(1, 6), Position::new(1, 7))
        );
    }

    #[test]
    fn no_match_returns_empty_range_at_cursor() {
        let idx = index("plain text");
        let cursor = Position::new(0, 4);
        let ranges = selection_at_positions(&idx, MatcherConfig::default(), &[cursor]);
        assert_eq!(ranges[0].range, Range::new(cursor, cursor));
        assert!(ranges[0].parent.is_none());
    }

    #[test]
    fn out_of_bounds_position_is_left_alone() {
        let idx = index("(x)");
        let cursor = Position::new(9, 0);
        let ranges = selection_at_positions(&idx, MatcherConfig::default(), &[cursor]);
        assert_eq!(ranges[0].range, Range::new(cursor, cursor));
    }

    #[test]
    fn positions_are_independent_and_ordered() {
        let idx = index("(a) [b]");
        let ranges = selection_at_positions(
            &idx,
            MatcherConfig::default(),
            &[Position::new(0, 1), Position::new(0, 5), Position::new(0, 3)],
        );
        assert_eq!(
            ranges[0].range,
            Range::new(Position::new(0, 1), Position::new(0, 2))
        );
        assert_eq!(
            ranges[1].range,
            Range::new(Position::new(0, 5), Position::new(0, 6))
        );
        // The gap between the pairs has no enclosing structure.
        assert_eq!(
            ranges[2].range,
            Range::new(Position::new(0, 3), Position::new(0, 3))
        );
    }
}
