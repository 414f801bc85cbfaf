//! Bracket pair matching.
//!
//! Finds the innermost balanced bracket pair whose interior contains a query
//! offset. A single forward pass keeps one stack of open-delimiter offsets
//! per bracket kind; every balanced pair is examined exactly once when its
//! closing delimiter is reached, so the scan is O(n) in the text length.

use super::select::more_nested;
use super::Span;

/// The fixed set of recognized bracket kinds.
pub const BRACKET_PAIRS: [(char, char); 3] = [('(', ')'), ('[', ']'), ('{', '}')];

/// Find the innermost balanced bracket pair whose interior contains `offset`.
///
/// The returned span covers the interior only: for `(x)` starting at byte 0
/// the span is `1..2`. The offset may sit on either interior boundary
/// (`start <= offset <= end`), so a cursor immediately before the closing
/// delimiter still counts as inside.
///
/// Unbalanced delimiters never form a candidate: a stray close with no
/// matching open is skipped, and an open with no matching close is left on
/// its stack when the scan ends. Kinds never interact; a `{` cannot be
/// closed by a `)`.
pub fn innermost_bracket_span(text: &str, offset: usize) -> Option<Span> {
    let mut open_stacks: [Vec<usize>; 3] = [Vec::new(), Vec::new(), Vec::new()];
    let mut best: Option<Span> = None;

    for (i, c) in text.char_indices() {
        for (kind, &(open, close)) in BRACKET_PAIRS.iter().enumerate() {
            if c == open {
                open_stacks[kind].push(i);
            } else if c == close {
                let Some(open_at) = open_stacks[kind].pop() else {
                    continue;
                };
                let candidate = open_at + 1..i;
                if candidate.start <= offset && offset <= candidate.end {
                    match &best {
                        Some(current) if !more_nested(&candidate, current) => {}
                        _ => best = Some(candidate),
                    }
                }
            }
        }
    }

    best
}
