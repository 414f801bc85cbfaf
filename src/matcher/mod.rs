//! The structural matching engine.
//!
//! This module provides:
//! - `bracket` for finding the innermost balanced bracket pair around an offset
//! - `tag` for finding the innermost balanced markup tag pair around an offset
//! - `select` for ranking candidate spans by nesting depth
//!
//! The engine is stateless: each query re-scans the full text and is a pure
//! function of `(text, offset)`.

mod bracket;
mod select;
mod tag;

pub use bracket::{innermost_bracket_span, BRACKET_PAIRS};
pub use select::innermost;
pub use tag::innermost_tag_span;

use crate::settings::MatcherConfig;

/// A half-open interior region `[start, end)` of a matched pair, with the
/// delimiters themselves excluded. Offsets are byte offsets into the text.
pub type Span = std::ops::Range<usize>;

/// Find the innermost enclosing structural unit around `offset`.
///
/// Runs the bracket and tag matchers independently (each can be disabled via
/// `config`) and picks the more deeply nested of their results. Returns None
/// when no balanced pair encloses the offset; callers must treat that as
/// "leave the current selection unchanged".
pub fn enclosing_span(text: &str, offset: usize, config: MatcherConfig) -> Option<Span> {
    let mut candidates = Vec::with_capacity(2);

    if config.brackets {
        candidates.extend(innermost_bracket_span(text, offset));
    }
    if config.tags {
        candidates.extend(innermost_tag_span(text, offset));
    }

    innermost(candidates)
}
