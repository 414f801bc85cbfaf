//! Candidate span ranking.
//!
//! Both matchers hand their results to one selector, which picks the most
//! deeply nested span: the one that starts latest, with ties broken by the
//! one that ends earliest. The same ordering is used inside each matcher to
//! keep the best candidate seen so far.

use super::Span;

/// True if `a` is more deeply nested than `b`: `a` starts later, or starts
/// at the same offset and ends earlier.
pub(crate) fn more_nested(a: &Span, b: &Span) -> bool {
    a.start > b.start || (a.start == b.start && a.end < b.end)
}

/// Pick the most deeply nested span among candidates that all contain the
/// query offset. An empty candidate list means no selection change.
pub fn innermost(mut candidates: Vec<Span>) -> Option<Span> {
    candidates.sort_by(|a, b| b.start.cmp(&a.start).then(a.end.cmp(&b.end)));
    candidates.into_iter().next()
}
