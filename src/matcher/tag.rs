//! Markup tag pair matching.
//!
//! Finds the innermost balanced tag pair whose interior contains a query
//! offset. Matching is by tag name only: a `<div>` opened inside another
//! `<div>` increments depth, but differently-named unclosed tags in between
//! are ignored rather than reported as malformed. Self-closing tags are not
//! distinguished from opening tags; both approximations are deliberate and
//! keep the matcher a structural heuristic rather than an XML validator.

use std::sync::LazyLock;

use regex::Regex;

use super::select::more_nested;
use super::Span;

/// An opening tag `<name ...>`: the tag name plus the offset one past the
/// closing `>`. Names are word characters only; attributes are ignored.
static OPEN_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<(\w+)[^>]*>").unwrap());

/// An opening-tag occurrence recorded while scanning left of the cursor.
struct TagToken<'a> {
    name: &'a str,
    /// Offset immediately after the tag's closing `>`.
    end: usize,
}

/// Find the innermost balanced tag pair whose interior contains `offset`.
///
/// The returned span covers the interior between the opening tag's `>` and
/// the closing tag's `<`. The offset may sit on either interior boundary.
/// Tags with no matching close anywhere in the remaining text yield no
/// candidate; the search continues with the next-outer opening tag.
pub fn innermost_tag_span(text: &str, offset: usize) -> Option<Span> {
    let mut opens = Vec::new();
    for caps in OPEN_TAG.captures_iter(text) {
        let whole = caps.get(0).unwrap();
        if whole.start() > offset {
            break;
        }
        opens.push(TagToken {
            name: caps.get(1).unwrap().as_str(),
            end: whole.end(),
        });
    }

    let mut best: Option<Span> = None;
    for tag in opens.iter().rev() {
        let Some(close_start) = matching_close(text, tag) else {
            continue;
        };
        let candidate = tag.end..close_start;
        if candidate.start <= offset && offset <= candidate.end {
            match &best {
                Some(current) if !more_nested(&candidate, current) => {}
                _ => best = Some(candidate),
            }
        }
    }

    best
}

/// Scan forward from just past `tag`'s `>` for its matching close.
///
/// Depth starts at 1; another same-name opening tag increments it, a
/// `</name>` decrements it. Returns the offset of the `<` of the closing
/// tag that brings the depth to zero, or None if the tag is never closed.
fn matching_close(text: &str, tag: &TagToken) -> Option<usize> {
    // Tag names are word characters only, so the name interpolates into the
    // pattern verbatim. The \b keeps "div" from matching "divx".
    let pattern = Regex::new(&format!(r"</?{}\b[^>]*>", tag.name)).ok()?;

    let mut depth = 1usize;
    let mut scan_from = tag.end;
    while let Some(found) = pattern.find_at(text, scan_from) {
        let is_closing = text.as_bytes()[found.start() + 1] == b'/';
        if is_closing {
            depth -= 1;
            if depth == 0 {
                return Some(found.start());
            }
        } else {
            depth += 1;
        }
        scan_from = found.end();
    }
    None
}
