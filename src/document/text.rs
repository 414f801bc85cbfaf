//! Text utilities for position conversion.
//!
//! LSP positions are line/column pairs where the column counts UTF-16 code
//! units; the matching engine works in byte offsets. `LineIndex` bridges the
//! two with a pre-computed table of line start offsets.

use tower_lsp::lsp_types::{Position, Range};

/// Pre-computed line index over a document's source text.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset where each line starts. Always holds at least `[0]`.
    line_starts: Vec<usize>,
    /// Source text, needed for UTF-16 column calculation.
    source: String,
}

impl LineIndex {
    /// Build a line index from source text.
    pub fn new(source: String) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            line_starts,
            source,
        }
    }

    /// Get the source text.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Convert a byte offset to an LSP position.
    pub fn position_at(&self, offset: usize) -> Position {
        // partition_point finds the first line starting past the offset.
        let line = self.line_starts.partition_point(|&start| start <= offset) - 1;
        let line_start = self.line_starts[line];

        let column: usize = self.source[line_start..offset.min(self.source.len())]
            .chars()
            .map(char::len_utf16)
            .sum();

        Position::new(line as u32, column as u32)
    }

    /// Convert an LSP position to a byte offset.
    ///
    /// Returns None if the line is out of bounds. A column at or past the end
    /// of its line clamps to the line end, matching how editors treat cursors
    /// beyond the last character.
    pub fn offset_at(&self, position: Position) -> Option<usize> {
        let line_start = *self.line_starts.get(position.line as usize)?;
        let line_end = self
            .line_starts
            .get(position.line as usize + 1)
            .map(|&next| next - 1) // exclude the newline itself
            .unwrap_or(self.source.len());

        let mut utf16_col = 0u32;
        for (i, c) in self.source[line_start..line_end].char_indices() {
            if utf16_col >= position.character {
                return Some(line_start + i);
            }
            utf16_col += c.len_utf16() as u32;
        }

        Some(line_end)
    }

    /// Convert a byte span to an LSP range.
    pub fn range_of(&self, span: &std::ops::Range<usize>) -> Range {
        Range::new(self.position_at(span.start), self.position_at(span.end))
    }
}
