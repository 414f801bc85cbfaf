//! Document state management for the selection server.

use std::sync::Arc;

use dashmap::DashMap;
use tower_lsp::lsp_types::Url;

use super::text::LineIndex;

/// State for a single open document.
///
/// The engine is stateless per query, so a document snapshot is just the
/// indexed text plus the client's version counter. Each full-sync change
/// replaces the whole state.
#[derive(Debug, Clone)]
pub struct DocumentState {
    /// Pre-computed line index over the current source text.
    pub line_index: LineIndex,
    /// Document version from the client.
    pub version: i32,
}

impl DocumentState {
    /// Create a new document state from the full source text.
    pub fn new(source: String, version: i32) -> Self {
        Self {
            line_index: LineIndex::new(source),
            version,
        }
    }
}

/// Thread-safe storage for open documents.
#[derive(Debug, Default)]
pub struct DocumentStore {
    documents: DashMap<Url, Arc<DocumentState>>,
}

impl DocumentStore {
    /// Create a new empty document store.
    pub fn new() -> Self {
        Self {
            documents: DashMap::new(),
        }
    }

    /// Open or update a document with the given source text.
    pub fn open(&self, uri: Url, source: String, version: i32) -> Arc<DocumentState> {
        let state = Arc::new(DocumentState::new(source, version));
        self.documents.insert(uri, Arc::clone(&state));
        state
    }

    /// Close a document.
    pub fn close(&self, uri: &Url) {
        self.documents.remove(uri);
    }

    /// Get a document's state.
    pub fn get(&self, uri: &Url) -> Option<Arc<DocumentState>> {
        self.documents.get(uri).map(|r| Arc::clone(&r))
    }
}
