//! Structural span selection language server.
//!
//! Answers `textDocument/selectionRange` with the interior of the smallest
//! bracket pair or markup tag pair enclosing each cursor position.

use std::path::PathBuf;
use std::sync::OnceLock;

use tower_lsp::jsonrpc::Result;
use tower_lsp::lsp_types::*;
use tower_lsp::{Client, LanguageServer, LspService};

mod document;
mod lsp;
mod matcher;
pub(crate) mod settings;

pub use document::{DocumentState, DocumentStore, LineIndex};
pub use lsp::selection_at_positions;
pub use matcher::{enclosing_span, innermost, innermost_bracket_span, innermost_tag_span, Span};
pub use settings::{discover_settings, load_settings, MatcherConfig, Settings};

pub struct Backend {
    client: Client,
    documents: DocumentStore,
    workspace_root: OnceLock<PathBuf>,
    config: OnceLock<MatcherConfig>,
}

impl Backend {
    pub(crate) fn new(client: Client) -> Self {
        Self {
            client,
            documents: DocumentStore::new(),
            workspace_root: OnceLock::new(),
            config: OnceLock::new(),
        }
    }

    fn matcher_config(&self) -> MatcherConfig {
        self.config.get().copied().unwrap_or_default()
    }
}

#[tower_lsp::async_trait]
impl LanguageServer for Backend {
    async fn initialize(&self, params: InitializeParams) -> Result<InitializeResult> {
        // Extract workspace root from params
        let workspace_root = params
            .workspace_folders
            .as_ref()
            .and_then(|folders| folders.first())
            .and_then(|f| f.uri.to_file_path().ok())
            .or_else(|| {
                #[allow(deprecated)]
                params.root_uri.as_ref()?.to_file_path().ok()
            });

        if let Some(root) = workspace_root {
            let _ = self.workspace_root.set(root.clone());

            // Discover settings by walking up the directory tree
            let (settings, _settings_dir) = settings::discover_settings(&root);
            let _ = self.config.set(MatcherConfig::from_settings(&settings));
        } else {
            let _ = self.config.set(MatcherConfig::default());
        }

        Ok(InitializeResult {
            capabilities: ServerCapabilities {
                text_document_sync: Some(TextDocumentSyncCapability::Kind(
                    TextDocumentSyncKind::FULL,
                )),
                selection_range_provider: Some(SelectionRangeProviderCapability::Simple(true)),
                ..Default::default()
            },
            ..Default::default()
        })
    }

    async fn initialized(&self, _: InitializedParams) {
        self.client
            .log_message(MessageType::INFO, "spansel language server initialized")
            .await;
    }

    async fn shutdown(&self) -> Result<()> {
        Ok(())
    }

    async fn did_open(&self, params: DidOpenTextDocumentParams) {
        self.documents.open(
            params.text_document.uri,
            params.text_document.text,
            params.text_document.version,
        );
    }

    async fn did_change(&self, params: DidChangeTextDocumentParams) {
        // We use FULL sync, so there's exactly one change with the full text
        if let Some(change) = params.content_changes.into_iter().next() {
            self.documents.open(
                params.text_document.uri,
                change.text,
                params.text_document.version,
            );
        }
    }

    async fn did_close(&self, params: DidCloseTextDocumentParams) {
        self.documents.close(&params.text_document.uri);
    }

    async fn selection_range(
        &self,
        params: SelectionRangeParams,
    ) -> Result<Option<Vec<SelectionRange>>> {
        let uri = &params.text_document.uri;

        let Some(doc) = self.documents.get(uri) else {
            return Ok(None);
        };

        Ok(Some(selection_at_positions(
            &doc.line_index,
            self.matcher_config(),
            &params.positions,
        )))
    }
}

pub fn create_service() -> (LspService<Backend>, tower_lsp::ClientSocket) {
    LspService::new(Backend::new)
}
