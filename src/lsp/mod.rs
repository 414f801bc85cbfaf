//! LSP protocol feature implementations.
//!
//! This module provides the `textDocument/selectionRange` feature built on
//! the matching engine.

mod selection;

pub use selection::selection_at_positions;
