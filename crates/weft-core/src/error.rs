//! Error types for Weft compilation operations
//!
//! Errors here represent programming-contract violations (bad arguments,
//! broken pipeline registration). Problems in the *document being compiled*
//! are never errors; they flow through [`crate::diagnostics::Diagnostic`]
//! values attached to descriptors and documents.

use thiserror::Error;

/// Main error type for Weft compiler operations
#[derive(Debug, Error)]
pub enum WeftError {
    /// Two metadata entries supplied the same key at construction time
    #[error("Duplicate metadata key: '{key}'")]
    DuplicateMetadataKey { key: String },

    /// A span refers to offsets outside the originating document text
    #[error("Span {start}..{end} is out of bounds for document of length {len}")]
    SpanOutOfBounds { start: usize, end: usize, len: usize },

    /// A node id resolved to a slot whose generation no longer matches
    #[error("Stale node reference: node {id} was removed or replaced")]
    StaleNodeReference { id: u32 },
}
