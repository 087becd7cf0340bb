//! Compiler configuration
//!
//! A [`CompilerOptions`] value travels with each [`crate::document::CodeDocument`]
//! and toggles pass and renderer behavior. It is plain data: the host layer
//! (build task, language server) constructs it, the pipeline only reads it.

use serde::{Deserialize, Serialize};

/// The kind of document being compiled, set by the host from the file's role
/// in the project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// A standalone view template
    #[default]
    View,
    /// A routable page template
    Page,
    /// A reusable component
    Component,
}

impl DocumentKind {
    /// CSS scoping applies to markup-first document kinds only
    pub fn supports_css_scope(self) -> bool {
        matches!(self, DocumentKind::View | DocumentKind::Page)
    }
}

/// Per-compilation configuration consumed by passes and the renderer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CompilerOptions {
    /// Editor-preview compilation: favor type information over a runnable
    /// artifact, suppress physical line pragmas and optimization passes
    pub design_time: bool,
    pub document_kind: DocumentKind,
    /// Namespace for the generated module
    pub root_namespace: String,
    /// CSS isolation scope identifier, when the project assigned one
    pub css_scope: Option<String>,
    /// Skip emitting the document checksum annotation
    pub suppress_checksum: bool,
    /// Spaces per indentation level in generated output
    pub indent_size: usize,
}

impl Default for CompilerOptions {
    fn default() -> Self {
        Self {
            design_time: false,
            document_kind: DocumentKind::View,
            root_namespace: "WeftGenerated".to_string(),
            css_scope: None,
            suppress_checksum: false,
            indent_size: 4,
        }
    }
}

impl CompilerOptions {
    pub fn design_time() -> Self {
        Self {
            design_time: true,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_round_trip_through_json() {
        let options = CompilerOptions {
            design_time: true,
            document_kind: DocumentKind::Page,
            css_scope: Some("w-scope-1a2b".into()),
            ..Default::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        let parsed: CompilerOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let parsed: CompilerOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, CompilerOptions::default());
    }
}
