//! The unit of compilation
//!
//! A [`CodeDocument`] bundles everything one document's pipeline run touches:
//! the original source, the compiler options, the pre-parsed syntax handed
//! over by the parser layer, the lowered IR tree, and the diagnostics
//! accumulated along the way. The pipeline mutates it in place; rendering
//! reads it and produces the generated output separately.

use crate::config::{CompilerOptions, DocumentKind};
use crate::diagnostics::Diagnostic;
use crate::directive::{DirectiveDescriptor, DirectiveTokenKind};
use crate::ir::{DocumentNode, IrNode, IrNodeKind, IrTree};
use crate::source::{SourceDocument, SourceSpan};

/// A typed token inside a directive use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxToken {
    pub content: String,
    pub kind: DirectiveTokenKind,
    pub span: Option<SourceSpan>,
}

/// Pre-parsed document content, produced by the out-of-scope parser layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxNode {
    /// A literal run of markup
    Markup {
        content: String,
        span: Option<SourceSpan>,
    },
    /// An implicit or explicit expression whose value is rendered
    Expression {
        content: String,
        span: Option<SourceSpan>,
    },
    /// A statement block
    CodeBlock {
        content: String,
        span: Option<SourceSpan>,
    },
    /// A directive use with its typed tokens and, for block directives, body
    Directive {
        descriptor: DirectiveDescriptor,
        tokens: Vec<SyntaxToken>,
        body: Vec<SyntaxNode>,
        span: Option<SourceSpan>,
        /// Error-recovery node from unparseable directive input
        is_malformed: bool,
    },
}

/// One document moving through the compilation pipeline
pub struct CodeDocument {
    pub source: SourceDocument,
    pub options: CompilerOptions,
    /// Input syntax; consumed by the lowering pass
    pub syntax: Vec<SyntaxNode>,
    /// The lowered tree; starts as a bare document root
    pub ir: IrTree,
    /// Document-level diagnostics from passes and rendering
    pub diagnostics: Vec<Diagnostic>,
}

impl CodeDocument {
    pub fn new(source: SourceDocument, options: CompilerOptions, syntax: Vec<SyntaxNode>) -> Self {
        let ir = IrTree::new(IrNode::new(
            IrNodeKind::Document(DocumentNode {
                kind: options.document_kind,
            }),
            None,
        ));
        Self {
            source,
            options,
            syntax,
            ir,
            diagnostics: Vec::new(),
        }
    }

    pub fn document_kind(&self) -> DocumentKind {
        self.options.document_kind
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_document_has_a_bare_document_root() {
        let document = CodeDocument::new(
            SourceDocument::new("<div></div>", None),
            CompilerOptions::default(),
            Vec::new(),
        );
        let root = document.ir.root();
        assert!(matches!(
            document.ir.node(root).kind,
            IrNodeKind::Document(_)
        ));
        assert!(document.ir.children(root).is_empty());
    }
}
