//! Shared fixtures for the Weft integration tests
//!
//! The parser layer is out of scope for this workspace, so the fixtures
//! here play its role: they build pre-parsed syntax lists with real spans by
//! locating the corresponding text in a source document, then run the full
//! pipeline and renderer over the result.

use weft_core::{
    CodeDocument, CompilerOptions, DirectiveDescriptor, DirectiveTokenKind, SourceDocument,
    SourceSpan, SyntaxNode, SyntaxToken,
};
use weft_codegen::{default_target, DocumentRenderer, GeneratedDocument};
use weft_passes::default_pipeline;

static TRACING: std::sync::Once = std::sync::Once::new();

/// A source document plus helpers for building syntax nodes with real spans
pub struct SourceFixture {
    pub document: SourceDocument,
}

impl SourceFixture {
    pub fn new(text: &str, path: &str) -> Self {
        // RUST_LOG=weft=trace makes the pipeline and renderer narrate a
        // failing test run.
        TRACING.call_once(weft_core::init_tracing);
        Self {
            document: SourceDocument::new(text, Some(path.to_string())),
        }
    }

    /// Span of the first occurrence of `needle` in the source text
    pub fn span_of(&self, needle: &str) -> SourceSpan {
        let offset = self
            .document
            .text()
            .find(needle)
            .unwrap_or_else(|| panic!("fixture text does not contain {needle:?}"));
        self.document
            .span(offset, needle.len())
            .expect("span is within the fixture text")
    }

    pub fn markup(&self, needle: &str) -> SyntaxNode {
        SyntaxNode::Markup {
            content: needle.to_string(),
            span: Some(self.span_of(needle)),
        }
    }

    pub fn expression(&self, needle: &str) -> SyntaxNode {
        SyntaxNode::Expression {
            content: needle.to_string(),
            span: Some(self.span_of(needle)),
        }
    }

    pub fn code_block(&self, needle: &str) -> SyntaxNode {
        SyntaxNode::CodeBlock {
            content: needle.to_string(),
            span: Some(self.span_of(needle)),
        }
    }

    pub fn type_token(&self, needle: &str) -> SyntaxToken {
        SyntaxToken {
            content: needle.to_string(),
            kind: DirectiveTokenKind::Type,
            span: Some(self.span_of(needle)),
        }
    }

    pub fn directive(
        &self,
        descriptor: DirectiveDescriptor,
        tokens: Vec<SyntaxToken>,
        body: Vec<SyntaxNode>,
    ) -> SyntaxNode {
        SyntaxNode::Directive {
            descriptor,
            tokens,
            body,
            span: None,
            is_malformed: false,
        }
    }

    /// Run the default pipeline over this fixture's syntax
    pub fn compile(&self, options: CompilerOptions, syntax: Vec<SyntaxNode>) -> CodeDocument {
        let mut document = CodeDocument::new(self.document.clone(), options, syntax);
        default_pipeline().run(&mut document);
        document
    }
}

/// Render a compiled document with the default code target
pub fn render(document: &CodeDocument) -> GeneratedDocument {
    DocumentRenderer::new(default_target()).render(document)
}
