//! Builtin passes
//!
//! One file per pass, mirroring the order they run in the default pipeline:
//! lowering and document classification, the directive classifiers, directive
//! cleanup, and the output optimizations.

pub mod classifier;
pub mod css_scope;
pub mod design_time;
pub mod directive_removal;
pub mod functions;
pub mod implements;
pub mod inherits;
pub mod lowering;
pub mod preallocated;

pub use classifier::DocumentClassifierPass;
pub use css_scope::CssScopePass;
pub use design_time::DesignTimeDirectivePass;
pub use directive_removal::DirectiveRemovalPass;
pub use functions::FunctionsDirectivePass;
pub use implements::ImplementsDirectivePass;
pub use inherits::InheritsDirectivePass;
pub use lowering::LoweringPass;
pub use preallocated::{
    PreallocatedAttributeDeclaration, PreallocatedAttributeKind, PreallocatedAttributePass,
    PreallocatedAttributeReference,
};

use weft_core::SourceSpan;
use weft_core::directive::DirectiveTokenKind;
use weft_core::ir::{IrNodeKind, IrTree, NodeId};

/// The first `Type` token of a directive node, with its span
fn directive_type_token(tree: &IrTree, directive: NodeId) -> Option<(String, Option<SourceSpan>)> {
    tree.children(directive).iter().find_map(|&child| {
        let node = tree.node(child);
        match &node.kind {
            IrNodeKind::DirectiveToken(token) if token.kind == DirectiveTokenKind::Type => {
                Some((token.content.clone(), node.source.clone()))
            }
            _ => None,
        }
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use weft_core::document::{SyntaxNode, SyntaxToken};
    use weft_core::ir::{IrNode, IrNodeKind, TagHelperHtmlAttributeNode, TagHelperNode};
    use weft_core::{
        CodeDocument, CompilerOptions, DirectiveDescriptor, DirectiveTokenKind, SourceDocument,
        SourceSpan,
    };

    use super::classifier::DocumentClassifierPass;
    use super::lowering::LoweringPass;
    use crate::pipeline::Pass;

    pub fn span_at(offset: usize, length: usize) -> SourceSpan {
        SourceSpan::new(None, offset, 0, offset, length)
    }

    pub fn type_token(content: &str, span: Option<(usize, usize)>) -> SyntaxToken {
        SyntaxToken {
            content: content.to_string(),
            kind: DirectiveTokenKind::Type,
            span: span.map(|(offset, length)| span_at(offset, length)),
        }
    }

    pub fn code_block(content: &str, span: Option<(usize, usize)>) -> SyntaxNode {
        SyntaxNode::CodeBlock {
            content: content.to_string(),
            span: span.map(|(offset, length)| span_at(offset, length)),
        }
    }

    fn lowered_document(syntax: Vec<SyntaxNode>) -> CodeDocument {
        let mut document = CodeDocument::new(
            SourceDocument::new("", Some("page.weft".into())),
            CompilerOptions::default(),
            syntax,
        );
        LoweringPass.execute(&mut document);
        DocumentClassifierPass.execute(&mut document);
        document
    }

    /// A classified document containing the given token-only directives
    pub fn directive_document(
        directives: Vec<(DirectiveDescriptor, Vec<SyntaxToken>)>,
    ) -> CodeDocument {
        lowered_document(
            directives
                .into_iter()
                .map(|(descriptor, tokens)| SyntaxNode::Directive {
                    descriptor,
                    tokens,
                    body: Vec::new(),
                    span: None,
                    is_malformed: false,
                })
                .collect(),
        )
    }

    /// A classified document containing block directives with lowered bodies
    pub fn directive_document_with_bodies(
        directives: Vec<(DirectiveDescriptor, Vec<SyntaxNode>)>,
    ) -> CodeDocument {
        lowered_document(
            directives
                .into_iter()
                .map(|(descriptor, body)| SyntaxNode::Directive {
                    descriptor,
                    tokens: Vec::new(),
                    body,
                    span: None,
                    is_malformed: false,
                })
                .collect(),
        )
    }

    /// A classified document whose render method holds one markup run
    pub fn markup_document(content: &str) -> CodeDocument {
        lowered_document(vec![SyntaxNode::Markup {
            content: content.to_string(),
            span: None,
        }])
    }

    /// A classified document with one tag helper element per entry, each
    /// carrying a constant HTML attribute
    pub fn tag_helper_document(attributes: &[(&str, &str)]) -> CodeDocument {
        let mut document = lowered_document(Vec::new());
        let method = document.ir.find_primary_method().unwrap();
        for (name, value) in attributes {
            let element = document.ir.append(
                method,
                IrNode::new(
                    IrNodeKind::TagHelper(TagHelperNode {
                        tag_name: "button".to_string(),
                        descriptors: Vec::new(),
                    }),
                    None,
                ),
            );
            document.ir.append(
                element,
                IrNode::new(
                    IrNodeKind::TagHelperHtmlAttribute(TagHelperHtmlAttributeNode {
                        attribute_name: name.to_string(),
                        constant_value: Some(value.to_string()),
                    }),
                    None,
                ),
            );
        }
        document
    }
}
