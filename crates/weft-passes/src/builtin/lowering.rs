//! Syntax-to-IR lowering
//!
//! Converts the pre-parsed syntax list handed over by the parser layer into
//! the initial node tree under the document root. Runs once; a document
//! whose root already has children is left untouched so the pipeline can be
//! re-run safely.

use weft_core::document::{SyntaxNode, SyntaxToken};
use weft_core::ir::{
    CodeNode, DirectiveNode, DirectiveTokenNode, ExpressionNode, HtmlNode, IrNode, IrNodeKind,
    IrTree, NodeId, TokenKind, TokenNode,
};
use weft_core::CodeDocument;

use crate::pipeline::Pass;

pub struct LoweringPass;

impl Pass for LoweringPass {
    fn name(&self) -> &'static str {
        "LoweringPass"
    }

    fn execute(&self, document: &mut CodeDocument) {
        let root = document.ir.root();
        if !document.ir.children(root).is_empty() {
            tracing::trace!("document already lowered, skipping");
            return;
        }

        let syntax = std::mem::take(&mut document.syntax);
        for node in &syntax {
            lower_node(&mut document.ir, root, node);
        }
    }
}

fn lower_node(tree: &mut IrTree, parent: NodeId, syntax: &SyntaxNode) {
    match syntax {
        SyntaxNode::Markup { content, span } => {
            tree.append(
                parent,
                IrNode::new(
                    IrNodeKind::Html(HtmlNode {
                        content: content.clone(),
                    }),
                    span.clone(),
                ),
            );
        }
        SyntaxNode::Expression { content, span } => {
            let expression = tree.append(
                parent,
                IrNode::new(IrNodeKind::Expression(ExpressionNode), span.clone()),
            );
            append_code_token(tree, expression, content, span.clone());
        }
        SyntaxNode::CodeBlock { content, span } => {
            let code = tree.append(
                parent,
                IrNode::new(IrNodeKind::Code(CodeNode), span.clone()),
            );
            append_code_token(tree, code, content, span.clone());
        }
        SyntaxNode::Directive {
            descriptor,
            tokens,
            body,
            span,
            is_malformed,
        } => {
            let directive = tree.append(
                parent,
                IrNode::new(
                    IrNodeKind::Directive(DirectiveNode {
                        descriptor: descriptor.clone(),
                        is_malformed: *is_malformed,
                    }),
                    span.clone(),
                ),
            );
            for token in tokens {
                lower_directive_token(tree, directive, token);
            }
            for child in body {
                lower_node(tree, directive, child);
            }
        }
    }
}

fn lower_directive_token(tree: &mut IrTree, directive: NodeId, token: &SyntaxToken) {
    tree.append(
        directive,
        IrNode::new(
            IrNodeKind::DirectiveToken(DirectiveTokenNode {
                content: token.content.clone(),
                kind: token.kind,
            }),
            token.span.clone(),
        ),
    );
}

fn append_code_token(
    tree: &mut IrTree,
    parent: NodeId,
    content: &str,
    span: Option<weft_core::SourceSpan>,
) {
    tree.append(
        parent,
        IrNode::new(
            IrNodeKind::Token(TokenNode {
                content: content.to_string(),
                kind: TokenKind::Code,
            }),
            span,
        ),
    );
}
