//! Design-time directive helpers
//!
//! Editor-preview compilations need type information for directive tokens
//! without the directives ever reaching the runtime artifact. This pass,
//! which runs only at design time, appends a never-called helper method to
//! the primary class containing one typed variable statement per directive
//! token. The method body opens with a `@ts-nocheck` suppression so the
//! synthetic statements never surface their own lint noise in the editor.

use weft_core::directive::DirectiveTokenKind;
use weft_core::ir::{CodeNode, IrNode, IrNodeKind, MethodKind, MethodNode, TokenKind, TokenNode};
use weft_core::{CodeDocument, SourceSpan};

use crate::pipeline::Pass;

/// Name of the synthetic helper method
pub const HELPER_METHOD_NAME: &str = "__weft_designTimeHelpers";

pub struct DesignTimeDirectivePass;

impl Pass for DesignTimeDirectivePass {
    fn name(&self) -> &'static str {
        "DesignTimeDirectivePass"
    }

    fn order(&self) -> i32 {
        30
    }

    fn execute(&self, document: &mut CodeDocument) {
        if !document.options.design_time {
            return;
        }
        let Some(class) = document.ir.find_primary_class() else {
            return;
        };
        if has_helper_method(document, class) {
            tracing::trace!("design-time helpers already present, skipping");
            return;
        }

        // (token content, kind, span) for every directive token in the tree.
        let tokens: Vec<(String, DirectiveTokenKind, Option<SourceSpan>)> = document
            .ir
            .collect(|node| matches!(node.kind, IrNodeKind::DirectiveToken(_)))
            .into_iter()
            .filter_map(|reference| {
                let node = document.ir.node(reference.id);
                match &node.kind {
                    IrNodeKind::DirectiveToken(token) => {
                        Some((token.content.clone(), token.kind, node.source.clone()))
                    }
                    _ => None,
                }
            })
            .collect();
        if tokens.is_empty() {
            return;
        }

        let method = document.ir.append(
            class,
            IrNode::new(
                IrNodeKind::Method(MethodNode {
                    name: HELPER_METHOD_NAME.to_string(),
                    kind: MethodKind::DesignTimeHelpers,
                    modifiers: vec!["private".to_string()],
                    return_type: "void".to_string(),
                }),
                None,
            ),
        );
        append_statement(document, method, &[("// @ts-nocheck", None)]);

        for (index, (content, kind, span)) in tokens.into_iter().enumerate() {
            match kind {
                DirectiveTokenKind::Type => {
                    let prefix = format!("let __weft_typecheck_{index}: ");
                    append_statement(
                        document,
                        method,
                        &[
                            (&prefix, None),
                            (&content, span),
                            (" = null as any;", None),
                        ],
                    );
                }
                DirectiveTokenKind::Member | DirectiveTokenKind::Identifier => {
                    append_statement(
                        document,
                        method,
                        &[("let ", None), (&content, span), (": any;", None)],
                    );
                }
                DirectiveTokenKind::String => {
                    let prefix = format!("const __weft_string_{index} = ");
                    append_statement(
                        document,
                        method,
                        &[(&prefix, None), (&content, span), (";", None)],
                    );
                }
            }
        }
    }
}

fn has_helper_method(document: &CodeDocument, class: weft_core::ir::NodeId) -> bool {
    document.ir.children(class).iter().any(|&id| {
        matches!(
            &document.ir.node(id).kind,
            IrNodeKind::Method(method) if method.kind == MethodKind::DesignTimeHelpers
        )
    })
}

fn append_statement(
    document: &mut CodeDocument,
    method: weft_core::ir::NodeId,
    tokens: &[(&str, Option<SourceSpan>)],
) {
    let statement = document
        .ir
        .append(method, IrNode::new(IrNodeKind::Code(CodeNode), None));
    for (content, span) in tokens {
        document.ir.append(
            statement,
            IrNode::new(
                IrNodeKind::Token(TokenNode {
                    content: content.to_string(),
                    kind: TokenKind::Code,
                }),
                span.clone(),
            ),
        );
    }
}
