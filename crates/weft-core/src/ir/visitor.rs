//! Tree visitation
//!
//! [`IrVisitor`] has one method per node kind. Every method defaults to
//! [`Flow::Descend`], so a visitor that overrides nothing walks the whole
//! tree and pruning a subtree is an explicit `Flow::Skip`; forgetting an
//! override can never silently stop a walk partway down.

use super::node::{
    ClassNode, CodeNode, DirectiveNode, DirectiveTokenNode, DocumentNode, ExpressionNode,
    ExtensionNode, FieldNode, HtmlNode, IrNodeKind, MethodNode, NamespaceNode, TagHelperHtmlAttributeNode,
    TagHelperNode, TagHelperPropertyNode, TokenNode,
};
use super::tree::{IrTree, NodeId};

/// Whether to continue into a node's children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Descend,
    Skip,
}

/// A read-only visitor over the node tree
///
/// Mutating passes collect [`crate::ir::NodeRef`]s during the walk and apply
/// their rewrites afterwards.
#[allow(unused_variables)]
pub trait IrVisitor {
    fn visit_document(&mut self, tree: &IrTree, id: NodeId, node: &DocumentNode) -> Flow {
        Flow::Descend
    }

    fn visit_namespace(&mut self, tree: &IrTree, id: NodeId, node: &NamespaceNode) -> Flow {
        Flow::Descend
    }

    fn visit_class(&mut self, tree: &IrTree, id: NodeId, node: &ClassNode) -> Flow {
        Flow::Descend
    }

    fn visit_method(&mut self, tree: &IrTree, id: NodeId, node: &MethodNode) -> Flow {
        Flow::Descend
    }

    fn visit_field(&mut self, tree: &IrTree, id: NodeId, node: &FieldNode) -> Flow {
        Flow::Descend
    }

    fn visit_html(&mut self, tree: &IrTree, id: NodeId, node: &HtmlNode) -> Flow {
        Flow::Descend
    }

    fn visit_code(&mut self, tree: &IrTree, id: NodeId, node: &CodeNode) -> Flow {
        Flow::Descend
    }

    fn visit_expression(&mut self, tree: &IrTree, id: NodeId, node: &ExpressionNode) -> Flow {
        Flow::Descend
    }

    fn visit_directive(&mut self, tree: &IrTree, id: NodeId, node: &DirectiveNode) -> Flow {
        Flow::Descend
    }

    fn visit_directive_token(
        &mut self,
        tree: &IrTree,
        id: NodeId,
        node: &DirectiveTokenNode,
    ) -> Flow {
        Flow::Descend
    }

    fn visit_token(&mut self, tree: &IrTree, id: NodeId, node: &TokenNode) -> Flow {
        Flow::Descend
    }

    fn visit_tag_helper(&mut self, tree: &IrTree, id: NodeId, node: &TagHelperNode) -> Flow {
        Flow::Descend
    }

    fn visit_tag_helper_property(
        &mut self,
        tree: &IrTree,
        id: NodeId,
        node: &TagHelperPropertyNode,
    ) -> Flow {
        Flow::Descend
    }

    fn visit_tag_helper_html_attribute(
        &mut self,
        tree: &IrTree,
        id: NodeId,
        node: &TagHelperHtmlAttributeNode,
    ) -> Flow {
        Flow::Descend
    }

    fn visit_extension(&mut self, tree: &IrTree, id: NodeId, node: &dyn ExtensionNode) -> Flow {
        Flow::Descend
    }
}

/// Walk `id` and its subtree depth-first, dispatching by node kind
pub fn walk(tree: &IrTree, id: NodeId, visitor: &mut impl IrVisitor) {
    let node = tree.node(id);
    let flow = match &node.kind {
        IrNodeKind::Document(payload) => visitor.visit_document(tree, id, payload),
        IrNodeKind::Namespace(payload) => visitor.visit_namespace(tree, id, payload),
        IrNodeKind::Class(payload) => visitor.visit_class(tree, id, payload),
        IrNodeKind::Method(payload) => visitor.visit_method(tree, id, payload),
        IrNodeKind::Field(payload) => visitor.visit_field(tree, id, payload),
        IrNodeKind::Html(payload) => visitor.visit_html(tree, id, payload),
        IrNodeKind::Code(payload) => visitor.visit_code(tree, id, payload),
        IrNodeKind::Expression(payload) => visitor.visit_expression(tree, id, payload),
        IrNodeKind::Directive(payload) => visitor.visit_directive(tree, id, payload),
        IrNodeKind::DirectiveToken(payload) => visitor.visit_directive_token(tree, id, payload),
        IrNodeKind::Token(payload) => visitor.visit_token(tree, id, payload),
        IrNodeKind::TagHelper(payload) => visitor.visit_tag_helper(tree, id, payload),
        IrNodeKind::TagHelperProperty(payload) => {
            visitor.visit_tag_helper_property(tree, id, payload)
        }
        IrNodeKind::TagHelperHtmlAttribute(payload) => {
            visitor.visit_tag_helper_html_attribute(tree, id, payload)
        }
        IrNodeKind::Extension(payload) => visitor.visit_extension(tree, id, payload.as_ref()),
    };

    if flow == Flow::Skip {
        return;
    }
    // Child ids are copied so the visitor may inspect the tree freely.
    let children: Vec<NodeId> = node.children().to_vec();
    for child in children {
        walk(tree, child, visitor);
    }
}

/// Walk the whole document
pub fn walk_document(tree: &IrTree, visitor: &mut impl IrVisitor) {
    walk(tree, tree.root(), visitor);
}
