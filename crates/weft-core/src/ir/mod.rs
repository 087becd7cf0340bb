//! Intermediate representation of a lowered document
//!
//! Between parsing and code rendering, a document is an [`IrTree`]: an
//! arena-stored mutable tree of typed nodes. Passes query it with the
//! visitor in [`visitor`] and rewrite it through [`NodeRef`]s collected
//! during the walk, so tree mutation never races with traversal.

mod node;
mod tree;
pub mod visitor;

pub use node::{
    ClassNode, CodeNode, DirectiveNode, DirectiveTokenNode, DocumentNode, ExpressionNode,
    ExtensionNode, FieldNode, HtmlNode, IrNode, IrNodeKind, IrToken, MethodKind, MethodNode,
    NamespaceNode, TagHelperHtmlAttributeNode, TagHelperNode, TagHelperPropertyNode, TokenKind,
    TokenNode,
};
pub use tree::{IrTree, NodeId, NodeRef};
pub use visitor::{Flow, IrVisitor, walk, walk_document};
