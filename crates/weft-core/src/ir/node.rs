//! Intermediate node kinds
//!
//! The lowered document is a tree of [`IrNode`]s stored in an
//! [`crate::ir::IrTree`] arena. Each node carries its kind-specific payload,
//! an optional span back into the original document, and the ids of its
//! children. Extension nodes carry payloads only a specific code target
//! extension understands; the rest of the compiler sees them as opaque.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::config::DocumentKind;
use crate::directive::{DirectiveDescriptor, DirectiveTokenKind};
use crate::source::SourceSpan;
use crate::tag_helper::{BoundAttributeDescriptor, TagHelperDescriptor};

use super::NodeId;

/// A typed piece of content with an optional span for source mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IrToken {
    pub content: String,
    pub source: Option<SourceSpan>,
}

impl IrToken {
    pub fn new(content: impl Into<String>, source: Option<SourceSpan>) -> Self {
        Self {
            content: content.into(),
            source,
        }
    }
}

/// Raw token flavors inside code and expression nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Code,
    Markup,
}

/// The generated method a [`MethodNode`] represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// The primary render method appending markup and expression output
    Render,
    /// Design-time-only helpers carrying type information for the editor
    DesignTimeHelpers,
    /// A member lifted from a `@functions` block
    Member,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentNode {
    pub kind: DocumentKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceNode {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClassNode {
    pub name: String,
    pub modifiers: Vec<String>,
    /// Base type set by the inherits pass; `None` renders the host default
    pub base_type: Option<IrToken>,
    /// Interfaces accumulated by the implements pass, in directive order
    pub interfaces: Vec<IrToken>,
    /// The single class the document compiles into
    pub is_primary: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodNode {
    pub name: String,
    pub kind: MethodKind,
    pub modifiers: Vec<String>,
    pub return_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNode {
    pub name: String,
    pub type_name: String,
    pub modifiers: Vec<String>,
    pub initializer: Option<String>,
}

/// A literal run of markup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlNode {
    pub content: String,
}

/// A code statement; children are [`IrNodeKind::Token`] nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodeNode;

/// An expression whose value is appended to the output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpressionNode;

/// A directive use; children are directive token nodes and, for block
/// directives, the lowered body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveNode {
    pub descriptor: DirectiveDescriptor,
    /// Error-recovery node produced from unparseable directive input
    pub is_malformed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveTokenNode {
    pub content: String,
    pub kind: DirectiveTokenKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenNode {
    pub content: String,
    pub kind: TokenKind,
}

/// A matched tag helper element; children are property and attribute nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagHelperNode {
    pub tag_name: String,
    pub descriptors: Vec<Arc<TagHelperDescriptor>>,
}

/// A bound attribute value on a tag helper element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagHelperPropertyNode {
    pub attribute_name: String,
    pub bound_attribute: BoundAttributeDescriptor,
    pub is_indexer_match: bool,
    /// Set when the value is constant plain text; the preallocation pass
    /// only touches nodes with this populated
    pub constant_value: Option<String>,
}

/// An unbound HTML attribute passed through to the element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagHelperHtmlAttributeNode {
    pub attribute_name: String,
    pub constant_value: Option<String>,
}

/// Payload for extension node kinds
///
/// An extension node is produced by a pass and rendered only by a matching
/// code target extension; everything between treats it as opaque but still
/// walks its children.
pub trait ExtensionNode: fmt::Debug + Send + Sync {
    /// Name reported in missing-extension diagnostics
    fn name(&self) -> &'static str;
    fn as_any(&self) -> &dyn Any;
}

/// Kind-specific payload of an [`IrNode`]
#[derive(Debug)]
pub enum IrNodeKind {
    Document(DocumentNode),
    Namespace(NamespaceNode),
    Class(ClassNode),
    Method(MethodNode),
    Field(FieldNode),
    Html(HtmlNode),
    Code(CodeNode),
    Expression(ExpressionNode),
    Directive(DirectiveNode),
    DirectiveToken(DirectiveTokenNode),
    Token(TokenNode),
    TagHelper(TagHelperNode),
    TagHelperProperty(TagHelperPropertyNode),
    TagHelperHtmlAttribute(TagHelperHtmlAttributeNode),
    Extension(Box<dyn ExtensionNode>),
}

impl IrNodeKind {
    /// Short name for logs and diagnostics
    pub fn name(&self) -> &'static str {
        match self {
            IrNodeKind::Document(_) => "Document",
            IrNodeKind::Namespace(_) => "Namespace",
            IrNodeKind::Class(_) => "Class",
            IrNodeKind::Method(_) => "Method",
            IrNodeKind::Field(_) => "Field",
            IrNodeKind::Html(_) => "Html",
            IrNodeKind::Code(_) => "Code",
            IrNodeKind::Expression(_) => "Expression",
            IrNodeKind::Directive(_) => "Directive",
            IrNodeKind::DirectiveToken(_) => "DirectiveToken",
            IrNodeKind::Token(_) => "Token",
            IrNodeKind::TagHelper(_) => "TagHelper",
            IrNodeKind::TagHelperProperty(_) => "TagHelperProperty",
            IrNodeKind::TagHelperHtmlAttribute(_) => "TagHelperHtmlAttribute",
            IrNodeKind::Extension(extension) => extension.name(),
        }
    }
}

/// One node of the lowered document
#[derive(Debug)]
pub struct IrNode {
    pub kind: IrNodeKind,
    /// Span into the original document, when the node corresponds to one
    pub source: Option<SourceSpan>,
    pub(super) children: Vec<NodeId>,
}

impl IrNode {
    pub fn new(kind: IrNodeKind, source: Option<SourceSpan>) -> Self {
        Self {
            kind,
            source,
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn as_class(&self) -> Option<&ClassNode> {
        match &self.kind {
            IrNodeKind::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_class_mut(&mut self) -> Option<&mut ClassNode> {
        match &mut self.kind {
            IrNodeKind::Class(class) => Some(class),
            _ => None,
        }
    }

    pub fn as_directive(&self) -> Option<&DirectiveNode> {
        match &self.kind {
            IrNodeKind::Directive(directive) => Some(directive),
            _ => None,
        }
    }

    pub fn as_extension<T: ExtensionNode + 'static>(&self) -> Option<&T> {
        match &self.kind {
            IrNodeKind::Extension(extension) => extension.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }
}
