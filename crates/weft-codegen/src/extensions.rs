//! Builtin code target extensions
//!
//! [`MetadataAttributeTargetExtension`] emits the generated-file header:
//! the auto-generated marker plus the document checksum annotation used for
//! round-trip identification. [`PreallocatedAttributeTargetExtension`]
//! renders the declaration and reference nodes produced by the preallocated
//! attribute pass.

use std::any::Any;

use weft_core::ir::{ExtensionNode, IrTree, NodeId};
use weft_core::CodeDocument;
use weft_passes::{PreallocatedAttributeDeclaration, PreallocatedAttributeReference};

use crate::context::CodeRenderingContext;
use crate::render::escape_ts_string;
use crate::target::CodeTargetExtension;

/// Emits header annotations tying the generated file to its source
#[derive(Default)]
pub struct MetadataAttributeTargetExtension;

impl MetadataAttributeTargetExtension {
    /// Write the auto-generated header, including the source checksum
    /// unless the options suppress it
    pub fn write_document_annotations(
        &self,
        context: &mut CodeRenderingContext<'_>,
        document: &CodeDocument,
    ) {
        context.writer.write_line("// <auto-generated/>");
        if !document.options.suppress_checksum {
            let path = document.source.file_path().unwrap_or("<weft>");
            context.writer.write_line(&format!(
                "//# weft:checksum fnv1a128:{} \"{}\"",
                document.source.checksum(),
                path
            ));
        }
    }
}

impl CodeTargetExtension for MetadataAttributeTargetExtension {
    fn name(&self) -> &'static str {
        "MetadataAttributeTargetExtension"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn render_node(
        &self,
        _context: &mut CodeRenderingContext<'_>,
        _tree: &IrTree,
        _id: NodeId,
        _node: &dyn ExtensionNode,
    ) -> bool {
        // Document annotations are written from the document renderer, not
        // through extension nodes.
        false
    }
}

/// Renders hoisted tag helper attribute fields and their use sites
#[derive(Default)]
pub struct PreallocatedAttributeTargetExtension;

impl CodeTargetExtension for PreallocatedAttributeTargetExtension {
    fn name(&self) -> &'static str {
        "PreallocatedAttributeTargetExtension"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn render_node(
        &self,
        context: &mut CodeRenderingContext<'_>,
        _tree: &IrTree,
        _id: NodeId,
        node: &dyn ExtensionNode,
    ) -> bool {
        if let Some(declaration) = node.as_any().downcast_ref::<PreallocatedAttributeDeclaration>()
        {
            context.writer.write_line(&format!(
                "private static readonly {} = new TagHelperAttribute(\"{}\", \"{}\");",
                declaration.field_name,
                escape_ts_string(&declaration.attribute_name),
                escape_ts_string(&declaration.value),
            ));
            return true;
        }
        if let Some(reference) = node.as_any().downcast_ref::<PreallocatedAttributeReference>() {
            let qualifier = context.class_name.clone().unwrap_or_default();
            if qualifier.is_empty() {
                context.writer.write(&reference.field_name);
            } else {
                context
                    .writer
                    .write(&format!("{}.{}", qualifier, reference.field_name));
            }
            return true;
        }
        false
    }
}
