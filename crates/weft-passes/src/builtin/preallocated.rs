//! Preallocated attribute optimization
//!
//! Tag helper attributes whose value is constant plain text allocate the
//! same attribute object on every render. This pass, which runs only for
//! runtime compilations, hoists each distinct (name, value, structure)
//! triple into one shared static field at the top of the class and rewrites
//! every use site to reference it. Output behavior is unchanged; only the
//! per-render allocations go away.
//!
//! The hoisted declarations and their references are extension nodes,
//! rendered by `PreallocatedAttributeTargetExtension` in `weft-codegen`.

use std::any::Any;
use std::collections::HashMap;

use weft_core::ir::{ExtensionNode, IrNode, IrNodeKind, NodeId};
use weft_core::{ChecksumBuilder, CodeDocument};

use crate::pipeline::Pass;

/// Structure of a hoisted attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PreallocatedAttributeKind {
    /// A plain HTML attribute passed through to the element
    Html,
    /// A bound property value
    Property {
        bound_attribute_name: String,
        is_indexer: bool,
    },
}

/// A shared static attribute field, hoisted to the top of the class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreallocatedAttributeDeclaration {
    pub field_name: String,
    pub attribute_name: String,
    pub value: String,
    pub kind: PreallocatedAttributeKind,
}

impl ExtensionNode for PreallocatedAttributeDeclaration {
    fn name(&self) -> &'static str {
        "PreallocatedAttributeDeclaration"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A use site rewritten to reference a hoisted attribute field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreallocatedAttributeReference {
    pub field_name: String,
    pub attribute_name: String,
}

impl ExtensionNode for PreallocatedAttributeReference {
    fn name(&self) -> &'static str {
        "PreallocatedAttributeReference"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub struct PreallocatedAttributePass;

impl Pass for PreallocatedAttributePass {
    fn name(&self) -> &'static str {
        "PreallocatedAttributePass"
    }

    fn execute(&self, document: &mut CodeDocument) {
        if document.options.design_time {
            return;
        }
        let Some(class) = document.ir.find_primary_class() else {
            return;
        };

        let candidates = document.ir.collect(|node| match &node.kind {
            IrNodeKind::TagHelperProperty(property) => property.constant_value.is_some(),
            IrNodeKind::TagHelperHtmlAttribute(attribute) => attribute.constant_value.is_some(),
            _ => false,
        });
        if candidates.is_empty() {
            return;
        }

        let mut fields: HashMap<(String, String, PreallocatedAttributeKind), String> =
            HashMap::new();
        let mut declarations: Vec<PreallocatedAttributeDeclaration> = Vec::new();

        for reference in candidates {
            let (attribute_name, value, kind) = match &document.ir.node(reference.id).kind {
                IrNodeKind::TagHelperProperty(property) => (
                    property.attribute_name.clone(),
                    property.constant_value.clone().unwrap_or_default(),
                    PreallocatedAttributeKind::Property {
                        bound_attribute_name: property.bound_attribute.name.clone(),
                        is_indexer: property.is_indexer_match,
                    },
                ),
                IrNodeKind::TagHelperHtmlAttribute(attribute) => (
                    attribute.attribute_name.clone(),
                    attribute.constant_value.clone().unwrap_or_default(),
                    PreallocatedAttributeKind::Html,
                ),
                _ => continue,
            };

            let key = (attribute_name.clone(), value.clone(), kind.clone());
            let field_name = fields
                .entry(key)
                .or_insert_with(|| {
                    let field_name = field_name_for(&attribute_name, &value, &kind);
                    declarations.push(PreallocatedAttributeDeclaration {
                        field_name: field_name.clone(),
                        attribute_name: attribute_name.clone(),
                        value: value.clone(),
                        kind: kind.clone(),
                    });
                    field_name
                })
                .clone();

            rewrite_use_site(document, reference.id, field_name, attribute_name);
        }

        tracing::debug!(
            hoisted = declarations.len(),
            "preallocated constant tag helper attributes"
        );
        for (index, declaration) in declarations.into_iter().enumerate() {
            let node = IrNode::new(IrNodeKind::Extension(Box::new(declaration)), None);
            let id = document.ir.alloc(node);
            document.ir.insert_child(class, index, id);
        }
    }
}

/// Content-stable field name derived from the attribute's structure, so a
/// recompile of the same document names its fields identically
fn field_name_for(attribute_name: &str, value: &str, kind: &PreallocatedAttributeKind) -> String {
    let mut builder = ChecksumBuilder::new();
    builder.append_string(attribute_name);
    builder.append_string(value);
    match kind {
        PreallocatedAttributeKind::Html => builder.append_null(),
        PreallocatedAttributeKind::Property {
            bound_attribute_name,
            is_indexer,
        } => {
            builder.append_string(bound_attribute_name);
            builder.append_bool(*is_indexer);
        }
    }
    let checksum = builder.finish().to_string();
    format!("__weftAttribute_{}", &checksum[..16])
}

fn rewrite_use_site(
    document: &mut CodeDocument,
    id: NodeId,
    field_name: String,
    attribute_name: String,
) {
    // The constant value now lives in the shared field; the token children
    // of the use site are dead.
    while let Some(&child) = document.ir.children(id).first() {
        document.ir.remove(child);
    }
    document.ir.node_mut(id).kind =
        IrNodeKind::Extension(Box::new(PreallocatedAttributeReference {
            field_name,
            attribute_name,
        }));
}
