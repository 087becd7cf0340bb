//! Document classification
//!
//! Wraps the lowered content into the namespace/class/render-method
//! scaffolding every generated module shares, and marks the class the rest
//! of the pipeline treats as primary. Content lowered before this pass runs
//! becomes the render method's body; directive nodes travel along and are
//! classified by the directive passes.

use weft_core::ir::{ClassNode, IrNode, IrNodeKind, MethodKind, MethodNode, NamespaceNode};
use weft_core::CodeDocument;

use crate::pipeline::Pass;

pub struct DocumentClassifierPass;

impl Pass for DocumentClassifierPass {
    fn name(&self) -> &'static str {
        "DocumentClassifierPass"
    }

    fn order(&self) -> i32 {
        50
    }

    fn execute(&self, document: &mut CodeDocument) {
        if document.ir.find_primary_class().is_some() {
            tracing::trace!("document already classified, skipping");
            return;
        }

        let root = document.ir.root();
        let content: Vec<_> = document.ir.children(root).to_vec();

        let namespace = document.ir.append(
            root,
            IrNode::new(
                IrNodeKind::Namespace(NamespaceNode {
                    name: document.options.root_namespace.clone(),
                }),
                None,
            ),
        );
        let class = document.ir.append(
            namespace,
            IrNode::new(
                IrNodeKind::Class(ClassNode {
                    name: class_name_from_path(document.source.file_path()),
                    modifiers: vec!["export".to_string()],
                    base_type: None,
                    interfaces: Vec::new(),
                    is_primary: true,
                }),
                None,
            ),
        );
        let method = document.ir.append(
            class,
            IrNode::new(
                IrNodeKind::Method(MethodNode {
                    name: "render".to_string(),
                    kind: MethodKind::Render,
                    modifiers: vec!["public".to_string()],
                    return_type: "string".to_string(),
                }),
                None,
            ),
        );

        for node in content {
            document.ir.append_child(method, node);
        }
    }
}

/// Derive a class name from the document path, e.g. `pages/index.weft`
/// becomes `Index`; documents without a path compile as `Template`
fn class_name_from_path(path: Option<&str>) -> String {
    let Some(path) = path else {
        return "Template".to_string();
    };
    let stem = std::path::Path::new(path)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("Template");

    let mut name = String::with_capacity(stem.len());
    for (index, ch) in stem.chars().enumerate() {
        let valid = if index == 0 {
            ch.is_alphabetic() || ch == '_'
        } else {
            ch.is_alphanumeric() || ch == '_'
        };
        let ch = if valid { ch } else { '_' };
        if index == 0 {
            name.extend(ch.to_uppercase());
        } else {
            name.push(ch);
        }
    }
    if name.is_empty() {
        "Template".to_string()
    } else {
        name
    }
}
