//! Code targets and their extensions
//!
//! A [`CodeTarget`] is the registry of rendering capabilities for one
//! compilation. Extension nodes produced by passes carry payloads only a
//! matching [`CodeTargetExtension`] can turn into output; the renderer asks
//! the target to handle each one and reports a diagnostic when nothing
//! claims it.

use std::any::Any;

use weft_core::ir::{ExtensionNode, IrTree, NodeId};

use crate::context::CodeRenderingContext;

/// A pluggable rendering capability
pub trait CodeTargetExtension: Send + Sync {
    fn name(&self) -> &'static str;

    fn as_any(&self) -> &dyn Any;

    /// Render an extension node this extension understands
    ///
    /// Returns `false` when the node belongs to some other extension, so the
    /// target can keep probing.
    fn render_node(
        &self,
        context: &mut CodeRenderingContext<'_>,
        tree: &IrTree,
        id: NodeId,
        node: &dyn ExtensionNode,
    ) -> bool;
}

/// The set of extensions available to one rendering run
#[derive(Default)]
pub struct CodeTarget {
    extensions: Vec<Box<dyn CodeTargetExtension>>,
}

impl CodeTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, extension: Box<dyn CodeTargetExtension>) -> &mut Self {
        tracing::debug!(extension = extension.name(), "registered code target extension");
        self.extensions.push(extension);
        self
    }

    /// Look up a registered extension by concrete type
    pub fn find<T: CodeTargetExtension + 'static>(&self) -> Option<&T> {
        self.extensions
            .iter()
            .find_map(|extension| extension.as_any().downcast_ref::<T>())
    }

    pub fn has<T: CodeTargetExtension + 'static>(&self) -> bool {
        self.find::<T>().is_some()
    }

    /// Offer an extension node to every registered extension in order
    ///
    /// Returns `true` when some extension rendered it.
    pub fn render_extension_node(
        &self,
        context: &mut CodeRenderingContext<'_>,
        tree: &IrTree,
        id: NodeId,
        node: &dyn ExtensionNode,
    ) -> bool {
        self.extensions
            .iter()
            .any(|extension| extension.render_node(context, tree, id, node))
    }
}
