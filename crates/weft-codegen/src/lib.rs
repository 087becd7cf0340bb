//! TypeScript rendering for compiled Weft documents
//!
//! Takes a document the pass pipeline has lowered and classified and turns
//! it into generated module text, a source-mapping table, and rendering
//! diagnostics. Extension nodes are rendered through pluggable
//! [`CodeTargetExtension`]s registered on a [`CodeTarget`]; [`default_target`]
//! carries the extensions the builtin passes rely on.

pub mod context;
pub mod extensions;
pub mod render;
pub mod source_map;
pub mod target;
pub mod writer;

// Re-export commonly used types
pub use context::CodeRenderingContext;
pub use extensions::{MetadataAttributeTargetExtension, PreallocatedAttributeTargetExtension};
pub use render::{DocumentRenderer, GeneratedDocument};
pub use source_map::{SourceMapping, SourceMappingTable};
pub use target::{CodeTarget, CodeTargetExtension};
pub use writer::{CodeWriter, GeneratedSpan};

/// The code target with every builtin extension registered
pub fn default_target() -> CodeTarget {
    let mut target = CodeTarget::new();
    target.register(Box::new(MetadataAttributeTargetExtension));
    target.register(Box::new(PreallocatedAttributeTargetExtension));
    target
}
