//! Weft Compiler Core
//!
//! Core model for compiling Weft templates: documents that mix HTML markup
//! and TypeScript in a single file. This crate provides the tag helper
//! descriptor/builder model, the intermediate node tree and its visitor
//! infrastructure, diagnostics, metadata collections, checksums, and the
//! per-document compilation state the pass pipeline (`weft-passes`) and the
//! renderer (`weft-codegen`) operate on.

pub mod checksum;
pub mod config;
pub mod diagnostics;
pub mod directive;
pub mod document;
pub mod error;
pub mod ir;
pub mod metadata;
pub mod result;
pub mod source;
pub mod tag_helper;

// Re-export commonly used types
pub use checksum::{Checksum, ChecksumBuilder};
pub use config::{CompilerOptions, DocumentKind};
pub use diagnostics::{Diagnostic, Severity};
pub use directive::{
    DirectiveDescriptor, DirectiveKind, DirectiveTokenKind, functions_directive,
    implements_directive, inherits_directive,
};
pub use document::{CodeDocument, SyntaxNode, SyntaxToken};
pub use error::WeftError;
pub use metadata::MetadataCollection;
pub use result::Result;
pub use source::{SourceDocument, SourceSpan};
pub use tag_helper::{
    AllowedChildTagDescriptor, AllowedChildTagDescriptorBuilder, BoundAttributeDescriptor,
    BoundAttributeDescriptorBuilder, NameComparison, RequiredAttributeDescriptor,
    RequiredAttributeDescriptorBuilder, TagHelperDescriptor, TagHelperDescriptorBuilder,
    TagMatchingRuleDescriptor, TagMatchingRuleDescriptorBuilder, TagStructure, ValueComparison,
};

/// Initialize the tracing subscriber for logging
pub fn init_tracing() {
    use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("weft=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}
