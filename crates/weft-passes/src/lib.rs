//! Weft Pass Pipeline
//!
//! Ordered transformation passes over the Weft intermediate node tree.
//! Passes are partitioned into phases (lowering, directive classification,
//! optimization); within a phase they run in ascending order with stable
//! ties, so third-party passes compose deterministically with the builtin
//! ones.

pub mod builtin;
pub mod pipeline;

pub use builtin::{
    CssScopePass, DesignTimeDirectivePass, DirectiveRemovalPass, DocumentClassifierPass,
    FunctionsDirectivePass, ImplementsDirectivePass, InheritsDirectivePass, LoweringPass,
    PreallocatedAttributeDeclaration, PreallocatedAttributeKind, PreallocatedAttributePass,
    PreallocatedAttributeReference,
};
pub use pipeline::{Pass, PassPhase, PassPipeline};

/// The standard pipeline with every builtin pass registered
pub fn default_pipeline() -> PassPipeline {
    let mut pipeline = PassPipeline::new();
    pipeline
        .register(PassPhase::Lowering, Box::new(LoweringPass))
        .register(PassPhase::Lowering, Box::new(DocumentClassifierPass))
        .register(
            PassPhase::DirectiveClassification,
            Box::new(InheritsDirectivePass),
        )
        .register(
            PassPhase::DirectiveClassification,
            Box::new(ImplementsDirectivePass),
        )
        .register(
            PassPhase::DirectiveClassification,
            Box::new(FunctionsDirectivePass),
        )
        .register(
            PassPhase::DirectiveClassification,
            Box::new(DesignTimeDirectivePass),
        )
        .register(
            PassPhase::DirectiveClassification,
            Box::new(DirectiveRemovalPass),
        )
        .register(PassPhase::Optimization, Box::new(PreallocatedAttributePass))
        .register(PassPhase::Optimization, Box::new(CssScopePass));
    pipeline
}
