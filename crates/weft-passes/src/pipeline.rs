//! The pass pipeline
//!
//! Passes are partitioned into phases; within a phase they run in ascending
//! `order`, with ties broken by registration order. A document's pipeline is
//! a strict in-order sequence; later passes depend on invariants the
//! earlier ones establish, so there is no parallelism inside one document.

use weft_core::CodeDocument;

/// The phase a pass belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PassPhase {
    /// Syntax-to-IR lowering and document scaffolding
    Lowering,
    /// Directive classification into class structure
    DirectiveClassification,
    /// Output-shape optimizations; semantics-preserving
    Optimization,
}

impl PassPhase {
    pub const ALL: [PassPhase; 3] = [
        PassPhase::Lowering,
        PassPhase::DirectiveClassification,
        PassPhase::Optimization,
    ];

    fn index(self) -> usize {
        match self {
            PassPhase::Lowering => 0,
            PassPhase::DirectiveClassification => 1,
            PassPhase::Optimization => 2,
        }
    }
}

/// One ordered transformation over a document's IR tree
///
/// Passes mutate the tree in place and must re-run cleanly on an unchanged
/// document: work that is already done is detected and skipped, never
/// repeated. Missing structure (e.g. no primary class on malformed input)
/// is an early return, not an error; diagnostics belong to the parser and
/// binder stages.
pub trait Pass {
    fn name(&self) -> &'static str;

    /// Sort key within the pass's phase; ties keep registration order
    fn order(&self) -> i32 {
        0
    }

    fn execute(&self, document: &mut CodeDocument);
}

/// An ordered collection of passes, partitioned by phase
#[derive(Default)]
pub struct PassPipeline {
    phases: [Vec<Box<dyn Pass>>; 3],
}

impl PassPipeline {
    /// An empty pipeline; see [`crate::default_pipeline`] for the standard one
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pass in a phase, keeping the phase sorted by order
    ///
    /// The sort is stable, so passes with equal order run in registration
    /// order.
    pub fn register(&mut self, phase: PassPhase, pass: Box<dyn Pass>) -> &mut Self {
        tracing::debug!(pass = pass.name(), ?phase, order = pass.order(), "registered pass");
        let passes = &mut self.phases[phase.index()];
        passes.push(pass);
        passes.sort_by_key(|pass| pass.order());
        self
    }

    /// Passes registered for a phase, in execution order
    pub fn passes(&self, phase: PassPhase) -> impl Iterator<Item = &dyn Pass> {
        self.phases[phase.index()].iter().map(|pass| pass.as_ref())
    }

    /// Run every phase over the document, in order
    pub fn run(&self, document: &mut CodeDocument) {
        for phase in PassPhase::ALL {
            for pass in self.passes(phase) {
                tracing::trace!(pass = pass.name(), ?phase, "executing pass");
                pass.execute(document);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use weft_core::{CompilerOptions, SourceDocument};

    struct RecordingPass {
        name: &'static str,
        order: i32,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Pass for RecordingPass {
        fn name(&self) -> &'static str {
            self.name
        }

        fn order(&self) -> i32 {
            self.order
        }

        fn execute(&self, _document: &mut CodeDocument) {
            self.log.lock().unwrap().push(self.name);
        }
    }

    fn empty_document() -> CodeDocument {
        CodeDocument::new(
            SourceDocument::new("", None),
            CompilerOptions::default(),
            Vec::new(),
        )
    }

    #[test]
    fn passes_run_in_ascending_order_within_a_phase() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut pipeline = PassPipeline::new();
        for (name, order) in [("third", 200), ("first", 0), ("second", 100)] {
            pipeline.register(
                PassPhase::Optimization,
                Box::new(RecordingPass {
                    name,
                    order,
                    log: log.clone(),
                }),
            );
        }
        pipeline.run(&mut empty_document());
        assert_eq!(&*log.lock().unwrap(), &["first", "second", "third"]);
    }

    #[test]
    fn equal_orders_keep_registration_order() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut pipeline = PassPipeline::new();
        for name in ["a", "b", "c"] {
            pipeline.register(
                PassPhase::Lowering,
                Box::new(RecordingPass {
                    name,
                    order: 10,
                    log: log.clone(),
                }),
            );
        }
        pipeline.run(&mut empty_document());
        assert_eq!(&*log.lock().unwrap(), &["a", "b", "c"]);
    }

    #[test]
    fn phases_run_in_partition_order_regardless_of_registration() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut pipeline = PassPipeline::new();
        pipeline.register(
            PassPhase::Optimization,
            Box::new(RecordingPass {
                name: "optimize",
                order: 0,
                log: log.clone(),
            }),
        );
        pipeline.register(
            PassPhase::Lowering,
            Box::new(RecordingPass {
                name: "lower",
                order: 0,
                log: log.clone(),
            }),
        );
        pipeline.run(&mut empty_document());
        assert_eq!(&*log.lock().unwrap(), &["lower", "optimize"]);
    }
}
