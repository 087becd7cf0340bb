//! Directive cleanup
//!
//! Runs after every directive-classification pass has consumed the tokens it
//! needs and removes all remaining directive nodes, malformed ones included,
//! so the optimization and rendering stages see a directive-free tree.

use weft_core::CodeDocument;
use weft_core::ir::IrNodeKind;

use crate::pipeline::Pass;

pub struct DirectiveRemovalPass;

impl Pass for DirectiveRemovalPass {
    fn name(&self) -> &'static str {
        "DirectiveRemovalPass"
    }

    fn order(&self) -> i32 {
        1000
    }

    fn execute(&self, document: &mut CodeDocument) {
        let references = document
            .ir
            .collect(|node| matches!(node.kind, IrNodeKind::Directive(_)));
        for reference in references {
            let _ = reference.remove(&mut document.ir);
        }
    }
}
