//! The `@functions` directive
//!
//! Relocates the children of every `@functions` block to the end of the
//! primary class, sorted ascending by original source offset so members
//! appear in the order the author wrote them regardless of which block the
//! pass visited first. The emptied directive nodes are removed so later
//! passes never re-process them.

use weft_core::CodeDocument;

use crate::pipeline::Pass;

pub struct FunctionsDirectivePass;

impl Pass for FunctionsDirectivePass {
    fn name(&self) -> &'static str {
        "FunctionsDirectivePass"
    }

    fn order(&self) -> i32 {
        20
    }

    fn execute(&self, document: &mut CodeDocument) {
        let references = document.ir.find_directives("functions", false);
        if references.is_empty() {
            return;
        }
        let Some(class) = document.ir.find_primary_class() else {
            tracing::trace!("no primary class, skipping functions classification");
            return;
        };

        let mut members = Vec::new();
        for reference in &references {
            for &child in document.ir.children(reference.id) {
                let offset = document
                    .ir
                    .node(child)
                    .source
                    .as_ref()
                    .map(|span| span.absolute_index);
                members.push((child, offset));
            }
        }

        // Stable sort; `None` compares less than any offset, so unpositioned
        // members lead and keep their encounter order among themselves.
        members.sort_by(|a, b| a.1.cmp(&b.1));

        for (member, _) in members {
            document.ir.append_child(class, member);
        }
        for reference in references {
            let _ = reference.remove(&mut document.ir);
        }
    }
}
