//! The `@implements` directive
//!
//! Appends each directive's type token to the primary class's interface
//! list, preserving document order. Span handling mirrors the inherits
//! pass: suppressed at design time.

use weft_core::ir::IrToken;
use weft_core::CodeDocument;

use crate::pipeline::Pass;

use super::directive_type_token;

pub struct ImplementsDirectivePass;

impl Pass for ImplementsDirectivePass {
    fn name(&self) -> &'static str {
        "ImplementsDirectivePass"
    }

    fn order(&self) -> i32 {
        10
    }

    fn execute(&self, document: &mut CodeDocument) {
        let references = document.ir.find_directives("implements", false);
        if references.is_empty() {
            return;
        }
        let Some(class) = document.ir.find_primary_class() else {
            tracing::trace!("no primary class, skipping implements classification");
            return;
        };

        let design_time = document.options.design_time;
        for reference in references {
            let Some((content, span)) = directive_type_token(&document.ir, reference.id) else {
                continue;
            };
            if let Some(class_node) = document.ir.node_mut(class).as_class_mut() {
                class_node
                    .interfaces
                    .push(IrToken::new(content, if design_time { None } else { span }));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::tests::{directive_document, type_token};
    use weft_core::implements_directive;

    #[test]
    fn interfaces_accumulate_in_document_order() {
        let mut document = directive_document(vec![
            (implements_directive(), vec![type_token("Disposable", None)]),
            (implements_directive(), vec![type_token("Comparable", None)]),
        ]);
        ImplementsDirectivePass.execute(&mut document);

        let class = document.ir.find_primary_class().unwrap();
        let interfaces: Vec<_> = document
            .ir
            .node(class)
            .as_class()
            .unwrap()
            .interfaces
            .iter()
            .map(|token| token.content.as_str())
            .collect();
        assert_eq!(interfaces, ["Disposable", "Comparable"]);
    }

    #[test]
    fn tokenless_directives_are_skipped() {
        let mut document = directive_document(vec![(implements_directive(), vec![])]);
        ImplementsDirectivePass.execute(&mut document);

        let class = document.ir.find_primary_class().unwrap();
        assert!(document.ir.node(class).as_class().unwrap().interfaces.is_empty());
    }
}
