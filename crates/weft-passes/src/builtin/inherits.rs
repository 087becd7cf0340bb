//! The `@inherits` directive
//!
//! Copies the directive's type token onto the primary class's base type.
//! With multiple `@inherits` directives the last one wins. At design time
//! the token's span is not attached: the content is not necessarily
//! compilable, and a mapping onto it would corrupt editor round-tripping.

use weft_core::ir::IrToken;
use weft_core::CodeDocument;

use crate::pipeline::Pass;

use super::directive_type_token;

pub struct InheritsDirectivePass;

impl Pass for InheritsDirectivePass {
    fn name(&self) -> &'static str {
        "InheritsDirectivePass"
    }

    fn execute(&self, document: &mut CodeDocument) {
        let references = document.ir.find_directives("inherits", false);
        if references.is_empty() {
            return;
        }
        let Some(class) = document.ir.find_primary_class() else {
            tracing::trace!("no primary class, skipping inherits classification");
            return;
        };

        let design_time = document.options.design_time;
        for reference in references {
            let Some((content, span)) = directive_type_token(&document.ir, reference.id) else {
                continue;
            };
            if let Some(class_node) = document.ir.node_mut(class).as_class_mut() {
                class_node.base_type =
                    Some(IrToken::new(content, if design_time { None } else { span }));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::tests::{directive_document, type_token};
    use weft_core::inherits_directive;

    #[test]
    fn base_type_comes_from_the_directive_token() {
        let mut document = directive_document(vec![(
            inherits_directive(),
            vec![type_token("BaseView", Some((0, 8)))],
        )]);
        InheritsDirectivePass.execute(&mut document);

        let class = document.ir.find_primary_class().unwrap();
        let base_type = document
            .ir
            .node(class)
            .as_class()
            .unwrap()
            .base_type
            .clone()
            .expect("base type set");
        assert_eq!(base_type.content, "BaseView");
        assert!(base_type.source.is_some());
    }

    #[test]
    fn design_time_suppresses_the_span() {
        let mut document = directive_document(vec![(
            inherits_directive(),
            vec![type_token("BaseView", Some((0, 8)))],
        )]);
        document.options.design_time = true;
        InheritsDirectivePass.execute(&mut document);

        let class = document.ir.find_primary_class().unwrap();
        let base_type = document
            .ir
            .node(class)
            .as_class()
            .unwrap()
            .base_type
            .clone()
            .unwrap();
        assert_eq!(base_type.content, "BaseView");
        assert!(base_type.source.is_none());
    }

    #[test]
    fn the_last_directive_wins() {
        let mut document = directive_document(vec![
            (inherits_directive(), vec![type_token("First", None)]),
            (inherits_directive(), vec![type_token("Second", None)]),
        ]);
        InheritsDirectivePass.execute(&mut document);

        let class = document.ir.find_primary_class().unwrap();
        let base_type = document
            .ir
            .node(class)
            .as_class()
            .unwrap()
            .base_type
            .clone()
            .unwrap();
        assert_eq!(base_type.content, "Second");
    }

    #[test]
    fn missing_primary_class_is_not_an_error() {
        let mut document = directive_document(vec![(
            inherits_directive(),
            vec![type_token("BaseView", None)],
        )]);
        // Degrade the document: drop the class marker.
        let class = document.ir.find_primary_class().unwrap();
        document
            .ir
            .node_mut(class)
            .as_class_mut()
            .unwrap()
            .is_primary = false;
        InheritsDirectivePass.execute(&mut document);
        assert!(document.diagnostics.is_empty());
    }
}
