//! Document rendering
//!
//! [`DocumentRenderer`] walks a lowered and classified [`CodeDocument`] and
//! produces the TypeScript module text together with its source-mapping
//! table. Rendering never fails: nodes no registered extension understands
//! are skipped with a diagnostic and the rest of the document still renders.

use weft_core::diagnostics::factory;
use weft_core::ir::{IrNodeKind, IrTree, MethodKind, NodeId};
use weft_core::{Checksum, CodeDocument, Diagnostic};

use crate::context::CodeRenderingContext;
use crate::extensions::MetadataAttributeTargetExtension;
use crate::source_map::SourceMappingTable;
use crate::target::CodeTarget;

/// The output of one rendering run
#[derive(Debug)]
pub struct GeneratedDocument {
    /// The generated TypeScript module text
    pub text: String,
    /// Original-to-generated position mappings, in emission order
    pub mappings: SourceMappingTable,
    /// Diagnostics produced during rendering
    pub diagnostics: Vec<Diagnostic>,
    /// Checksum of the source document the output was generated from
    pub checksum: Checksum,
}

/// Renders a compiled document into TypeScript
pub struct DocumentRenderer {
    target: CodeTarget,
}

impl DocumentRenderer {
    pub fn new(target: CodeTarget) -> Self {
        Self { target }
    }

    #[tracing::instrument(skip_all, fields(path = document.source.file_path()))]
    pub fn render(&self, document: &CodeDocument) -> GeneratedDocument {
        let mut context = CodeRenderingContext::new(&document.options, &document.source);

        match self.target.find::<MetadataAttributeTargetExtension>() {
            Some(metadata) => metadata.write_document_annotations(&mut context, document),
            None => context.diagnostics.push(factory::missing_code_target_extension(
                "Document",
                "MetadataAttributeTargetExtension",
            )),
        }

        let root = document.ir.root();
        for child in document.ir.children(root).to_vec() {
            self.render_node(&mut context, &document.ir, child);
        }

        GeneratedDocument {
            text: context.writer.finish(),
            mappings: context.mappings,
            diagnostics: context.diagnostics,
            checksum: document.source.checksum(),
        }
    }

    fn render_children(&self, context: &mut CodeRenderingContext<'_>, tree: &IrTree, id: NodeId) {
        for child in tree.children(id).to_vec() {
            self.render_node(context, tree, child);
        }
    }

    fn render_node(&self, context: &mut CodeRenderingContext<'_>, tree: &IrTree, id: NodeId) {
        let node = tree.node(id);
        match &node.kind {
            IrNodeKind::Document(_) => self.render_children(context, tree, id),
            IrNodeKind::Namespace(namespace) => {
                context
                    .writer
                    .write_line(&format!("export namespace {} {{", namespace.name));
                context.writer.indent();
                self.render_children(context, tree, id);
                context.writer.outdent();
                context.writer.write_line("}");
            }
            IrNodeKind::Class(class) => {
                let previous_class = context.class_name.replace(class.name.clone());
                for modifier in &class.modifiers {
                    context.writer.write(modifier);
                    context.writer.write(" ");
                }
                context.writer.write(&format!("class {}", class.name));
                if let Some(base) = &class.base_type {
                    context.writer.write(" extends ");
                    context.write_mapped(&base.content, base.source.as_ref());
                }
                if !class.interfaces.is_empty() {
                    context.writer.write(" implements ");
                    for (index, interface) in class.interfaces.iter().enumerate() {
                        if index > 0 {
                            context.writer.write(", ");
                        }
                        context.write_mapped(&interface.content, interface.source.as_ref());
                    }
                }
                context.writer.write_line(" {");
                context.writer.indent();
                self.render_children(context, tree, id);
                context.writer.outdent();
                context.writer.write_line("}");
                context.class_name = previous_class;
            }
            IrNodeKind::Method(method) => {
                for modifier in &method.modifiers {
                    context.writer.write(modifier);
                    context.writer.write(" ");
                }
                context
                    .writer
                    .write_line(&format!("{}(): {} {{", method.name, method.return_type));
                context.writer.indent();
                if method.kind == MethodKind::Render {
                    context.writer.write_line("const __out: string[] = [];");
                    self.render_children(context, tree, id);
                    context.writer.write_line("return __out.join(\"\");");
                } else {
                    self.render_children(context, tree, id);
                }
                context.writer.outdent();
                context.writer.write_line("}");
            }
            IrNodeKind::Field(field) => {
                for modifier in &field.modifiers {
                    context.writer.write(modifier);
                    context.writer.write(" ");
                }
                context
                    .writer
                    .write(&format!("{}: {}", field.name, field.type_name));
                if let Some(initializer) = &field.initializer {
                    context.writer.write(&format!(" = {initializer}"));
                }
                context.writer.write_line(";");
            }
            IrNodeKind::Html(html) => {
                context.writer.write("__out.push(\"");
                context.write_mapped(&escape_ts_string(&html.content), node.source.as_ref());
                context.writer.write_line("\");");
            }
            IrNodeKind::Expression(_) => {
                if let Some(span) = &node.source {
                    context.write_line_pragma(span);
                }
                context.writer.write("__out.push(String(");
                self.render_children(context, tree, id);
                context.writer.write_line("));");
            }
            IrNodeKind::Code(_) => {
                if let Some(span) = &node.source {
                    context.write_line_pragma(span);
                }
                self.render_children(context, tree, id);
                context.writer.newline();
            }
            IrNodeKind::Token(token) => {
                context.write_mapped(&token.content, node.source.as_ref());
            }
            IrNodeKind::TagHelper(tag_helper) => {
                context.writer.write(&format!(
                    "__out.push(__weft.renderTagHelper(\"{}\", [",
                    escape_ts_string(&tag_helper.tag_name)
                ));
                let children = tree.children(id).to_vec();
                for (index, child) in children.iter().enumerate() {
                    if index > 0 {
                        context.writer.write(", ");
                    }
                    self.render_node(context, tree, *child);
                }
                context.writer.write_line("]));");
            }
            IrNodeKind::TagHelperProperty(property) => {
                self.render_attribute_value(
                    context,
                    tree,
                    id,
                    &property.attribute_name,
                    property.constant_value.as_deref(),
                );
            }
            IrNodeKind::TagHelperHtmlAttribute(attribute) => {
                self.render_attribute_value(
                    context,
                    tree,
                    id,
                    &attribute.attribute_name,
                    attribute.constant_value.as_deref(),
                );
            }
            IrNodeKind::Directive(directive) => {
                // Directive passes remove every directive they understand;
                // anything left has no generated counterpart.
                tracing::trace!(
                    directive = %directive.descriptor.directive,
                    "skipping unprocessed directive during rendering"
                );
            }
            IrNodeKind::DirectiveToken(_) => {}
            IrNodeKind::Extension(extension) => {
                let handled =
                    self.target
                        .render_extension_node(context, tree, id, extension.as_ref());
                if !handled {
                    context.diagnostics.push(factory::missing_code_target_extension(
                        extension.name(),
                        extension.name(),
                    ));
                }
            }
        }
    }

    fn render_attribute_value(
        &self,
        context: &mut CodeRenderingContext<'_>,
        tree: &IrTree,
        id: NodeId,
        attribute_name: &str,
        constant_value: Option<&str>,
    ) {
        context.writer.write(&format!(
            "new TagHelperAttribute(\"{}\", ",
            escape_ts_string(attribute_name)
        ));
        if let Some(value) = constant_value {
            context
                .writer
                .write(&format!("\"{}\"", escape_ts_string(value)));
        } else if tree.children(id).is_empty() {
            context.writer.write("\"\"");
        } else {
            context.writer.write("String(");
            self.render_children(context, tree, id);
            context.writer.write(")");
        }
        context.writer.write(")");
    }
}

/// Escape text for inclusion in a double-quoted TypeScript string literal
pub(crate) fn escape_ts_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_target;
    use weft_core::{
        CompilerOptions, SourceDocument, SyntaxNode, SyntaxToken, inherits_directive,
    };
    use weft_core::directive::DirectiveTokenKind;
    use weft_passes::default_pipeline;

    #[test]
    fn renders_markup_and_expressions_inside_the_render_method() {
        let source = SourceDocument::new("<h1>{title}</h1>", Some("pages/home.weft".into()));
        let expression_span = source.span(5, 5).unwrap();
        let syntax = vec![
            SyntaxNode::Markup {
                content: "<h1>".into(),
                span: Some(source.span(0, 4).unwrap()),
            },
            SyntaxNode::Expression {
                content: "title".into(),
                span: Some(expression_span.clone()),
            },
            SyntaxNode::Markup {
                content: "</h1>".into(),
                span: Some(source.span(11, 5).unwrap()),
            },
        ];
        let mut document =
            CodeDocument::new(source, CompilerOptions::default(), syntax);
        default_pipeline().run(&mut document);

        let generated = DocumentRenderer::new(default_target()).render(&document);

        assert!(generated.text.starts_with("// <auto-generated/>\n"));
        assert!(generated.text.contains("export namespace WeftGenerated {"));
        assert!(generated.text.contains("export class Home"));
        assert!(generated.text.contains("const __out: string[] = [];"));
        assert!(generated.text.contains("__out.push(\"<h1>\");"));
        assert!(generated.text.contains("__out.push(String(title));"));
        assert!(generated.text.contains("return __out.join(\"\");"));
        assert!(generated.diagnostics.is_empty());

        let mapping = generated
            .mappings
            .find_by_original_offset(expression_span.absolute_index)
            .expect("expression token is mapped");
        assert_eq!(mapping.original, expression_span);
        assert_eq!(
            &generated.text[mapping.generated.absolute_index
                ..mapping.generated.absolute_index + mapping.generated.length],
            "title"
        );
    }

    #[test]
    fn inherits_directive_renders_as_extends() {
        let source = SourceDocument::new("@inherits ViewBase\n", Some("view.weft".into()));
        let descriptor_span = source.span(10, 8).unwrap();
        let syntax = vec![SyntaxNode::Directive {
            descriptor: inherits_directive(),
            tokens: vec![SyntaxToken {
                content: "ViewBase".into(),
                kind: DirectiveTokenKind::Type,
                span: Some(descriptor_span),
            }],
            body: Vec::new(),
            span: Some(source.span(0, 18).unwrap()),
            is_malformed: false,
        }];
        let mut document =
            CodeDocument::new(source, CompilerOptions::default(), syntax);
        default_pipeline().run(&mut document);

        let generated = DocumentRenderer::new(default_target()).render(&document);

        assert!(generated.text.contains("class View extends ViewBase {"));
        assert!(!generated.text.contains("@inherits"));
    }

    #[test]
    fn missing_metadata_extension_reports_a_diagnostic() {
        let mut document = CodeDocument::new(
            SourceDocument::new("<p>hi</p>", None),
            CompilerOptions::default(),
            vec![SyntaxNode::Markup {
                content: "<p>hi</p>".into(),
                span: None,
            }],
        );
        default_pipeline().run(&mut document);

        let generated = DocumentRenderer::new(CodeTarget::new()).render(&document);

        assert!(!generated.text.contains("auto-generated"));
        assert_eq!(generated.diagnostics.len(), 1);
        assert_eq!(generated.diagnostics[0].id, "WEFT2001");
        // The rest of the document still renders.
        assert!(generated.text.contains("__out.push(\"<p>hi</p>\");"));
    }

    #[test]
    fn checksum_matches_the_source_document() {
        let source = SourceDocument::new("<div></div>", None);
        let expected = source.checksum();
        let mut document = CodeDocument::new(source, CompilerOptions::default(), Vec::new());
        default_pipeline().run(&mut document);
        let generated = DocumentRenderer::new(default_target()).render(&document);
        assert_eq!(generated.checksum, expected);
    }

    #[test]
    fn escaping_covers_quotes_and_control_characters() {
        assert_eq!(escape_ts_string("a\"b\\c\nd"), "a\\\"b\\\\c\\nd");
        assert_eq!(escape_ts_string("plain"), "plain");
    }
}
