//! Design-time compilation: directive type information must reach the
//! editor artifact without any physical line pragmas or runtime-only
//! optimizations.

use weft_core::{inherits_directive, CompilerOptions};
use weft_integration_tests::{render, SourceFixture};

fn design_time_options() -> CompilerOptions {
    CompilerOptions {
        design_time: true,
        ..CompilerOptions::default()
    }
}

#[test]
fn directive_tokens_surface_in_the_helpers_method() {
    let fixture = SourceFixture::new("@inherits EditorBase\n<p></p>\n", "editor.weft");
    let syntax = vec![
        fixture.directive(
            inherits_directive(),
            vec![fixture.type_token("EditorBase")],
            Vec::new(),
        ),
        fixture.markup("<p></p>"),
    ];
    let document = fixture.compile(design_time_options(), syntax);
    let generated = render(&document);

    assert!(generated
        .text
        .contains("private __weft_designTimeHelpers(): void {"));
    assert!(generated.text.contains("// @ts-nocheck"));
    assert!(generated
        .text
        .contains("let __weft_typecheck_0: EditorBase = null as any;"));
    // The directive still shapes the class signature.
    assert!(generated.text.contains("extends EditorBase"));
}

#[test]
fn design_time_output_has_no_line_pragmas() {
    let fixture = SourceFixture::new("{user.name}\n", "editor.weft");
    let syntax = vec![fixture.expression("user.name")];
    let document = fixture.compile(design_time_options(), syntax);
    let generated = render(&document);

    assert!(!generated.text.contains("//#line"));
    // Mappings are still recorded; only the physical markers are dropped.
    let span = fixture.span_of("user.name");
    assert!(generated
        .mappings
        .find_by_original_offset(span.absolute_index)
        .is_some());
}

#[test]
fn runtime_output_keeps_line_pragmas() {
    let fixture = SourceFixture::new("{user.name}\n", "editor.weft");
    let syntax = vec![fixture.expression("user.name")];
    let document = fixture.compile(CompilerOptions::default(), syntax);
    let generated = render(&document);

    assert!(generated.text.contains("//#line 1 \"editor.weft\""));
    assert!(!generated.text.contains("__weft_designTimeHelpers"));
}
