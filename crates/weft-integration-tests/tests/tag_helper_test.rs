//! Tag helper descriptor model through the public API: nested builders,
//! validation diagnostics, structural dedup, and metadata behavior.

use weft_core::{
    MetadataCollection, NameComparison, Severity, TagHelperDescriptorBuilder, ValueComparison,
    WeftError,
};

fn button_builder() -> TagHelperDescriptorBuilder {
    let mut builder =
        TagHelperDescriptorBuilder::new("Component", "ButtonTagHelper", "App.Widgets");
    builder
        .display_name("App.Widgets.ButtonTagHelper")
        .tag_matching_rule(|rule| {
            rule.tag_name("my-button").required_attribute(|attribute| {
                attribute
                    .name("variant")
                    .name_comparison(NameComparison::FullMatch)
                    .value("primary")
                    .value_comparison(ValueComparison::FullMatch);
            });
        })
        .bound_attribute(|attribute| {
            attribute.name("label").type_name("string");
        })
        .allowed_child_tag(|child| {
            child.name("my-icon");
        });
    builder
}

#[test]
fn a_valid_descriptor_builds_without_diagnostics() {
    let descriptor = button_builder().build();
    assert_eq!(descriptor.name, "ButtonTagHelper");
    assert_eq!(descriptor.display_name, "App.Widgets.ButtonTagHelper");
    assert_eq!(descriptor.tag_matching_rules.len(), 1);
    assert_eq!(descriptor.bound_attributes.len(), 1);
    assert_eq!(descriptor.allowed_child_tags.len(), 1);
    assert!(descriptor.all_diagnostics().is_empty());
    assert!(!descriptor.has_errors());
}

#[test]
fn invalid_children_surface_as_diagnostics_not_errors() {
    let mut builder = button_builder();
    builder
        .tag_matching_rule(|rule| {
            rule.tag_name("bad<tag");
        })
        .bound_attribute(|attribute| {
            attribute.name("data-peril").type_name("string");
        })
        .allowed_child_tag(|child| {
            child.name("   ");
        });
    let descriptor = builder.build();

    let ids: Vec<&str> = descriptor
        .all_diagnostics()
        .iter()
        .map(|diagnostic| diagnostic.id.as_str())
        .collect();
    assert!(ids.contains(&"WEFT1002"), "invalid rule tag character");
    assert!(ids.contains(&"WEFT1007"), "data- prefixed bound attribute");
    assert!(ids.contains(&"WEFT1012"), "blank allowed child tag");
    assert!(descriptor.has_errors());
    assert!(descriptor
        .all_diagnostics()
        .iter()
        .all(|diagnostic| diagnostic.severity == Severity::Error));
}

#[test]
fn structurally_identical_children_collapse_to_one() {
    let mut builder = TagHelperDescriptorBuilder::new("Component", "Button", "App");
    for _ in 0..3 {
        builder.tag_matching_rule(|rule| {
            rule.tag_name("my-button");
        });
    }
    let descriptor = builder.build();
    assert_eq!(descriptor.tag_matching_rules.len(), 1);
}

#[test]
fn descriptors_compare_by_value() {
    assert_eq!(button_builder().build(), button_builder().build());

    let mut changed = button_builder();
    changed.case_sensitive(true);
    assert_ne!(button_builder().build(), changed.build());
}

#[test]
fn metadata_is_order_independent_and_rejects_duplicates() {
    let forward =
        MetadataCollection::from_pairs([("kind", "component"), ("runtime", "weft-ts")]).unwrap();
    let reverse =
        MetadataCollection::from_pairs([("runtime", "weft-ts"), ("kind", "component")]).unwrap();
    assert_eq!(forward, reverse);
    assert_eq!(forward.get("runtime"), Some("weft-ts"));

    let duplicate = MetadataCollection::from_pairs([("kind", "a"), ("kind", "b")]);
    assert!(matches!(
        duplicate,
        Err(WeftError::DuplicateMetadataKey { ref key }) if key == "kind"
    ));
}

#[test]
fn diagnostics_serialize_for_the_editor_layer() -> anyhow::Result<()> {
    let mut builder = TagHelperDescriptorBuilder::new("Component", "Button", "App");
    builder.tag_matching_rule(|rule| {
        rule.tag_name("");
    });
    let descriptor = builder.build();
    let diagnostics = descriptor.all_diagnostics();
    assert_eq!(diagnostics.len(), 1);

    let json = serde_json::to_value(diagnostics[0])?;
    assert_eq!(json["id"], "WEFT1001");
    assert_eq!(json["severity"], "error");
    assert!(json["message"].as_str().unwrap().contains("Button"));
    Ok(())
}
