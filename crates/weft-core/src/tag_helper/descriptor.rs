//! Tag helper descriptors
//!
//! The root of the descriptor tree: identity, documentation, matching rules,
//! bound attributes, and allowed children. Built descriptors are immutable
//! and freely shared across concurrently compiling documents.

use serde::{Deserialize, Serialize};

use crate::diagnostics::Diagnostic;
use crate::metadata::MetadataCollection;

use super::{
    AllowedChildTagDescriptor, AllowedChildTagDescriptorBuilder, BoundAttributeDescriptor,
    BoundAttributeDescriptorBuilder, TagMatchingRuleDescriptor, TagMatchingRuleDescriptorBuilder,
    distinct,
};

/// A custom element or attribute binding the compiler recognizes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagHelperDescriptor {
    /// Classifier for the binding source, e.g. `component` or `view-helper`
    pub kind: String,
    pub name: String,
    pub assembly_name: String,
    pub display_name: String,
    pub documentation: Option<String>,
    /// Hint for the element name the helper renders as
    pub tag_output_hint: Option<String>,
    pub case_sensitive: bool,
    pub tag_matching_rules: Box<[TagMatchingRuleDescriptor]>,
    pub bound_attributes: Box<[BoundAttributeDescriptor]>,
    pub allowed_child_tags: Box<[AllowedChildTagDescriptor]>,
    pub metadata: MetadataCollection,
    pub diagnostics: Box<[Diagnostic]>,
}

impl TagHelperDescriptor {
    /// This descriptor's diagnostics plus those of every owned child
    pub fn all_diagnostics(&self) -> Vec<&Diagnostic> {
        let mut all: Vec<&Diagnostic> = self.diagnostics.iter().collect();
        for rule in &self.tag_matching_rules {
            all.extend(rule.all_diagnostics());
        }
        for attribute in &self.bound_attributes {
            all.extend(attribute.diagnostics.iter());
        }
        for child in &self.allowed_child_tags {
            all.extend(child.diagnostics.iter());
        }
        all
    }

    /// Whether any diagnostic anywhere in the descriptor tree is an error
    pub fn has_errors(&self) -> bool {
        self.all_diagnostics()
            .iter()
            .any(|diagnostic| diagnostic.severity == crate::diagnostics::Severity::Error)
    }
}

/// Builder for [`TagHelperDescriptor`]
#[derive(Debug, Clone)]
pub struct TagHelperDescriptorBuilder {
    kind: String,
    name: String,
    assembly_name: String,
    display_name: Option<String>,
    documentation: Option<String>,
    tag_output_hint: Option<String>,
    case_sensitive: bool,
    tag_matching_rules: Vec<TagMatchingRuleDescriptorBuilder>,
    bound_attributes: Vec<BoundAttributeDescriptorBuilder>,
    allowed_child_tags: Vec<AllowedChildTagDescriptorBuilder>,
    metadata: MetadataCollection,
    diagnostics: Vec<Diagnostic>,
}

impl TagHelperDescriptorBuilder {
    pub fn new(
        kind: impl Into<String>,
        name: impl Into<String>,
        assembly_name: impl Into<String>,
    ) -> Self {
        Self {
            kind: kind.into(),
            name: name.into(),
            assembly_name: assembly_name.into(),
            display_name: None,
            documentation: None,
            tag_output_hint: None,
            case_sensitive: false,
            tag_matching_rules: Vec::new(),
            bound_attributes: Vec::new(),
            allowed_child_tags: Vec::new(),
            metadata: MetadataCollection::empty(),
            diagnostics: Vec::new(),
        }
    }

    pub fn display_name(&mut self, display_name: impl Into<String>) -> &mut Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn documentation(&mut self, documentation: impl Into<String>) -> &mut Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn tag_output_hint(&mut self, hint: impl Into<String>) -> &mut Self {
        self.tag_output_hint = Some(hint.into());
        self
    }

    pub fn case_sensitive(&mut self, case_sensitive: bool) -> &mut Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn metadata(&mut self, metadata: MetadataCollection) -> &mut Self {
        self.metadata = metadata;
        self
    }

    /// Configure a tag matching rule through a nested builder
    pub fn tag_matching_rule(
        &mut self,
        configure: impl FnOnce(&mut TagMatchingRuleDescriptorBuilder),
    ) -> &mut Self {
        let mut builder = TagMatchingRuleDescriptorBuilder::new();
        configure(&mut builder);
        self.tag_matching_rules.push(builder);
        self
    }

    /// Configure a bound attribute through a nested builder
    pub fn bound_attribute(
        &mut self,
        configure: impl FnOnce(&mut BoundAttributeDescriptorBuilder),
    ) -> &mut Self {
        let mut builder = BoundAttributeDescriptorBuilder::new();
        configure(&mut builder);
        self.bound_attributes.push(builder);
        self
    }

    /// Configure an allowed child tag through a nested builder
    pub fn allowed_child_tag(
        &mut self,
        configure: impl FnOnce(&mut AllowedChildTagDescriptorBuilder),
    ) -> &mut Self {
        let mut builder = AllowedChildTagDescriptorBuilder::new();
        configure(&mut builder);
        self.allowed_child_tags.push(builder);
        self
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) -> &mut Self {
        self.diagnostics.push(diagnostic);
        self
    }

    fn effective_display_name(&self) -> String {
        self.display_name
            .clone()
            .unwrap_or_else(|| self.name.clone())
    }

    /// Build the descriptor tree, validating every child builder
    ///
    /// Bad data never fails the build; every problem surfaces as a
    /// diagnostic on the descriptor that owns it. Structurally identical
    /// children collapse to the first occurrence.
    pub fn build(&self) -> TagHelperDescriptor {
        let display_name = self.effective_display_name();

        let tag_matching_rules = distinct(
            self.tag_matching_rules
                .iter()
                .map(|builder| builder.build(&display_name))
                .collect(),
        );
        let bound_attributes = distinct(
            self.bound_attributes
                .iter()
                .map(|builder| builder.build(&display_name))
                .collect(),
        );
        let allowed_child_tags = distinct(
            self.allowed_child_tags
                .iter()
                .map(|builder| builder.build(&display_name))
                .collect(),
        );

        tracing::trace!(
            helper = %display_name,
            rules = tag_matching_rules.len(),
            attributes = bound_attributes.len(),
            "built tag helper descriptor"
        );

        TagHelperDescriptor {
            kind: self.kind.clone(),
            name: self.name.clone(),
            assembly_name: self.assembly_name.clone(),
            display_name,
            documentation: self.documentation.clone(),
            tag_output_hint: self.tag_output_hint.clone(),
            case_sensitive: self.case_sensitive,
            tag_matching_rules,
            bound_attributes,
            allowed_child_tags,
            metadata: self.metadata.clone(),
            diagnostics: self.diagnostics.clone().into_boxed_slice(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counter_builder() -> TagHelperDescriptorBuilder {
        TagHelperDescriptorBuilder::new("component", "CounterTagHelper", "App.Components")
    }

    #[test]
    fn well_formed_helper_builds_clean() {
        let mut builder = counter_builder();
        builder
            .tag_matching_rule(|rule| {
                rule.tag_name("counter");
            })
            .bound_attribute(|attribute| {
                attribute.name("count").type_name("number");
            });
        let descriptor = builder.build();
        assert!(descriptor.all_diagnostics().is_empty());
        assert!(!descriptor.has_errors());
        assert_eq!(descriptor.display_name, "CounterTagHelper");
    }

    #[test]
    fn duplicate_children_collapse_keeping_first_seen_order() {
        let mut builder = counter_builder();
        builder
            .bound_attribute(|attribute| {
                attribute.name("count").type_name("number");
            })
            .bound_attribute(|attribute| {
                attribute.name("step").type_name("number");
            })
            .bound_attribute(|attribute| {
                attribute.name("count").type_name("number");
            });
        let descriptor = builder.build();
        let names: Vec<_> = descriptor
            .bound_attributes
            .iter()
            .map(|attribute| attribute.name.as_str())
            .collect();
        assert_eq!(names, ["count", "step"]);
    }

    #[test]
    fn children_differing_structurally_are_kept() {
        let mut builder = counter_builder();
        builder
            .bound_attribute(|attribute| {
                attribute.name("count").type_name("number");
            })
            .bound_attribute(|attribute| {
                attribute.name("count").type_name("string");
            });
        let descriptor = builder.build();
        assert_eq!(descriptor.bound_attributes.len(), 2);
    }

    #[test]
    fn child_diagnostics_reference_the_helper_display_name() {
        let mut builder = counter_builder();
        builder.display_name("App.Components.Counter");
        builder.tag_matching_rule(|rule| {
            rule.tag_name("");
        });
        let descriptor = builder.build();
        let all = descriptor.all_diagnostics();
        assert_eq!(all.len(), 1);
        assert!(all[0].message.contains("App.Components.Counter"));
        assert!(descriptor.has_errors());
    }

    #[test]
    fn manual_diagnostics_and_validation_diagnostics_are_both_kept() {
        let mut builder = counter_builder();
        builder
            .add_diagnostic(Diagnostic::warning("TEST1", "manually added"))
            .bound_attribute(|attribute| {
                attribute.name("data-x");
            });
        let descriptor = builder.build();
        assert_eq!(descriptor.all_diagnostics().len(), 2);
    }

    #[test]
    fn descriptors_are_value_equal() {
        let make = || {
            let mut builder = counter_builder();
            builder.tag_matching_rule(|rule| {
                rule.tag_name("counter");
            });
            builder.build()
        };
        assert_eq!(make(), make());
    }
}
