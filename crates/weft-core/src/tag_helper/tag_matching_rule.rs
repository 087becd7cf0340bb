//! Tag matching rule descriptors
//!
//! A tag helper applies to an element when at least one of its matching rules
//! matches the element's tag name, parent tag, structure, and required
//! attributes. `*` as the tag name matches any element.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, factory};

use super::{
    CATCH_ALL, RequiredAttributeDescriptor, RequiredAttributeDescriptorBuilder, distinct,
    for_each_invalid_character,
};

/// Expected element structure for a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TagStructure {
    #[default]
    Unspecified,
    NormalOrSelfClosing,
    /// Void elements, e.g. `<input>`
    WithoutEndTag,
}

/// One way a tag helper can match an element
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TagMatchingRuleDescriptor {
    pub tag_name: String,
    pub parent_tag: Option<String>,
    pub tag_structure: TagStructure,
    pub case_sensitive: bool,
    pub required_attributes: Box<[RequiredAttributeDescriptor]>,
    pub diagnostics: Box<[Diagnostic]>,
}

impl TagMatchingRuleDescriptor {
    /// This rule's diagnostics plus those of its required attributes
    pub fn all_diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().chain(
            self.required_attributes
                .iter()
                .flat_map(|attribute| attribute.diagnostics.iter()),
        )
    }
}

/// Builder for [`TagMatchingRuleDescriptor`]
#[derive(Debug, Default, Clone)]
pub struct TagMatchingRuleDescriptorBuilder {
    tag_name: Option<String>,
    parent_tag: Option<String>,
    tag_structure: TagStructure,
    case_sensitive: bool,
    required_attributes: Vec<RequiredAttributeDescriptorBuilder>,
    diagnostics: Vec<Diagnostic>,
}

impl TagMatchingRuleDescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tag_name(&mut self, tag_name: impl Into<String>) -> &mut Self {
        self.tag_name = Some(tag_name.into());
        self
    }

    pub fn parent_tag(&mut self, parent_tag: impl Into<String>) -> &mut Self {
        self.parent_tag = Some(parent_tag.into());
        self
    }

    pub fn tag_structure(&mut self, tag_structure: TagStructure) -> &mut Self {
        self.tag_structure = tag_structure;
        self
    }

    pub fn case_sensitive(&mut self, case_sensitive: bool) -> &mut Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Configure a required attribute through a nested builder
    pub fn required_attribute(
        &mut self,
        configure: impl FnOnce(&mut RequiredAttributeDescriptorBuilder),
    ) -> &mut Self {
        let mut builder = RequiredAttributeDescriptorBuilder::new();
        configure(&mut builder);
        self.required_attributes.push(builder);
        self
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) -> &mut Self {
        self.diagnostics.push(diagnostic);
        self
    }

    pub fn build(&self, helper_display_name: &str) -> TagMatchingRuleDescriptor {
        let tag_name = self.tag_name.clone().unwrap_or_default();
        let mut diagnostics = self.validate(helper_display_name, &tag_name);
        diagnostics.extend(self.diagnostics.iter().cloned());

        let required_attributes = distinct(
            self.required_attributes
                .iter()
                .map(|builder| builder.build(helper_display_name))
                .collect(),
        );

        TagMatchingRuleDescriptor {
            tag_name,
            parent_tag: self.parent_tag.clone(),
            tag_structure: self.tag_structure,
            case_sensitive: self.case_sensitive,
            required_attributes,
            diagnostics: diagnostics.into_boxed_slice(),
        }
    }

    fn validate(&self, helper_display_name: &str, tag_name: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if tag_name.trim().is_empty() {
            diagnostics.push(factory::invalid_rule_tag_name_blank(helper_display_name));
        } else if tag_name != CATCH_ALL {
            for_each_invalid_character(tag_name, |ch| {
                diagnostics.push(factory::invalid_rule_tag_name_character(
                    helper_display_name,
                    tag_name,
                    ch,
                ));
            });
        }

        if let Some(parent_tag) = &self.parent_tag {
            if parent_tag.trim().is_empty() {
                diagnostics.push(factory::invalid_rule_parent_tag_blank(helper_display_name));
            } else {
                for_each_invalid_character(parent_tag, |ch| {
                    diagnostics.push(factory::invalid_rule_parent_tag_character(
                        helper_display_name,
                        parent_tag,
                        ch,
                    ));
                });
            }
        }

        diagnostics
    }
}
