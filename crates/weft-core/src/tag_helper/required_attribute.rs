//! Required attribute descriptors
//!
//! Part of a tag matching rule: the rule only matches an element when every
//! required attribute is present (by full name or name prefix, optionally
//! constrained by value).

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, factory};

use super::for_each_invalid_character;

/// How a required attribute's name is matched against element attributes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum NameComparison {
    #[default]
    FullMatch,
    /// The attribute name only needs to start with the configured name,
    /// used for dictionary-style bindings such as `route-*`
    PrefixMatch,
}

/// How a required attribute's value is matched, when a value is configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ValueComparison {
    /// Any value satisfies the requirement
    #[default]
    None,
    FullMatch,
    PrefixMatch,
    SuffixMatch,
}

/// One attribute an element must carry for a tag matching rule to apply
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequiredAttributeDescriptor {
    pub name: String,
    pub name_comparison: NameComparison,
    pub value: Option<String>,
    pub value_comparison: ValueComparison,
    pub case_sensitive: bool,
    pub display_name: String,
    pub diagnostics: Box<[Diagnostic]>,
}

/// Builder for [`RequiredAttributeDescriptor`]
#[derive(Debug, Default, Clone)]
pub struct RequiredAttributeDescriptorBuilder {
    name: Option<String>,
    name_comparison: NameComparison,
    value: Option<String>,
    value_comparison: ValueComparison,
    case_sensitive: bool,
    diagnostics: Vec<Diagnostic>,
}

impl RequiredAttributeDescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn name_comparison(&mut self, comparison: NameComparison) -> &mut Self {
        self.name_comparison = comparison;
        self
    }

    pub fn value(&mut self, value: impl Into<String>) -> &mut Self {
        self.value = Some(value.into());
        self
    }

    pub fn value_comparison(&mut self, comparison: ValueComparison) -> &mut Self {
        self.value_comparison = comparison;
        self
    }

    pub fn case_sensitive(&mut self, case_sensitive: bool) -> &mut Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) -> &mut Self {
        self.diagnostics.push(diagnostic);
        self
    }

    pub fn build(&self, helper_display_name: &str) -> RequiredAttributeDescriptor {
        let name = self.name.clone().unwrap_or_default();
        let mut diagnostics = self.validate(helper_display_name, &name);
        diagnostics.extend(self.diagnostics.iter().cloned());

        let display_name = match self.name_comparison {
            NameComparison::FullMatch => name.clone(),
            NameComparison::PrefixMatch => format!("{name}..."),
        };

        RequiredAttributeDescriptor {
            name,
            name_comparison: self.name_comparison,
            value: self.value.clone(),
            value_comparison: self.value_comparison,
            case_sensitive: self.case_sensitive,
            display_name,
            diagnostics: diagnostics.into_boxed_slice(),
        }
    }

    fn validate(&self, helper_display_name: &str, name: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        if name.trim().is_empty() {
            diagnostics.push(factory::invalid_required_attribute_name_blank(
                helper_display_name,
            ));
        } else {
            for_each_invalid_character(name, |ch| {
                diagnostics.push(factory::invalid_required_attribute_name_character(
                    helper_display_name,
                    name,
                    ch,
                ));
            });
        }
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_attribute_has_no_diagnostics() {
        let mut builder = RequiredAttributeDescriptorBuilder::new();
        builder.name("asp-for").value("Model");
        let descriptor = builder.build("InputTagHelper");
        assert!(descriptor.diagnostics.is_empty());
        assert_eq!(descriptor.display_name, "asp-for");
    }

    #[test]
    fn prefix_match_display_name_marks_the_prefix() {
        let mut builder = RequiredAttributeDescriptorBuilder::new();
        builder
            .name("route-")
            .name_comparison(NameComparison::PrefixMatch);
        let descriptor = builder.build("AnchorTagHelper");
        assert_eq!(descriptor.display_name, "route-...");
    }

    #[test]
    fn blank_name_reports_wft1010() {
        let descriptor = RequiredAttributeDescriptorBuilder::new().build("InputTagHelper");
        assert_eq!(descriptor.diagnostics.len(), 1);
        assert_eq!(descriptor.diagnostics[0].id, "WEFT1010");
    }

    #[test]
    fn invalid_characters_each_report_once() {
        let mut builder = RequiredAttributeDescriptorBuilder::new();
        builder.name("a b=c");
        let descriptor = builder.build("InputTagHelper");
        assert_eq!(descriptor.diagnostics.len(), 2);
        assert!(descriptor
            .diagnostics
            .iter()
            .all(|diagnostic| diagnostic.id == "WEFT1011"));
    }
}
