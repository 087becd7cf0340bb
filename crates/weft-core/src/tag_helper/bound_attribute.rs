//! Bound attribute descriptors
//!
//! A bound attribute connects an element attribute to a typed property of the
//! tag helper. Directive attributes are the `@`-prefixed variant used for
//! event and parameter bindings; their names must begin with the transition
//! marker, and the validity of the remaining characters is checked
//! separately so the two problems produce distinct diagnostics.

use serde::{Deserialize, Serialize};

use crate::diagnostics::{Diagnostic, factory};
use crate::metadata::MetadataCollection;

use super::{DATA_PREFIX, TRANSITION, for_each_invalid_character};

/// One bindable attribute of a tag helper
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundAttributeDescriptor {
    pub name: String,
    /// Type of the bound property in the target language
    pub type_name: String,
    pub documentation: Option<String>,
    /// Prefix for dictionary-style bindings, e.g. `route-`
    pub indexer_name_prefix: Option<String>,
    /// Value type of dictionary-style bindings
    pub indexer_type_name: Option<String>,
    pub case_sensitive: bool,
    pub is_directive_attribute: bool,
    pub display_name: String,
    pub metadata: MetadataCollection,
    pub diagnostics: Box<[Diagnostic]>,
}

impl BoundAttributeDescriptor {
    /// Whether this attribute binds `prefix-*` attribute groups
    pub fn has_indexer(&self) -> bool {
        self.indexer_name_prefix.is_some()
    }
}

/// Builder for [`BoundAttributeDescriptor`]
#[derive(Debug, Default, Clone)]
pub struct BoundAttributeDescriptorBuilder {
    name: Option<String>,
    type_name: Option<String>,
    documentation: Option<String>,
    indexer_name_prefix: Option<String>,
    indexer_type_name: Option<String>,
    case_sensitive: bool,
    is_directive_attribute: bool,
    metadata: MetadataCollection,
    diagnostics: Vec<Diagnostic>,
}

impl BoundAttributeDescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn type_name(&mut self, type_name: impl Into<String>) -> &mut Self {
        self.type_name = Some(type_name.into());
        self
    }

    pub fn documentation(&mut self, documentation: impl Into<String>) -> &mut Self {
        self.documentation = Some(documentation.into());
        self
    }

    pub fn indexer(
        &mut self,
        name_prefix: impl Into<String>,
        type_name: impl Into<String>,
    ) -> &mut Self {
        self.indexer_name_prefix = Some(name_prefix.into());
        self.indexer_type_name = Some(type_name.into());
        self
    }

    pub fn case_sensitive(&mut self, case_sensitive: bool) -> &mut Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn directive_attribute(&mut self, is_directive_attribute: bool) -> &mut Self {
        self.is_directive_attribute = is_directive_attribute;
        self
    }

    pub fn metadata(&mut self, metadata: MetadataCollection) -> &mut Self {
        self.metadata = metadata;
        self
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) -> &mut Self {
        self.diagnostics.push(diagnostic);
        self
    }

    pub fn build(&self, helper_display_name: &str) -> BoundAttributeDescriptor {
        let name = self.name.clone().unwrap_or_default();
        let mut diagnostics = self.validate(helper_display_name, &name);
        diagnostics.extend(self.diagnostics.iter().cloned());

        BoundAttributeDescriptor {
            display_name: name.clone(),
            name,
            type_name: self.type_name.clone().unwrap_or_default(),
            documentation: self.documentation.clone(),
            indexer_name_prefix: self.indexer_name_prefix.clone(),
            indexer_type_name: self.indexer_type_name.clone(),
            case_sensitive: self.case_sensitive,
            is_directive_attribute: self.is_directive_attribute,
            metadata: self.metadata.clone(),
            diagnostics: diagnostics.into_boxed_slice(),
        }
    }

    fn validate(&self, helper_display_name: &str, name: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        if name.trim().is_empty() {
            diagnostics.push(factory::invalid_bound_attribute_name_blank(
                helper_display_name,
            ));
            return diagnostics;
        }

        if name
            .to_ascii_lowercase()
            .starts_with(DATA_PREFIX)
        {
            diagnostics.push(factory::invalid_bound_attribute_data_prefix(
                helper_display_name,
                name,
            ));
        }

        if self.is_directive_attribute {
            match name.strip_prefix(TRANSITION) {
                Some(rest) => {
                    for_each_invalid_character(rest, |ch| {
                        diagnostics.push(factory::invalid_directive_attribute_character(
                            helper_display_name,
                            name,
                            ch,
                        ));
                    });
                }
                None => {
                    diagnostics.push(factory::invalid_directive_attribute_missing_transition(
                        helper_display_name,
                        name,
                    ));
                }
            }
        } else {
            for_each_invalid_character(name, |ch| {
                diagnostics.push(factory::invalid_bound_attribute_name_character(
                    helper_display_name,
                    name,
                    ch,
                ));
            });
        }

        if let Some(prefix) = &self.indexer_name_prefix {
            for_each_invalid_character(prefix, |ch| {
                diagnostics.push(factory::invalid_indexer_prefix_character(
                    helper_display_name,
                    prefix,
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

    fn build(configure: impl FnOnce(&mut BoundAttributeDescriptorBuilder)) -> BoundAttributeDescriptor {
        let mut builder = BoundAttributeDescriptorBuilder::new();
        configure(&mut builder);
        builder.build("CounterTagHelper")
    }

    #[test]
    fn plain_attribute_name_has_no_diagnostics() {
        let descriptor = build(|builder| {
            builder.name("count").type_name("number");
        });
        assert!(descriptor.diagnostics.is_empty());
    }

    #[test]
    fn data_prefix_is_flagged() {
        let descriptor = build(|builder| {
            builder.name("data-count");
        });
        assert_eq!(descriptor.diagnostics.len(), 1);
        assert_eq!(descriptor.diagnostics[0].id, "WEFT1007");
    }

    #[test]
    fn data_prefix_check_is_case_insensitive() {
        let descriptor = build(|builder| {
            builder.name("DATA-count");
        });
        assert_eq!(descriptor.diagnostics[0].id, "WEFT1007");
    }

    #[test]
    fn directive_attribute_without_transition_is_its_own_diagnostic() {
        let descriptor = build(|builder| {
            builder.name("onclick").directive_attribute(true);
        });
        assert_eq!(descriptor.diagnostics.len(), 1);
        assert_eq!(descriptor.diagnostics[0].id, "WEFT1008");
    }

    #[test]
    fn directive_attribute_with_transition_validates_the_rest() {
        let descriptor = build(|builder| {
            builder.name("@on click").directive_attribute(true);
        });
        assert_eq!(descriptor.diagnostics.len(), 1);
        assert_eq!(descriptor.diagnostics[0].id, "WEFT1009");

        let descriptor = build(|builder| {
            builder.name("@onclick").directive_attribute(true);
        });
        assert!(descriptor.diagnostics.is_empty());
    }

    #[test]
    fn indexer_prefix_characters_are_validated() {
        let descriptor = build(|builder| {
            builder.name("routes").indexer("route =", "string");
        });
        assert_eq!(descriptor.diagnostics.len(), 2);
        assert!(descriptor
            .diagnostics
            .iter()
            .all(|diagnostic| diagnostic.id == "WEFT1014"));
    }

    #[test]
    fn blank_name_short_circuits_other_checks() {
        let descriptor = build(|builder| {
            builder.name(" ").directive_attribute(true);
        });
        assert_eq!(descriptor.diagnostics.len(), 1);
        assert_eq!(descriptor.diagnostics[0].id, "WEFT1005");
    }
}
