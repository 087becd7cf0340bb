//! Allowed child tag descriptors
//!
//! Restricts which child elements a tag helper permits. `*` allows any child.

use serde::{Deserialize, Serialize};

use super::{CATCH_ALL, for_each_invalid_character};
use crate::diagnostics::{Diagnostic, factory};

/// A single allowed child tag of a tag helper
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AllowedChildTagDescriptor {
    pub name: String,
    pub display_name: String,
    pub diagnostics: Box<[Diagnostic]>,
}

/// Builder for [`AllowedChildTagDescriptor`]
#[derive(Debug, Default, Clone)]
pub struct AllowedChildTagDescriptorBuilder {
    name: Option<String>,
    display_name: Option<String>,
    diagnostics: Vec<Diagnostic>,
}

impl AllowedChildTagDescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = Some(name.into());
        self
    }

    pub fn display_name(&mut self, display_name: impl Into<String>) -> &mut Self {
        self.display_name = Some(display_name.into());
        self
    }

    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) -> &mut Self {
        self.diagnostics.push(diagnostic);
        self
    }

    /// Build the descriptor, validating the configured name
    ///
    /// `helper_display_name` identifies the owning tag helper in diagnostics.
    pub fn build(&self, helper_display_name: &str) -> AllowedChildTagDescriptor {
        let name = self.name.clone().unwrap_or_default();
        let mut diagnostics = self.validate(helper_display_name, &name);
        diagnostics.extend(self.diagnostics.iter().cloned());

        AllowedChildTagDescriptor {
            display_name: self.display_name.clone().unwrap_or_else(|| name.clone()),
            name,
            diagnostics: diagnostics.into_boxed_slice(),
        }
    }

    fn validate(&self, helper_display_name: &str, name: &str) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        if name.trim().is_empty() {
            diagnostics.push(factory::invalid_allowed_child_blank(helper_display_name));
        } else if name != CATCH_ALL {
            for_each_invalid_character(name, |ch| {
                diagnostics.push(factory::invalid_allowed_child_character(
                    helper_display_name,
                    name,
                    ch,
                ));
            });
        }
        diagnostics
    }
}
