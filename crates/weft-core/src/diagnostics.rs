//! Structured diagnostics for the Weft compiler
//!
//! Diagnostics carry a stable rule id, a severity, a message, and an optional
//! span into the original document. They are plain values: builders and
//! passes accumulate them, descriptors and documents freeze them, and the
//! editor layer renders them. Nothing in the pipeline throws for a
//! data-level problem.

use serde::{Deserialize, Serialize};

use crate::source::SourceSpan;

/// Severity of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// A single compiler diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Stable rule identifier, e.g. `WEFT1003`
    pub id: String,
    pub severity: Severity,
    pub message: String,
    /// Span into the original document, when the problem has one
    pub span: Option<SourceSpan>,
}

impl Diagnostic {
    pub fn error(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            severity: Severity::Error,
            message: message.into(),
            span: None,
        }
    }

    pub fn warning(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            severity: Severity::Warning,
            message: message.into(),
            span: None,
        }
    }

    pub fn with_span(mut self, span: SourceSpan) -> Self {
        self.span = Some(span);
        self
    }
}

/// Factory functions for every diagnostic the descriptor builders and the
/// renderer emit. Each rule id is stable and documented here, nowhere else.
pub mod factory {
    use super::Diagnostic;

    /// WEFT1001: a tag matching rule has a null or whitespace tag name
    pub fn invalid_rule_tag_name_blank(display_name: &str) -> Diagnostic {
        Diagnostic::error(
            "WEFT1001",
            format!("Tag helper '{display_name}' has a tag matching rule with a missing or whitespace tag name. Use '*' to match any tag."),
        )
    }

    /// WEFT1002: a tag matching rule's tag name contains an HTML-invalid character
    pub fn invalid_rule_tag_name_character(display_name: &str, tag_name: &str, ch: char) -> Diagnostic {
        Diagnostic::error(
            "WEFT1002",
            format!("Tag helper '{display_name}' has a tag matching rule with tag name '{tag_name}' containing the invalid character '{ch}'."),
        )
    }

    /// WEFT1003: a tag matching rule has a whitespace-only parent tag name
    pub fn invalid_rule_parent_tag_blank(display_name: &str) -> Diagnostic {
        Diagnostic::error(
            "WEFT1003",
            format!("Tag helper '{display_name}' has a tag matching rule with a whitespace parent tag name."),
        )
    }

    /// WEFT1004: a parent tag name contains an HTML-invalid character
    pub fn invalid_rule_parent_tag_character(display_name: &str, parent_tag: &str, ch: char) -> Diagnostic {
        Diagnostic::error(
            "WEFT1004",
            format!("Tag helper '{display_name}' has a tag matching rule with parent tag '{parent_tag}' containing the invalid character '{ch}'."),
        )
    }

    /// WEFT1005: a bound attribute has a null or whitespace name
    pub fn invalid_bound_attribute_name_blank(display_name: &str) -> Diagnostic {
        Diagnostic::error(
            "WEFT1005",
            format!("Tag helper '{display_name}' has a bound attribute with a missing or whitespace name."),
        )
    }

    /// WEFT1006: a bound attribute name contains an HTML-invalid character
    pub fn invalid_bound_attribute_name_character(display_name: &str, name: &str, ch: char) -> Diagnostic {
        Diagnostic::error(
            "WEFT1006",
            format!("Tag helper '{display_name}' has a bound attribute '{name}' containing the invalid character '{ch}'."),
        )
    }

    /// WEFT1007: a bound attribute name begins with the reserved `data-` prefix
    pub fn invalid_bound_attribute_data_prefix(display_name: &str, name: &str) -> Diagnostic {
        Diagnostic::error(
            "WEFT1007",
            format!("Tag helper '{display_name}' has a bound attribute '{name}' starting with the reserved 'data-' prefix. 'data-*' attributes are owned by the markup host and cannot be bound."),
        )
    }

    /// WEFT1008: a directive attribute name does not begin with the `@` transition
    pub fn invalid_directive_attribute_missing_transition(display_name: &str, name: &str) -> Diagnostic {
        Diagnostic::error(
            "WEFT1008",
            format!("Tag helper '{display_name}' has a directive attribute '{name}' that does not start with '@'. Directive attribute names must begin with the '@' transition."),
        )
    }

    /// WEFT1009: a directive attribute name contains an invalid character after the transition
    pub fn invalid_directive_attribute_character(display_name: &str, name: &str, ch: char) -> Diagnostic {
        Diagnostic::error(
            "WEFT1009",
            format!("Tag helper '{display_name}' has a directive attribute '{name}' containing the invalid character '{ch}'."),
        )
    }

    /// WEFT1010: a required attribute has a null or whitespace name
    pub fn invalid_required_attribute_name_blank(display_name: &str) -> Diagnostic {
        Diagnostic::error(
            "WEFT1010",
            format!("Tag helper '{display_name}' has a required attribute with a missing or whitespace name."),
        )
    }

    /// WEFT1011: a required attribute name contains an HTML-invalid character
    pub fn invalid_required_attribute_name_character(display_name: &str, name: &str, ch: char) -> Diagnostic {
        Diagnostic::error(
            "WEFT1011",
            format!("Tag helper '{display_name}' has a required attribute '{name}' containing the invalid character '{ch}'."),
        )
    }

    /// WEFT1012: an allowed child tag has a null or whitespace name
    pub fn invalid_allowed_child_blank(display_name: &str) -> Diagnostic {
        Diagnostic::error(
            "WEFT1012",
            format!("Tag helper '{display_name}' has an allowed child tag with a missing or whitespace name. Use '*' to allow any child."),
        )
    }

    /// WEFT1013: an allowed child tag name contains an HTML-invalid character
    pub fn invalid_allowed_child_character(display_name: &str, name: &str, ch: char) -> Diagnostic {
        Diagnostic::error(
            "WEFT1013",
            format!("Tag helper '{display_name}' has an allowed child tag '{name}' containing the invalid character '{ch}'."),
        )
    }

    /// WEFT1014: a bound attribute's indexer prefix contains an invalid character
    pub fn invalid_indexer_prefix_character(display_name: &str, prefix: &str, ch: char) -> Diagnostic {
        Diagnostic::error(
            "WEFT1014",
            format!("Tag helper '{display_name}' has an indexer prefix '{prefix}' containing the invalid character '{ch}'."),
        )
    }

    /// WEFT2001: a node required a code target extension that was never registered
    pub fn missing_code_target_extension(node_kind: &str, extension: &str) -> Diagnostic {
        Diagnostic::error(
            "WEFT2001",
            format!("The node '{node_kind}' requires the code target extension '{extension}', which is not registered. The node was skipped during code generation."),
        )
    }
}
