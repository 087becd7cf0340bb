//! Tag helper descriptor model
//!
//! A tag helper is a custom markup element or attribute binding the compiler
//! recognizes by tag/attribute name. Each descriptor kind is an immutable
//! value record produced by a paired mutable builder; `build()` validates the
//! configured data and surfaces every problem as a
//! [`Diagnostic`](crate::diagnostics::Diagnostic) inside the
//! descriptor rather than failing. Descriptors are value-equal, hashable, and
//! shareable across concurrently compiling documents.
//!
//! The builder tree mirrors the descriptor tree: a
//! [`TagHelperDescriptorBuilder`] owns child builders for its matching rules,
//! bound attributes, and allowed child tags, and deduplicates the built
//! children structurally (first occurrence wins).

mod allowed_child_tag;
mod bound_attribute;
mod descriptor;
mod required_attribute;
mod tag_matching_rule;

pub use allowed_child_tag::{AllowedChildTagDescriptor, AllowedChildTagDescriptorBuilder};
pub use bound_attribute::{BoundAttributeDescriptor, BoundAttributeDescriptorBuilder};
pub use descriptor::{TagHelperDescriptor, TagHelperDescriptorBuilder};
pub use required_attribute::{
    NameComparison, RequiredAttributeDescriptor, RequiredAttributeDescriptorBuilder,
    ValueComparison,
};
pub use tag_matching_rule::{
    TagMatchingRuleDescriptor, TagMatchingRuleDescriptorBuilder, TagStructure,
};

use std::collections::HashSet;
use std::hash::Hash;

/// Matches any tag or child when used as a whole name
pub const CATCH_ALL: &str = "*";

/// Attribute prefix reserved by the markup host; never bindable
pub const DATA_PREFIX: &str = "data-";

/// The transition marker introducing directive attributes
pub const TRANSITION: char = '@';

/// Characters that are never valid inside an HTML element or attribute name
const INVALID_NAME_CHARACTERS: &[char] = &[
    '@', '!', '<', '/', '?', '[', '>', ']', '=', '"', '\'', '*', '&',
];

/// Whether a single character may appear in an HTML name
pub(crate) fn is_valid_name_character(ch: char) -> bool {
    !ch.is_whitespace() && !INVALID_NAME_CHARACTERS.contains(&ch)
}

/// Reports each invalid character of `name` through `report`
///
/// The caller decides blank-name handling and catch-all sentinels before
/// calling this.
pub(crate) fn for_each_invalid_character(name: &str, mut report: impl FnMut(char)) {
    for ch in name.chars() {
        if !is_valid_name_character(ch) {
            report(ch);
        }
    }
}

/// Deduplicate built descriptors structurally, keeping the first occurrence
/// and preserving the order of everything else
pub(crate) fn distinct<D: Eq + Hash + Clone>(descriptors: Vec<D>) -> Box<[D]> {
    let mut seen = HashSet::with_capacity(descriptors.len());
    let mut result = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        if seen.insert(descriptor.clone()) {
            result.push(descriptor);
        }
    }
    result.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_character_predicate_rejects_whitespace_and_html_specials() {
        assert!(is_valid_name_character('d'));
        assert!(is_valid_name_character('-'));
        assert!(is_valid_name_character(':'));
        assert!(!is_valid_name_character(' '));
        assert!(!is_valid_name_character('\t'));
        assert!(!is_valid_name_character('<'));
        assert!(!is_valid_name_character('='));
        assert!(!is_valid_name_character('*'));
    }

    #[test]
    fn distinct_keeps_first_occurrence_in_order() {
        let deduped = distinct(vec!["a", "b", "a", "c", "b"]);
        assert_eq!(&*deduped, &["a", "b", "c"]);
    }
}
