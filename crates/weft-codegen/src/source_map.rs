//! Source mappings
//!
//! Each mapping correlates a span of the original document with the span of
//! generated output it produced. The editor layer uses the table to carry
//! hovers, go-to-definition, and diagnostics between the two coordinate
//! spaces, so every token written with a known origin must be recorded here
//! regardless of whether a physical line pragma was emitted.

use serde::{Deserialize, Serialize};
use weft_core::SourceSpan;

use crate::writer::GeneratedSpan;

/// One original-to-generated correspondence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMapping {
    pub original: SourceSpan,
    pub generated: GeneratedSpan,
}

/// All mappings for one generated document, in generation order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMappingTable {
    mappings: Vec<SourceMapping>,
}

impl SourceMappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, original: SourceSpan, generated: GeneratedSpan) {
        self.mappings.push(SourceMapping {
            original,
            generated,
        });
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceMapping> {
        self.mappings.iter()
    }

    /// The mapping whose generated span contains `offset`, if any
    pub fn find_by_generated_offset(&self, offset: usize) -> Option<&SourceMapping> {
        self.mappings.iter().find(|mapping| {
            let start = mapping.generated.absolute_index;
            offset >= start && offset < start + mapping.generated.length
        })
    }

    /// The mapping whose original span contains `offset`, if any
    pub fn find_by_original_offset(&self, offset: usize) -> Option<&SourceMapping> {
        self.mappings.iter().find(|mapping| {
            let start = mapping.original.absolute_index;
            offset >= start && offset < start + mapping.original.length
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping_at(original_offset: usize, generated_offset: usize, length: usize) -> SourceMapping {
        SourceMapping {
            original: SourceSpan::new(None, original_offset, 0, original_offset, length),
            generated: GeneratedSpan {
                absolute_index: generated_offset,
                line_index: 0,
                character_index: generated_offset,
                length,
            },
        }
    }

    #[test]
    fn lookup_by_offset_works_in_both_directions() {
        let mut table = SourceMappingTable::new();
        let mapping = mapping_at(10, 100, 5);
        table.record(mapping.original.clone(), mapping.generated);

        assert_eq!(table.find_by_original_offset(12), Some(&mapping));
        assert_eq!(table.find_by_original_offset(15), None);
        assert_eq!(table.find_by_generated_offset(104), Some(&mapping));
        assert_eq!(table.find_by_generated_offset(99), None);
    }

    #[test]
    fn tables_serialize_for_the_editor_layer() {
        let mut table = SourceMappingTable::new();
        let mapping = mapping_at(0, 0, 3);
        table.record(mapping.original.clone(), mapping.generated);
        let json = serde_json::to_string(&table).unwrap();
        let parsed: SourceMappingTable = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, table);
    }
}
