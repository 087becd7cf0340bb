//! Source documents and spans
//!
//! A [`SourceSpan`] ties a piece of compiler output back to a region of the
//! original `.weft` document. Spans carry both an absolute offset/length pair
//! (the canonical coordinates, convertible to a [`TextRange`]) and the
//! line/character pair editors want, so the source-mapping table never has to
//! re-scan the document during IDE round-trips.

use biome_text_size::{TextRange, TextSize};
use serde::{Deserialize, Serialize};

use crate::checksum::{Checksum, ChecksumBuilder};
use crate::error::WeftError;
use crate::result::Result;

/// A span in an original Weft document
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourceSpan {
    /// Path of the originating document, when known
    pub file_path: Option<String>,
    /// Absolute byte offset into the document text
    pub absolute_index: usize,
    /// Zero-based line number of the span start
    pub line_index: usize,
    /// Zero-based character offset within the start line
    pub character_index: usize,
    /// Length of the span in bytes
    pub length: usize,
}

impl SourceSpan {
    pub fn new(
        file_path: Option<String>,
        absolute_index: usize,
        line_index: usize,
        character_index: usize,
        length: usize,
    ) -> Self {
        Self {
            file_path,
            absolute_index,
            line_index,
            character_index,
            length,
        }
    }

    /// Exclusive end offset of this span
    pub fn end(&self) -> usize {
        self.absolute_index + self.length
    }

    /// The span as a [`TextRange`] over the originating document
    pub fn as_range(&self) -> TextRange {
        TextRange::new(
            TextSize::from(self.absolute_index as u32),
            TextSize::from(self.end() as u32),
        )
    }
}

/// An original Weft document: raw text plus a precomputed line index
#[derive(Debug, Clone)]
pub struct SourceDocument {
    text: String,
    file_path: Option<String>,
    line_starts: Vec<usize>,
}

impl SourceDocument {
    pub fn new(text: impl Into<String>, file_path: Option<String>) -> Self {
        let text = text.into();
        let line_starts = compute_line_starts(&text);
        Self {
            text,
            file_path,
            line_starts,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn file_path(&self) -> Option<&str> {
        self.file_path.as_deref()
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Zero-based (line, character) position of an absolute offset
    pub fn line_col(&self, offset: usize) -> (usize, usize) {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        (line, offset - self.line_starts[line])
    }

    /// Build a [`SourceSpan`] for a range of this document
    ///
    /// Fails when the range falls outside the document text; nodes must never
    /// carry spans the source-mapping table cannot resolve.
    pub fn span(&self, offset: usize, length: usize) -> Result<SourceSpan> {
        if offset + length > self.text.len() {
            return Err(WeftError::SpanOutOfBounds {
                start: offset,
                end: offset + length,
                len: self.text.len(),
            });
        }
        let (line_index, character_index) = self.line_col(offset);
        Ok(SourceSpan {
            file_path: self.file_path.clone(),
            absolute_index: offset,
            line_index,
            character_index,
            length,
        })
    }

    /// The text covered by a span of this document
    pub fn slice(&self, span: &SourceSpan) -> &str {
        &self.text[span.absolute_index..span.end()]
    }

    /// Content checksum of the document text, used for round-trip
    /// identification of generated output
    pub fn checksum(&self) -> Checksum {
        let mut builder = ChecksumBuilder::new();
        builder.append_string(&self.text);
        builder.finish()
    }
}

fn compute_line_starts(text: &str) -> Vec<usize> {
    let mut starts = vec![0];
    for (index, byte) in text.bytes().enumerate() {
        if byte == b'\n' {
            starts.push(index + 1);
        }
    }
    starts
}
