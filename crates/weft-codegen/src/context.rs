//! Rendering context
//!
//! Everything a node's rendering needs in one place: the writer, the
//! source-mapping table, diagnostics, the compiler options, and the source
//! document. Mapped writes always record a mapping; whether a physical line
//! pragma accompanies them depends on the design-time flag.

use weft_core::{CompilerOptions, Diagnostic, SourceDocument, SourceSpan};

use crate::source_map::SourceMappingTable;
use crate::writer::CodeWriter;

pub struct CodeRenderingContext<'a> {
    pub writer: CodeWriter,
    pub mappings: SourceMappingTable,
    pub diagnostics: Vec<Diagnostic>,
    pub options: &'a CompilerOptions,
    pub source: &'a SourceDocument,
    /// Name of the class currently being rendered, for static field access
    pub class_name: Option<String>,
}

impl<'a> CodeRenderingContext<'a> {
    pub fn new(options: &'a CompilerOptions, source: &'a SourceDocument) -> Self {
        Self {
            writer: CodeWriter::new(options.indent_size),
            mappings: SourceMappingTable::new(),
            diagnostics: Vec::new(),
            options,
            source,
            class_name: None,
        }
    }

    /// Write content, recording an original-to-generated mapping when the
    /// content has a known origin
    pub fn write_mapped(&mut self, content: &str, span: Option<&SourceSpan>) {
        let generated = self.writer.write_spanned(content);
        if let Some(span) = span {
            self.mappings.record(span.clone(), generated);
        }
    }

    /// Emit a line pragma comment pointing at `span`
    ///
    /// Suppressed at design time: the mapping table still carries the
    /// correspondence, but no physical marker lands in the output.
    pub fn write_line_pragma(&mut self, span: &SourceSpan) {
        if self.options.design_time {
            return;
        }
        let path = span
            .file_path
            .as_deref()
            .or(self.source.file_path())
            .unwrap_or("<weft>");
        self.writer
            .write_line(&format!("//#line {} \"{}\"", span.line_index + 1, path));
    }
}
