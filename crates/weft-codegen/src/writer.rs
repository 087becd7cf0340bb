//! Indentation-aware code writing
//!
//! [`CodeWriter`] accumulates generated text while tracking the current
//! line/character position, so callers can capture a [`GeneratedSpan`] for
//! any write without re-scanning the output.

use serde::{Deserialize, Serialize};

/// A position or region in the generated output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GeneratedSpan {
    pub absolute_index: usize,
    pub line_index: usize,
    pub character_index: usize,
    pub length: usize,
}

/// Builder for generated source text
#[derive(Debug)]
pub struct CodeWriter {
    buffer: String,
    indent_size: usize,
    indent_level: usize,
    line_index: usize,
    character_index: usize,
    at_line_start: bool,
}

impl CodeWriter {
    pub fn new(indent_size: usize) -> Self {
        Self {
            buffer: String::new(),
            indent_size,
            indent_level: 0,
            line_index: 0,
            character_index: 0,
            at_line_start: true,
        }
    }

    pub fn indent(&mut self) {
        self.indent_level += 1;
    }

    pub fn outdent(&mut self) {
        self.indent_level = self.indent_level.saturating_sub(1);
    }

    /// The position the next write will land at, after pending indentation
    pub fn location(&mut self) -> GeneratedSpan {
        self.flush_indent();
        GeneratedSpan {
            absolute_index: self.buffer.len(),
            line_index: self.line_index,
            character_index: self.character_index,
            length: 0,
        }
    }

    fn flush_indent(&mut self) {
        if self.at_line_start {
            let spaces = self.indent_level * self.indent_size;
            for _ in 0..spaces {
                self.buffer.push(' ');
            }
            self.character_index += spaces;
            self.at_line_start = false;
        }
    }

    /// Write text, which must not contain newlines; use [`Self::write_line`]
    /// or repeated calls for multi-line content
    pub fn write(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.flush_indent();
        for ch in text.chars() {
            self.buffer.push(ch);
            if ch == '\n' {
                self.line_index += 1;
                self.character_index = 0;
            } else {
                self.character_index += 1;
            }
        }
    }

    /// Write text and capture the generated span it occupies
    pub fn write_spanned(&mut self, text: &str) -> GeneratedSpan {
        let mut span = self.location();
        self.write(text);
        span.length = self.buffer.len() - span.absolute_index;
        span
    }

    pub fn write_line(&mut self, text: &str) {
        self.write(text);
        self.newline();
    }

    pub fn newline(&mut self) {
        self.buffer.push('\n');
        self.line_index += 1;
        self.character_index = 0;
        self.at_line_start = true;
    }

    pub fn finish(self) -> String {
        self.buffer
    }
}
