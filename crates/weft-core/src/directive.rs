//! Directive descriptors
//!
//! Directives are keyword-introduced document declarations such as
//! `@inherits`, `@implements`, and `@functions { ... }`. The parser layer
//! matches them by keyword and hands the pipeline directive nodes carrying
//! typed tokens; the descriptors here are what passes match against.

use serde::{Deserialize, Serialize};

/// Shape of a directive's body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectiveKind {
    /// Keyword plus tokens on one line, e.g. `@inherits Base`
    SingleLine,
    /// Keyword plus a markup block
    Block,
    /// Keyword plus a code block, e.g. `@functions { ... }`
    CodeBlock,
}

/// Kind of a single directive token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DirectiveTokenKind {
    /// A type name, e.g. the base class of `@inherits`
    Type,
    /// A member name
    Member,
    /// A quoted string literal
    String,
    /// A bare identifier
    Identifier,
}

/// Identity of a directive the compiler recognizes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectiveDescriptor {
    /// The keyword, without the `@` transition
    pub directive: String,
    pub kind: DirectiveKind,
    /// Token kinds the directive expects, in order
    pub tokens: Vec<DirectiveTokenKind>,
}

impl DirectiveDescriptor {
    pub fn single_line(directive: impl Into<String>, tokens: Vec<DirectiveTokenKind>) -> Self {
        Self {
            directive: directive.into(),
            kind: DirectiveKind::SingleLine,
            tokens,
        }
    }

    pub fn code_block(directive: impl Into<String>) -> Self {
        Self {
            directive: directive.into(),
            kind: DirectiveKind::CodeBlock,
            tokens: Vec::new(),
        }
    }
}

/// The `@inherits` directive: declares the generated class's base type
pub fn inherits_directive() -> DirectiveDescriptor {
    DirectiveDescriptor::single_line("inherits", vec![DirectiveTokenKind::Type])
}

/// The `@implements` directive: adds an interface to the generated class
pub fn implements_directive() -> DirectiveDescriptor {
    DirectiveDescriptor::single_line("implements", vec![DirectiveTokenKind::Type])
}

/// The `@functions` directive: hoists a code block into class members
pub fn functions_directive() -> DirectiveDescriptor {
    DirectiveDescriptor::code_block("functions")
}
