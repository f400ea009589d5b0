//! Lexer and recursive-descent parser for JavaScript-style lexical
//! declarations.
//!
//! Source text is scanned into tokens and parsed into a small AST of
//! `const`/`let`/`var` bindings, each to a single literal value.
//!
//! # Quick start
//!
//! ## Tokenize
//!
//! ```
//! use jsdecl::{tokenize, TokenKind};
//!
//! let tokens = tokenize("let x = 5;").unwrap();
//! assert_eq!(tokens.len(), 5);
//! assert_eq!(tokens[1].kind, TokenKind::Identifier);
//! ```
//!
//! ## Parse and print the tree
//!
//! ```
//! use jsdecl::{parse, to_json, DeclarationKind};
//!
//! let program = parse("const greeting = 'hi'").unwrap();
//! let decl = program.declarations().next().unwrap();
//! assert_eq!(decl.kind, DeclarationKind::Const);
//! assert!(to_json(&program).contains("\"name\": \"greeting\""));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod builder;
pub mod character;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;

pub use ast::{
    DeclarationKind, Identifier, Literal, LiteralValue, Program, Statement, VariableDeclaration,
    VariableDeclarator,
};
pub use lexer::{LexError, LexErrorKind, Scanner, Tokenizer, tokenize};
pub use parser::{
    Expected, ParseError, ParseErrorKind, Parser, ParserOptions, parse, parse_with,
};
pub use printer::{format, to_json};
pub use token::{Keyword, Span, Token, TokenKind, TokenValue};

/// Unified error type covering both lexing and parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A lexer error.
    #[error("{0}")]
    Lex(#[from] LexError),
    /// A parser error.
    #[error("{0}")]
    Parse(#[from] ParseError),
}

impl Error {
    /// Location of the failure.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Lex(e) => e.span,
            Self::Parse(e) => e.span,
        }
    }
}
