use std::fmt;

use crate::Error;
use crate::ast::{
    DeclarationKind, Identifier, Literal, LiteralValue, Program, Statement, VariableDeclaration,
    VariableDeclarator,
};
use crate::lexer::{LexError, Scanner};
use crate::token::{Keyword, Span, Token, TokenKind, TokenValue};

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A `const`, `let` or `var` keyword.
    Declaration,
    Identifier,
    /// The `=` between a binding name and its value.
    Assignment,
    /// A boolean, null, numeric or string literal.
    Literal,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Declaration => write!(f, "'const', 'let' or 'var'"),
            Self::Identifier => write!(f, "an identifier"),
            Self::Assignment => write!(f, "'='"),
            Self::Literal => write!(f, "a literal"),
        }
    }
}

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The lookahead does not fit the grammar at this point.
    UnexpectedToken { found: String, expected: Expected },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { found, expected } => {
                write!(f, "found '{found}', expected {expected}")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unexpected Token: {kind} at line {}, column {}", span.line, span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Parser settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParserOptions {
    /// Require exactly `=` between a binding name and its value.
    ///
    /// When unset, any punctuator, or any token whose value is `=`, is
    /// accepted in that position.
    pub strict_assignment: bool,
}

impl ParserOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            strict_assignment: false,
        }
    }

    #[must_use]
    pub const fn strict_assignment(mut self, strict: bool) -> Self {
        self.strict_assignment = strict;
        self
    }
}

/// Parse a source string into a `Program`.
///
/// # Errors
///
/// Returns `Error::Lex` for a malformed token and `Error::Parse` for
/// the first grammar violation. No partial tree is produced.
pub fn parse(source: &str) -> Result<Program, Error> {
    parse_with(source, ParserOptions::default())
}

/// Parse with explicit options.
pub fn parse_with(source: &str, options: ParserOptions) -> Result<Program, Error> {
    Parser::with_options(source, options)?.analyse()
}

/// Recursive-descent parser over its own scanner, with one token of
/// lookahead.
#[derive(Debug, Clone)]
pub struct Parser<'a> {
    scanner: Scanner<'a>,
    lookahead: Token,
    has_line_terminator: bool,
    options: ParserOptions,
}

impl<'a> Parser<'a> {
    /// Create a parser and scan the first token.
    pub fn new(source: &'a str) -> Result<Self, Error> {
        Self::with_options(source, ParserOptions::default())
    }

    pub fn with_options(source: &'a str, options: ParserOptions) -> Result<Self, Error> {
        let scanner = Scanner::new(source);
        let lookahead = Token {
            kind: TokenKind::EndOfInput,
            value: TokenValue::Text(String::new()),
            text: String::new(),
            span: Span {
                line: scanner.line(),
                column: 1,
                offset: 0,
            },
        };

        let mut parser = Self {
            scanner,
            lookahead,
            has_line_terminator: false,
            options,
        };
        parser.next_token()?;
        Ok(parser)
    }

    /// Next unconsumed token.
    #[must_use]
    pub const fn lookahead(&self) -> &Token {
        &self.lookahead
    }

    /// Whether the last consumed token and the lookahead are on
    /// different lines.
    #[must_use]
    pub const fn has_line_terminator(&self) -> bool {
        self.has_line_terminator
    }

    #[must_use]
    pub const fn scanner(&self) -> &Scanner<'a> {
        &self.scanner
    }

    /// Parse statements until end of input.
    ///
    /// # Errors
    ///
    /// Fails on the first malformed token or grammar violation.
    pub fn analyse(&mut self) -> Result<Program, Error> {
        let mut body = Vec::new();
        while self.lookahead.kind != TokenKind::EndOfInput {
            body.push(self.parse_statement_list_item()?);
        }
        Ok(Program::new(body))
    }

    fn next_token(&mut self) -> Result<Token, LexError> {
        self.scanner.scan_comments();
        let next = self.scanner.lex()?;
        // End of input carries a real line, so reaching it on the same
        // line does not set the flag.
        self.has_line_terminator = self.lookahead.span.line != next.span.line;
        Ok(std::mem::replace(&mut self.lookahead, next))
    }

    fn matches(&self, punctuator: &str) -> bool {
        self.lookahead.is_punctuator(punctuator)
    }

    fn unexpected(token: &Token, expected: Expected) -> Error {
        Error::Parse(ParseError {
            kind: ParseErrorKind::UnexpectedToken {
                found: token.describe(),
                expected,
            },
            span: token.span,
        })
    }

    fn consume_semicolon(&mut self) -> Result<(), Error> {
        if self.matches(";") {
            self.next_token()?;
        }
        Ok(())
    }

    fn parse_statement_list_item(&mut self) -> Result<Statement, Error> {
        let kind = match self.lookahead.kind {
            TokenKind::Keyword(Keyword::Const) => DeclarationKind::Const,
            TokenKind::Keyword(Keyword::Let) => DeclarationKind::Let,
            TokenKind::Keyword(Keyword::Var) => DeclarationKind::Var,
            _ => return Err(Self::unexpected(&self.lookahead, Expected::Declaration)),
        };
        Ok(Statement::VariableDeclaration(
            self.parse_lexical_declaration(kind)?,
        ))
    }

    fn parse_lexical_declaration(
        &mut self,
        kind: DeclarationKind,
    ) -> Result<VariableDeclaration, Error> {
        self.next_token()?;
        let declarations = self.parse_binding_list()?;
        self.consume_semicolon()?;
        Ok(VariableDeclaration::new(kind, declarations))
    }

    // Comma-separated bindings are not part of the grammar.
    fn parse_binding_list(&mut self) -> Result<Vec<VariableDeclarator>, Error> {
        Ok(vec![self.parse_lexical_binding()?])
    }

    fn parse_lexical_binding(&mut self) -> Result<VariableDeclarator, Error> {
        let id = self.parse_variable_identifier()?;

        let token = self.next_token()?;
        let accepted = if self.options.strict_assignment {
            token.is_punctuator("=")
        } else {
            token.kind == TokenKind::Punctuator || token.value.as_text() == Some("=")
        };
        if !accepted {
            return Err(Self::unexpected(&token, Expected::Assignment));
        }

        let init = self.parse_assignment_expression()?;
        Ok(VariableDeclarator::new(id, Some(init)))
    }

    fn parse_variable_identifier(&mut self) -> Result<Identifier, Error> {
        let token = self.next_token()?;
        if token.kind != TokenKind::Identifier {
            return Err(Self::unexpected(&token, Expected::Identifier));
        }
        Ok(Identifier::new(token.text))
    }

    fn parse_assignment_expression(&mut self) -> Result<Literal, Error> {
        let token = self.next_token()?;
        let value = match (token.kind, &token.value) {
            (TokenKind::BooleanLiteral, _) => LiteralValue::Boolean(token.text == "true"),
            (TokenKind::NullLiteral, _) => LiteralValue::Null,
            (TokenKind::NumericLiteral, TokenValue::Number(n)) => LiteralValue::Number(*n),
            (TokenKind::StringLiteral, TokenValue::Text(s)) => LiteralValue::String(s.clone()),
            _ => return Err(Self::unexpected(&token, Expected::Literal)),
        };
        Ok(Literal::new(value))
    }
}
