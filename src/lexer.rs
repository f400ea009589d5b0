use std::fmt;

use crate::character::{
    is_decimal_digit, is_identifier_part, is_identifier_start, is_line_terminator,
    is_string_start, is_white_space,
};
use crate::token::{Keyword, Span, Token, TokenKind, TokenValue};

const TWO_CHAR_PUNCTUATORS: [&str; 15] = [
    "&&", "||", "==", "!=", "+=", "-=", "*=", "/=", "++", "--", "^=", "%=", "<=", ">=", "=>",
];

const ONE_CHAR_PUNCTUATORS: &str = "<>=!+-*%&|^/(){}.;,[]";

/// Classifies a lexer error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexErrorKind {
    /// Character that cannot start or continue any token here.
    UnexpectedCharacter(char),
    /// String literal with no closing quote before end of input.
    UnterminatedString,
    /// Numeric text that does not form a number.
    InvalidNumericLiteral(String),
}

impl fmt::Display for LexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedCharacter(ch) => {
                write!(f, "unexpected character {ch:?}")
            }
            Self::UnterminatedString => {
                write!(f, "unterminated string literal")
            }
            Self::InvalidNumericLiteral(text) => {
                write!(f, "invalid numeric literal {text:?}")
            }
        }
    }
}

/// Error produced during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unexpected Token: {kind} at line {}, column {}", span.line, span.column)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
}

/// Tokenize a source string into its full token sequence.
///
/// The end-of-input token is not included.
///
/// # Errors
///
/// Returns `LexError` on the first malformed token: an unknown
/// punctuator, an unterminated string, or a number directly followed
/// by an identifier character.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Tokenizer::new(source).collect()
}

/// Cursor over source text producing one token per [`Scanner::lex`]
/// call.
///
/// The cursor is only ever moved through `&mut self`, so a scanner has
/// a single owner at any time.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    source: &'a str,
    index: usize,
    line: usize,
    column: usize,
    length: usize,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            index: 0,
            line: if source.is_empty() { 0 } else { 1 },
            column: 1,
            length: source.len(),
        }
    }

    /// Current byte offset.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Current line number.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    #[must_use]
    pub const fn is_eof(&self) -> bool {
        self.index >= self.length
    }

    /// Skip spaces and line terminators.
    ///
    /// Comment syntax is not part of the grammar, so `//` and `/* */`
    /// are left for [`Scanner::lex`] to reject.
    pub fn scan_comments(&mut self) {
        loop {
            let ch = self.peek();
            if is_white_space(ch) {
                self.bump();
            } else if is_line_terminator(ch) {
                self.bump();
                self.new_line();
            } else {
                break;
            }
        }
    }

    /// Scan one token starting at the cursor.
    ///
    /// At end of input this returns an `EndOfInput` token and does not
    /// advance.
    ///
    /// # Errors
    ///
    /// Returns `LexError` if the text at the cursor is not a valid
    /// token.
    pub fn lex(&mut self) -> Result<Token, LexError> {
        let Some(ch) = self.peek() else {
            return Ok(Token {
                kind: TokenKind::EndOfInput,
                value: TokenValue::Text(String::new()),
                text: String::new(),
                span: self.span(),
            });
        };

        if is_identifier_start(Some(ch)) {
            Ok(self.scan_identifier())
        } else if is_string_start(Some(ch)) {
            self.scan_string_literal()
        } else if is_decimal_digit(Some(ch)) {
            self.scan_numeric_literal()
        } else {
            self.scan_punctuator(ch)
        }
    }

    const fn span(&self) -> Span {
        Span {
            line: self.line,
            column: self.column,
            offset: self.index,
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.index..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.index += ch.len_utf8();
        self.column += 1;
        Some(ch)
    }

    const fn new_line(&mut self) {
        self.line += 1;
        self.column = 1;
    }

    const fn restore(&mut self, span: Span) {
        self.index = span.offset;
        self.line = span.line;
        self.column = span.column;
    }

    fn slice_from(&self, start: Span) -> &'a str {
        &self.source[start.offset..self.index]
    }

    fn scan_identifier(&mut self) -> Token {
        let start = self.span();
        self.bump();
        while is_identifier_part(self.peek()) {
            self.bump();
        }

        let id = self.slice_from(start);
        let kind = if id.len() == 1 {
            TokenKind::Identifier
        } else if let Some(keyword) = Keyword::from_text(id) {
            TokenKind::Keyword(keyword)
        } else if id == "null" {
            TokenKind::NullLiteral
        } else if id == "true" || id == "false" {
            TokenKind::BooleanLiteral
        } else {
            TokenKind::Identifier
        };

        Token {
            kind,
            value: TokenValue::Text(id.to_string()),
            text: id.to_string(),
            span: start,
        }
    }

    fn scan_numeric_literal(&mut self) -> Result<Token, LexError> {
        let start = self.span();

        if self.peek() != Some('.') {
            self.bump();
            while is_decimal_digit(self.peek()) {
                self.bump();
            }
        }

        if self.peek() == Some('.') {
            self.bump();
            while is_decimal_digit(self.peek()) {
                self.bump();
            }
        }

        if let Some(ch) = self.peek().filter(|&c| is_identifier_start(Some(c))) {
            return Err(LexError {
                kind: LexErrorKind::UnexpectedCharacter(ch),
                span: self.span(),
            });
        }

        let text = self.slice_from(start);
        let value = text.parse::<f64>().map_err(|_| LexError {
            kind: LexErrorKind::InvalidNumericLiteral(text.to_string()),
            span: start,
        })?;

        Ok(Token {
            kind: TokenKind::NumericLiteral,
            value: TokenValue::Number(value),
            text: text.to_string(),
            span: start,
        })
    }

    fn scan_string_literal(&mut self) -> Result<Token, LexError> {
        let start = self.span();
        let quote = self.bump();
        let content_start = self.index;

        let content_end = loop {
            let here = self.index;
            match self.bump() {
                None => {
                    self.restore(start);
                    return Err(LexError {
                        kind: LexErrorKind::UnterminatedString,
                        span: start,
                    });
                }
                Some(ch) if Some(ch) == quote => break here,
                Some(ch) => {
                    if is_line_terminator(Some(ch)) {
                        self.new_line();
                    }
                }
            }
        };

        Ok(Token {
            kind: TokenKind::StringLiteral,
            value: TokenValue::Text(self.source[content_start..content_end].to_string()),
            text: self.slice_from(start).to_string(),
            span: start,
        })
    }

    fn scan_punctuator(&mut self, ch: char) -> Result<Token, LexError> {
        let start = self.span();
        let rest = &self.source[self.index..];

        let len = if rest.starts_with("===") || rest.starts_with("!==") {
            3
        } else if TWO_CHAR_PUNCTUATORS.iter().any(|p| rest.starts_with(p)) {
            2
        } else if ONE_CHAR_PUNCTUATORS.contains(ch) {
            1
        } else {
            return Err(LexError {
                kind: LexErrorKind::UnexpectedCharacter(ch),
                span: start,
            });
        };

        // Punctuators are ASCII, so bytes and columns advance together.
        self.index += len;
        self.column += len;

        let text = self.slice_from(start);
        Ok(Token {
            kind: TokenKind::Punctuator,
            value: TokenValue::Text(text.to_string()),
            text: text.to_string(),
            span: start,
        })
    }
}

/// Pull-based token source: skips insignificant input, then lexes a
/// single token.
///
/// Iterating yields every token up to end of input, or stops after the
/// first error.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    scanner: Scanner<'a>,
    failed: bool,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub const fn new(source: &'a str) -> Self {
        Self {
            scanner: Scanner::new(source),
            failed: false,
        }
    }

    /// Next significant token, or `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns `LexError` if the next token is malformed.
    pub fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.scanner.scan_comments();
        if self.scanner.is_eof() {
            return Ok(None);
        }
        self.scanner.lex().map(Some)
    }

    #[must_use]
    pub const fn scanner(&self) -> &Scanner<'a> {
        &self.scanner
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let result = self.next_token();
        self.failed = result.is_err();
        result.transpose()
    }
}
