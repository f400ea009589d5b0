use std::fmt;

/// Source location of a token or error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// 1-based line, or 0 for empty input.
    pub line: usize,
    /// 1-based column, counted in chars.
    pub column: usize,
    /// Byte offset into the source.
    pub offset: usize,
}

/// Reserved words recognized by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    If,
    In,
    Do,
    Var,
    For,
    New,
    Try,
    Let,
    This,
    Else,
    Case,
    Void,
    Enum,
    While,
    Break,
    Catch,
    Throw,
    Const,
    Class,
    Super,
    Return,
    Typeof,
    Delete,
    Switch,
    Export,
    Import,
    Default,
    Finally,
    Extends,
    Function,
    Continue,
    Debugger,
    Instanceof,
}

impl Keyword {
    /// Look up the keyword spelled exactly `text`.
    #[must_use]
    pub fn from_text(text: &str) -> Option<Self> {
        let keyword = match text {
            "if" => Self::If,
            "in" => Self::In,
            "do" => Self::Do,
            "var" => Self::Var,
            "for" => Self::For,
            "new" => Self::New,
            "try" => Self::Try,
            "let" => Self::Let,
            "this" => Self::This,
            "else" => Self::Else,
            "case" => Self::Case,
            "void" => Self::Void,
            "enum" => Self::Enum,
            "while" => Self::While,
            "break" => Self::Break,
            "catch" => Self::Catch,
            "throw" => Self::Throw,
            "const" => Self::Const,
            "class" => Self::Class,
            "super" => Self::Super,
            "return" => Self::Return,
            "typeof" => Self::Typeof,
            "delete" => Self::Delete,
            "switch" => Self::Switch,
            "export" => Self::Export,
            "import" => Self::Import,
            "default" => Self::Default,
            "finally" => Self::Finally,
            "extends" => Self::Extends,
            "function" => Self::Function,
            "continue" => Self::Continue,
            "debugger" => Self::Debugger,
            "instanceof" => Self::Instanceof,
            _ => return None,
        };
        Some(keyword)
    }

    /// Source spelling of the keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::In => "in",
            Self::Do => "do",
            Self::Var => "var",
            Self::For => "for",
            Self::New => "new",
            Self::Try => "try",
            Self::Let => "let",
            Self::This => "this",
            Self::Else => "else",
            Self::Case => "case",
            Self::Void => "void",
            Self::Enum => "enum",
            Self::While => "while",
            Self::Break => "break",
            Self::Catch => "catch",
            Self::Throw => "throw",
            Self::Const => "const",
            Self::Class => "class",
            Self::Super => "super",
            Self::Return => "return",
            Self::Typeof => "typeof",
            Self::Delete => "delete",
            Self::Switch => "switch",
            Self::Export => "export",
            Self::Import => "import",
            Self::Default => "default",
            Self::Finally => "finally",
            Self::Extends => "extends",
            Self::Function => "function",
            Self::Continue => "continue",
            Self::Debugger => "debugger",
            Self::Instanceof => "instanceof",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token kinds produced by the scanner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Identifier,
    Keyword(Keyword),
    /// `true` or `false`.
    BooleanLiteral,
    /// `null`.
    NullLiteral,
    NumericLiteral,
    /// Single- or double-quoted string.
    StringLiteral,
    Punctuator,
    EndOfInput,
}

impl TokenKind {
    /// True for the four kinds that can initialize a binding.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            Self::BooleanLiteral | Self::NullLiteral | Self::NumericLiteral | Self::StringLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => write!(f, "Identifier"),
            Self::Keyword(_) => write!(f, "Keyword"),
            Self::BooleanLiteral => write!(f, "Boolean"),
            Self::NullLiteral => write!(f, "Null"),
            Self::NumericLiteral => write!(f, "Numeric"),
            Self::StringLiteral => write!(f, "String"),
            Self::Punctuator => write!(f, "Punctuator"),
            Self::EndOfInput => write!(f, "<end>"),
        }
    }
}

/// Value carried by a token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    /// Literal text. For strings, the characters between the quotes.
    Text(String),
    /// Parsed value of a numeric literal.
    Number(f64),
}

impl TokenValue {
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Number(_) => None,
        }
    }

    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
        }
    }
}

/// A single token with its kind, value, raw text, and source location.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    /// Raw source slice. String literals keep their quotes.
    pub text: String,
    pub span: Span,
}

impl Token {
    /// True if this is a punctuator spelled `text`.
    #[must_use]
    pub fn is_punctuator(&self, text: &str) -> bool {
        self.kind == TokenKind::Punctuator && self.text == text
    }

    /// Human-readable description used in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfInput => "end of input".to_string(),
            _ => self.text.clone(),
        }
    }
}
