use std::fmt;

/// Complete parsed source: top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub body: Vec<Statement>,
}

/// A statement-list item.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    VariableDeclaration(VariableDeclaration),
}

/// `const`/`let`/`var` declaration. `declarations` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclaration {
    pub kind: DeclarationKind,
    pub declarations: Vec<VariableDeclarator>,
}

/// Declaration keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Const,
    Let,
    Var,
}

/// A single binding: `id = init`.
#[derive(Debug, Clone, PartialEq)]
pub struct VariableDeclarator {
    pub id: Identifier,
    pub init: Option<Literal>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub value: LiteralValue,
}

/// Value of a scanned literal.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    Boolean(bool),
    Null,
    Number(f64),
    String(String),
}

impl DeclarationKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Const => "const",
            Self::Let => "let",
            Self::Var => "var",
        }
    }
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Statement {
    /// Node type name as it appears in the printed tree.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::VariableDeclaration(_) => "VariableDeclaration",
        }
    }
}

impl Program {
    /// Iterate over every variable declaration in the body.
    pub fn declarations(&self) -> impl Iterator<Item = &VariableDeclaration> {
        self.body.iter().map(|statement| match statement {
            Statement::VariableDeclaration(decl) => decl,
        })
    }
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Null => write!(f, "null"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}
