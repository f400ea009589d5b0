//! Constructors for AST nodes.
//!
//! The parser builds every node through these functions; they are also
//! the convenient way to assemble a tree by hand.

use crate::ast::{
    DeclarationKind, Identifier, Literal, LiteralValue, Program, Statement, VariableDeclaration,
    VariableDeclarator,
};

impl Program {
    /// Create a program from its statements.
    #[must_use]
    pub const fn new(body: Vec<Statement>) -> Self {
        Self { body }
    }

    /// Append a declaration.
    #[must_use]
    pub fn declaration(mut self, decl: VariableDeclaration) -> Self {
        self.body.push(Statement::VariableDeclaration(decl));
        self
    }
}

impl VariableDeclaration {
    /// Create a declaration of `kind` with the given bindings.
    #[must_use]
    pub const fn new(kind: DeclarationKind, declarations: Vec<VariableDeclarator>) -> Self {
        Self { kind, declarations }
    }

    /// `const name = value`
    #[must_use]
    pub fn const_(name: &str, value: impl Into<LiteralValue>) -> Self {
        Self::single(DeclarationKind::Const, name, value)
    }

    /// `let name = value`
    #[must_use]
    pub fn let_(name: &str, value: impl Into<LiteralValue>) -> Self {
        Self::single(DeclarationKind::Let, name, value)
    }

    /// `var name = value`
    #[must_use]
    pub fn var(name: &str, value: impl Into<LiteralValue>) -> Self {
        Self::single(DeclarationKind::Var, name, value)
    }

    fn single(kind: DeclarationKind, name: &str, value: impl Into<LiteralValue>) -> Self {
        Self::new(
            kind,
            vec![VariableDeclarator::new(
                Identifier::new(name),
                Some(Literal::new(value)),
            )],
        )
    }
}

impl VariableDeclarator {
    #[must_use]
    pub const fn new(id: Identifier, init: Option<Literal>) -> Self {
        Self { id, init }
    }
}

impl Identifier {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Literal {
    #[must_use]
    pub fn new(value: impl Into<LiteralValue>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The `null` literal.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            value: LiteralValue::Null,
        }
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<f64> for LiteralValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for LiteralValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for LiteralValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
