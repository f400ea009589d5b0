//! Renders a parsed `Program` as a JSON tree or back into source text.

use std::fmt::Write as _;

use crate::ast::{
    Identifier, Literal, LiteralValue, Program, Statement, VariableDeclaration, VariableDeclarator,
};

const INDENT: &str = "  ";

/// Render a `Program` as two-space-indented JSON.
///
/// Every node carries a `"type"` tag. Numbers use their shortest form
/// and non-finite numbers become `null`.
#[must_use]
pub fn to_json(program: &Program) -> String {
    let mut out = String::new();
    out.push_str("{\n");
    field(&mut out, 1, "type");
    out.push_str("\"Program\",\n");
    field(&mut out, 1, "body");
    array(&mut out, 1, &program.body, json_statement);
    out.push_str("\n}");
    out
}

/// Render a `Program` back into source, one declaration per line.
///
/// String values are quoted with `'` unless they contain one.
///
/// Only trees produced by the parser are guaranteed to parse back to
/// the same tree. Hand-built trees may have no spelling in this
/// grammar: a declarator without `init` prints as `let x;`, negative
/// and non-finite numbers print as `-1`, `NaN` or `inf`, and a string
/// holding both quote characters cannot be quoted. The parser rejects
/// all of these.
#[must_use]
pub fn format(program: &Program) -> String {
    let mut out = String::new();
    for statement in &program.body {
        match statement {
            Statement::VariableDeclaration(decl) => format_declaration(&mut out, decl),
        }
    }
    out
}

fn format_declaration(out: &mut String, decl: &VariableDeclaration) {
    out.push_str(decl.kind.as_str());
    out.push(' ');
    for (i, declarator) in decl.declarations.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(&declarator.id.name);
        if let Some(init) = &declarator.init {
            out.push_str(" = ");
            format_literal(out, &init.value);
        }
    }
    out.push_str(";\n");
}

fn format_literal(out: &mut String, value: &LiteralValue) {
    match value {
        LiteralValue::String(s) => {
            let quote = if s.contains('\'') { '"' } else { '\'' };
            out.push(quote);
            out.push_str(s);
            out.push(quote);
        }
        other => {
            let _ = write!(out, "{other}");
        }
    }
}

fn indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn field(out: &mut String, depth: usize, name: &str) {
    indent(out, depth);
    let _ = write!(out, "\"{name}\": ");
}

fn array<T>(out: &mut String, depth: usize, items: &[T], item: fn(&mut String, usize, &T)) {
    if items.is_empty() {
        out.push_str("[]");
        return;
    }
    out.push_str("[\n");
    for (i, value) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        indent(out, depth + 1);
        item(out, depth + 1, value);
    }
    out.push('\n');
    indent(out, depth);
    out.push(']');
}

fn json_statement(out: &mut String, depth: usize, statement: &Statement) {
    match statement {
        Statement::VariableDeclaration(decl) => json_declaration(out, depth, decl),
    }
}

fn json_declaration(out: &mut String, depth: usize, decl: &VariableDeclaration) {
    out.push_str("{\n");
    field(out, depth + 1, "type");
    out.push_str("\"VariableDeclaration\",\n");
    field(out, depth + 1, "declarations");
    array(out, depth + 1, &decl.declarations, json_declarator);
    out.push_str(",\n");
    field(out, depth + 1, "kind");
    json_string(out, decl.kind.as_str());
    out.push('\n');
    indent(out, depth);
    out.push('}');
}

fn json_declarator(out: &mut String, depth: usize, declarator: &VariableDeclarator) {
    out.push_str("{\n");
    field(out, depth + 1, "type");
    out.push_str("\"VariableDeclarator\",\n");
    field(out, depth + 1, "id");
    json_identifier(out, depth + 1, &declarator.id);
    out.push_str(",\n");
    field(out, depth + 1, "init");
    match &declarator.init {
        Some(init) => json_literal(out, depth + 1, init),
        None => out.push_str("null"),
    }
    out.push('\n');
    indent(out, depth);
    out.push('}');
}

fn json_identifier(out: &mut String, depth: usize, id: &Identifier) {
    out.push_str("{\n");
    field(out, depth + 1, "type");
    out.push_str("\"Identifier\",\n");
    field(out, depth + 1, "name");
    json_string(out, &id.name);
    out.push('\n');
    indent(out, depth);
    out.push('}');
}

fn json_literal(out: &mut String, depth: usize, literal: &Literal) {
    out.push_str("{\n");
    field(out, depth + 1, "type");
    out.push_str("\"Literal\",\n");
    field(out, depth + 1, "value");
    match &literal.value {
        LiteralValue::Boolean(b) => {
            let _ = write!(out, "{b}");
        }
        LiteralValue::Null => out.push_str("null"),
        LiteralValue::Number(n) if n.is_finite() => {
            let _ = write!(out, "{n}");
        }
        LiteralValue::Number(_) => out.push_str("null"),
        LiteralValue::String(s) => json_string(out, s),
    }
    out.push('\n');
    indent(out, depth);
    out.push('}');
}

fn json_string(out: &mut String, s: &str) {
    out.push('"');
    for ch in s.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{8}' => out.push_str("\\b"),
            '\u{c}' => out.push_str("\\f"),
            c if u32::from(c) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}
