#![allow(dead_code)]

use jsdecl::{Error, Program, Token, format, parse, tokenize};

/// Raw texts of every token in `source`.
pub fn texts(source: &str) -> Vec<String> {
    tokenize(source)
        .expect("tokenize failed")
        .into_iter()
        .map(|t| t.text)
        .collect()
}

/// Parse, format, and parse again; the two trees must match.
pub fn assert_format_roundtrip(source: &str) -> Program {
    let program = parse(source).expect("parse failed");
    let formatted = format(&program);
    let reparsed = parse(&formatted).unwrap_or_else(|e| {
        panic!(
            "failed to re-parse formatted output: {e}\n\
             --- formatted ---\n{formatted}"
        )
    });
    assert_eq!(
        program, reparsed,
        "round-trip mismatch\n--- formatted ---\n{formatted}"
    );
    program
}

/// Compare tokens ignoring their positions.
pub fn same_tokens(a: &[Token], b: &[Token]) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b)
            .all(|(x, y)| x.kind == y.kind && x.value == y.value && x.text == y.text)
}

pub fn expect_parse_error(source: &str) -> Error {
    match parse(source) {
        Ok(program) => panic!("expected failure for {source:?}, got {program:?}"),
        Err(e) => e,
    }
}
