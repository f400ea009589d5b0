//! End-to-end tests: source text through tokens, tree, and printers.

mod common;

use jsdecl::{
    DeclarationKind, Error, LiteralValue, TokenKind, Tokenizer, format, parse, to_json, tokenize,
};

const SAMPLE: &str = "const name = 'jsdecl'\n\
                      let version = 1.0;\n\
                      var debug = false\n\
                      let missing = null;\n";

#[test]
fn sample_tokens() {
    let tokens = tokenize(SAMPLE).expect("tokenize");
    assert_eq!(tokens.len(), 18);
    assert_eq!(tokens.last().map(|t| t.span.line), Some(4));
    assert_eq!(
        tokens.iter().filter(|t| t.kind == TokenKind::Punctuator).count(),
        6
    );
}

#[test]
fn sample_tree() {
    let program = parse(SAMPLE).expect("parse");
    let summary: Vec<_> = program
        .declarations()
        .map(|d| {
            let binding = &d.declarations[0];
            (
                d.kind,
                binding.id.name.clone(),
                binding.init.clone().map(|l| l.value),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (
                DeclarationKind::Const,
                "name".to_string(),
                Some(LiteralValue::String("jsdecl".to_string()))
            ),
            (
                DeclarationKind::Let,
                "version".to_string(),
                Some(LiteralValue::Number(1.0))
            ),
            (
                DeclarationKind::Var,
                "debug".to_string(),
                Some(LiteralValue::Boolean(false))
            ),
            (
                DeclarationKind::Let,
                "missing".to_string(),
                Some(LiteralValue::Null)
            ),
        ]
    );
}

#[test]
fn sample_formats_canonically() {
    let program = common::assert_format_roundtrip(SAMPLE);
    assert_eq!(
        format(&program),
        "const name = 'jsdecl';\nlet version = 1;\nvar debug = false;\nlet missing = null;\n"
    );
}

#[test]
fn sample_json_shape() {
    let json = to_json(&parse(SAMPLE).expect("parse"));
    assert!(json.starts_with("{\n  \"type\": \"Program\",\n  \"body\": [\n"));
    assert_eq!(json.matches("\"type\": \"Identifier\"").count(), 4);
    assert!(json.contains("\"kind\": \"var\""));
    assert!(json.ends_with("\n  ]\n}"));
}

#[test]
fn tokens_lazy_and_eager_agree() {
    let lazy: Vec<_> = Tokenizer::new(SAMPLE)
        .collect::<Result<_, _>>()
        .expect("tokenize");
    let eager = tokenize(SAMPLE).expect("tokenize");
    assert!(common::same_tokens(&lazy, &eager));
}

#[test]
fn failure_is_all_or_nothing() {
    let source = format!("{SAMPLE}let broken = ;\nlet after = 1\n");
    let err = parse(&source).expect_err("should fail");
    assert!(matches!(err, Error::Parse(_)));
    assert_eq!(err.span().line, 5);
}

#[test]
fn lexing_succeeds_where_grammar_fails() {
    // Valid tokens, invalid statement.
    let source = "if (a === b) { return; }";
    assert!(tokenize(source).is_ok());
    assert!(parse(source).is_err());
}
