//! Lexer edge cases and error tests.

mod common;

use jsdecl::{Keyword, LexErrorKind, Scanner, TokenKind, TokenValue, Tokenizer, tokenize};

// -----------------------------------------------------------
// Basic lexer behaviour.
// -----------------------------------------------------------

#[test]
fn lex_empty_input() {
    let tokens = tokenize("").expect("tokenize");
    assert!(tokens.is_empty());
}

#[test]
fn lex_only_insignificant_input() {
    let tokens = tokenize("   \n\r\n \u{2028}\u{2029}").expect("tokenize");
    assert!(tokens.is_empty());
}

#[test]
fn lex_every_keyword() {
    let source = "if in do var for new try let this else case void enum while break \
                  catch throw const class super return typeof delete switch export \
                  import default finally extends function continue debugger instanceof";
    let tokens = tokenize(source).expect("tokenize");
    assert_eq!(tokens.len(), 33);
    for token in &tokens {
        let TokenKind::Keyword(keyword) = token.kind else {
            panic!("{} should be a keyword", token.text);
        };
        assert_eq!(keyword.as_str(), token.text);
    }
}

#[test]
fn lex_keyword_lookalikes_are_identifiers() {
    let tokens = tokenize("iff lets Const instanceOf async").expect("tokenize");
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn lex_single_char_identifiers() {
    let tokens = tokenize("x _ $").expect("tokenize");
    assert!(tokens.iter().all(|t| t.kind == TokenKind::Identifier));
}

#[test]
fn lex_literal_words() {
    let tokens = tokenize("null true false nullish").expect("tokenize");
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::NullLiteral,
            TokenKind::BooleanLiteral,
            TokenKind::BooleanLiteral,
            TokenKind::Identifier,
        ]
    );
    assert_eq!(tokens[1].value, TokenValue::Text("true".to_string()));
}

#[test]
fn lex_numbers() {
    let tokens = tokenize("0 42 2.5 10.").expect("tokenize");
    let values: Vec<_> = tokens.iter().filter_map(|t| t.value.as_number()).collect();
    assert_eq!(values, [0.0, 42.0, 2.5, 10.0]);
}

#[test]
fn lex_number_then_punctuator() {
    assert_eq!(common::texts("5;"), ["5", ";"]);
    assert_eq!(common::texts("(1)"), ["(", "1", ")"]);
}

#[test]
fn lex_number_then_dollar_fails() {
    let err = tokenize("9$").expect_err("should fail");
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter('$'));
}

#[test]
fn lex_number_then_underscore_fails() {
    assert!(tokenize("9_").is_err());
}

#[test]
fn lex_quotes_must_match() {
    let tokens = tokenize(r#""it's" 'say "hi"'"#).expect("tokenize");
    assert_eq!(tokens[0].value.as_text(), Some("it's"));
    assert_eq!(tokens[1].value.as_text(), Some(r#"say "hi""#));
}

#[test]
fn lex_empty_string() {
    let tokens = tokenize("''").expect("tokenize");
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].value.as_text(), Some(""));
}

#[test]
fn lex_unicode_string() {
    let tokens = tokenize("'héllo wörld' x").expect("tokenize");
    assert_eq!(tokens[0].value.as_text(), Some("héllo wörld"));
    assert_eq!(tokens[1].span.column, 15);
}

#[test]
fn lex_multiline_string_advances_line() {
    let tokens = tokenize("'a\nb' c").expect("tokenize");
    assert_eq!(tokens[0].span.line, 1);
    assert_eq!(tokens[1].span.line, 2);
}

#[test]
fn lex_unterminated_string() {
    let err = tokenize("let s = \"abc").expect_err("should fail");
    assert_eq!(err.kind, LexErrorKind::UnterminatedString);
    assert_eq!(err.span.offset, 8);
    assert_eq!(err.span.column, 9);
}

#[test]
fn lex_every_punctuator() {
    let three = ["===", "!=="];
    let two = [
        "&&", "||", "==", "!=", "+=", "-=", "*=", "/=", "++", "--", "^=", "%=", "<=", ">=", "=>",
    ];
    let one = "<>=!+-*%&|^/(){}.;,[]";
    for p in three.into_iter().chain(two) {
        assert_eq!(common::texts(p), [p], "{p}");
    }
    for ch in one.chars() {
        let text = ch.to_string();
        assert_eq!(common::texts(&text), [text.clone()], "{ch}");
    }
}

#[test]
fn lex_line_comment_is_not_skipped() {
    // `//` lexes as two slashes; comment syntax is unsupported.
    assert_eq!(common::texts("// a"), ["/", "/", "a"]);
}

#[test]
fn lex_unknown_characters() {
    for source in ["#", "@", "`", "?", ":", "~", "\\"] {
        let err = tokenize(source).expect_err("should fail");
        assert!(
            matches!(err.kind, LexErrorKind::UnexpectedCharacter(_)),
            "{source}"
        );
    }
}

#[test]
fn lex_error_display() {
    let err = tokenize("a\n  #").expect_err("should fail");
    assert_eq!(
        err.to_string(),
        "Unexpected Token: unexpected character '#' at line 2, column 3"
    );
}

// -----------------------------------------------------------
// Scanner and tokenizer APIs.
// -----------------------------------------------------------

#[test]
fn scanner_lexes_without_skipping() {
    let mut scanner = Scanner::new(" a");
    let err = scanner.lex().expect_err("space is not a token");
    assert_eq!(err.kind, LexErrorKind::UnexpectedCharacter(' '));
    scanner.scan_comments();
    let token = scanner.lex().expect("identifier");
    assert_eq!(token.text, "a");
    assert!(scanner.is_eof());
}

#[test]
fn scanner_restores_on_unterminated_string() {
    let source = "let s = 'abc;";
    let mut scanner = Scanner::new(source);
    for _ in 0..3 {
        scanner.scan_comments();
        scanner.lex().expect("token");
    }
    scanner.scan_comments();
    let start = scanner.index();
    assert_eq!(&source[start..=start], "'");
    assert!(scanner.lex().is_err());
    assert_eq!(scanner.index(), start);
}

#[test]
fn tokenizer_pulls_one_token_at_a_time() {
    let mut tokenizer = Tokenizer::new("var\nv");
    let first = tokenizer.next_token().expect("ok").expect("token");
    assert_eq!(first.kind, TokenKind::Keyword(Keyword::Var));
    let second = tokenizer.next_token().expect("ok").expect("token");
    assert_eq!(second.span.line, 2);
    assert!(tokenizer.next_token().expect("ok").is_none());
    assert!(tokenizer.next_token().expect("ok").is_none());
}

#[test]
fn tokenizer_iterator_matches_tokenize() {
    let source = "const a = 'x'; let b = 2";
    let collected: Result<Vec<_>, _> = Tokenizer::new(source).collect();
    assert_eq!(collected.expect("tokenize"), tokenize(source).expect("tokenize"));
}

#[test]
fn line_numbers_count_each_terminator() {
    let tokens = tokenize("a\nb\r\nc\u{2028}d").expect("tokenize");
    let lines: Vec<_> = tokens.iter().map(|t| t.span.line).collect();
    assert_eq!(lines, [1, 2, 4, 5]);
}
