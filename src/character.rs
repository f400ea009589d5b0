//! Character classification used by the scanner.
//!
//! Every predicate takes `Option<char>` so callers can pass the result
//! of a peek directly; `None` (end of input) is never a match.

/// Space character only. Tabs and other horizontal whitespace are not
/// insignificant in this grammar.
#[must_use]
pub const fn is_white_space(ch: Option<char>) -> bool {
    matches!(ch, Some(' '))
}

/// `[a-zA-Z_$]`
#[must_use]
pub const fn is_identifier_start(ch: Option<char>) -> bool {
    matches!(ch, Some('a'..='z' | 'A'..='Z' | '_' | '$'))
}

/// `[a-zA-Z0-9_]`. Note that `$` may start an identifier but cannot
/// continue one.
#[must_use]
pub const fn is_identifier_part(ch: Option<char>) -> bool {
    matches!(ch, Some('a'..='z' | 'A'..='Z' | '0'..='9' | '_'))
}

/// Opening quote of a string literal.
#[must_use]
pub const fn is_string_start(ch: Option<char>) -> bool {
    matches!(ch, Some('"' | '\''))
}

#[must_use]
pub const fn is_decimal_digit(ch: Option<char>) -> bool {
    matches!(ch, Some('0'..='9'))
}

/// LF, CR, LINE SEPARATOR and PARAGRAPH SEPARATOR.
#[must_use]
pub const fn is_line_terminator(ch: Option<char>) -> bool {
    matches!(ch, Some('\n' | '\r' | '\u{2028}' | '\u{2029}'))
}
