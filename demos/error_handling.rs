//! Demonstrate error handling for invalid input.

fn main() {
    // Unterminated string literal
    match jsdecl::parse("let s = 'unclosed;") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(jsdecl::Error::Lex(e)) => {
            println!("Lex error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.span.line, e.span.column);
        }
        Err(jsdecl::Error::Parse(e)) => {
            println!("Parse error: {e}");
        }
    }

    println!();

    // Missing binding name
    match jsdecl::parse("var = 1;") {
        Ok(_) => println!("Parsed OK (unexpected)"),
        Err(jsdecl::Error::Lex(e)) => {
            println!("Lex error: {e}");
        }
        Err(jsdecl::Error::Parse(e)) => {
            println!("Parse error: {e}");
            println!("  Kind: {:?}", e.kind);
            println!("  Location: line {}, column {}", e.span.line, e.span.column);
        }
    }
}
