//! Parse a few declarations, then print the tree and canonical source.

fn main() {
    let source = "const name = 'jsdecl'\nlet version = 1.5;\nvar enabled = true\n";

    let tokens = jsdecl::tokenize(source).expect("tokenize failed");
    println!("{} tokens", tokens.len());

    let program = jsdecl::parse(source).expect("parse failed");
    println!("{}", jsdecl::to_json(&program));
    print!("{}", jsdecl::format(&program));
}
