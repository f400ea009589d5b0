//! CLI tool to tokenize, parse, and print declaration files.

use std::fs;
use std::io::{self, Read as _};
use std::process::ExitCode;

use jsdecl::{ParserOptions, Token, TokenKind};

fn usage() {
    eprintln!("Usage: jsdecl <command> [--strict] [files...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  tokens    Print the token stream");
    eprintln!("  ast       Print the syntax tree as JSON");
    eprintln!("  fmt       Print the declarations in canonical form");
    eprintln!("  validate  Check that file(s) parse");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --strict  Require '=' between a binding and its value");
    eprintln!();
    eprintln!("Use '-' to read from stdin.");
}

fn read_source(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        Ok(content)
    } else {
        fs::read_to_string(path)
    }
}

fn print_token(token: &Token) {
    let kind = match token.kind {
        TokenKind::Keyword(keyword) => format!("Keyword({keyword})"),
        other => other.to_string(),
    };
    println!(
        "{}:{}\t{kind}\t{}",
        token.span.line, token.span.column, token.value
    );
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        usage();
        return ExitCode::from(2);
    }

    let command = args[1].as_str();
    let mut options = ParserOptions::new();
    let mut files = Vec::new();
    for arg in &args[2..] {
        if arg == "--strict" {
            options = options.strict_assignment(true);
        } else {
            files.push(arg.as_str());
        }
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    let mut had_error = false;

    for path in files {
        let content = match read_source(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("{path}: {e}");
                had_error = true;
                continue;
            }
        };

        match command {
            "tokens" => match jsdecl::tokenize(&content) {
                Ok(tokens) => tokens.iter().for_each(print_token),
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            "ast" => match jsdecl::parse_with(&content, options) {
                Ok(program) => println!("{}", jsdecl::to_json(&program)),
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            "fmt" => match jsdecl::parse_with(&content, options) {
                Ok(program) => print!("{}", jsdecl::format(&program)),
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            "validate" => match jsdecl::parse_with(&content, options) {
                Ok(program) => {
                    let count = program.body.len();
                    eprintln!("{path}: valid ({count} declaration(s))");
                }
                Err(e) => {
                    eprintln!("{path}: {e}");
                    had_error = true;
                }
            },
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
