//! Debug commands: `lex` and `parse` for inspecting the front end.

use blue_parse::ParseMode;

use super::{read_file, report};

/// Lex a file and display the token stream.
pub fn lex_file(path: &str) -> i32 {
    let Some(content) = read_file(path) else {
        return 1;
    };
    match blue_lexer::tokenize(&content) {
        Ok(tokens) => {
            println!("Tokens for '{}' ({} tokens):", path, tokens.len());
            for token in &tokens {
                if token.text.is_empty() {
                    println!("  {} @ {}", token.kind, token.line);
                } else {
                    println!("  {} {:?} @ {}", token.kind, token.text, token.line);
                }
            }
            0
        }
        Err(err) => {
            eprintln!("error: {path}: {err}");
            1
        }
    }
}

/// Parse a file and dump its tree.
pub fn parse_file(path: &str) -> i32 {
    let Some(content) = read_file(path) else {
        return 1;
    };
    match blue_eval::parse(&content, ParseMode::File, path) {
        Ok(root) => {
            println!("Parse tree for '{path}':");
            print!("{}", root.dump());
            0
        }
        Err(err) => report(&err),
    }
}
