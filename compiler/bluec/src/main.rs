//! Blue interpreter CLI.

use std::path::Path;

use blue_eval::{Runtime, SCRIPT_EXTENSION};
use bluec::commands::{lex_file, parse_file, run_file};
use bluec::repl::run_repl;
use bluec::{init_tracing, runtime_config};

fn main() {
    init_tracing();
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        let runtime = Runtime::new(runtime_config(Vec::new()));
        std::process::exit(run_repl(&runtime));
    }

    let command = &args[1];

    let status = match command.as_str() {
        "run" => {
            if args.len() < 3 {
                eprintln!("Usage: blue run <file.bl> [args...]");
                std::process::exit(1);
            }
            run_file(&args[2], &args[3..])
        }
        "lex" => {
            if args.len() < 3 {
                eprintln!("Usage: blue lex <file.bl>");
                std::process::exit(1);
            }
            lex_file(&args[2])
        }
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: blue parse <file.bl>");
                std::process::exit(1);
            }
            parse_file(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("blue {}", env!("CARGO_PKG_VERSION"));
            0
        }
        path if is_script(path) => run_file(path, &args[2..]),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            1
        }
    };
    std::process::exit(status);
}

/// A bare argument is a script when it has the script extension or names an
/// existing file.
fn is_script(arg: &str) -> bool {
    let path = Path::new(arg);
    path.extension().is_some_and(|ext| ext == SCRIPT_EXTENSION) || path.is_file()
}

fn print_usage() {
    println!("Blue interpreter");
    println!();
    println!("Usage: blue [file.bl] [args...]");
    println!("       blue <command> [options]");
    println!();
    println!("With no arguments, starts an interactive session.");
    println!();
    println!("Commands:");
    println!("  run <file.bl> [args...]  Run a script");
    println!("  lex <file.bl>            Tokenize and display tokens");
    println!("  parse <file.bl>          Parse and display the syntax tree");
    println!("  help                     Show this help message");
    println!("  version                  Show version information");
    println!();
    println!("Environment:");
    println!("  BLUE_PATH      Colon-separated module roots searched before the defaults");
    println!("  RUST_LOG       Tracing filter, e.g. RUST_LOG=blue_eval=debug");
    println!("  BLUE_LOG_TREE  Render tracing output as an indented tree");
}
