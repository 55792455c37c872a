//! rlox CLI
//!
//! Command-line interface for the rlox interpreter.

use std::env;
use std::fs;
use std::io::{self, Write};
use std::process;

use rlox::{run_scan, ConsoleReporter, VERSION};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() == 1 {
        // No arguments: start REPL
        println!("rlox v{} - Lox Interpreter", VERSION);
        println!("Type 'exit' to quit\n");
        repl();
        return;
    }

    let mut show_help = false;
    let mut filename: Option<&String> = None;

    for arg in &args[1..] {
        match arg.as_str() {
            "--help" | "-h" => show_help = true,
            _ if arg.starts_with('-') => {
                eprintln!("Unknown flag: {}", arg);
                print_usage();
                process::exit(1);
            }
            _ => filename = Some(arg),
        }
    }

    if show_help {
        print_help();
        return;
    }

    if let Some(file) = filename {
        match run_file(file) {
            Ok(had_error) => {
                if had_error {
                    // Data error: tokens were produced but the source is
                    // not lexically valid
                    process::exit(65);
                }
            }
            Err(e) => {
                eprintln!("{}", e);
                process::exit(1);
            }
        }
    } else {
        eprintln!("Error: No input file specified");
        print_usage();
        process::exit(1);
    }
}

fn print_usage() {
    eprintln!("Usage: rlox [OPTIONS] [script]");
    eprintln!("       rlox --help");
}

fn print_help() {
    println!("rlox v{} - A Lox interpreter", VERSION);
    println!();
    println!("USAGE:");
    println!("    rlox [OPTIONS] [script]");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help      Show this help message");
    println!();
    println!("EXAMPLES:");
    println!("    rlox script.lox    Tokenize a Lox script");
    println!("    rlox               Start interactive REPL");
}

/// Scan a Lox script from a file and print its tokens
///
/// Returns whether any lexical error was reported, so the caller can set
/// the exit code accordingly.
fn run_file(filename: &str) -> Result<bool, String> {
    let source = fs::read_to_string(filename)
        .map_err(|e| format!("Failed to read file '{}': {}", filename, e))?;

    Ok(run(&source))
}

/// Scan one source buffer, print every token, and report errors
fn run(source: &str) -> bool {
    let mut reporter = ConsoleReporter::new();
    let outcome = run_scan(source, &mut reporter);

    for token in &outcome.tokens {
        println!("{}", token);
    }

    outcome.had_error
}

/// Start an interactive REPL (Read-Eval-Print Loop)
fn repl() {
    loop {
        print!("rlox > ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut input = String::new();
        match io::stdin().read_line(&mut input) {
            Ok(0) => break, // EOF
            Ok(_) => {
                let input = input.trim();

                if input == "exit" || input == "quit" {
                    break;
                }

                if input.is_empty() {
                    continue;
                }

                // Error state resets per line: each input gets a fresh scan
                run(input);
            }
            Err(e) => {
                eprintln!("Error reading input: {}", e);
                break;
            }
        }
    }

    println!("\nGoodbye!");
}
