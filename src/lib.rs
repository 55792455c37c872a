//! # rlox
//!
//! A tree-walking interpreter for Lox, a small, C-like, dynamically typed
//! scripting language. This crate currently implements the lexical-analysis
//! front end: it turns raw source text into an ordered token sequence that
//! later phases (parser, evaluator) will consume.
//!
//! ## Architecture
//!
//! - `lexer`: Tokenization of source code
//! - `error`: Lexical error taxonomy and diagnostic reporting
//!
//! Errors never abort a scan. The scanner reports each one through the
//! injected [`ErrorReporter`] and keeps going, so callers always get a
//! complete token list ending in EOF plus an aggregate error flag to gate
//! later stages on.

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{ConsoleReporter, ErrorReporter, ScanError};
pub use lexer::{Literal, ScanOutcome, Scanner, Token, TokenType};

/// Version of the rlox interpreter
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scan a Lox program from source code
///
/// This is the main entry point for lexical analysis. Each lexical error
/// causes exactly one `report` call on `reporter`; the returned outcome
/// carries the full token list (always terminated by EOF) and the
/// aggregate error flag.
///
/// # Arguments
///
/// * `source` - The source code to tokenize
/// * `reporter` - Sink for line-addressed diagnostics
pub fn run_scan(source: &str, reporter: &mut dyn ErrorReporter) -> ScanOutcome {
    Scanner::new(source, reporter).scan_tokens()
}
