//! Error handling and diagnostics for the Lox scanner
//!
//! This module defines the lexical error taxonomy and the reporting
//! interface the scanner uses to surface diagnostics.

use std::fmt;

pub mod diagnostic;

pub use diagnostic::ConsoleReporter;

/// Errors the scanner can encounter in malformed source
///
/// Both variants are recoverable: the scanner reports them and keeps
/// going, so a scan always runs to completion.
#[derive(Debug, Clone, PartialEq)]
pub enum ScanError {
    /// A string literal was opened but never closed before end of input
    UnterminatedString { line: usize },
    /// A character that matches no lexeme rule
    UnexpectedCharacter { line: usize, character: char },
}

impl ScanError {
    /// Line the error was detected on (1-based)
    pub fn line(&self) -> usize {
        match self {
            Self::UnterminatedString { line } | Self::UnexpectedCharacter { line, .. } => *line,
        }
    }

    /// Human-readable message for the reporter
    pub fn message(&self) -> String {
        match self {
            Self::UnterminatedString { .. } => "Unterminated string.".to_string(),
            Self::UnexpectedCharacter { character, .. } => {
                format!("Unexpected character '{}'.", character)
            }
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[line {}] {}", self.line(), self.message())
    }
}

impl std::error::Error for ScanError {}

/// Sink for line-addressed scanner diagnostics
///
/// The scanner calls `report` exactly once per lexical error, always with
/// an empty `location`. Implementations own the side effect (printing,
/// collecting for tests) while the aggregate error flag travels back to
/// the caller through [`ScanOutcome`](crate::lexer::ScanOutcome).
pub trait ErrorReporter {
    fn report(&mut self, line: usize, location: &str, message: &str);
}
