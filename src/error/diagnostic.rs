//! Diagnostic rendering for scanner errors
//!
//! Formats line-addressed diagnostics in the canonical
//! `[line N] Error: message` shape and writes them to stderr.

use super::ErrorReporter;
use colored::Colorize;

/// Render a diagnostic line without color
///
/// An empty `location` collapses to `Error:` rather than leaving a
/// dangling space before the colon.
pub fn format_report(line: usize, location: &str, message: &str) -> String {
    if location.is_empty() {
        format!("[line {}] Error: {}", line, message)
    } else {
        format!("[line {}] Error {}: {}", line, location, message)
    }
}

/// Reporter that prints diagnostics to stderr
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ErrorReporter for ConsoleReporter {
    fn report(&mut self, line: usize, location: &str, message: &str) {
        let header = format!("[line {}]", line).blue().bold();
        if location.is_empty() {
            eprintln!("{} {}: {}", header, "Error".red().bold(), message);
        } else {
            eprintln!("{} {} {}: {}", header, "Error".red().bold(), location, message);
        }
    }
}
