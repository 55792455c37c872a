//! Lexer/Scanner implementation for the Lox language
//!
//! This module implements lexical analysis, converting source code into
//! tokens in a single forward pass. Lexical errors never abort the scan:
//! they are reported through the injected [`ErrorReporter`] and recorded
//! in the aggregate error flag, and scanning continues with the next
//! character.

use crate::error::{ErrorReporter, ScanError};
use super::token::{Literal, Token, TokenType};

/// Result of scanning one source buffer
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOutcome {
    /// Tokens in lexical order, always terminated by a single EOF token
    pub tokens: Vec<Token>,
    /// True if any lexical error was reported during the scan
    pub had_error: bool,
}

/// Scanner for Lox source code
///
/// One instance performs exactly one forward pass over one source buffer;
/// `scan_tokens` consumes the scanner, so it cannot be reused or restarted.
pub struct Scanner<'r> {
    source: Vec<char>,
    tokens: Vec<Token>,
    start: usize,
    current: usize,
    line: usize,
    had_error: bool,
    reporter: &'r mut dyn ErrorReporter,
}

impl<'r> Scanner<'r> {
    /// Create a new scanner over `source`
    pub fn new(source: &str, reporter: &'r mut dyn ErrorReporter) -> Self {
        Self {
            source: source.chars().collect(),
            tokens: Vec::new(),
            start: 0,
            current: 0,
            line: 1,
            had_error: false,
            reporter,
        }
    }

    /// Tokenize the source code
    pub fn scan_tokens(mut self) -> ScanOutcome {
        while !self.is_at_end() {
            self.start = self.current;
            self.scan_token();
        }

        // Add EOF token
        self.tokens
            .push(Token::new(TokenType::Eof, String::new(), Literal::None, self.line));

        ScanOutcome {
            tokens: self.tokens,
            had_error: self.had_error,
        }
    }

    /// Scan a single token
    fn scan_token(&mut self) {
        let c = self.advance();

        match c {
            // Single-character tokens
            '(' => self.add_token(TokenType::LeftParen),
            ')' => self.add_token(TokenType::RightParen),
            '{' => self.add_token(TokenType::LeftBrace),
            '}' => self.add_token(TokenType::RightBrace),
            ',' => self.add_token(TokenType::Comma),
            '.' => self.add_token(TokenType::Dot),
            '-' => self.add_token(TokenType::Minus),
            '+' => self.add_token(TokenType::Plus),
            ';' => self.add_token(TokenType::Semicolon),
            '*' => self.add_token(TokenType::Star),

            // Two-character tokens (maximal munch)
            '!' => {
                if self.match_char('=') {
                    self.add_token(TokenType::BangEqual)
                } else {
                    self.add_token(TokenType::Bang)
                }
            }

            '=' => {
                if self.match_char('=') {
                    self.add_token(TokenType::EqualEqual)
                } else {
                    self.add_token(TokenType::Equal)
                }
            }

            '<' => {
                if self.match_char('=') {
                    self.add_token(TokenType::LessEqual)
                } else {
                    self.add_token(TokenType::Less)
                }
            }

            '>' => {
                if self.match_char('=') {
                    self.add_token(TokenType::GreaterEqual)
                } else {
                    self.add_token(TokenType::Greater)
                }
            }

            // Comments
            '/' => {
                if self.match_char('/') {
                    // Single-line comment: skip until end of line
                    while self.peek() != '\n' && !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    self.add_token(TokenType::Slash)
                }
            }

            // Whitespace (skip)
            ' ' | '\r' | '\t' => {}

            // Newline
            '\n' => self.line += 1,

            // String literals
            '"' => self.scan_string(),

            // Number literals
            c if c.is_ascii_digit() => self.scan_number(),

            // Identifiers and keywords
            c if c.is_ascii_alphabetic() || c == '_' => self.scan_identifier(),

            // Unexpected character
            _ => self.error(ScanError::UnexpectedCharacter {
                line: self.line,
                character: c,
            }),
        }
    }

    /// Scan a string literal
    fn scan_string(&mut self) {
        while self.peek() != '"' && !self.is_at_end() {
            if self.peek() == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            self.error(ScanError::UnterminatedString { line: self.line });
            return;
        }

        // Consume closing quote
        self.advance();

        // Trim the surrounding quotes
        let value: String = self.source[self.start + 1..self.current - 1].iter().collect();
        self.add_literal_token(TokenType::String, Literal::String(value));
    }

    /// Scan a number literal
    fn scan_number(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }

        // A fractional part needs a digit after the dot; a trailing dot
        // is left for the next token (so "123." is NUMBER then DOT)
        if self.peek() == '.' && self.peek_next().is_ascii_digit() {
            self.advance(); // consume '.'
            while self.peek().is_ascii_digit() {
                self.advance();
            }
        }

        let lexeme: String = self.source[self.start..self.current].iter().collect();
        // The lexeme is digits with at most one interior dot, so it always
        // parses as f64
        let value = lexeme.parse::<f64>().unwrap_or_default();
        self.add_literal_token(TokenType::Number, Literal::Number(value));
    }

    /// Scan an identifier or keyword
    fn scan_identifier(&mut self) {
        while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text: String = self.source[self.start..self.current].iter().collect();
        let token_type = TokenType::keyword(&text).unwrap_or(TokenType::Identifier);
        self.add_token(token_type)
    }

    /// Add a token with no literal value to the token list
    fn add_token(&mut self, token_type: TokenType) {
        self.add_literal_token(token_type, Literal::None)
    }

    /// Add a token to the token list
    fn add_literal_token(&mut self, token_type: TokenType, literal: Literal) {
        let lexeme: String = self.source[self.start..self.current].iter().collect();
        self.tokens
            .push(Token::new(token_type, lexeme, literal, self.line));
    }

    /// Report a lexical error and keep scanning
    fn error(&mut self, err: ScanError) {
        self.reporter.report(err.line(), "", &err.message());
        self.had_error = true;
    }

    /// Advance to the next character
    fn advance(&mut self) -> char {
        let c = self.source[self.current];
        self.current += 1;
        c
    }

    /// Check if the next character matches and consume it if so
    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.source[self.current] != expected {
            false
        } else {
            self.current += 1;
            true
        }
    }

    /// Peek at the current character without consuming it
    fn peek(&self) -> char {
        if self.is_at_end() {
            '\0'
        } else {
            self.source[self.current]
        }
    }

    /// Peek at the next character without consuming it
    fn peek_next(&self) -> char {
        if self.current + 1 >= self.source.len() {
            '\0'
        } else {
            self.source[self.current + 1]
        }
    }

    /// Check if we've reached the end of the source
    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    /// Reporter that records every report call for assertions
    #[derive(Default)]
    struct RecordingReporter {
        reports: Vec<(usize, String)>,
    }

    impl ErrorReporter for RecordingReporter {
        fn report(&mut self, line: usize, _location: &str, message: &str) {
            self.reports.push((line, message.to_string()));
        }
    }

    fn scan(source: &str) -> ScanOutcome {
        let mut reporter = RecordingReporter::default();
        Scanner::new(source, &mut reporter).scan_tokens()
    }

    fn scan_with_reports(source: &str) -> (ScanOutcome, Vec<(usize, String)>) {
        let mut reporter = RecordingReporter::default();
        let outcome = Scanner::new(source, &mut reporter).scan_tokens();
        (outcome, reporter.reports)
    }

    fn types(outcome: &ScanOutcome) -> Vec<TokenType> {
        outcome.tokens.iter().map(|t| t.token_type).collect()
    }

    #[test]
    fn test_empty_source() {
        let outcome = scan("");
        assert_eq!(outcome.tokens.len(), 1); // Just EOF
        assert_eq!(outcome.tokens[0].token_type, TokenType::Eof);
        assert_eq!(outcome.tokens[0].lexeme, "");
        assert_eq!(outcome.tokens[0].literal, Literal::None);
        assert_eq!(outcome.tokens[0].line, 1);
        assert!(!outcome.had_error);
    }

    #[test]
    fn test_single_character_tokens() {
        let outcome = scan("(){},.-+;*/");
        assert_eq!(
            types(&outcome),
            vec![
                TokenType::LeftParen,
                TokenType::RightParen,
                TokenType::LeftBrace,
                TokenType::RightBrace,
                TokenType::Comma,
                TokenType::Dot,
                TokenType::Minus,
                TokenType::Plus,
                TokenType::Semicolon,
                TokenType::Star,
                TokenType::Slash,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_two_character_tokens() {
        let outcome = scan("! != = == < <= > >=");
        assert_eq!(
            types(&outcome),
            vec![
                TokenType::Bang,
                TokenType::BangEqual,
                TokenType::Equal,
                TokenType::EqualEqual,
                TokenType::Less,
                TokenType::LessEqual,
                TokenType::Greater,
                TokenType::GreaterEqual,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_maximal_munch() {
        // "<=" is one token, "<" before a non-'=' is one token
        let outcome = scan("<=");
        assert_eq!(outcome.tokens[0].token_type, TokenType::LessEqual);
        assert_eq!(outcome.tokens[0].lexeme, "<=");

        let outcome = scan("<5");
        assert_eq!(outcome.tokens[0].token_type, TokenType::Less);
        assert_eq!(outcome.tokens[0].lexeme, "<");
        assert_eq!(outcome.tokens[1].token_type, TokenType::Number);
    }

    #[test]
    fn test_keywords() {
        let outcome = scan(
            "and class else false for fun if nil or print return super this true var while",
        );
        assert_eq!(
            types(&outcome),
            vec![
                TokenType::And,
                TokenType::Class,
                TokenType::Else,
                TokenType::False,
                TokenType::For,
                TokenType::Fun,
                TokenType::If,
                TokenType::Nil,
                TokenType::Or,
                TokenType::Print,
                TokenType::Return,
                TokenType::Super,
                TokenType::This,
                TokenType::True,
                TokenType::Var,
                TokenType::While,
                TokenType::Eof,
            ]
        );
        // Keywords carry no literal value
        assert_eq!(outcome.tokens[0].literal, Literal::None);
    }

    #[test]
    fn test_keyword_prefix_is_identifier() {
        let outcome = scan("classroom");
        assert_eq!(outcome.tokens.len(), 2);
        assert_eq!(outcome.tokens[0].token_type, TokenType::Identifier);
        assert_eq!(outcome.tokens[0].lexeme, "classroom");
    }

    #[test]
    fn test_identifiers() {
        let outcome = scan("foo bar_baz _private myVar123");
        for token in &outcome.tokens[..4] {
            assert_eq!(token.token_type, TokenType::Identifier);
        }
        assert_eq!(outcome.tokens[0].lexeme, "foo");
        assert_eq!(outcome.tokens[1].lexeme, "bar_baz");
        assert_eq!(outcome.tokens[2].lexeme, "_private");
        assert_eq!(outcome.tokens[3].lexeme, "myVar123");
    }

    #[test]
    fn test_number_literals() {
        let outcome = scan("0 42 123.45");
        assert_eq!(outcome.tokens[0].literal, Literal::Number(0.0));
        assert_eq!(outcome.tokens[1].literal, Literal::Number(42.0));
        assert_eq!(outcome.tokens[2].literal, Literal::Number(123.45));
        assert_eq!(outcome.tokens[2].lexeme, "123.45");
    }

    #[test]
    fn test_trailing_dot_is_not_consumed() {
        let outcome = scan("123.");
        assert_eq!(outcome.tokens[0].token_type, TokenType::Number);
        assert_eq!(outcome.tokens[0].lexeme, "123");
        assert_eq!(outcome.tokens[0].literal, Literal::Number(123.0));
        assert_eq!(outcome.tokens[1].token_type, TokenType::Dot);
        assert_eq!(outcome.tokens[2].token_type, TokenType::Eof);
    }

    #[test]
    fn test_method_call_on_number() {
        let outcome = scan("123.abs");
        assert_eq!(
            types(&outcome),
            vec![
                TokenType::Number,
                TokenType::Dot,
                TokenType::Identifier,
                TokenType::Eof,
            ]
        );
    }

    #[test]
    fn test_string_literals() {
        let outcome = scan(r#""hello" "foo bar""#);
        assert_eq!(outcome.tokens[0].token_type, TokenType::String);
        assert_eq!(outcome.tokens[0].lexeme, r#""hello""#);
        assert_eq!(
            outcome.tokens[0].literal,
            Literal::String("hello".to_string())
        );
        assert_eq!(
            outcome.tokens[1].literal,
            Literal::String("foo bar".to_string())
        );
    }

    #[test]
    fn test_multiline_string_records_closing_line() {
        let outcome = scan("\"one\ntwo\"");
        assert_eq!(outcome.tokens[0].token_type, TokenType::String);
        assert_eq!(
            outcome.tokens[0].literal,
            Literal::String("one\ntwo".to_string())
        );
        // Line counter value at emission, after the embedded newline
        assert_eq!(outcome.tokens[0].line, 2);
        assert_eq!(outcome.tokens[1].line, 2);
    }

    #[test]
    fn test_single_line_comment() {
        let outcome = scan("// comment\n1");
        assert_eq!(types(&outcome), vec![TokenType::Number, TokenType::Eof]);
        assert_eq!(outcome.tokens[0].literal, Literal::Number(1.0));
        // The newline after the comment still counts
        assert_eq!(outcome.tokens[0].line, 2);
    }

    #[test]
    fn test_comment_at_end_of_input() {
        let outcome = scan("1 // trailing");
        assert_eq!(types(&outcome), vec![TokenType::Number, TokenType::Eof]);
    }

    #[test]
    fn test_line_counting() {
        let outcome = scan("var\nx\n=\n1;");
        assert_eq!(outcome.tokens[0].line, 1);
        assert_eq!(outcome.tokens[1].line, 2);
        assert_eq!(outcome.tokens[2].line, 3);
        assert_eq!(outcome.tokens[3].line, 4);
        assert_eq!(outcome.tokens.last().unwrap().line, 4);
    }

    #[test]
    fn test_unterminated_string() {
        let (outcome, reports) = scan_with_reports("\"abc");
        assert!(outcome.had_error);
        assert_eq!(reports, vec![(1, "Unterminated string.".to_string())]);
        // No STRING token, scan still terminates with EOF
        assert_eq!(types(&outcome), vec![TokenType::Eof]);
    }

    #[test]
    fn test_unexpected_character() {
        let (outcome, reports) = scan_with_reports("@");
        assert!(outcome.had_error);
        assert_eq!(reports, vec![(1, "Unexpected character '@'.".to_string())]);
        assert_eq!(types(&outcome), vec![TokenType::Eof]);
    }

    #[test]
    fn test_scan_continues_after_error() {
        let (outcome, reports) = scan_with_reports("var @ x");
        assert!(outcome.had_error);
        assert_eq!(reports.len(), 1);
        assert_eq!(
            types(&outcome),
            vec![TokenType::Var, TokenType::Identifier, TokenType::Eof]
        );
    }

    #[test]
    fn test_repeated_scans_are_identical() {
        let source = "fun add(a, b) { return a + b; } // sum\nprint add(1, 2.5);";
        let first = scan(source);
        let second = scan(source);
        assert_eq!(first, second);
        assert!(!first.had_error);
    }

    #[test]
    fn test_lexemes_match_source_slices() {
        let outcome = scan("var answer = 42;");
        let lexemes: Vec<&str> = outcome.tokens.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["var", "answer", "=", "42", ";", ""]);
    }

    #[test]
    fn test_eof_is_always_last() {
        for source in ["", "1 + 2", "\"abc", "@#$", "// only a comment"] {
            let outcome = scan(source);
            let last = outcome.tokens.last().unwrap();
            assert_eq!(last.token_type, TokenType::Eof);
            assert_eq!(last.lexeme, "");
        }
    }
}
