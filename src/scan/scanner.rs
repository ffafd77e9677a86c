use tracing::{debug, trace};

use super::cursor::Cursor;
use super::token::{Literal, Token, TokenKind};
use crate::diag::{Reporter, ScanError};
use crate::span::Span;

/// Knobs for a single scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanOptions {
    /// Report a run of unexpected characters once instead of once per
    /// character.
    pub coalesce_unexpected: bool,
}

/// Single-pass scanner over one source text.
///
/// The core is a loop: starting at the first character, figure out which
/// lexeme the character begins, consume it and the rest of that lexeme, emit
/// a token, and go again from the next character until the input runs out.
#[derive(Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
    options: ScanOptions,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, ScanOptions::default())
    }

    pub fn with_options(source: &'a str, options: ScanOptions) -> Self {
        Self {
            cursor: Cursor::new(source),
            tokens: vec![],
            options,
        }
    }

    /// Scans the whole source. Lexical errors go to `reporter` and never stop
    /// the scan; the returned tokens always end with a single `Eof`.
    pub fn scan<R>(mut self, reporter: &mut R) -> Vec<Token>
    where
        R: Reporter + ?Sized,
    {
        debug!(len = self.cursor.source_len(), "scan started");

        let mut errors = 0;
        while !self.cursor.is_at_end() {
            self.cursor.reset_start();
            if let Err(e) = self.scan_token() {
                trace!(%e, "lexical error");
                errors += 1;
                reporter.report(e);
            }
        }

        self.tokens
            .push(Token::eof(self.cursor.offset(), self.cursor.line()));

        debug!(
            tokens = self.tokens.len(),
            errors,
            lines = self.cursor.line(),
            "scan finished"
        );

        self.tokens
    }
}

impl<'a> Scanner<'a> {
    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        self.push_token(kind, literal, self.cursor.span());
    }

    fn push_token(&mut self, kind: TokenKind, literal: Option<Literal>, span: Span) {
        let token = Token::new(kind, self.cursor.lexeme(), literal, span);
        trace!(%token, line = token.line(), "token");
        self.tokens.push(token);
    }

    fn scan_token(&mut self) -> Result<(), ScanError> {
        let Some(c) = self.cursor.advance() else {
            return Ok(());
        };

        match c {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),
            '!' => {
                let kind = if self.cursor.expect('=') {
                    TokenKind::BangEqual
                } else {
                    TokenKind::Bang
                };
                self.add_token(kind)
            }
            '=' => {
                let kind = if self.cursor.expect('=') {
                    TokenKind::EqualEqual
                } else {
                    TokenKind::Equal
                };
                self.add_token(kind)
            }
            '<' => {
                let kind = if self.cursor.expect('=') {
                    TokenKind::LessEqual
                } else {
                    TokenKind::Less
                };
                self.add_token(kind)
            }
            '>' => {
                let kind = if self.cursor.expect('=') {
                    TokenKind::GreaterEqual
                } else {
                    TokenKind::Greater
                };
                self.add_token(kind)
            }
            '/' => {
                if self.cursor.expect('/') {
                    // Runs to the end of the line; the newline is left for
                    // the main loop to count.
                    while self.cursor.expect_pred(|c| c != '\n') {}
                } else {
                    self.add_token(TokenKind::Slash);
                }
            }
            ' ' | '\r' | '\t' => (),
            '\n' => self.cursor.newline(),
            '"' => self.string()?,
            c if c.is_ascii_digit() => self.number()?,
            c if is_alpha(c) => self.identifier_or_keyword(),
            _ => return Err(self.unexpected()),
        }

        Ok(())
    }

    fn string(&mut self) -> Result<(), ScanError> {
        // The token keeps the line of its opening quote.
        let line = self.cursor.line();

        loop {
            let Some(c) = self.cursor.advance() else {
                return Err(ScanError::UnterminatedString {
                    span: self.cursor.span(),
                });
            };

            match c {
                '"' => break,
                '\n' => self.cursor.newline(),
                _ => (),
            }
        }

        let lexeme = self.cursor.lexeme();
        let value = Literal::String(lexeme[1..lexeme.len() - 1].into());
        let span = Span::new(self.cursor.span().range, line);
        self.push_token(TokenKind::String, Some(value), span);

        Ok(())
    }

    fn number(&mut self) -> Result<(), ScanError> {
        while self.cursor.expect_pred(|c| c.is_ascii_digit()) {}

        if self.cursor.peek() == Some('.')
            && self.cursor.peek_next().is_some_and(|c| c.is_ascii_digit())
        {
            let _ = self.cursor.advance();

            while self.cursor.expect_pred(|c| c.is_ascii_digit()) {}
        }

        let x = self
            .cursor
            .lexeme()
            .parse::<f64>()
            .map_err(|e| ScanError::InvalidNumber {
                span: self.cursor.span(),
                reason: e.to_string(),
            })?;
        self.add_literal(TokenKind::Number, Some(Literal::Number(x)));

        Ok(())
    }

    fn identifier_or_keyword(&mut self) {
        while self.cursor.expect_pred(|c| is_alpha(c) || c.is_ascii_digit()) {}

        let kind = TokenKind::keyword(self.cursor.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind)
    }

    fn unexpected(&mut self) -> ScanError {
        if !self.options.coalesce_unexpected {
            return ScanError::UnexpectedCharacter {
                span: self.cursor.span(),
            };
        }

        let mut run = 1;
        while self.cursor.expect_pred(|c| !starts_lexeme(c)) {
            run += 1;
        }

        let span = self.cursor.span();
        if run == 1 {
            ScanError::UnexpectedCharacter { span }
        } else {
            ScanError::UnexpectedCharacters { span }
        }
    }
}

fn is_alpha(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Whether `c` begins a token, whitespace or a comment.
fn starts_lexeme(c: char) -> bool {
    matches!(
        c,
        '(' | ')'
            | '{'
            | '}'
            | ','
            | '.'
            | '-'
            | '+'
            | ';'
            | '*'
            | '!'
            | '='
            | '<'
            | '>'
            | '/'
            | ' '
            | '\r'
            | '\t'
            | '\n'
            | '"'
    ) || c.is_ascii_digit()
        || is_alpha(c)
}
