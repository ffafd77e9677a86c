use crate::span::Span;

/// Read position over a borrowed source buffer.
///
/// `start` marks the first byte of the lexeme being recognized, `current` the
/// next byte to examine. Both always sit on char boundaries and
/// `start <= current <= source.len()`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    source: &'a str,
    start: usize,
    current: usize,
    line: usize,
}

impl<'a> Cursor<'a> {
    pub const fn new(source: &'a str) -> Self {
        Self {
            source,
            start: 0,
            current: 0,
            line: 1,
        }
    }

    pub const fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }

    /// Begins a new lexeme at the current position.
    pub fn reset_start(&mut self) {
        self.start = self.current;
    }

    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    /// `None` is the end-of-input sentinel.
    pub fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.source[self.current..].chars();
        chars.next()?;
        chars.next()
    }

    pub fn expect(&mut self, expected: char) -> bool {
        self.expect_pred(|c| c == expected)
    }

    pub fn expect_pred<F>(&mut self, pred: F) -> bool
    where
        F: FnOnce(char) -> bool,
    {
        if self.peek().is_some_and(pred) {
            let _ = self.advance();
            true
        } else {
            false
        }
    }

    pub fn newline(&mut self) {
        self.line += 1;
    }

    pub const fn line(&self) -> usize {
        self.line
    }

    pub fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    pub const fn span(&self) -> Span {
        Span::new(self.start..self.current, self.line)
    }

    pub const fn offset(&self) -> usize {
        self.current
    }

    pub const fn source_len(&self) -> usize {
        self.source.len()
    }
}
