//! Lexical errors and the sink they are reported to.

use std::borrow::Cow;
use std::io;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::span::Span;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("[line {}] Error: Unexpected character.", .span.line)]
    UnexpectedCharacter { span: Span },

    /// A run of unexpected characters reported as one.
    #[error("[line {}] Error: Unexpected characters.", .span.line)]
    UnexpectedCharacters { span: Span },

    #[error("[line {}] Error: Unterminated string.", .span.line)]
    UnterminatedString { span: Span },

    #[error("[line {}] Error: Invalid number: {}.", .span.line, .reason)]
    InvalidNumber { span: Span, reason: String },
}

impl ScanError {
    pub const fn span(&self) -> &Span {
        match self {
            Self::UnexpectedCharacter { span }
            | Self::UnexpectedCharacters { span }
            | Self::UnterminatedString { span }
            | Self::InvalidNumber { span, .. } => span,
        }
    }

    pub const fn line(&self) -> usize {
        self.span().line
    }

    /// The message without the line prefix.
    pub fn message(&self) -> Cow<'static, str> {
        match self {
            Self::UnexpectedCharacter { .. } => "Unexpected character.".into(),
            Self::UnexpectedCharacters { .. } => "Unexpected characters.".into(),
            Self::UnterminatedString { .. } => "Unterminated string.".into(),
            Self::InvalidNumber { reason, .. } => format!("Invalid number: {reason}.").into(),
        }
    }

    /// Renders the error against `source` on stderr.
    pub fn eprint(&self, path: &str, source: &str) -> io::Result<()> {
        let range = self.span().range.clone();

        Report::build(ReportKind::Error, (path, range.clone()))
            .with_config(Config::default().with_index_type(IndexType::Byte))
            .with_message(format!("[line {}] {}", self.line(), self.message()))
            .with_label(
                Label::new((path, range))
                    .with_message(self.message())
                    .with_color(Color::Red),
            )
            .finish()
            .eprint((path, Source::from(source)))
    }
}

/// Receives every lexical error found during a scan.
pub trait Reporter {
    fn report(&mut self, error: ScanError);
}

/// Collects reported errors for one session.
#[derive(Debug, Default)]
pub struct Diagnostics {
    errors: Vec<ScanError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn had_error(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ScanError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn reset(&mut self) {
        self.errors.clear();
    }

    pub fn eprint(&self, path: &str, source: &str) -> io::Result<()> {
        for error in &self.errors {
            error.eprint(path, source)?;
        }
        Ok(())
    }
}

impl Reporter for Diagnostics {
    fn report(&mut self, error: ScanError) {
        self.errors.push(error);
    }
}
