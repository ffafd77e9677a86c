pub mod cli;
mod diag;
mod scan;
mod span;

pub use diag::{Diagnostics, Reporter, ScanError};
pub use scan::{Literal, ScanOptions, Scanner, Token, TokenKind};
pub use span::Span;

use std::io::{self, Write};

/// Scans `source`, prints one token per line to stdout and renders every
/// lexical error to stderr. Errors are also left in `diagnostics` so the
/// caller can decide what a failed scan means.
pub fn run(
    name: &str,
    source: &str,
    options: ScanOptions,
    diagnostics: &mut Diagnostics,
) -> io::Result<()> {
    let tokens = Scanner::with_options(source, options).scan(diagnostics);

    let mut stdout = io::stdout().lock();
    for token in &tokens {
        writeln!(stdout, "{token}")?;
    }
    stdout.flush()?;

    diagnostics.eprint(name, source)
}
