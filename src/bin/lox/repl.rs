use std::io;

use loxscan::{run, Diagnostics, ScanOptions};
use tracing::debug;

const SOURCE_NAME: &str = "<repl>";

#[derive(Debug)]
pub struct Repl {
    options: ScanOptions,
    diagnostics: Diagnostics,
}

impl Repl {
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            diagnostics: Diagnostics::new(),
        }
    }

    /// Scans one line. A bad line is reported and forgotten; the session
    /// keeps going.
    pub fn rep(&mut self, input: &str) -> io::Result<()> {
        run(SOURCE_NAME, input, self.options, &mut self.diagnostics)?;

        if self.diagnostics.had_error() {
            debug!(errors = self.diagnostics.len(), "discarding line errors");
        }
        self.diagnostics.reset();

        Ok(())
    }
}
