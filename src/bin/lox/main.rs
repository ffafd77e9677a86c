mod repl;

use std::fs;
use std::io;
use std::process::exit;

use anyhow::Context;
use clap::Parser;
use loxscan::cli::Cli;
use loxscan::{run, Diagnostics, ScanOptions};
use repl::Repl;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use tracing_subscriber::EnvFilter;

/// Input data was malformed (sysexits `EX_DATAERR`).
const EXIT_DATAERR: i32 = 65;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let options = cli.scan_options();

    if let Some(script) = &cli.script {
        let code =
            fs::read_to_string(script).with_context(|| format!("script `{}`", script.display()))?;

        let mut diagnostics = Diagnostics::new();
        run(&script.to_string_lossy(), &code, options, &mut diagnostics)
            .context("failed to write scan output")?;

        if diagnostics.had_error() {
            exit(EXIT_DATAERR);
        }
    } else {
        repl(options)?;
    }

    Ok(())
}

fn repl(options: ScanOptions) -> anyhow::Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut state = Repl::new(options);
    loop {
        match rl.readline("> ") {
            Ok(line) => {
                rl.add_history_entry(&line)?;
                state.rep(&line)?;
            }
            Err(ReadlineError::Eof) => return Ok(()),
            Err(ReadlineError::Interrupted) => {
                eprintln!("user exit");
                exit(1);
            }
            Err(e) => return Err(e.into()),
        }
    }
}
