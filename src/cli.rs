use std::path::PathBuf;

use clap::Parser;

use crate::ScanOptions;

#[derive(Debug, Parser)]
#[command(name = "lox", about = "Scan Lox source into tokens", version)]
pub struct Cli {
    /// Scan a script; starts a prompt when omitted
    pub script: Option<PathBuf>,

    /// Report a run of unexpected characters as a single error
    #[arg(long)]
    pub coalesce_errors: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            coalesce_unexpected: self.coalesce_errors,
        }
    }

    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "loxscan=debug"
        } else {
            "loxscan=warn"
        }
    }
}
