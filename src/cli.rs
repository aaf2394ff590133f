use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::constants::{DEFAULT_OUTPUT_PATH, DEFAULT_SNAPSHOT_PATH};

#[derive(Debug, Parser)]
#[command(author, version, about = "Option-chain scanner and strategy advisor")]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn command(self) -> Command {
        self.command.unwrap_or_default()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Scan the universe and write the ranked market-data document
    Scan(ScanArgs),
    /// Print a stored scan as a ranked table
    Show(ShowArgs),
}

impl Default for Command {
    fn default() -> Self {
        Command::Scan(ScanArgs::default())
    }
}

#[derive(Debug, Args, Clone)]
pub struct ScanArgs {
    /// Snapshot document with per-symbol chains and price history
    #[arg(short, long, default_value = DEFAULT_SNAPSHOT_PATH)]
    pub input: PathBuf,

    /// Where to write the ranked results
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Valuation date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub as_of: Option<NaiveDate>,

    /// Restrict the scan to these symbols (repeatable)
    #[arg(short, long)]
    pub symbol: Vec<String>,
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            as_of: None,
            symbol: Vec::new(),
        }
    }
}

#[derive(Debug, Args, Clone)]
pub struct ShowArgs {
    /// Results document written by a previous scan
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub input: PathBuf,

    /// Show only the top N tickers by IV rank
    #[arg(short, long)]
    pub limit: Option<usize>,
}
