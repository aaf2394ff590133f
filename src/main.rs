use anyhow::Result;
use clap::Parser;
use options_radar::cli::{self, Cli};
use options_radar::{scan, show};

fn main() -> Result<()> {
    match Cli::parse().command() {
        cli::Command::Scan(args) => scan::run(args),
        cli::Command::Show(args) => show::run(args),
    }
}
