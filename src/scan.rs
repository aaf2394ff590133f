use anyhow::Result;
use chrono::Local;

use crate::analytics;
use crate::cli::ScanArgs;
use crate::source::SnapshotFile;
use crate::store;
use crate::universe;

pub fn run(args: ScanArgs) -> Result<()> {
    let source = SnapshotFile::load(&args.input)?;
    let today = args.as_of.unwrap_or_else(|| Local::now().date_naive());

    let targets: Vec<(&str, &str)> = if args.symbol.is_empty() {
        universe::UNIVERSE.to_vec()
    } else {
        args.symbol
            .iter()
            .map(|symbol| (symbol.as_str(), universe::company_name(symbol)))
            .collect()
    };

    let results = analytics::scan(&source, &targets, today);
    store::write_results(&args.output, &results)?;
    Ok(())
}
