mod args;
mod data;
mod error;
mod file_ops;

use clap::Parser;
use dotenvy::dotenv;
use env_logger::Env;
use log::{info, warn};
use std::path::{Path, PathBuf};

use args::Args;
use data::IdCounts;
use error::Result;
use file_ops::{create_id_counts, read_id_counts, DEFAULT_FILE_NAME};

const OUTPUT_ENV: &str = "ID_COUNTS_FILE";

/// Output path: `--output`, then ID_COUNTS_FILE, then `id_counts.json` in the working directory.
fn resolve_output(output: Option<PathBuf>) -> PathBuf {
    output.unwrap_or_else(|| {
        std::env::var(OUTPUT_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_FILE_NAME))
    })
}

/// One `Group <id>: <consumed>` line per group.
fn format_status(id_counts: &IdCounts) -> String {
    id_counts
        .status_report()
        .iter()
        .map(|status| format!("Group {}: {}\n", status.group_id, status.consumed))
        .collect()
}

fn print_status(path: &Path) -> Result<()> {
    let id_counts = read_id_counts(path)?;
    if id_counts.is_empty() {
        warn!("{} contains no groups", path.display());
    }

    print!("{}", format_status(&id_counts));

    Ok(())
}

fn main() -> Result<()> {
    let args: Args = Args::parse();

    // load environment variables from .env file
    dotenv().ok();

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let output = resolve_output(args.output);

    if args.status {
        return print_status(&output);
    }

    info!(
        "Generating id counts for {} groups and {} folders",
        args.groups, args.folders
    );
    create_id_counts(args.folders, args.groups, &output)?;

    Ok(())
}
