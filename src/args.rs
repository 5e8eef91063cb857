use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_FOLDERS: usize = 115;
pub const DEFAULT_GROUPS: u32 = 12;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of folders (length of each group's count list)
    #[arg(long, default_value_t = DEFAULT_FOLDERS)]
    pub folders: usize,

    /// Number of groups (keys 1..=groups)
    #[arg(long, default_value_t = DEFAULT_GROUPS)]
    pub groups: u32,

    /// Path of the id counts file, overrides ID_COUNTS_FILE
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Print the per-group status of an existing id counts file
    #[arg(long, conflicts_with_all = ["folders", "groups"])]
    pub status: bool,
}
