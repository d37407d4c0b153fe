use clap::Parser;
use std::path::PathBuf;

use crate::config::{Mode, SortConfig, SyncConfig, DEFAULT_FOLDER_SUFFIX};

#[derive(Debug, Parser)]
#[command(author = env!("CARGO_PKG_AUTHORS"), version = env!("CARGO_PKG_VERSION"), about = "Move photos/videos into date-named folders")]
pub struct SortArgs {
    #[clap(
        short,
        long,
        value_enum,
        default_value = "filename",
        env = "PICSORT_MODE",
        help = "Where the date comes from: file name prefix or modification time"
    )]
    pub mode: Mode,

    #[clap(
        short,
        long,
        default_value = DEFAULT_FOLDER_SUFFIX,
        allow_hyphen_values = true,
        env = "PICSORT_FOLDER_SUFFIX",
        help = "Appended to every date folder name"
    )]
    pub suffix: String,

    // flags
    #[clap(long, help = "Only log what would be moved")]
    pub dry_run: bool,

    #[clap(env = "PICSORT_SOURCE", help = "Directory to sort")]
    pub source: PathBuf,
}

impl SortArgs {
    pub fn into_config(self) -> SortConfig {
        SortConfig::new(self.source)
            .mode(self.mode)
            .folder_suffix(self.suffix)
            .dry_run(self.dry_run)
    }
}

#[derive(Debug, Parser)]
#[command(author = env!("CARGO_PKG_AUTHORS"), version = env!("CARGO_PKG_VERSION"), about = "Set modification time of photos/videos to their creation time")]
pub struct SyncArgs {
    #[clap(long, help = "Only log what would be changed")]
    pub dry_run: bool,

    #[clap(env = "PICSORT_SOURCE", help = "Directory to adjust")]
    pub source: PathBuf,
}

impl SyncArgs {
    pub fn into_config(self) -> SyncConfig {
        SyncConfig::new(self.source).dry_run(self.dry_run)
    }
}
