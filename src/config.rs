use std::path::{Path, PathBuf};

pub const DEFAULT_FOLDER_SUFFIX: &str = "z-";

/// How the sorter derives the date of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Name must start with `yyyymmdd_`, e.g. `20181225_xxxx.jpg`
    Filename,
    /// Last modification time, in the local time zone
    Timestamp,
}

#[derive(Debug, Clone)]
pub struct SortConfig {
    pub source_dir: PathBuf,
    pub mode: Mode,
    /// appended to the derived date, `2018_12_25` + `z-`
    pub folder_suffix: String,
    pub dry_run: bool,
}

impl SortConfig {
    pub fn new(source_dir: impl AsRef<Path>) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
            mode: Mode::Filename,
            folder_suffix: DEFAULT_FOLDER_SUFFIX.to_string(),
            dry_run: false,
        }
    }

    pub fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn folder_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.folder_suffix = suffix.into();
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub source_dir: PathBuf,
    pub dry_run: bool,
}

impl SyncConfig {
    pub fn new(source_dir: impl AsRef<Path>) -> Self {
        Self {
            source_dir: source_dir.as_ref().to_path_buf(),
            dry_run: false,
        }
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
