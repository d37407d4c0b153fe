use anyhow::{bail, Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{Mode, SortConfig};
use crate::report::{Outcome, SkipReason, Summary};
use crate::scan::{self, FileEntry};
use crate::utils;

// A sanity check, not calendar validation.
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-2][0-9][0-9][0-9][0-1][0-9][0-3][0-9]$").unwrap());

pub fn sort_directory(config: &SortConfig) -> Result<Summary> {
    let mut summary = Summary::default();
    for entry in scan::list_dir(&config.source_dir)? {
        let outcome = match scan::check_extension(&entry) {
            Ok(()) => sort_file(&entry, config)?,
            Err(reason) => reason.into(),
        };
        summary.record(&entry.name, outcome);
    }
    Ok(summary)
}

/// Where a file should go, or why it stays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Folder(String),
    Skip(SkipReason),
}

pub fn sort_file(entry: &FileEntry, config: &SortConfig) -> Result<Outcome> {
    let folder = match folder_name(entry, config)? {
        Destination::Folder(folder) => folder,
        Destination::Skip(reason) => return Ok(reason.into()),
    };
    let dest_dir = config.source_dir.join(&folder);

    check_dir(&dest_dir)?;
    let target = target_path(entry, &dest_dir)?;
    if target.symlink_metadata().is_ok() {
        return Ok(SkipReason::DestinationExists(target).into());
    }
    if config.dry_run {
        info!("would move {} to {}", entry.name, dest_dir.display());
        return Ok(Outcome::Applied);
    }
    ensure_dir(&dest_dir)?;
    move_into(entry, &dest_dir)
}

/// Destination folder name for `entry`: the derived date plus the suffix.
pub fn folder_name(entry: &FileEntry, config: &SortConfig) -> Result<Destination> {
    let date = match config.mode {
        Mode::Filename => match date_from_file_name(&entry.name) {
            Ok(date) => date,
            Err(reason) => return Ok(Destination::Skip(reason)),
        },
        Mode::Timestamp => {
            let times = entry.read_times()?;
            // Host zone at run time; the zone of capture is unknown.
            utils::date_folder(times.modified, &chrono::Local)
        }
    };
    Ok(Destination::Folder(format!("{}{}", date, config.folder_suffix)))
}

/// `20181225_xxxx.jpg` -> `2018_12_25`.
pub fn date_from_file_name(name: &str) -> Result<String, SkipReason> {
    let name = name.to_lowercase();
    let (date, _) = name.split_once('_').ok_or(SkipReason::NoDateSeparator)?;
    if date.len() != 8 || !DATE_PATTERN.is_match(date) {
        return Err(SkipReason::MalformedDate);
    }
    Ok(format!("{}_{}_{}", &date[..4], &date[4..6], &date[6..]))
}

fn check_dir(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        bail!(
            "File exists with expected name for directory [{}]",
            dir.display()
        );
    }
    Ok(())
}

/// Create `dir` and its parents unless it is already a directory.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    check_dir(dir)?;
    if !dir.is_dir() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Cannot create directory [{}]", dir.display()))?;
        debug!("created {}", dir.display());
    }
    Ok(())
}

fn target_path(entry: &FileEntry, dest_dir: &Path) -> Result<PathBuf> {
    let file_name = entry
        .path
        .file_name()
        .with_context(|| format!("no file name in [{}]", entry.path.display()))?;
    Ok(dest_dir.join(file_name))
}

/// Move `entry` into `dest_dir` under its own name. Never overwrites.
pub fn move_into(entry: &FileEntry, dest_dir: &Path) -> Result<Outcome> {
    let target = target_path(entry, dest_dir)?;
    if target.symlink_metadata().is_ok() {
        return Ok(SkipReason::DestinationExists(target).into());
    }
    fs::rename(&entry.path, &target).with_context(|| {
        format!(
            "Cannot move file [{}] to [{}]",
            entry.path.display(),
            target.display()
        )
    })?;
    debug!("moved {} to {}", entry.name, target.display());
    Ok(Outcome::Applied)
}
