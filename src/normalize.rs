use anyhow::{Context, Result};
use filetime::FileTime;

use crate::config::SyncConfig;
use crate::report::{Outcome, Summary};
use crate::scan::{self, FileEntry};
use crate::utils;

pub fn sync_directory(config: &SyncConfig) -> Result<Summary> {
    let mut summary = Summary::default();
    for entry in scan::list_dir(&config.source_dir)? {
        let outcome = match scan::check_extension(&entry) {
            Ok(()) => sync_file(&entry, config.dry_run)?,
            Err(reason) => reason.into(),
        };
        summary.record(&entry.name, outcome);
    }
    Ok(summary)
}

/// Any failure here aborts the whole run.
pub fn sync_file(entry: &FileEntry, dry_run: bool) -> Result<Outcome> {
    let times = entry.read_times()?;
    let mtime = utils::truncate_to_millis(FileTime::from_system_time(times.created));
    if dry_run {
        info!("would set mtime of {} to {:?}", entry.name, mtime);
        return Ok(Outcome::Applied);
    }
    filetime::set_file_mtime(&entry.path, mtime).with_context(|| {
        format!(
            "Cannot set modification time for file [{}]",
            entry.path.display()
        )
    })?;
    debug!("set mtime of {} to {:?}", entry.name, mtime);
    Ok(Outcome::Applied)
}
