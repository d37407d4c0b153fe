use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::report::SkipReason;
use crate::utils;

/// Lowercase extensions eligible for processing.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "mp4", "avi"];

#[derive(Debug, Clone)]
pub struct FileEntry {
    pub path: PathBuf,
    pub name: String,
    pub is_dir: bool,
    /// lowercase, after the last '.'
    pub extension: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTimes {
    pub created: SystemTime,
    pub modified: SystemTime,
}

impl FileEntry {
    pub fn new(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let is_dir = path.is_dir();
        let extension = lowercase_extension(&name);
        Self {
            path,
            name,
            is_dir,
            extension,
        }
    }

    pub fn read_times(&self) -> Result<FileTimes> {
        let read = || -> std::io::Result<FileTimes> {
            let meta = std::fs::metadata(&self.path)?;
            Ok(FileTimes {
                created: utils::creation_time(&meta)?,
                modified: meta.modified()?,
            })
        };
        read().with_context(|| {
            format!("Cannot read attributes for file [{}]", self.path.display())
        })
    }
}

/// The text after the last '.', lowercased. `None` if there is no '.'.
pub fn lowercase_extension(name: &str) -> Option<String> {
    let lower = name.to_lowercase();
    let dot = lower.rfind('.')?;
    Some(lower[dot + 1..].to_string())
}

/// Immediate children of `dir` with absolute paths, sorted by name.
pub fn list_dir(dir: &Path) -> Result<Vec<FileEntry>> {
    if !dir.is_dir() {
        bail!(
            "Specified [{}] does not exist or is not a valid directory",
            dir.display()
        );
    }
    let cannot_list = || format!("Cannot obtain list of files from [{}]", dir.display());
    let root = dir.canonicalize().with_context(cannot_list)?;

    let mut entries = vec![];
    for entry in root.read_dir().with_context(cannot_list)? {
        let entry = entry.with_context(cannot_list)?;
        entries.push(FileEntry::new(entry.path()));
    }
    entries.sort_by(|a, b| a.name.cmp(&b.name));
    debug!("{} entries in {}", entries.len(), dir.display());
    Ok(entries)
}

/// Regular files with an allowed extension pass; everything else gets a reason.
pub fn check_extension(entry: &FileEntry) -> Result<(), SkipReason> {
    if entry.is_dir {
        return Err(SkipReason::Directory);
    }
    match entry.extension.as_deref() {
        None => Err(SkipReason::NoExtension),
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext) => Ok(()),
        Some(ext) => Err(SkipReason::UnsupportedExtension(ext.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn extensions() {
        assert_eq!(lowercase_extension("IMG_0001.JPG").as_deref(), Some("jpg"));
        assert_eq!(lowercase_extension("archive.tar.gz").as_deref(), Some("gz"));
        assert_eq!(lowercase_extension("trailing.").as_deref(), Some(""));
        assert_eq!(lowercase_extension("readme"), None);
    }

    #[test]
    fn filter_entries() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.JPG", "b.mp4", "c.Avi", "notes.txt", "readme", "d."] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("album.jpg")).unwrap();

        let entries = list_dir(dir.path()).unwrap();
        let verdicts: Vec<_> = entries
            .iter()
            .map(|e| (e.name.as_str(), check_extension(e)))
            .collect();
        assert_eq!(
            verdicts,
            vec![
                ("a.JPG", Ok(())),
                ("album.jpg", Err(SkipReason::Directory)),
                ("b.mp4", Ok(())),
                ("c.Avi", Ok(())),
                ("d.", Err(SkipReason::UnsupportedExtension(String::new()))),
                ("notes.txt", Err(SkipReason::UnsupportedExtension("txt".into()))),
                ("readme", Err(SkipReason::NoExtension)),
            ]
        );
    }

    #[test]
    fn entries_are_absolute() {
        let dir = tempfile::Builder::new().tempdir_in(".").unwrap();
        let relative = Path::new(".").join(dir.path().file_name().unwrap());
        fs::write(relative.join("a.jpg"), b"x").unwrap();

        let entries = list_dir(&relative).unwrap();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].path.is_absolute());
        assert_eq!(
            entries[0].path,
            relative.canonicalize().unwrap().join("a.jpg")
        );
        assert_eq!(entries[0].name, "a.jpg");
    }

    #[test]
    fn missing_source() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        let err = list_dir(&missing).unwrap_err();
        assert!(err.to_string().contains("does not exist or is not a valid directory"));

        let file = dir.path().join("file.jpg");
        fs::write(&file, b"x").unwrap();
        assert!(list_dir(&file).is_err());
    }

    #[test]
    fn unreadable_attributes() {
        let dir = tempfile::tempdir().unwrap();
        let entry = FileEntry::new(dir.path().join("gone.jpg"));
        let err = entry.read_times().unwrap_err();
        assert!(err.to_string().starts_with("Cannot read attributes for file ["));
    }
}
