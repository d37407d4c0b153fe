use std::fmt;
use std::path::PathBuf;

/// Why an entry was left alone. Never aborts a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Directory,
    NoExtension,
    UnsupportedExtension(String),
    NoDateSeparator,
    MalformedDate,
    DestinationExists(PathBuf),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Directory => write!(f, "directory"),
            SkipReason::NoExtension => write!(f, "no extension"),
            SkipReason::UnsupportedExtension(ext) => write!(f, "unsupported extension '{}'", ext),
            SkipReason::NoDateSeparator => write!(f, "no '_' in name"),
            SkipReason::MalformedDate => write!(f, "does not start with 'date_'"),
            SkipReason::DestinationExists(path) => {
                write!(f, "destination exists: {}", path.display())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Skipped(SkipReason),
}

impl From<SkipReason> for Outcome {
    fn from(reason: SkipReason) -> Self {
        Outcome::Skipped(reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skipped {
    pub name: String,
    pub reason: SkipReason,
}

/// What one run did.
#[derive(Debug, Default)]
pub struct Summary {
    pub applied: usize,
    pub skipped: Vec<Skipped>,
}

impl Summary {
    /// Count `outcome` for `name`, printing the skip notice if there is one.
    pub fn record(&mut self, name: &str, outcome: Outcome) {
        match outcome {
            Outcome::Applied => self.applied += 1,
            Outcome::Skipped(reason) => {
                match &reason {
                    SkipReason::DestinationExists(_) => {
                        warn!("skipping file: {} ({})", name, reason)
                    }
                    _ => info!("skipping file: {} ({})", name, reason),
                }
                self.skipped.push(Skipped {
                    name: name.to_string(),
                    reason,
                });
            }
        }
    }

    pub fn skipped_names(&self) -> Vec<&str> {
        self.skipped.iter().map(|s| s.name.as_str()).collect()
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} file(s) processed, {} skipped",
            self.applied,
            self.skipped.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_outcomes() {
        let mut summary = Summary::default();
        summary.record("a.jpg", Outcome::Applied);
        summary.record("notes.txt", SkipReason::UnsupportedExtension("txt".into()).into());
        summary.record("readme", SkipReason::NoExtension.into());

        assert_eq!(summary.applied, 1);
        assert_eq!(summary.skipped_names(), vec!["notes.txt", "readme"]);
        assert_eq!(summary.to_string(), "1 file(s) processed, 2 skipped");
    }

    #[test]
    fn reason_text() {
        assert_eq!(
            SkipReason::MalformedDate.to_string(),
            "does not start with 'date_'"
        );
        assert_eq!(
            SkipReason::UnsupportedExtension("txt".into()).to_string(),
            "unsupported extension 'txt'"
        );
    }
}
