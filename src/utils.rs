use chrono::{DateTime, TimeZone, Utc};
use filetime::FileTime;
use std::fmt;
use std::fs::Metadata;
use std::io;
use std::time::SystemTime;

/// Birth time of the file, or its modification time where the filesystem
/// does not record one.
pub fn creation_time(meta: &Metadata) -> io::Result<SystemTime> {
    match meta.created() {
        Ok(t) => Ok(t),
        Err(e) if e.kind() == io::ErrorKind::Unsupported => {
            debug!("creation time unavailable ({}), using modification time", e);
            meta.modified()
        }
        Err(e) => Err(e),
    }
}

pub fn truncate_to_millis(t: FileTime) -> FileTime {
    let nanos = t.nanoseconds() / 1_000_000 * 1_000_000;
    FileTime::from_unix_time(t.unix_seconds(), nanos)
}

/// `YYYY_MM_DD` of the instant `t` as seen in `tz`.
pub fn date_folder<Tz>(t: SystemTime, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    DateTime::<Utc>::from(t)
        .with_timezone(tz)
        .format("%Y_%m_%d")
        .to_string()
}
