//! Where the dashboard keeps its log files.
//!
//! The current run writes `latest.log`. At startup the previous run's log
//! is archived as `<YYYYmmdd_HHMMSS>.log`, named after its last write, so
//! archive names sort oldest first.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use directories::ProjectDirs;

const LATEST_LOG: &str = "latest.log";

/// Archived logs kept by default.
pub const KEPT_LOGS: usize = 25;

/// Per-user cache directory: `~/.cache/dashboard` on Linux, the platform
/// equivalent elsewhere.
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("dev", "norpie", "dashboard").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Log file of the current run.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join(LATEST_LOG))
}

/// Archive `latest.log` in `dir`, then prune archives down to `keep`.
///
/// Returns the archive's path, or `None` when there was no log to archive.
pub fn rotate_logs(dir: &Path, keep: usize) -> io::Result<Option<PathBuf>> {
    let latest = dir.join(LATEST_LOG);
    let archived = match fs::metadata(&latest) {
        Ok(meta) => {
            let written: DateTime<Local> = meta.modified()?.into();
            let archive = dir.join(format!("{}.log", written.format("%Y%m%d_%H%M%S")));
            fs::rename(&latest, &archive)?;
            Some(archive)
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(e),
    };

    prune_logs(dir, keep)?;
    Ok(archived)
}

/// Delete all but the newest `keep` archives in `dir`. Returns how many went.
pub fn prune_logs(dir: &Path, keep: usize) -> io::Result<usize> {
    let mut archives = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let is_archive = path.extension().is_some_and(|ext| ext == "log")
            && path.file_name().is_some_and(|name| name != LATEST_LOG);
        if is_archive {
            archives.push(path);
        }
    }

    archives.sort();
    let excess = archives.len().saturating_sub(keep);
    for path in &archives[..excess] {
        fs::remove_file(path)?;
    }
    Ok(excess)
}
