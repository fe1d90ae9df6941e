//! File logging.
//!
//! The terminal is in raw mode while the form runs, so log output goes to
//! `latest.log` in the platform cache directory (`~/.cache/signup-tui` on
//! Linux). The previous run's log is archived under a timestamp.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

const LATEST: &str = "latest.log";

/// Archived logs kept next to `latest.log`.
const KEEP_ARCHIVED: usize = 25;

fn log_dir() -> Option<PathBuf> {
    ProjectDirs::from("dev", "signup", "signup-tui").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Install the file logger. Returns the log path, or None if logging is off
/// because no writable cache directory exists.
pub fn init() -> Option<PathBuf> {
    let dir = log_dir()?;
    fs::create_dir_all(&dir).ok()?;

    archive_latest(&dir);
    prune_archived(&dir);

    let path = dir.join(LATEST);
    let file = File::create(&path).ok()?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), file).ok()?;
    Some(path)
}

fn archive_latest(dir: &Path) {
    let latest = dir.join(LATEST);
    if !latest.exists() {
        return;
    }
    let stamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    let _ = fs::rename(&latest, dir.join(format!("{}.log", stamp)));
}

fn prune_archived(dir: &Path) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut archived: Vec<_> = entries
        .filter_map(Result::ok)
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != LATEST
        })
        .collect();

    if archived.len() <= KEEP_ARCHIVED {
        return;
    }

    // Newest first, drop the tail
    archived.sort_by_key(|e| std::cmp::Reverse(e.metadata().and_then(|m| m.modified()).ok()));
    for entry in &archived[KEEP_ARCHIVED..] {
        let _ = fs::remove_file(entry.path());
    }
}
