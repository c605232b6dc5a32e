//! Platform-specific locations for the demo's config and logs.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "selectable";
const APPLICATION: &str = "selectable-demo";

/// Log file used when no cache directory can be determined.
pub const FALLBACK_LOG: &str = "selectable-demo.log";

/// Maximum number of rotated log files to keep.
const MAX_OLD_LOGS: usize = 25;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Default config file, e.g. `~/.config/selectable-demo/config.json` on Linux.
pub fn config_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
}

/// Current log file, e.g. `~/.cache/selectable-demo/latest.log` on Linux.
pub fn log_file() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().join("latest.log"))
}

/// Move the previous `latest.log` aside and prune old logs.
///
/// Call at startup before the logger opens the new file.
pub fn rotate_logs() {
    let Some(log) = log_file() else { return };
    let Some(dir) = log.parent() else { return };
    rotate_in(dir);
}

fn rotate_in(dir: &Path) {
    let latest = dir.join("latest.log");
    if latest.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let _ = fs::rename(&latest, dir.join(format!("{}.log", timestamp)));
    }
    prune_logs(dir, MAX_OLD_LOGS);
}

/// Delete the oldest rotated logs so at most `keep` remain.
fn prune_logs(dir: &Path, keep: usize) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let name = e.file_name();
            let name = name.to_string_lossy();
            name.ends_with(".log") && name != "latest.log"
        })
        .collect();

    if logs.len() <= keep {
        return;
    }

    // Timestamped names sort chronologically.
    logs.sort_by_key(|e| e.file_name());
    for entry in logs.iter().take(logs.len() - keep) {
        let _ = fs::remove_file(entry.path());
    }
}
