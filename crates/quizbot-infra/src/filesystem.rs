//! Data directory resolution.

use std::path::PathBuf;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "QUIZBOT_DATA_DIR";

/// Resolve the data directory.
///
/// Priority:
/// 1. Explicit override (the `--data-dir` flag)
/// 2. `QUIZBOT_DATA_DIR` environment variable
/// 3. `~/.quizbot`
/// 4. `./.quizbot` when no home directory is known
pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = explicit {
        return dir;
    }

    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".quizbot");
    }

    PathBuf::from(".quizbot")
}
