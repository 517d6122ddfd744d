//! Append-only per-user answer log files.
//!
//! Each username gets `<logs_dir>/<username>.log`; every graded answer adds
//! one line. There is no read path.

use std::path::{Path, PathBuf};

use quizbot_core::answer_log::AnswerLog;
use quizbot_types::quiz::{LogEntry, UNKNOWN_USERNAME};
use tokio::io::AsyncWriteExt;

/// Scratch file created and removed by [`FileAnswerLog::open`].
const WRITE_CHECK_FILE: &str = ".quizbot-write-check";

/// Writes answer log lines under a directory, one file per user.
#[derive(Debug, Clone)]
pub struct FileAnswerLog {
    logs_dir: PathBuf,
}

impl FileAnswerLog {
    /// Create the log directory (if needed), check that files can be
    /// written in it, and return a log rooted there.
    ///
    /// Either failure is a startup error.
    pub async fn open(logs_dir: impl Into<PathBuf>) -> Result<Self, std::io::Error> {
        let logs_dir = logs_dir.into();
        tokio::fs::create_dir_all(&logs_dir).await?;

        let check_path = logs_dir.join(WRITE_CHECK_FILE);
        let mut check = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&check_path)
            .await?;
        check.flush().await?;
        drop(check);
        tokio::fs::remove_file(&check_path).await?;

        Ok(Self { logs_dir })
    }

    pub fn logs_dir(&self) -> &Path {
        &self.logs_dir
    }

    /// Path of the log file for `username`.
    pub fn log_path(&self, username: &str) -> PathBuf {
        self.logs_dir.join(format!("{}.log", file_stem(username)))
    }
}

impl AnswerLog for FileAnswerLog {
    async fn append(&self, entry: &LogEntry) -> Result<(), std::io::Error> {
        let path = self.log_path(&entry.username);
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .await?;

        let mut line = entry.to_line();
        line.push('\n');
        file.write_all(line.as_bytes()).await?;
        file.flush().await
    }
}

/// Make `username` safe to use as a file name.
///
/// Characters other than ASCII alphanumerics, `_`, `-` and `.` become `_`.
/// Names that would be empty or a relative path component map to
/// [`UNKNOWN_USERNAME`].
fn file_stem(username: &str) -> String {
    let stem: String = username
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if stem.is_empty() || stem.chars().all(|c| c == '.') {
        UNKNOWN_USERNAME.to_string()
    } else {
        stem
    }
}
