//! Answer log sink.
//!
//! The engine records every graded answer through an `AnswerLog`. The
//! append-only file implementation lives in quizbot-infra; this module holds
//! the trait and an in-memory sink.

use std::sync::Mutex;

use quizbot_types::quiz::LogEntry;

/// Append-only sink for graded answers.
///
/// Errors are returned to the caller, which decides whether they matter.
/// The quiz engine logs them and carries on.
pub trait AnswerLog: Send + Sync + 'static {
    /// Append one entry.
    fn append(
        &self,
        entry: &LogEntry,
    ) -> impl std::future::Future<Output = Result<(), std::io::Error>> + Send;
}

/// Keeps entries in memory. Used by tests and by sessions that should not
/// touch the filesystem.
#[derive(Debug, Default)]
pub struct MemoryAnswerLog {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryAnswerLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything appended so far, oldest first.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl AnswerLog for MemoryAnswerLog {
    async fn append(&self, entry: &LogEntry) -> Result<(), std::io::Error> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| std::io::Error::other("answer log mutex poisoned"))?;
        entries.push(entry.clone());
        Ok(())
    }
}
