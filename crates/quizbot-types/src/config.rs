//! Configuration types for quizbot.
//!
//! `QuizConfig` represents the `quizbot.toml` file in the data directory.
//! Every field has a default, so an empty (or missing) file is valid.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level quizbot configuration.
///
/// Relative paths are resolved against the data directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizConfig {
    /// File with one question per line.
    #[serde(default = "default_questions_path")]
    pub questions_path: PathBuf,

    /// File with one expected answer per line, aligned with `questions_path`.
    #[serde(default = "default_answers_path")]
    pub answers_path: PathBuf,

    /// Directory holding the per-user answer logs.
    #[serde(default = "default_logs_dir")]
    pub logs_dir: PathBuf,

    /// Seconds allowed per question before the quiz moves on.
    #[serde(default = "default_answer_timeout_secs")]
    pub answer_timeout_secs: u64,

    /// Minimum number of correct answers needed to pass.
    #[serde(default = "default_pass_threshold")]
    pub pass_threshold: usize,
}

fn default_questions_path() -> PathBuf {
    PathBuf::from("questions.txt")
}

fn default_answers_path() -> PathBuf {
    PathBuf::from("answers.txt")
}

fn default_logs_dir() -> PathBuf {
    PathBuf::from("user_logs")
}

fn default_answer_timeout_secs() -> u64 {
    30
}

fn default_pass_threshold() -> usize {
    8
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            questions_path: default_questions_path(),
            answers_path: default_answers_path(),
            logs_dir: default_logs_dir(),
            answer_timeout_secs: default_answer_timeout_secs(),
            pass_threshold: default_pass_threshold(),
        }
    }
}

impl QuizConfig {
    /// Per-question timeout. Zero is clamped to one second.
    pub fn answer_timeout(&self) -> Duration {
        Duration::from_secs(self.answer_timeout_secs.max(1))
    }

    /// Return a copy with all relative paths joined onto `data_dir`.
    pub fn resolve_paths(&self, data_dir: &Path) -> Self {
        let resolve = |p: &PathBuf| {
            if p.is_absolute() {
                p.clone()
            } else {
                data_dir.join(p)
            }
        };
        Self {
            questions_path: resolve(&self.questions_path),
            answers_path: resolve(&self.answers_path),
            logs_dir: resolve(&self.logs_dir),
            ..self.clone()
        }
    }
}
