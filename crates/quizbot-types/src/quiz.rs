//! Quiz domain types: questions, session state, results, and log entries.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;

/// Timestamp format used in answer log lines.
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Username recorded when the transport does not provide one.
pub const UNKNOWN_USERNAME: &str = "unknown";

/// A single prompt/answer pair from the question bank.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub prompt: String,
    pub expected_answer: String,
}

impl Question {
    pub fn new(prompt: impl Into<String>, expected_answer: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            expected_answer: expected_answer.into(),
        }
    }

    /// The expected answer with surrounding whitespace removed.
    pub fn expected_trimmed(&self) -> &str {
        self.expected_answer.trim()
    }

    /// Whether `given` matches the expected answer.
    ///
    /// Comparison ignores surrounding whitespace and letter case.
    pub fn accepts(&self, given: &str) -> bool {
        given.trim().to_lowercase() == self.expected_trimmed().to_lowercase()
    }
}

/// Where a quiz session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "state", content = "question_index")]
pub enum SessionState {
    /// Waiting for the answer to the question at this index.
    AwaitingAnswer(usize),
    /// All questions have been answered or timed out.
    Completed,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::AwaitingAnswer(i) => write!(f, "awaiting answer to question {}", i + 1),
            SessionState::Completed => write!(f, "completed"),
        }
    }
}

/// Final score of a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub session_id: Uuid,
    pub score: usize,
    pub total: usize,
    pub passed: bool,
}

/// One graded answer, as written to the per-user audit log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    /// 1-based question number.
    pub question_number: usize,
    pub username: String,
    pub user_answer: String,
    pub expected_answer: String,
}

impl LogEntry {
    /// Build an entry stamped with the current local time.
    ///
    /// A missing or blank username is recorded as [`UNKNOWN_USERNAME`].
    pub fn now(
        question_number: usize,
        username: Option<&str>,
        user_answer: impl Into<String>,
        expected_answer: impl Into<String>,
    ) -> Self {
        let username = match username.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => UNKNOWN_USERNAME.to_string(),
        };
        Self {
            timestamp: Local::now(),
            question_number,
            username,
            user_answer: user_answer.into(),
            expected_answer: expected_answer.into(),
        }
    }

    /// Render the log line (without trailing newline).
    ///
    /// Line breaks inside the answers are escaped as `\n` / `\r`, so every
    /// entry stays on one physical line.
    pub fn to_line(&self) -> String {
        format!(
            "[{}] Question {}: user answered '{}', correct answer '{}'",
            self.timestamp.format(LOG_TIMESTAMP_FORMAT),
            self.question_number,
            single_line(&self.user_answer),
            single_line(&self.expected_answer)
        )
    }
}

fn single_line(text: &str) -> String {
    text.replace('\r', "\\r").replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_accepts_ignores_case_and_whitespace() {
        let q = Question::new("Capital of France?", "paris");
        assert!(q.accepts("Paris "));
        assert!(q.accepts("  PARIS"));
        assert!(!q.accepts("Lyon"));
    }

    #[test]
    fn test_accepts_trims_expected_answer() {
        let q = Question::new("2+2?", " 4\t");
        assert!(q.accepts("4"));
        assert_eq!(q.expected_trimmed(), "4");
    }

    #[test]
    fn test_accepts_non_ascii_case() {
        let q = Question::new("Столица России?", "Москва");
        assert!(q.accepts("москва"));
    }

    #[test]
    fn test_session_state_display() {
        assert_eq!(
            SessionState::AwaitingAnswer(0).to_string(),
            "awaiting answer to question 1"
        );
        assert_eq!(SessionState::Completed.to_string(), "completed");
    }

    #[test]
    fn test_session_state_serde() {
        let json = serde_json::to_string(&SessionState::AwaitingAnswer(3)).unwrap();
        assert_eq!(json, r#"{"state":"awaiting_answer","question_index":3}"#);
        let json = serde_json::to_string(&SessionState::Completed).unwrap();
        assert_eq!(json, r#"{"state":"completed"}"#);
    }

    #[test]
    fn test_log_entry_line_format() {
        let entry = LogEntry {
            timestamp: Local.with_ymd_and_hms(2024, 5, 1, 9, 3, 7).unwrap(),
            question_number: 2,
            username: "alice".to_string(),
            user_answer: "Paris".to_string(),
            expected_answer: "paris".to_string(),
        };
        assert_eq!(
            entry.to_line(),
            "[2024-05-01 09:03:07] Question 2: user answered 'Paris', correct answer 'paris'"
        );
    }

    #[test]
    fn test_log_entry_multiline_answer_stays_on_one_line() {
        let entry = LogEntry {
            timestamp: Local.with_ymd_and_hms(2024, 5, 1, 9, 3, 7).unwrap(),
            question_number: 3,
            username: "alice".to_string(),
            user_answer: "first\r\nsecond\nthird".to_string(),
            expected_answer: "x".to_string(),
        };
        let line = entry.to_line();
        assert_eq!(line.lines().count(), 1);
        assert_eq!(
            line,
            "[2024-05-01 09:03:07] Question 3: user answered 'first\\r\\nsecond\\nthird', correct answer 'x'"
        );
    }

    #[test]
    fn test_log_entry_unknown_username() {
        assert_eq!(LogEntry::now(1, None, "a", "b").username, UNKNOWN_USERNAME);
        assert_eq!(LogEntry::now(1, Some("  "), "a", "b").username, UNKNOWN_USERNAME);
        assert_eq!(LogEntry::now(1, Some("bob"), "a", "b").username, "bob");
    }
}
