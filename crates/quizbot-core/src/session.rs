//! Quiz session state machine.
//!
//! A `QuizSession` walks one chat through the question bank. It is pure
//! state: it knows nothing about timers, transports, or logs. The engine
//! wraps each transition with the matching side effects.
//!
//! ```text
//! start ──► AwaitingAnswer(0) ──answer/timeout──► AwaitingAnswer(1) ─ … ─► Completed
//! ```

use chrono::{DateTime, Utc};
use quizbot_types::chat::ChatId;
use quizbot_types::quiz::{QuizSummary, SessionState};
use thiserror::Error;
use uuid::Uuid;

use crate::bank::QuestionBank;

/// Errors from applying a transition to a session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The session has no open question.
    #[error("quiz session {0} is already completed")]
    Completed(Uuid),

    /// The session points past the end of the bank it was given.
    #[error("question index {0} is outside the question bank")]
    QuestionOutOfRange(usize),
}

/// How a single answer was graded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grade {
    /// 1-based question number.
    pub question_number: usize,
    pub correct: bool,
    /// The user's answer, trimmed.
    pub given: String,
    /// The expected answer, trimmed.
    pub expected: String,
}

/// Where the session moved after an answer or a timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// The question at `question_index` is now open.
    Next { question_index: usize },
    /// No questions remain.
    Completed(QuizSummary),
}

/// Result of a graded answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub grade: Grade,
    pub advance: Advance,
}

/// Per-chat quiz progress.
#[derive(Debug, Clone)]
pub struct QuizSession {
    id: Uuid,
    chat_id: ChatId,
    state: SessionState,
    score: usize,
    total: usize,
    pass_threshold: usize,
    started_at: DateTime<Utc>,
}

impl QuizSession {
    /// Create a session positioned on the first of `total` questions.
    pub fn new(chat_id: ChatId, total: usize, pass_threshold: usize) -> Self {
        let state = if total == 0 {
            SessionState::Completed
        } else {
            SessionState::AwaitingAnswer(0)
        };
        Self {
            id: Uuid::now_v7(),
            chat_id,
            state,
            score: 0,
            total,
            pass_threshold,
            started_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn chat_id(&self) -> ChatId {
        self.chat_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Wall-clock time since the session started.
    pub fn elapsed(&self) -> chrono::Duration {
        Utc::now() - self.started_at
    }

    /// Index of the open question, if any.
    pub fn current_index(&self) -> Option<usize> {
        match self.state {
            SessionState::AwaitingAnswer(i) => Some(i),
            SessionState::Completed => None,
        }
    }

    /// Grade `text` against the open question and move on.
    pub fn answer(&mut self, bank: &QuestionBank, text: &str) -> Result<AnswerOutcome, SessionError> {
        let index = self.current_index().ok_or(SessionError::Completed(self.id))?;
        let question = bank
            .get(index)
            .ok_or(SessionError::QuestionOutOfRange(index))?;

        let correct = question.accepts(text);
        if correct {
            self.score += 1;
        }

        let grade = Grade {
            question_number: index + 1,
            correct,
            given: text.trim().to_string(),
            expected: question.expected_trimmed().to_string(),
        };

        Ok(AnswerOutcome {
            grade,
            advance: self.advance(index),
        })
    }

    /// Treat the open question as unanswered and move on.
    ///
    /// The score is unchanged.
    pub fn time_out(&mut self) -> Result<Advance, SessionError> {
        let index = self.current_index().ok_or(SessionError::Completed(self.id))?;
        Ok(self.advance(index))
    }

    /// Current score as a summary. `passed` reflects the threshold.
    pub fn summary(&self) -> QuizSummary {
        QuizSummary {
            session_id: self.id,
            score: self.score,
            total: self.total,
            passed: self.score >= self.pass_threshold,
        }
    }

    fn advance(&mut self, from: usize) -> Advance {
        let next = from + 1;
        if next < self.total {
            self.state = SessionState::AwaitingAnswer(next);
            Advance::Next {
                question_index: next,
            }
        } else {
            self.state = SessionState::Completed;
            Advance::Completed(self.summary())
        }
    }
}
