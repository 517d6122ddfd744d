//! Text of every message the bot sends.

use std::time::Duration;

use quizbot_types::quiz::QuizSummary;

pub const CORRECT: &str = "✅ Correct!";
pub const TIME_UP: &str = "⏰ Time is up! Moving on to the next question.";
pub const CANCELLED: &str = "Quiz cancelled. Send /start to begin again.";
pub const NO_ACTIVE_QUIZ: &str = "You have no active quiz.";

/// Greeting plus the first question.
pub fn start(prompt: &str, timeout: Duration) -> String {
    format!(
        "Hi! Starting the quiz. First question:\n{prompt}\n\n{}",
        footer(timeout)
    )
}

/// A follow-up question.
pub fn next(prompt: &str, timeout: Duration) -> String {
    format!("Next question:\n{prompt}\n\n{}", footer(timeout))
}

pub fn wrong(expected: &str) -> String {
    format!("❌ Wrong! The correct answer is: {expected}")
}

/// Final pass/fail verdict.
pub fn summary(summary: &QuizSummary) -> String {
    if summary.passed {
        format!(
            "🎉 Quiz passed! Correct answers: {}/{}",
            summary.score, summary.total
        )
    } else {
        format!(
            "😞 Quiz failed. Correct answers: {}/{}",
            summary.score, summary.total
        )
    }
}

fn footer(timeout: Duration) -> String {
    format!(
        "You have {} seconds to answer. Send /cancel to stop the quiz.",
        timeout.as_secs()
    )
}
