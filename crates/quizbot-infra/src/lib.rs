//! Infrastructure layer for quizbot.
//!
//! Contains implementations of the ports defined in `quizbot-core`:
//! the append-only file answer log and the Telegram transport, plus the
//! filesystem-facing loaders for configuration and the question bank.

pub mod answer_log;
pub mod bank;
pub mod config;
pub mod filesystem;
pub mod telegram;
