//! Quiz logic for quizbot.
//!
//! This crate defines the question bank, the per-chat session state machine,
//! the session registry with its cancellable question timers, and the
//! `QuizEngine` that ties them together. It also defines the "ports"
//! (`ChatTransport`, `AnswerLog`) that the infrastructure layer implements.
//! It depends only on `quizbot-types` -- never on `quizbot-infra` or any
//! bot framework.

pub mod answer_log;
pub mod bank;
pub mod engine;
pub mod messages;
pub mod registry;
pub mod session;
pub mod timer;
pub mod transport;
