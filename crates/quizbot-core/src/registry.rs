//! Per-chat session registry.
//!
//! One `DashMap` entry per chat holds the session and its armed timer.
//! Every lookup-and-mutate runs inside the entry guard, which serialises an
//! answer and a timer fire racing on the same chat. Callers must not
//! `.await` inside the closures passed to [`SessionRegistry::update`].

use dashmap::DashMap;
use quizbot_types::chat::ChatId;
use quizbot_types::quiz::SessionState;
use tracing::debug;
use uuid::Uuid;

use crate::session::QuizSession;
use crate::timer::QuestionTimer;

/// A running quiz: the session plus its single pending timeout.
#[derive(Debug)]
pub struct ActiveQuiz {
    session: QuizSession,
    timer: QuestionTimer,
}

impl ActiveQuiz {
    pub fn new(session: QuizSession, timer: QuestionTimer) -> Self {
        Self { session, timer }
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut QuizSession {
        &mut self.session
    }

    /// Cancel the pending timeout without arming a new one.
    pub fn cancel_timer(&self) {
        self.timer.cancel();
    }

    /// Cancel the pending timeout and install `timer` in its place.
    pub fn rearm(&mut self, timer: QuestionTimer) {
        self.timer.cancel();
        self.timer = timer;
    }
}

/// Mapping from chat to its (at most one) running quiz.
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: DashMap<ChatId, ActiveQuiz>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `quiz` for `chat_id`, returning the quiz it displaced.
    ///
    /// The displaced quiz's timer is cancelled.
    pub fn replace(&self, chat_id: ChatId, quiz: ActiveQuiz) -> Option<ActiveQuiz> {
        let previous = self.sessions.insert(chat_id, quiz);
        if let Some(prev) = &previous {
            prev.cancel_timer();
            debug!(%chat_id, session_id = %prev.session().id(), "displaced running quiz");
        }
        previous
    }

    /// Remove the quiz for `chat_id`, cancelling its timer.
    pub fn remove(&self, chat_id: ChatId) -> Option<ActiveQuiz> {
        let (_, quiz) = self.sessions.remove(&chat_id)?;
        quiz.cancel_timer();
        Some(quiz)
    }

    /// Remove the quiz for `chat_id` only if it is still `session_id`.
    ///
    /// Used on completion so a quiz started in the meantime is left alone.
    pub fn remove_if_current(&self, chat_id: ChatId, session_id: Uuid) -> Option<ActiveQuiz> {
        let (_, quiz) = self
            .sessions
            .remove_if(&chat_id, |_, quiz| quiz.session().id() == session_id)?;
        quiz.cancel_timer();
        Some(quiz)
    }

    /// Run `f` against the quiz for `chat_id` while holding its entry lock.
    ///
    /// Returns `None` if the chat has no running quiz.
    pub fn update<R>(&self, chat_id: ChatId, f: impl FnOnce(&mut ActiveQuiz) -> R) -> Option<R> {
        let mut entry = self.sessions.get_mut(&chat_id)?;
        Some(f(entry.value_mut()))
    }

    pub fn contains(&self, chat_id: ChatId) -> bool {
        self.sessions.contains_key(&chat_id)
    }

    /// State of the quiz for `chat_id`, if one is running.
    pub fn state(&self, chat_id: ChatId) -> Option<SessionState> {
        self.sessions.get(&chat_id).map(|quiz| quiz.session().state())
    }

    /// Score of the quiz for `chat_id`, if one is running.
    pub fn score(&self, chat_id: ChatId) -> Option<usize> {
        self.sessions.get(&chat_id).map(|quiz| quiz.session().score())
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    /// Drop every running quiz; their timers are cancelled on drop.
    pub fn clear(&self) {
        self.sessions.clear();
    }
}
