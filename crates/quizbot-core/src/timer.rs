//! Cancellable per-question deadline.
//!
//! Each armed `QuestionTimer` owns one tokio task that sleeps for the answer
//! timeout and then runs its callback, unless its `CancellationToken` is
//! cancelled first. Dropping the handle cancels the task, so replacing or
//! removing a registry entry can never leave a live timer behind.

use std::future::Future;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::session::QuizSession;

/// Identifies the question a timer was armed for.
///
/// A timer that fires after its question was answered (or after the session
/// was replaced) carries a ticket that no longer matches, and is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTicket {
    pub session_id: Uuid,
    pub question_index: usize,
}

impl TimerTicket {
    /// Whether `session` is still waiting on the question this ticket names.
    pub fn matches(&self, session: &QuizSession) -> bool {
        session.id() == self.session_id && session.current_index() == Some(self.question_index)
    }
}

/// Handle to an armed question deadline.
#[derive(Debug)]
pub struct QuestionTimer {
    token: CancellationToken,
}

impl QuestionTimer {
    /// Spawn a task that runs `on_fire` after `after`, unless cancelled.
    ///
    /// Must be called from within a tokio runtime.
    pub fn arm<F>(after: Duration, on_fire: F) -> Self
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let token = CancellationToken::new();
        let cancelled = token.clone();

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = cancelled.cancelled() => {}
                _ = tokio::time::sleep(after) => on_fire.await,
            }
        });

        Self { token }
    }

    /// Stop the timer. Idempotent; a no-op once the callback has started.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

impl Drop for QuestionTimer {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
