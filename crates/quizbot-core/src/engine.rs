//! Quiz engine: routes inbound chat events to session transitions.
//!
//! `QuizEngine` owns the question bank, the session registry, the outbound
//! transport, and the answer log. Each event (`/start`, `/cancel`, free text,
//! timer fire) is applied to the chat's session under its registry entry
//! lock; the resulting side effects (log append, replies) run after the lock
//! is released.
//!
//! Every transition follows cancel-then-arm: the pending timer is cancelled
//! and, if a question remains open, a fresh one is armed with a ticket for
//! that question.

use std::sync::Arc;
use std::time::Duration;

use quizbot_types::chat::{ChatId, Command, InboundMessage};
use quizbot_types::config::QuizConfig;
use quizbot_types::quiz::LogEntry;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::answer_log::AnswerLog;
use crate::bank::QuestionBank;
use crate::messages;
use crate::registry::{ActiveQuiz, SessionRegistry};
use crate::session::{Advance, QuizSession, SessionError};
use crate::timer::{QuestionTimer, TimerTicket};
use crate::transport::ChatTransport;

/// Default seconds allowed per question.
const DEFAULT_ANSWER_TIMEOUT: Duration = Duration::from_secs(30);

/// Default number of correct answers needed to pass.
const DEFAULT_PASS_THRESHOLD: usize = 8;

/// Timing and scoring rules applied to every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizRules {
    pub answer_timeout: Duration,
    pub pass_threshold: usize,
}

impl QuizRules {
    pub fn from_config(config: &QuizConfig) -> Self {
        Self {
            answer_timeout: config.answer_timeout(),
            pass_threshold: config.pass_threshold,
        }
    }
}

impl Default for QuizRules {
    fn default() -> Self {
        Self {
            answer_timeout: DEFAULT_ANSWER_TIMEOUT,
            pass_threshold: DEFAULT_PASS_THRESHOLD,
        }
    }
}

/// Drives quiz sessions for every chat.
///
/// Generic over `ChatTransport` and `AnswerLog` so the core never depends on
/// a bot framework or the filesystem. Methods that may arm a timer take
/// `self: &Arc<Self>` because the timer task calls back into the engine.
pub struct QuizEngine<T: ChatTransport, L: AnswerLog> {
    bank: Arc<QuestionBank>,
    registry: SessionRegistry,
    transport: T,
    answer_log: L,
    rules: QuizRules,
}

impl<T: ChatTransport, L: AnswerLog> QuizEngine<T, L> {
    pub fn new(bank: Arc<QuestionBank>, transport: T, answer_log: L, rules: QuizRules) -> Self {
        if rules.pass_threshold > bank.len() {
            warn!(
                pass_threshold = rules.pass_threshold,
                questions = bank.len(),
                "pass threshold exceeds question count; no session can pass"
            );
        }
        Self {
            bank,
            registry: SessionRegistry::new(),
            transport,
            answer_log,
            rules,
        }
    }

    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    pub fn rules(&self) -> QuizRules {
        self.rules
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn answer_log(&self) -> &L {
        &self.answer_log
    }

    /// Read access to the running sessions.
    pub fn registry(&self) -> &SessionRegistry {
        &self.registry
    }

    pub fn has_session(&self, chat_id: ChatId) -> bool {
        self.registry.contains(chat_id)
    }

    pub fn active_sessions(&self) -> usize {
        self.registry.len()
    }

    /// Dispatch one inbound message.
    pub async fn handle(self: &Arc<Self>, message: InboundMessage) {
        let chat_id = message.chat_id;
        match message.command() {
            Command::Start => {
                self.start(chat_id).await;
            }
            Command::Cancel => {
                self.cancel(chat_id).await;
            }
            Command::Answer(text) => {
                self.answer(chat_id, message.username.as_deref(), &text).await;
            }
        }
    }

    /// Start a quiz for `chat_id`, replacing any quiz already running there.
    ///
    /// Returns the new session's id.
    pub async fn start(self: &Arc<Self>, chat_id: ChatId) -> Uuid {
        let session = QuizSession::new(chat_id, self.bank.len(), self.rules.pass_threshold);
        let session_id = session.id();
        let timer = self.arm_timer(
            chat_id,
            TimerTicket {
                session_id,
                question_index: 0,
            },
        );

        if let Some(previous) = self.registry.replace(chat_id, ActiveQuiz::new(session, timer)) {
            info!(
                %chat_id,
                previous_session = %previous.session().id(),
                previous_score = previous.session().score(),
                "discarding running quiz"
            );
        }
        info!(%chat_id, %session_id, questions = self.bank.len(), "quiz started");

        if let Some(first) = self.bank.get(0) {
            self.send(chat_id, &messages::start(&first.prompt, self.rules.answer_timeout))
                .await;
        }
        session_id
    }

    /// Cancel the quiz running for `chat_id`.
    ///
    /// Returns `false` (and tells the user so) if there was none.
    pub async fn cancel(&self, chat_id: ChatId) -> bool {
        match self.registry.remove(chat_id) {
            Some(quiz) => {
                let session = quiz.session();
                info!(
                    chat_id = %session.chat_id(),
                    session_id = %session.id(),
                    state = %session.state(),
                    elapsed_secs = session.elapsed().num_seconds(),
                    "quiz cancelled"
                );
                drop(quiz);
                self.send(chat_id, messages::CANCELLED).await;
                true
            }
            None => {
                self.send(chat_id, messages::NO_ACTIVE_QUIZ).await;
                false
            }
        }
    }

    /// Grade `text` as the answer to the open question in `chat_id`.
    ///
    /// Text for a chat without a running quiz is ignored.
    pub async fn answer(self: &Arc<Self>, chat_id: ChatId, username: Option<&str>, text: &str) {
        let transition = self.registry.update(chat_id, |quiz| -> Result<_, SessionError> {
            quiz.cancel_timer();
            let session_id = quiz.session().id();
            let outcome = quiz.session_mut().answer(&self.bank, text)?;
            if let Advance::Next { question_index } = outcome.advance {
                quiz.rearm(self.arm_timer(
                    chat_id,
                    TimerTicket {
                        session_id,
                        question_index,
                    },
                ));
            }
            Ok((session_id, outcome))
        });

        let (session_id, outcome) = match transition {
            Some(Ok(applied)) => applied,
            Some(Err(err)) => {
                debug!(%chat_id, error = %err, "ignoring answer");
                return;
            }
            None => {
                debug!(%chat_id, "ignoring text without a running quiz");
                return;
            }
        };

        let grade = &outcome.grade;
        debug!(
            %chat_id,
            %session_id,
            question = grade.question_number,
            correct = grade.correct,
            "answer graded"
        );

        let entry = LogEntry::now(grade.question_number, username, &grade.given, &grade.expected);
        if let Err(err) = self.answer_log.append(&entry).await {
            warn!(
                %chat_id,
                username = %entry.username,
                error = %err,
                "failed to write answer log"
            );
        }

        if grade.correct {
            self.send(chat_id, messages::CORRECT).await;
        } else {
            self.send(chat_id, &messages::wrong(&grade.expected)).await;
        }

        self.follow_up(chat_id, session_id, outcome.advance).await;
    }

    /// Cancel every running quiz.
    pub fn shutdown(&self) {
        let count = self.registry.len();
        self.registry.clear();
        info!(sessions = count, "quiz engine shut down");
    }

    /// Timer callback: the question named by `ticket` went unanswered.
    async fn on_timeout(self: Arc<Self>, chat_id: ChatId, ticket: TimerTicket) {
        let transition = self
            .registry
            .update(chat_id, |quiz| -> Option<Advance> {
                if !ticket.matches(quiz.session()) {
                    return None;
                }
                let advance = quiz.session_mut().time_out().ok()?;
                if let Advance::Next { question_index } = advance {
                    quiz.rearm(self.arm_timer(
                        chat_id,
                        TimerTicket {
                            session_id: ticket.session_id,
                            question_index,
                        },
                    ));
                }
                Some(advance)
            })
            .flatten();

        let Some(advance) = transition else {
            debug!(
                %chat_id,
                session_id = %ticket.session_id,
                question = ticket.question_index + 1,
                "ignoring stale timer"
            );
            return;
        };

        info!(
            %chat_id,
            session_id = %ticket.session_id,
            question = ticket.question_index + 1,
            "question timed out"
        );
        self.send(chat_id, messages::TIME_UP).await;
        self.follow_up(chat_id, ticket.session_id, advance).await;
    }

    /// Send the next prompt, or finish the session.
    async fn follow_up(&self, chat_id: ChatId, session_id: Uuid, advance: Advance) {
        match advance {
            Advance::Next { question_index } => {
                if let Some(question) = self.bank.get(question_index) {
                    self.send(
                        chat_id,
                        &messages::next(&question.prompt, self.rules.answer_timeout),
                    )
                    .await;
                }
            }
            Advance::Completed(summary) => {
                // The session stays registered until its result is delivered.
                self.send(chat_id, &messages::summary(&summary)).await;
                let elapsed_secs = self
                    .registry
                    .remove_if_current(chat_id, session_id)
                    .map(|quiz| quiz.session().elapsed().num_seconds());
                info!(
                    %chat_id,
                    %session_id,
                    score = summary.score,
                    total = summary.total,
                    passed = summary.passed,
                    elapsed_secs = ?elapsed_secs,
                    "quiz completed"
                );
            }
        }
    }

    fn arm_timer(self: &Arc<Self>, chat_id: ChatId, ticket: TimerTicket) -> QuestionTimer {
        let engine = Arc::clone(self);
        QuestionTimer::arm(self.rules.answer_timeout, async move {
            engine.on_timeout(chat_id, ticket).await;
        })
    }

    async fn send(&self, chat_id: ChatId, text: &str) {
        if let Err(err) = self.transport.send_text(chat_id, text).await {
            warn!(%chat_id, error = %err, "failed to deliver message");
        }
    }
}

impl<T: ChatTransport, L: AnswerLog> std::fmt::Debug for QuizEngine<T, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QuizEngine")
            .field("questions", &self.bank.len())
            .field("active_sessions", &self.registry.len())
            .field("rules", &self.rules)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
