//! `quizbot play`: take the quiz in the terminal.
//!
//! Drives the same engine the Telegram bot uses, with a transport that
//! prints replies to stdout and a single fixed chat.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;
use console::style;
use quizbot_core::transport::ChatTransport;
use quizbot_types::chat::{ChatId, InboundMessage};
use quizbot_types::error::TransportError;
use tokio::sync::mpsc;

use crate::state::AppState;

/// The only chat a terminal session uses.
const TERMINAL_CHAT: ChatId = ChatId(0);

/// How often to check whether a timeout finished the quiz.
const COMPLETION_POLL: Duration = Duration::from_millis(200);

/// Prints bot replies to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleTransport;

impl ChatTransport for ConsoleTransport {
    async fn send_text(&self, _chat_id: ChatId, text: &str) -> Result<(), TransportError> {
        for line in text.lines() {
            println!("  {} {line}", style("│").cyan());
        }
        println!();
        Ok(())
    }
}

/// Run one quiz session on stdin/stdout.
///
/// Returns when the quiz completes, is cancelled, stdin closes, or
/// `shutdown` resolves.
pub async fn play<S>(state: &AppState, username: Option<String>, shutdown: S) -> Result<()>
where
    S: Future<Output = ()>,
{
    let username = username.or_else(|| std::env::var("USER").ok());
    let engine = state.engine(ConsoleTransport);

    println!();
    println!(
        "  {} Type your answers and press Enter. {} gives up.",
        style("🎯").bold(),
        style("/cancel").yellow()
    );
    println!();

    engine.start(TERMINAL_CHAT).await;

    let mut lines = spawn_stdin_reader();
    let mut poll = tokio::time::interval(COMPLETION_POLL);
    tokio::pin!(shutdown);

    while engine.has_session(TERMINAL_CHAT) {
        tokio::select! {
            line = lines.recv() => match line {
                Some(text) => {
                    let message = InboundMessage::new(TERMINAL_CHAT, username.clone(), text);
                    engine.handle(message).await;
                }
                None => break,
            },
            _ = poll.tick() => {}
            _ = &mut shutdown => break,
        }
    }

    engine.shutdown();
    Ok(())
}

/// Read stdin on a plain thread so a pending read never blocks runtime
/// shutdown.
fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}
