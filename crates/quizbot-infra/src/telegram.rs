//! Telegram transport built on teloxide.
//!
//! `TelegramTransport` implements the outbound [`ChatTransport`] port with
//! `sendMessage`; [`run_polling`] runs a long-polling dispatcher that feeds
//! every text message into the quiz engine.

use std::future::Future;
use std::sync::Arc;

use quizbot_core::answer_log::AnswerLog;
use quizbot_core::engine::QuizEngine;
use quizbot_core::transport::ChatTransport;
use quizbot_types::chat::{ChatId, InboundMessage};
use quizbot_types::error::TransportError;
use teloxide::prelude::*;

/// Sends quiz replies through the Telegram Bot API.
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    pub fn bot(&self) -> &Bot {
        &self.bot
    }
}

impl ChatTransport for TelegramTransport {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), TransportError> {
        self.bot
            .send_message(teloxide::types::ChatId(chat_id.0), text)
            .await
            .map(|_| ())
            .map_err(|err| TransportError::Send(err.to_string()))
    }
}

impl std::fmt::Debug for TelegramTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramTransport").finish_non_exhaustive()
    }
}

/// Convert a Telegram message into an engine event.
///
/// Returns `None` for messages without text (stickers, photos, joins).
pub fn inbound_from_message(msg: &Message) -> Option<InboundMessage> {
    let text = msg.text()?;
    let username = msg.from.as_ref().and_then(|user| user.username.clone());
    Some(InboundMessage::new(ChatId(msg.chat.id.0), username, text))
}

/// Long-poll Telegram for updates and dispatch them to `engine` until
/// `shutdown` resolves.
///
/// Updates from different chats are handled concurrently; the engine
/// serialises events within a chat.
pub async fn run_polling<L, S>(engine: Arc<QuizEngine<TelegramTransport, L>>, shutdown: S)
where
    L: AnswerLog,
    S: Future<Output = ()> + Send + 'static,
{
    let bot = engine.transport().bot().clone();

    let handler = Update::filter_message().endpoint(move |msg: Message| {
        let engine = Arc::clone(&engine);
        async move {
            match inbound_from_message(&msg) {
                Some(inbound) => engine.handle(inbound).await,
                None => tracing::debug!(chat_id = msg.chat.id.0, "ignoring non-text message"),
            }
            respond(())
        }
    });

    let mut dispatcher = Dispatcher::builder(bot, handler).build();
    let shutdown_token = dispatcher.shutdown_token();
    tokio::spawn(async move {
        shutdown.await;
        match shutdown_token.shutdown() {
            Ok(stopped) => stopped.await,
            Err(_) => tracing::debug!("dispatcher was idle at shutdown"),
        }
    });

    tracing::info!("polling Telegram for updates");
    dispatcher.dispatch().await;
    tracing::info!("Telegram dispatcher stopped");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(json: &str) -> Message {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn text_message_becomes_inbound() {
        let msg = message(
            r#"{
                "message_id": 10,
                "date": 1700000000,
                "chat": {"id": 42, "type": "private", "first_name": "Alice", "username": "alice"},
                "from": {"id": 7, "is_bot": false, "first_name": "Alice", "username": "alice"},
                "text": "Paris"
            }"#,
        );

        let inbound = inbound_from_message(&msg).unwrap();
        assert_eq!(inbound.chat_id, ChatId(42));
        assert_eq!(inbound.username.as_deref(), Some("alice"));
        assert_eq!(inbound.text, "Paris");
    }

    #[test]
    fn sender_without_username() {
        let msg = message(
            r#"{
                "message_id": 11,
                "date": 1700000000,
                "chat": {"id": 42, "type": "private", "first_name": "Bob"},
                "from": {"id": 8, "is_bot": false, "first_name": "Bob"},
                "text": "/start"
            }"#,
        );

        let inbound = inbound_from_message(&msg).unwrap();
        assert!(inbound.username.is_none());
    }
}
