//! Outbound chat transport port.
//!
//! Defined in quizbot-core so the engine can reply without depending on any
//! bot framework. The Telegram adapter lives in quizbot-infra; the terminal
//! adapter lives in the CLI.

use quizbot_types::chat::ChatId;
use quizbot_types::error::TransportError;

/// Delivers text messages to chats.
pub trait ChatTransport: Send + Sync + 'static {
    /// Send `text` to `chat_id`.
    fn send_text(
        &self,
        chat_id: ChatId,
        text: &str,
    ) -> impl std::future::Future<Output = Result<(), TransportError>> + Send;
}
