//! Chat-facing types: chat identifiers, inbound messages, and commands.
//!
//! The transport layer converts whatever its framework delivers into an
//! [`InboundMessage`]; the engine only ever sees these types.

use serde::{Deserialize, Serialize};

use std::fmt;

/// Identifier of a chat, as assigned by the transport.
///
/// Telegram chat ids are signed 64-bit integers (group chats are negative).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChatId(pub i64);

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ChatId {
    fn from(id: i64) -> Self {
        ChatId(id)
    }
}

/// A text message received from a chat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    pub chat_id: ChatId,
    /// Sender's username, if the transport knows one.
    pub username: Option<String>,
    pub text: String,
}

impl InboundMessage {
    pub fn new(chat_id: ChatId, username: Option<String>, text: impl Into<String>) -> Self {
        Self {
            chat_id,
            username,
            text: text.into(),
        }
    }

    /// Parse the message text into a [`Command`].
    pub fn command(&self) -> Command {
        Command::parse(&self.text)
    }
}

/// What an inbound message asks the bot to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start` -- begin (or restart) the quiz.
    Start,
    /// `/cancel` -- abandon the running quiz.
    Cancel,
    /// Anything else is an answer to the current question.
    Answer(String),
}

impl Command {
    /// Parse message text.
    ///
    /// Only the first word is inspected. A Telegram `@botname` suffix is
    /// accepted (`/start@quiz_bot`), and trailing arguments are ignored.
    /// Unknown slash commands are treated as answers.
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim_start();
        let Some(rest) = trimmed.strip_prefix('/') else {
            return Command::Answer(text.to_string());
        };

        let word = rest.split_whitespace().next().unwrap_or_default();
        let name = word.split('@').next().unwrap_or_default();

        match name.to_lowercase().as_str() {
            "start" => Command::Start,
            "cancel" => Command::Cancel,
            _ => Command::Answer(text.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_commands() {
        assert_eq!(Command::parse("/start"), Command::Start);
        assert_eq!(Command::parse("/cancel"), Command::Cancel);
    }

    #[test]
    fn test_parse_command_with_bot_suffix_and_args() {
        assert_eq!(Command::parse("/start@quiz_bot"), Command::Start);
        assert_eq!(Command::parse("/cancel@quiz_bot now"), Command::Cancel);
        assert_eq!(Command::parse("  /START please"), Command::Start);
    }

    #[test]
    fn test_parse_free_text_is_answer() {
        assert_eq!(
            Command::parse("Paris "),
            Command::Answer("Paris ".to_string())
        );
    }

    #[test]
    fn test_parse_unknown_command_is_answer() {
        assert_eq!(
            Command::parse("/help"),
            Command::Answer("/help".to_string())
        );
        assert_eq!(Command::parse("/"), Command::Answer("/".to_string()));
    }

    #[test]
    fn test_inbound_message_command() {
        let msg = InboundMessage::new(ChatId(42), None, "/start");
        assert_eq!(msg.command(), Command::Start);
    }

    #[test]
    fn test_chat_id_display_and_serde() {
        let id = ChatId(-100123);
        assert_eq!(id.to_string(), "-100123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "-100123");
    }
}
