use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building the question bank.
///
/// All of these are startup-time configuration errors: a bot with a
/// malformed bank must not serve any session.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("question count ({questions}) does not match answer count ({answers})")]
    LengthMismatch { questions: usize, answers: usize },

    #[error("question bank is empty")]
    Empty,
}

/// Errors from delivering an outbound message.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("send failed: {0}")]
    Send(String),

    #[error("transport closed")]
    Closed,
}
