//! `quizbot serve`: run the quiz as a Telegram bot.

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use console::style;
use quizbot_infra::telegram::{run_polling, TelegramTransport};
use teloxide::Bot;

use crate::state::AppState;

/// Poll Telegram until `shutdown` resolves, then cancel every running quiz.
pub async fn serve<S>(state: &AppState, token: String, quiet: bool, shutdown: S) -> Result<()>
where
    S: Future<Output = ()> + Send + 'static,
{
    if token.trim().is_empty() {
        anyhow::bail!("Telegram bot token is empty");
    }

    let engine = state.engine(TelegramTransport::new(Bot::new(token)));

    if !quiet {
        println!();
        println!(
            "  {} quizbot serving {} questions ({}s per question, pass at {})",
            style("⚡").bold(),
            style(state.bank.len()).cyan(),
            engine.rules().answer_timeout.as_secs(),
            engine.rules().pass_threshold,
        );
        println!(
            "  {}",
            style(format!("Answer logs: {}", state.config.logs_dir.display())).dim()
        );
        println!("  {}", style("Press Ctrl+C to stop").dim());
    }

    run_polling(Arc::clone(&engine), shutdown).await;
    engine.shutdown();

    if !quiet {
        println!("\n  Bot stopped.");
    }
    Ok(())
}
